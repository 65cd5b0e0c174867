use std::collections::VecDeque;

use fnv::FnvHashSet;
use log::debug;

use crate::board::Board;
use crate::config::{Dedup, SearchConfig};
use crate::data::{COLORS, DIRECTIONS};
use crate::moves::Move;
use crate::puzzle::Target;

use super::stats::Stats;
use super::tree::{NodeId, SearchTree};
use super::Outcome;

/// Expands nodes in the order they were created.
///
/// Once the tree reaches the node budget nothing new is created
/// but the nodes already waiting are still checked for solutions.
pub(crate) fn search(
    board: &Board,
    mut tree: SearchTree,
    target: Target,
    config: SearchConfig,
    print_status: bool,
    stats: &mut Stats,
) -> (SearchTree, Vec<NodeId>, Outcome) {
    let mut solutions = Vec::new();
    let mut visited = FnvHashSet::default();
    let mut to_visit = VecDeque::new();
    let mut budget_hit = false;

    let root = tree.root();
    stats.add_created(0);
    if config.dedup == Dedup::Visited {
        visited.insert(tree[root].robots.key());
    }
    to_visit.push_back(root);

    while let Some(cur) = to_visit.pop_front() {
        let node = tree[cur];
        if stats.add_visited(node.depth) && print_status {
            println!("Visited new depth: {}", node.depth);
            println!("{:?}", stats);
        }

        // solutions are checked before the depth limit,
        // a node one past the limit can still be a solution
        if target.is_reached(&node.robots) {
            debug!("Found solution at depth {}", node.depth);
            solutions.push(cur);
            if solutions.len() >= config.solution_count {
                return (tree, solutions, Outcome::Complete);
            }
        }

        if node.depth > config.max_depth {
            return (tree, solutions, Outcome::DepthLimit);
        }

        'expand: for &color in &COLORS {
            for &dir in &DIRECTIONS {
                if let Some(budget) = config.node_budget {
                    if tree.len() >= budget {
                        if !budget_hit {
                            debug!("Node budget of {} exhausted", budget);
                            budget_hit = true;
                        }
                        break 'expand;
                    }
                }

                let mov = Move::new(color, dir);
                stats.add_resolved();
                let new_robots = match board.make_move(&node.robots, mov) {
                    Some(new_robots) => new_robots,
                    None => continue,
                };

                let new_depth = node.depth + 1;
                if config.dedup == Dedup::Visited && !visited.insert(new_robots.key()) {
                    stats.add_duplicate(new_depth);
                    continue;
                }

                let child = tree.add(cur, mov, new_robots);
                stats.add_created(new_depth);
                to_visit.push_back(child);
            }
        }
    }

    let outcome = if budget_hit {
        Outcome::BudgetExhausted
    } else {
        Outcome::FrontierExhausted
    };
    (tree, solutions, outcome)
}
