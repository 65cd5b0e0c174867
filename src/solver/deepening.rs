use fnv::FnvHashMap;
use log::{debug, info};

use crate::board::Board;
use crate::config::{Dedup, SearchConfig};
use crate::data::{COLORS, DIRECTIONS};
use crate::moves::Move;
use crate::puzzle::Target;
use crate::robots::Robots;

use super::stats::Stats;
use super::tree::{NodeId, SearchTree};
use super::Outcome;

/// Runs a depth limited DFS with limits 0, 1, 2, ... until enough solutions are found.
///
/// Each round only records solutions exactly at its limit so shorter ones
/// found in earlier rounds aren't reported twice and the order matches breadth-first.
/// Only the nodes on the solution paths are kept in the returned tree.
pub(crate) fn search(
    board: &Board,
    tree: SearchTree,
    target: Target,
    config: SearchConfig,
    print_status: bool,
    stats: &mut Stats,
) -> (SearchTree, Vec<NodeId>, Outcome) {
    let root = tree[tree.root()].robots;
    let mut searcher = Deepening {
        board,
        target,
        config,
        print_status,
        stats,
        tree,
        solutions: Vec::new(),
        moves_left: FnvHashMap::default(),
        path: Vec::new(),
        created: 0,
        limit: 0,
        cut_off: false,
        budget_hit: false,
    };

    // nodes at max depth are still expanded so, as with breadth-first,
    // solutions one move longer are found
    for limit in 0..=config.max_depth.saturating_add(1) {
        info!("Looking for solutions {} moves deep", limit);
        if searcher.budget_reached() {
            return searcher.finish(Outcome::BudgetExhausted);
        }

        searcher.limit = limit;
        searcher.cut_off = false;
        searcher.created += 1;
        searcher.stats.add_created(0);
        if config.dedup == Dedup::Visited {
            searcher.moves_left.insert(root.key(), limit);
        }

        let stop = searcher.visit(root, 0);
        if searcher.budget_hit {
            return searcher.finish(Outcome::BudgetExhausted);
        }
        if stop {
            return searcher.finish(Outcome::Complete);
        }
        if !searcher.cut_off {
            // the whole reachable space fit under the limit
            return searcher.finish(Outcome::FrontierExhausted);
        }
    }

    searcher.finish(Outcome::DepthLimit)
}

struct Deepening<'a> {
    board: &'a Board,
    target: Target,
    config: SearchConfig,
    print_status: bool,
    stats: &'a mut Stats,
    tree: SearchTree,
    solutions: Vec<NodeId>,
    /// Most moves left when a configuration was last expanded, across all rounds.
    moves_left: FnvHashMap<u64, u16>,
    /// Moves from the root to the current node.
    path: Vec<(Move, Robots)>,
    created: usize,
    limit: u16,
    /// Something was left unexplored because of the limit.
    cut_off: bool,
    budget_hit: bool,
}

impl Deepening<'_> {
    /// Returns true when the search should stop, either enough solutions or out of budget.
    fn visit(&mut self, robots: Robots, depth: u16) -> bool {
        if self.stats.add_visited(depth) && self.print_status {
            println!("Visited new depth: {}", depth);
            println!("{:?}", self.stats);
        }

        if depth == self.limit {
            if self.target.is_reached(&robots) {
                debug!("Found solution at depth {}", depth);
                let id = self.tree.add_path(&self.path);
                self.solutions.push(id);
                if self.solutions.len() >= self.config.solution_count {
                    return true;
                }
            }
            self.cut_off = true;
            return false;
        }

        let new_depth = depth + 1;
        for &color in &COLORS {
            for &dir in &DIRECTIONS {
                if self.budget_reached() {
                    if !self.budget_hit {
                        debug!("Node budget exhausted at depth {}", depth);
                        self.budget_hit = true;
                    }
                    return true;
                }

                let mov = Move::new(color, dir);
                self.stats.add_resolved();
                let new_robots = match self.board.make_move(&robots, mov) {
                    Some(new_robots) => new_robots,
                    None => continue,
                };

                if new_depth < self.limit && !self.worth_expanding(&new_robots, new_depth) {
                    self.stats.add_duplicate(new_depth);
                    // its subtree was searched with more moves left, maybe in an earlier round
                    self.cut_off = true;
                    continue;
                }

                self.created += 1;
                self.stats.add_created(new_depth);
                self.path.push((mov, new_robots));
                let stop = self.visit(new_robots, new_depth);
                self.path.pop();
                if stop {
                    return true;
                }
            }
        }
        false
    }

    /// False if the configuration was already expanded with at least as many moves left.
    fn worth_expanding(&mut self, robots: &Robots, depth: u16) -> bool {
        if self.config.dedup == Dedup::Off {
            return true;
        }

        let moves_left = self.limit - depth;
        match self.moves_left.get(&robots.key()) {
            Some(&best) if best >= moves_left => false,
            _ => {
                self.moves_left.insert(robots.key(), moves_left);
                true
            }
        }
    }

    fn budget_reached(&self) -> bool {
        self.config
            .node_budget
            .map_or(false, |budget| self.created >= budget)
    }

    fn finish(self, outcome: Outcome) -> (SearchTree, Vec<NodeId>, Outcome) {
        (self.tree, self.solutions, outcome)
    }
}
