pub(crate) mod backtracking;
mod breadth_first;
mod deepening;
#[cfg(feature = "graph")]
mod graph;
pub mod stats;
pub mod tree;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use log::{debug, info};

use crate::board::Board;
use crate::config::{Method, SearchConfig};
use crate::data::Color;
use crate::moves::Moves;
use crate::puzzle::{Puzzle, Target};
use crate::robots::Robots;
use crate::Solve;

use self::stats::Stats;
use self::tree::{NodeId, SearchTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    RobotsOverlap(Color, Color),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::RobotsOverlap(a, b) => {
                write!(f, "The {} and {} robots share a square", a, b)
            }
        }
    }
}

impl Error for SolverErr {}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Found as many solutions as requested.
    Complete,
    /// Reached a node deeper than the max depth.
    DepthLimit,
    /// Ran out of nodes to check after the node budget stopped new ones from being created.
    BudgetExhausted,
    /// Nothing left to expand.
    FrontierExhausted,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Complete => write!(f, "complete"),
            Outcome::DepthLimit => write!(f, "depth limit reached"),
            Outcome::BudgetExhausted => write!(f, "node budget exhausted"),
            Outcome::FrontierExhausted => write!(f, "no more configurations"),
        }
    }
}

pub struct SolverOk {
    /// Only the nodes on paths to solutions are kept.
    pub tree: SearchTree,
    /// Shortest first, ties in the order they were found.
    pub solutions: Vec<NodeId>,
    pub stats: Stats,
    pub outcome: Outcome,
    pub config: SearchConfig,
}

impl SolverOk {
    fn new(
        tree: SearchTree,
        solutions: Vec<NodeId>,
        stats: Stats,
        outcome: Outcome,
        config: SearchConfig,
    ) -> Self {
        Self {
            tree,
            solutions,
            stats,
            outcome,
            config,
        }
    }

    pub fn solution_moves(&self) -> Vec<Moves> {
        self.solutions.iter().map(|&id| self.tree.moves(id)).collect()
    }

    /// Configuration the solution ends in.
    pub fn final_robots(&self, solution: NodeId) -> Robots {
        self.tree[solution].robots
    }

    #[cfg(feature = "graph")]
    pub fn write_graph<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        graph::Graph::new(&self.tree, &self.solutions).write(path)
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.solutions.is_empty() {
            writeln!(f, "No solution ({})", self.outcome)?;
        }
        for moves in self.solution_moves() {
            writeln!(f, "{}: {}", moves.move_cnt(), moves)?;
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, config: SearchConfig, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(&self.board, &self.robots, self.target, config, print_status)
    }
}

/// Searches for the shortest move sequences that bring the target robot to the target.
///
/// Robots and directions are tried in a fixed order (`COLORS` x `DIRECTIONS`)
/// so solutions of the same length always come out in the same order.
pub fn solve(
    board: &Board,
    robots: &Robots,
    target: Target,
    config: SearchConfig,
    print_status: bool,
) -> Result<SolverOk, SolverErr> {
    if let Some((a, b)) = robots.overlap() {
        return Err(SolverErr::RobotsOverlap(a, b));
    }

    debug!("Search called: {} ({})", target, config);

    let mut stats = Stats::new();
    let tree = SearchTree::new(*robots);
    if config.solution_count == 0 {
        return Ok(SolverOk::new(
            tree,
            Vec::new(),
            stats,
            Outcome::Complete,
            config,
        ));
    }

    let (tree, solutions, outcome) = match config.method {
        Method::BreadthFirst => {
            breadth_first::search(board, tree, target, config, print_status, &mut stats)
        }
        Method::IterativeDeepening => {
            deepening::search(board, tree, target, config, print_status, &mut stats)
        }
    };
    info!(
        "Search finished ({}): {} solutions, {} nodes created",
        outcome,
        solutions.len(),
        stats.total_created()
    );

    let (tree, solutions) = tree.compact(&solutions);
    Ok(SolverOk::new(tree, solutions, stats, outcome, config))
}
