use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Keeps the whole frontier in memory, finds solutions level by level.
    BreadthFirst,
    /// Depth limited DFS restarted with a growing limit, memory grows with depth only.
    IterativeDeepening,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::BreadthFirst => write!(f, "breadth-first"),
            Method::IterativeDeepening => write!(f, "iterative-deepening"),
        }
    }
}

/// Whether the solver skips configurations it has already seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dedup {
    /// Every configuration is expanded again each time it's reached.
    Off,
    /// Remembers visited configurations, side flags included.
    ///
    /// Breadth-first skips anything seen before, iterative deepening
    /// skips what was already expanded with at least as many moves left.
    Visited,
}

impl Display for Dedup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dedup::Off => write!(f, "off"),
            Dedup::Visited => write!(f, "visited"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub method: Method,
    /// Stop after finding this many solutions.
    pub solution_count: usize,
    /// Nodes deeper than this are not expanded.
    pub max_depth: u16,
    pub dedup: Dedup,
    /// Upper bound on the number of nodes created.
    ///
    /// Breadth-first stops growing the tree but still checks what's already in it.
    pub node_budget: Option<usize>,
}

impl SearchConfig {
    pub fn new(solution_count: usize, max_depth: u16) -> Self {
        SearchConfig {
            solution_count,
            max_depth,
            ..Self::default()
        }
    }

    pub fn with_method(self, method: Method) -> Self {
        SearchConfig { method, ..self }
    }

    pub fn with_dedup(self, dedup: Dedup) -> Self {
        SearchConfig { dedup, ..self }
    }

    pub fn with_budget(self, node_budget: usize) -> Self {
        SearchConfig {
            node_budget: Some(node_budget),
            ..self
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            method: Method::BreadthFirst,
            solution_count: 1,
            max_depth: 20,
            dedup: Dedup::Off,
            node_budget: None,
        }
    }
}

impl Display for SearchConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "method: {}, solutions: {}, max depth: {}, dedup: {}",
            self.method, self.solution_count, self.max_depth, self.dedup
        )?;
        if let Some(budget) = self.node_budget {
            write!(f, ", node budget: {}", budget)?;
        }
        Ok(())
    }
}
