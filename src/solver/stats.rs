use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    visited_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    resolved_moves: usize,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_visited(&self) -> usize {
        self.visited_states.iter().sum()
    }

    pub fn total_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// How many times a single robot move was resolved.
    pub fn total_resolved(&self) -> usize {
        self.resolved_moves
    }

    pub fn created_at(&self, depth: u16) -> usize {
        self.created_states.get(usize::from(depth)).cloned().unwrap_or(0)
    }

    pub fn visited_at(&self, depth: u16) -> usize {
        self.visited_states.get(usize::from(depth)).cloned().unwrap_or(0)
    }

    /// Deepest depth reached so far, `None` before anything was visited.
    pub fn max_visited_depth(&self) -> Option<u16> {
        self.visited_states.len().checked_sub(1).map(|d| d as u16)
    }

    pub(crate) fn add_created(&mut self, depth: u16) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    /// Returns true when this is the first node visited at `depth`.
    pub(crate) fn add_visited(&mut self, depth: u16) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: u16) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn add_resolved(&mut self) {
        self.resolved_moves += 1;
    }

    fn add(counts: &mut Vec<usize>, depth: u16) -> bool {
        let depth = usize::from(depth);
        let mut ret = false;

        // while because a depth can be skipped when every move there was a duplicate
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / visited / skipped duplicates:")?;
        writeln!(
            f,
            "{:<16}{:<10}{}",
            self.total_created().separated_string(),
            self.total_visited().separated_string(),
            self.total_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_visited();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Visited total: {}", visited.separated_string())?;
        writeln!(
            f,
            "Skipped duplicates total: {}",
            self.total_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "Created but not visited total: {}",
            (created - visited).separated_string()
        )?;
        writeln!(
            f,
            "Moves resolved total: {}",
            self.resolved_moves.separated_string()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "Depth          Created        Visited        Duplicates     Not visited"
        )?;
        let depths = self.created_states.len().max(self.duplicate_states.len());
        for i in 0..depths {
            let depth = format!("{}:", i);
            let created = self.created_states.get(i).cloned().unwrap_or(0);
            let visited = self.visited_states.get(i).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(i).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                depth,
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                (created - visited).separated_string()
            )?;
        }
        Ok(())
    }
}
