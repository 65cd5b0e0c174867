use std::fmt::{self, Debug, Formatter};

use crate::board_formatter::BoardFormatter;
use crate::data::{Diagonal, Position, BOARD_SIZE};
use crate::robots::Robots;

const SIZE: usize = BOARD_SIZE as usize;

/// Both edges of the board, boundaries 0 and 16.
const EDGES: u32 = 1 | 1 << BOARD_SIZE;

/// Walls and diagonals - everything that doesn't move.
///
/// Built once and only read afterwards, so it can be shared between searches.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Bit `k` of `row_walls[r]` - vertical wall between columns `k - 1` and `k` in row `r`.
    row_walls: [u32; SIZE],
    /// Bit `k` of `col_walls[c]` - horizontal wall between rows `k - 1` and `k` in column `c`.
    col_walls: [u32; SIZE],
    /// Sorted by column.
    row_diagonals: Vec<Vec<Diagonal>>,
}

impl Board {
    /// Empty board with just the outer walls.
    pub fn new() -> Self {
        Board {
            row_walls: [EDGES; SIZE],
            col_walls: [EDGES; SIZE],
            row_diagonals: vec![Vec::new(); SIZE],
        }
    }

    pub fn add_row_wall(&mut self, row: u8, boundary: u8) {
        assert!(row < BOARD_SIZE && boundary <= BOARD_SIZE);
        self.row_walls[usize::from(row)] |= 1 << boundary;
    }

    pub fn add_col_wall(&mut self, boundary: u8, col: u8) {
        assert!(col < BOARD_SIZE && boundary <= BOARD_SIZE);
        self.col_walls[usize::from(col)] |= 1 << boundary;
    }

    /// Replaces any diagonal already on the square.
    pub fn add_diagonal(&mut self, diagonal: Diagonal) {
        let row = &mut self.row_diagonals[usize::from(diagonal.row)];
        match row.binary_search_by_key(&diagonal.col, |d| d.col) {
            Ok(i) => row[i] = diagonal,
            Err(i) => row.insert(i, diagonal),
        }
    }

    /// Vertical wall in `row` at column boundary `boundary`,
    /// between columns `boundary - 1` and `boundary`.
    pub fn has_row_wall(&self, row: u8, boundary: u8) -> bool {
        self.row_walls[usize::from(row)] & 1 << boundary != 0
    }

    /// Horizontal wall in `col` at row boundary `boundary`,
    /// between rows `boundary - 1` and `boundary`.
    pub fn has_col_wall(&self, boundary: u8, col: u8) -> bool {
        self.col_walls[usize::from(col)] & 1 << boundary != 0
    }

    pub fn has_diagonal(&self, row: u8, col: u8) -> bool {
        self.diagonal_at(row, col).is_some()
    }

    pub fn diagonal_at(&self, row: u8, col: u8) -> Option<&Diagonal> {
        let diagonals = &self.row_diagonals[usize::from(row)];
        diagonals
            .binary_search_by_key(&col, |d| d.col)
            .ok()
            .map(|i| &diagonals[i])
    }

    pub fn diagonals(&self) -> impl Iterator<Item = &Diagonal> {
        self.row_diagonals.iter().flatten()
    }

    pub(crate) fn diagonal_count(&self) -> usize {
        self.row_diagonals.iter().map(Vec::len).sum()
    }

    /// Inner wall boundaries of a row in ascending order, without the edges.
    pub fn row_walls(&self, row: u8) -> Vec<u8> {
        inner_boundaries(self.row_walls[usize::from(row)])
    }

    /// Inner wall boundaries of a column in ascending order, without the edges.
    pub fn col_walls(&self, col: u8) -> Vec<u8> {
        inner_boundaries(self.col_walls[usize::from(col)])
    }

    pub fn format<'a>(
        &'a self,
        robots: Option<&'a Robots>,
        target: Option<Position>,
    ) -> BoardFormatter<'a> {
        BoardFormatter::new(self, robots, target)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(None, None))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

fn inner_boundaries(walls: u32) -> Vec<u8> {
    (1..BOARD_SIZE).filter(|&k| walls & 1 << k != 0).collect()
}
