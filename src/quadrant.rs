use std::fmt::{self, Display, Formatter};

use crate::board::Board;
use crate::data::{Color, Diagonal, Orientation, BOARD_SIZE};

/// Tiles are a quarter of the board on each side.
pub const QUADRANT_SIZE: u8 = BOARD_SIZE / 2;

const SIZE: usize = QUADRANT_SIZE as usize;

/// Numbers accepted by `Quadrant::builtin`, starting at 1.
pub const BUILTIN_QUADRANTS: u8 = 9;

/// Corner of the board a tile is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// Clockwise from the top left, the order `Board::from_quadrants` uses.
pub const SLOTS: [Slot; 4] = [
    Slot::TopLeft,
    Slot::TopRight,
    Slot::BottomRight,
    Slot::BottomLeft,
];

impl Slot {
    /// Clockwise quarter turns that take the top left corner here.
    fn quarter_turns(self) -> u8 {
        match self {
            Slot::TopLeft => 0,
            Slot::TopRight => 1,
            Slot::BottomRight => 2,
            Slot::BottomLeft => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Slot::TopLeft => "nw",
            Slot::TopRight => "ne",
            Slot::BottomRight => "se",
            Slot::BottomLeft => "sw",
        }
    }

    /// Accepts the short names and the long ones like `top-left`.
    pub fn from_name(name: &str) -> Option<Slot> {
        match name.to_ascii_lowercase().as_str() {
            "nw" | "top-left" => Some(Slot::TopLeft),
            "ne" | "top-right" => Some(Slot::TopRight),
            "se" | "bottom-right" => Some(Slot::BottomRight),
            "sw" | "bottom-left" => Some(Slot::BottomLeft),
            _ => None,
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One of the printed board pieces, described as if it was the top left quarter.
///
/// Boundary 0 is the outer edge of the board and boundary 8 the center.
/// Placing the tile in another slot turns it clockwise around the center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrant {
    row_walls: [u16; SIZE],
    col_walls: [u16; SIZE],
    diagonals: Vec<Diagonal>,
}

impl Quadrant {
    pub fn new() -> Self {
        Quadrant {
            row_walls: [1; SIZE],
            col_walls: [1; SIZE],
            diagonals: Vec::new(),
        }
    }

    /// Tiles 1 to 8 only have walls, tile 9 also has diagonals.
    pub fn builtin(number: u8) -> Option<Quadrant> {
        let tile = TILES.get(usize::from(number).checked_sub(1)?)?;

        let mut quadrant = Quadrant::new();
        for &(row, boundary) in tile.row_walls {
            quadrant.add_row_wall(row, boundary);
        }
        for &(col, boundary) in tile.col_walls {
            quadrant.add_col_wall(boundary, col);
        }
        for &(row, col, color, orientation) in tile.diagonals {
            quadrant.add_diagonal(Diagonal::new(row, col, color, orientation));
        }
        Some(quadrant)
    }

    pub fn add_row_wall(&mut self, row: u8, boundary: u8) {
        assert!(row < QUADRANT_SIZE && boundary <= QUADRANT_SIZE);
        self.row_walls[usize::from(row)] |= 1 << boundary;
    }

    pub fn add_col_wall(&mut self, boundary: u8, col: u8) {
        assert!(col < QUADRANT_SIZE && boundary <= QUADRANT_SIZE);
        self.col_walls[usize::from(col)] |= 1 << boundary;
    }

    pub fn add_diagonal(&mut self, diagonal: Diagonal) {
        assert!(diagonal.row < QUADRANT_SIZE && diagonal.col < QUADRANT_SIZE);
        self.diagonals.retain(|d| (d.row, d.col) != (diagonal.row, diagonal.col));
        self.diagonals.push(diagonal);
    }

    pub fn has_row_wall(&self, row: u8, boundary: u8) -> bool {
        self.row_walls[usize::from(row)] & 1 << boundary != 0
    }

    pub fn has_col_wall(&self, boundary: u8, col: u8) -> bool {
        self.col_walls[usize::from(col)] & 1 << boundary != 0
    }

    /// Walls in board coordinates after placing the tile in `slot`.
    fn placed_walls(&self, slot: Slot) -> Vec<Wall> {
        let mut walls = Vec::new();
        for i in 0..QUADRANT_SIZE {
            for boundary in 0..=QUADRANT_SIZE {
                if self.has_row_wall(i, boundary) {
                    walls.push(Wall::Row { row: i, boundary });
                }
                if self.has_col_wall(boundary, i) {
                    walls.push(Wall::Col { boundary, col: i });
                }
            }
        }
        walls
            .into_iter()
            .map(|wall| (0..slot.quarter_turns()).fold(wall, |wall, _| wall.turned()))
            .collect()
    }

    /// Diagonals in board coordinates after placing the tile in `slot`.
    pub(crate) fn placed_diagonals(&self, slot: Slot) -> Vec<Diagonal> {
        self.diagonals
            .iter()
            .map(|&diagonal| {
                (0..slot.quarter_turns()).fold(diagonal, |d, _| {
                    Diagonal::new(d.col, BOARD_SIZE - 1 - d.row, d.color, d.orientation.turned())
                })
            })
            .collect()
    }
}

impl Default for Quadrant {
    fn default() -> Self {
        Quadrant::new()
    }
}

/// A wall segment on the full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wall {
    /// Vertical, see `Board::has_row_wall`.
    Row { row: u8, boundary: u8 },
    /// Horizontal, see `Board::has_col_wall`.
    Col { boundary: u8, col: u8 },
}

impl Wall {
    /// Quarter turn clockwise around the center of the board.
    ///
    /// Square `(r, c)` goes to `(c, 15 - r)` so vertical walls become horizontal and back.
    fn turned(self) -> Wall {
        match self {
            Wall::Row { row, boundary } => Wall::Col {
                boundary,
                col: BOARD_SIZE - 1 - row,
            },
            Wall::Col { boundary, col } => Wall::Row {
                row: col,
                boundary: BOARD_SIZE - boundary,
            },
        }
    }
}

impl Board {
    /// Board made of four tiles, clockwise from the top left.
    pub fn from_quadrants(quadrants: [&Quadrant; 4]) -> Board {
        let mut board = Board::new();
        for (quadrant, &slot) in quadrants.iter().zip(&SLOTS) {
            board.add_quadrant(quadrant, slot);
        }
        board
    }

    /// Adds the tile's walls and diagonals turned to fit `slot`.
    ///
    /// Diagonals replace ones already on the same square.
    pub fn add_quadrant(&mut self, quadrant: &Quadrant, slot: Slot) {
        for wall in quadrant.placed_walls(slot) {
            match wall {
                Wall::Row { row, boundary } => self.add_row_wall(row, boundary),
                Wall::Col { boundary, col } => self.add_col_wall(boundary, col),
            }
        }
        for diagonal in quadrant.placed_diagonals(slot) {
            self.add_diagonal(diagonal);
        }
    }
}

struct Tile {
    /// `(row, boundary)`
    row_walls: &'static [(u8, u8)],
    /// `(col, boundary)`
    col_walls: &'static [(u8, u8)],
    diagonals: &'static [(u8, u8, Color, Orientation)],
}

const TILES: [Tile; BUILTIN_QUADRANTS as usize] = [
    Tile {
        row_walls: &[(0, 4), (1, 1), (2, 7), (4, 3), (5, 7), (7, 7)],
        col_walls: &[(0, 6), (1, 2), (2, 5), (6, 2), (7, 5), (7, 7)],
        diagonals: &[],
    },
    Tile {
        row_walls: &[(0, 4), (2, 6), (4, 3), (5, 7), (6, 1), (7, 7)],
        col_walls: &[(0, 5), (1, 6), (2, 4), (5, 3), (7, 6), (7, 7)],
        diagonals: &[],
    },
    Tile {
        row_walls: &[(0, 5), (1, 2), (3, 6), (5, 5), (6, 2), (7, 7)],
        col_walls: &[(0, 5), (1, 7), (2, 1), (4, 5), (6, 4), (7, 7)],
        diagonals: &[],
    },
    Tile {
        row_walls: &[(0, 4), (1, 6), (2, 1), (4, 6), (6, 3), (7, 7)],
        col_walls: &[(0, 4), (1, 3), (2, 6), (5, 2), (6, 4), (7, 7)],
        diagonals: &[],
    },
    Tile {
        row_walls: &[(0, 4), (1, 6), (3, 2), (4, 5), (5, 3), (5, 8), (7, 7)],
        col_walls: &[(0, 7), (1, 3), (2, 6), (5, 4), (6, 2), (7, 6), (7, 7)],
        diagonals: &[],
    },
    Tile {
        row_walls: &[(0, 5), (1, 3), (3, 1), (4, 6), (6, 6), (7, 4), (7, 7)],
        col_walls: &[(0, 5), (1, 4), (2, 2), (3, 8), (5, 6), (6, 4), (7, 7)],
        diagonals: &[],
    },
    Tile {
        row_walls: &[(0, 5), (1, 7), (2, 1), (5, 7), (6, 3), (7, 7)],
        col_walls: &[(0, 6), (1, 2), (3, 7), (6, 2), (6, 5), (7, 7)],
        diagonals: &[],
    },
    Tile {
        row_walls: &[(0, 2), (1, 4), (2, 2), (3, 7), (6, 3), (7, 7)],
        col_walls: &[(0, 6), (1, 2), (3, 7), (4, 1), (6, 4), (7, 7)],
        diagonals: &[],
    },
    Tile {
        row_walls: &[(0, 5), (2, 6), (3, 3), (5, 2), (7, 6), (7, 7)],
        col_walls: &[(0, 7), (1, 6), (2, 3), (3, 4), (6, 2), (7, 7)],
        diagonals: &[
            (1, 2, Color::Red, Orientation::Back),
            (6, 3, Color::Green, Orientation::Back),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tiles() {
        assert_eq!(Quadrant::builtin(0), None);
        assert_eq!(Quadrant::builtin(BUILTIN_QUADRANTS + 1), None);
        for number in 1..=BUILTIN_QUADRANTS {
            let quadrant = Quadrant::builtin(number).unwrap();
            // every tile closes off its corner of the center square
            assert!(quadrant.has_row_wall(7, 7), "tile {}", number);
            assert!(quadrant.has_col_wall(7, 7), "tile {}", number);
            // outer edges
            assert!(quadrant.has_row_wall(3, 0));
            assert!(quadrant.has_col_wall(0, 3));
        }

        let tile = Quadrant::builtin(1).unwrap();
        assert!(tile.has_row_wall(0, 4));
        assert!(tile.has_col_wall(6, 0));
        assert!(!tile.has_col_wall(6, 1));
        assert_eq!(Quadrant::builtin(9).unwrap().diagonals.len(), 2);
    }

    #[test]
    fn turning_walls() {
        let wall = Wall::Row { row: 2, boundary: 5 };
        assert_eq!(wall.turned(), Wall::Col { boundary: 5, col: 13 });
        assert_eq!(wall.turned().turned(), Wall::Row { row: 13, boundary: 11 });
        let full_turn = (0..4).fold(wall, |wall, _| wall.turned());
        assert_eq!(full_turn, wall);

        let wall = Wall::Col { boundary: 0, col: 4 };
        assert_eq!(wall.turned(), Wall::Row { row: 4, boundary: 16 });
    }

    #[test]
    fn center_square() {
        let tile = Quadrant::builtin(1).unwrap();
        let board = Board::from_quadrants([&tile, &tile, &tile, &tile]);

        // the four center squares are boxed in from the outside
        assert!(board.has_row_wall(7, 7) && board.has_row_wall(8, 7));
        assert!(board.has_row_wall(7, 9) && board.has_row_wall(8, 9));
        assert!(board.has_col_wall(7, 7) && board.has_col_wall(7, 8));
        assert!(board.has_col_wall(9, 7) && board.has_col_wall(9, 8));
        // but open inside
        assert!(!board.has_row_wall(7, 8));
        assert!(!board.has_col_wall(8, 7));
    }

    #[test]
    fn four_equal_tiles_look_the_same_from_every_side() {
        let tile = Quadrant::builtin(5).unwrap();
        let board = Board::from_quadrants([&tile, &tile, &tile, &tile]);

        for row in 0..BOARD_SIZE {
            for boundary in 0..=BOARD_SIZE {
                assert_eq!(
                    board.has_row_wall(row, boundary),
                    board.has_col_wall(boundary, BOARD_SIZE - 1 - row),
                    "row {} boundary {}",
                    row,
                    boundary
                );
            }
        }
    }

    #[test]
    fn placing_tiles() {
        let tile = Quadrant::builtin(1).unwrap();
        let mut board = Board::new();
        board.add_quadrant(&tile, Slot::TopLeft);
        assert!(board.has_row_wall(0, 4));
        assert!(board.has_col_wall(6, 0));
        assert_eq!(board.row_walls(15), Vec::<u8>::new());

        let mut board = Board::new();
        board.add_quadrant(&tile, Slot::BottomRight);
        assert!(board.has_row_wall(15, 12));
        assert!(board.has_col_wall(10, 15));
        assert_eq!(board.row_walls(0), Vec::<u8>::new());
    }

    #[test]
    fn placing_diagonals() {
        let tile = Quadrant::builtin(9).unwrap();
        let mut board = Board::new();
        board.add_quadrant(&tile, Slot::TopRight);

        let diagonal = board.diagonal_at(2, 14).unwrap();
        assert_eq!(diagonal.color, Color::Red);
        assert_eq!(diagonal.orientation, Orientation::Forward);
        assert_eq!(
            board.diagonal_at(3, 9).map(|d| d.orientation),
            Some(Orientation::Forward)
        );
        assert_eq!(board.diagonal_count(), 2);

        board.add_quadrant(&tile, Slot::BottomRight);
        assert_eq!(
            board.diagonal_at(14, 13).map(|d| (d.color, d.orientation)),
            Some((Color::Red, Orientation::Back))
        );
        assert_eq!(board.diagonal_count(), 4);
    }
}
