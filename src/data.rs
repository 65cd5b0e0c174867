use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

/// The board is always square.
pub const BOARD_SIZE: u8 = 16;

/// Order in which the solver tries robots.
pub const COLORS: [Color; 4] = [Color::Yellow, Color::Red, Color::Green, Color::Blue];

/// Order in which the solver tries directions for each robot.
pub const DIRECTIONS: [Dir; 4] = [Dir::East, Dir::West, Dir::North, Dir::South];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Yellow = 0,
    Red = 1,
    Green = 2,
    Blue = 3,
}

impl Color {
    pub fn letter(self) -> char {
        match self {
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Yellow => write!(f, "yellow"),
            Color::Red => write!(f, "red"),
            Color::Green => write!(f, "green"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    North,
    South,
    East,
    West,
}

impl Dir {
    pub fn inverse(self) -> Dir {
        match self {
            Dir::North => Dir::South,
            Dir::South => Dir::North,
            Dir::East => Dir::West,
            Dir::West => Dir::East,
        }
    }

    pub fn is_vertical(self) -> bool {
        self == Dir::North || self == Dir::South
    }

    fn offset(self) -> (i8, i8) {
        match self {
            Dir::North => (-1, 0),
            Dir::South => (1, 0),
            Dir::East => (0, 1),
            Dir::West => (0, -1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::North => write!(f, "n"),
            Dir::South => write!(f, "s"),
            Dir::East => write!(f, "e"),
            Dir::West => write!(f, "w"),
        }
    }
}

/// Which way a diagonal leans, looking at the board from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `/`
    Forward,
    /// `\`
    Back,
}

impl Orientation {
    /// Direction a robot heading `dir` continues in after bouncing off this diagonal.
    pub fn deflect(self, dir: Dir) -> Dir {
        match (self, dir) {
            (Orientation::Forward, Dir::East) => Dir::North,
            (Orientation::Forward, Dir::West) => Dir::South,
            (Orientation::Forward, Dir::North) => Dir::East,
            (Orientation::Forward, Dir::South) => Dir::West,
            (Orientation::Back, Dir::East) => Dir::South,
            (Orientation::Back, Dir::West) => Dir::North,
            (Orientation::Back, Dir::North) => Dir::West,
            (Orientation::Back, Dir::South) => Dir::East,
        }
    }

    /// Whether the edge of the cell facing `edge` lies on the "above" half of the diagonal.
    ///
    /// `/` has the north and west edges above it, `\` the north and east edges.
    /// A robot leaving the cell through an edge is on that edge's half.
    pub fn is_above(self, edge: Dir) -> bool {
        match (self, edge) {
            (_, Dir::North) => true,
            (_, Dir::South) => false,
            (Orientation::Forward, Dir::West) | (Orientation::Back, Dir::East) => true,
            (Orientation::Forward, Dir::East) | (Orientation::Back, Dir::West) => false,
        }
    }

    /// The same diagonal after the board is turned a quarter either way.
    pub fn turned(self) -> Orientation {
        match self {
            Orientation::Forward => Orientation::Back,
            Orientation::Back => Orientation::Forward,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Orientation::Forward => '/',
            Orientation::Back => '\\',
        }
    }
}

/// A square on the board plus the side of a diagonal the robot rests on.
///
/// The side flag only means something on squares with a diagonal
/// and is ignored by equality and hashing.
#[derive(Clone, Copy)]
pub struct Position {
    pub(crate) row: u8,
    pub(crate) col: u8,
    pub(crate) above_diagonal: bool,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Position {
        Self::with_side(row, col, true)
    }

    pub fn with_side(row: u8, col: u8, above_diagonal: bool) -> Position {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "Position out of bounds: ({}, {})",
            row,
            col
        );
        Position {
            row,
            col,
            above_diagonal,
        }
    }

    /// For untrusted input - returns `None` instead of panicking.
    pub fn checked(row: usize, col: usize) -> Option<Position> {
        if row < usize::from(BOARD_SIZE) && col < usize::from(BOARD_SIZE) {
            Some(Position::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn above_diagonal(self) -> bool {
        self.above_diagonal
    }

    pub(crate) fn set_side(self, above_diagonal: bool) -> Position {
        Position {
            above_diagonal,
            ..self
        }
    }

    /// The next square in `dir` or `None` at the edge of the board.
    /// The side flag is reset to the default.
    pub(crate) fn neighbor(self, dir: Dir) -> Option<Position> {
        let (dr, dc) = dir.offset();
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if r < 0 || c < 0 {
            return None;
        }
        Position::checked(r as usize, c as usize)
    }

    /// Packs the square and side flag into 9 bits.
    pub(crate) fn pack(self) -> u64 {
        let square = u64::from(self.row) * u64::from(BOARD_SIZE) + u64::from(self.col);
        square << 1 | u64::from(self.above_diagonal)
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Position) -> bool {
        self.row == other.row && self.col == other.col
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let side = if self.above_diagonal { '+' } else { '-' };
        write!(f, "({}, {}{})", self.row, self.col, side)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Diagonal {
    pub row: u8,
    pub col: u8,
    pub color: Color,
    pub orientation: Orientation,
}

impl Diagonal {
    pub fn new(row: u8, col: u8, color: Color, orientation: Orientation) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "Diagonal out of bounds: ({}, {})",
            row,
            col
        );
        Diagonal {
            row,
            col,
            color,
            orientation,
        }
    }
}
