use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::{FromStr, SplitWhitespace};

use crate::board::Board;
use crate::data::{Color, Diagonal, Dir, Orientation, Position, BOARD_SIZE, COLORS};
use crate::puzzle::{Puzzle, Target};
use crate::quadrant::{Quadrant, Slot};
use crate::robots::Robots;

/// Line numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    UnknownDirective(usize, String),
    MissingField(usize),
    ExtraField(usize, String),
    BadNumber(usize, String),
    OutOfRange(usize, usize),
    UnknownColor(usize, String),
    UnknownOrientation(usize, String),
    UnknownQuadrant(usize, u8),
    UnknownSlot(usize, String),
    DuplicateDiagonal(usize, u8, u8),
    DuplicateRobot(usize, Color),
    MultipleTargets(usize),
    MissingRobot(Color),
    NoTarget,
    RobotsOverlap(Color, Color),
    DiagonalLoop(Color, Position, Dir),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParserErr::UnknownDirective(l, s) => write!(f, "Line {}: unknown directive `{}`", l, s),
            ParserErr::MissingField(l) => write!(f, "Line {}: missing field", l),
            ParserErr::ExtraField(l, s) => write!(f, "Line {}: unexpected `{}`", l, s),
            ParserErr::BadNumber(l, s) => write!(f, "Line {}: `{}` is not a number", l, s),
            ParserErr::OutOfRange(l, n) => write!(f, "Line {}: {} is out of range", l, n),
            ParserErr::UnknownColor(l, s) => write!(f, "Line {}: unknown color `{}`", l, s),
            ParserErr::UnknownOrientation(l, s) => {
                write!(f, "Line {}: unknown diagonal orientation `{}`", l, s)
            }
            ParserErr::UnknownQuadrant(l, n) => write!(f, "Line {}: no quadrant tile {}", l, n),
            ParserErr::UnknownSlot(l, s) => write!(f, "Line {}: unknown quadrant slot `{}`", l, s),
            ParserErr::DuplicateDiagonal(l, r, c) => {
                write!(f, "Line {}: second diagonal at ({}, {})", l, r, c)
            }
            ParserErr::DuplicateRobot(l, color) => write!(f, "Line {}: second {} robot", l, color),
            ParserErr::MultipleTargets(l) => write!(f, "Line {}: more than one target", l),
            ParserErr::MissingRobot(color) => write!(f, "No {} robot", color),
            ParserErr::NoTarget => write!(f, "No target"),
            ParserErr::RobotsOverlap(a, b) => {
                write!(f, "The {} and {} robots share a square", a, b)
            }
            ParserErr::DiagonalLoop(color, pos, dir) => write!(
                f,
                "The {} robot can bounce between diagonals forever from {} heading {}",
                color, pos, dir
            ),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Whitespace separated fields of one line.
struct Fields<'a> {
    line: usize,
    iter: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn next(&mut self) -> Result<&'a str, ParserErr> {
        self.iter.next().ok_or(ParserErr::MissingField(self.line))
    }

    /// A number in `0..=max`.
    fn number(&mut self, max: u8) -> Result<u8, ParserErr> {
        let field = self.next()?;
        let n: usize = field
            .parse()
            .map_err(|_| ParserErr::BadNumber(self.line, field.to_owned()))?;
        if n > usize::from(max) {
            return Err(ParserErr::OutOfRange(self.line, n));
        }
        Ok(n as u8)
    }

    fn coord(&mut self) -> Result<u8, ParserErr> {
        self.number(BOARD_SIZE - 1)
    }

    fn position(&mut self) -> Result<Position, ParserErr> {
        let row = self.coord()?;
        let col = self.coord()?;
        Ok(Position::new(row, col))
    }

    fn color(&mut self) -> Result<Color, ParserErr> {
        let field = self.next()?;
        COLORS
            .iter()
            .cloned()
            .find(|color| {
                field.eq_ignore_ascii_case(&color.to_string())
                    || field.len() == 1 && field.eq_ignore_ascii_case(&color.letter().to_string())
            })
            .ok_or_else(|| ParserErr::UnknownColor(self.line, field.to_owned()))
    }

    fn orientation(&mut self) -> Result<Orientation, ParserErr> {
        let field = self.next()?;
        match field.to_ascii_lowercase().as_str() {
            "/" | "forward" => Ok(Orientation::Forward),
            "\\" | "back" => Ok(Orientation::Back),
            _ => Err(ParserErr::UnknownOrientation(self.line, field.to_owned())),
        }
    }

    fn quadrant(&mut self) -> Result<Quadrant, ParserErr> {
        let number = self.number(u8::max_value())?;
        Quadrant::builtin(number).ok_or(ParserErr::UnknownQuadrant(self.line, number))
    }

    fn slot(&mut self) -> Result<Slot, ParserErr> {
        let field = self.next()?;
        Slot::from_name(field).ok_or_else(|| ParserErr::UnknownSlot(self.line, field.to_owned()))
    }

    fn end(&mut self) -> Result<(), ParserErr> {
        match self.iter.next() {
            None => Ok(()),
            Some(field) => Err(ParserErr::ExtraField(self.line, field.to_owned())),
        }
    }

    /// Remaining fields as wall boundaries.
    fn boundaries(mut self) -> Result<Vec<u8>, ParserErr> {
        let mut boundaries = Vec::new();
        while self.iter.clone().next().is_some() {
            boundaries.push(self.number(BOARD_SIZE)?);
        }
        Ok(boundaries)
    }
}

pub(crate) fn parse(puzzle: &str) -> Result<Puzzle, ParserErr> {
    let mut board = Board::new();
    let mut robots: [Option<Position>; 4] = [None; 4];
    let mut target = None;

    for (i, line) in puzzle.lines().enumerate() {
        let line_num = i + 1;
        let content = line.split('#').next().unwrap_or("");
        // `row 3: 5 9` - the colon is optional
        let content = content.replace(':', " ");
        let mut fields = Fields {
            line: line_num,
            iter: content.split_whitespace(),
        };
        let directive = match fields.iter.next() {
            Some(directive) => directive,
            None => continue,
        };

        match directive {
            "row" => {
                let row = fields.coord()?;
                for boundary in fields.boundaries()? {
                    board.add_row_wall(row, boundary);
                }
            }
            "col" => {
                let col = fields.coord()?;
                for boundary in fields.boundaries()? {
                    board.add_col_wall(boundary, col);
                }
            }
            "diagonal" => {
                let row = fields.coord()?;
                let col = fields.coord()?;
                let color = fields.color()?;
                let orientation = fields.orientation()?;
                fields.end()?;
                if board.has_diagonal(row, col) {
                    return Err(ParserErr::DuplicateDiagonal(line_num, row, col));
                }
                board.add_diagonal(Diagonal::new(row, col, color, orientation));
            }
            "quadrant" => {
                let quadrant = fields.quadrant()?;
                let slot = fields.slot()?;
                fields.end()?;
                for diagonal in quadrant.placed_diagonals(slot) {
                    if board.has_diagonal(diagonal.row, diagonal.col) {
                        return Err(ParserErr::DuplicateDiagonal(
                            line_num,
                            diagonal.row,
                            diagonal.col,
                        ));
                    }
                }
                board.add_quadrant(&quadrant, slot);
            }
            "robot" => {
                let color = fields.color()?;
                let pos = fields.position()?;
                fields.end()?;
                let slot = &mut robots[color as usize];
                if slot.is_some() {
                    return Err(ParserErr::DuplicateRobot(line_num, color));
                }
                *slot = Some(pos);
            }
            "target" => {
                let color = fields.color()?;
                let pos = fields.position()?;
                fields.end()?;
                if target.is_some() {
                    return Err(ParserErr::MultipleTargets(line_num));
                }
                target = Some(Target::new(color, pos));
            }
            _ => return Err(ParserErr::UnknownDirective(line_num, directive.to_owned())),
        }
    }

    let mut found = [Position::new(0, 0); 4];
    for &color in &COLORS {
        found[color as usize] = robots[color as usize].ok_or(ParserErr::MissingRobot(color))?;
    }
    let robots = Robots::new(found[0], found[1], found[2], found[3]);
    if let Some((a, b)) = robots.overlap() {
        return Err(ParserErr::RobotsOverlap(a, b));
    }
    let target = target.ok_or(ParserErr::NoTarget)?;
    if let Some((color, pos, dir)) = board.find_loop() {
        return Err(ParserErr::DiagonalLoop(color, pos, dir));
    }

    Ok(Puzzle::new(board, robots, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROBOTS: &str = r"
robot yellow 0 0
robot red 1 1
robot green 2 2
robot blue 3 3
";

    fn with_robots(rest: &str) -> String {
        format!("{}{}", ROBOTS, rest)
    }

    fn assert_failure(input: &str, expected_err: ParserErr) {
        assert_eq!(input.parse::<Puzzle>().unwrap_err(), expected_err);
    }

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::MissingRobot(Color::Yellow));
    }

    #[test]
    fn fail_no_target() {
        assert_failure(ROBOTS, ParserErr::NoTarget);
    }

    #[test]
    fn fail_missing_robot() {
        let input = r"
robot yellow 0 0
robot red 1 1
robot blue 3 3
target red 5 5
";
        assert_failure(input, ParserErr::MissingRobot(Color::Green));
    }

    #[test]
    fn fail_bad_lines() {
        assert_failure(
            &with_robots("wall 1 2\n"),
            ParserErr::UnknownDirective(6, "wall".to_owned()),
        );
        assert_failure(
            &with_robots("target purple 1 2\n"),
            ParserErr::UnknownColor(6, "purple".to_owned()),
        );
        assert_failure(&with_robots("target red 1\n"), ParserErr::MissingField(6));
        assert_failure(
            &with_robots("target red 1 x\n"),
            ParserErr::BadNumber(6, "x".to_owned()),
        );
        assert_failure(&with_robots("target red 1 16\n"), ParserErr::OutOfRange(6, 16));
        assert_failure(&with_robots("row 2: 17\n"), ParserErr::OutOfRange(6, 17));
        assert_failure(
            &with_robots("target red 1 2 3\n"),
            ParserErr::ExtraField(6, "3".to_owned()),
        );
        assert_failure(
            &with_robots("diagonal 5 5 red |\n"),
            ParserErr::UnknownOrientation(6, "|".to_owned()),
        );
    }

    #[test]
    fn fail_duplicates() {
        assert_failure(
            &with_robots("robot red 5 5\n"),
            ParserErr::DuplicateRobot(6, Color::Red),
        );
        assert_failure(
            &with_robots("target red 5 5\ntarget blue 6 6\n"),
            ParserErr::MultipleTargets(7),
        );
        assert_failure(
            &with_robots("diagonal 5 5 red /\ndiagonal 5 5 blue \\\n"),
            ParserErr::DuplicateDiagonal(7, 5, 5),
        );
    }

    #[test]
    fn fail_quadrants() {
        assert_failure(
            &with_robots("quadrant 0 nw\n"),
            ParserErr::UnknownQuadrant(6, 0),
        );
        assert_failure(
            &with_robots("quadrant 10 nw\n"),
            ParserErr::UnknownQuadrant(6, 10),
        );
        assert_failure(
            &with_robots("quadrant 1 middle\n"),
            ParserErr::UnknownSlot(6, "middle".to_owned()),
        );
        assert_failure(&with_robots("quadrant 1\n"), ParserErr::MissingField(6));
        assert_failure(
            &with_robots("diagonal 2 14 blue /\nquadrant 9 ne\n"),
            ParserErr::DuplicateDiagonal(7, 2, 14),
        );
    }

    #[test]
    fn quadrants() {
        let input = r"
quadrant 1 nw
quadrant 2 ne
quadrant 3 se
quadrant 9 bottom-left
robot yellow 0 0
robot red 1 1
robot green 2 2
robot blue 3 3
target red 5 5
";
        let puzzle: Puzzle = input.parse().unwrap();
        let tiles: Vec<Quadrant> = [1, 2, 3, 9]
            .iter()
            .map(|&n| Quadrant::builtin(n).unwrap())
            .collect();
        let expected = Board::from_quadrants([&tiles[0], &tiles[1], &tiles[2], &tiles[3]]);
        assert_eq!(puzzle.board, expected);
        assert_eq!(puzzle.board.diagonal_count(), 2);
        assert!(puzzle.board.row_walls(0).contains(&4));
    }

    #[test]
    fn fail_overlap() {
        let input = r"
robot yellow 0 0
robot red 1 1
robot green 2 2
robot blue 1 1
target red 5 5
";
        assert_failure(input, ParserErr::RobotsOverlap(Color::Red, Color::Blue));
    }

    #[test]
    fn fail_diagonal_loop() {
        let input = with_robots(
            r"
target red 5 5
diagonal 2 2 red /
diagonal 2 10 red \
diagonal 10 10 red /
diagonal 10 2 red \
",
        );
        assert_failure(
            &input,
            ParserErr::DiagonalLoop(Color::Yellow, Position::new(2, 2), Dir::East),
        );

        // every robot passes through one of the corners
        let input = input
            .replace("2 10 red", "2 10 yellow")
            .replace("10 10 red", "10 10 green")
            .replace("10 2 red", "10 2 blue");
        input.parse::<Puzzle>().unwrap();
    }

    #[test]
    fn walls_and_diagonals() {
        let input = r"
# comment
row 3: 5 9   # trailing comment
col 7 2
diagonal 4 4 g forward
diagonal 5 6 BLUE \
robot Y 0 0
robot r 1 1
robot green 2 2
robot blue 3 3
target g 10 11
";
        let puzzle: Puzzle = input.parse().unwrap();
        let board = &puzzle.board;

        assert_eq!(board.row_walls(3), vec![5, 9]);
        assert_eq!(board.col_walls(7), vec![2]);
        assert_eq!(board.diagonal_count(), 2);
        let diagonal = board.diagonal_at(4, 4).unwrap();
        assert_eq!(diagonal.color, Color::Green);
        assert_eq!(diagonal.orientation, Orientation::Forward);
        assert_eq!(
            board.diagonal_at(5, 6).map(|d| (d.color, d.orientation)),
            Some((Color::Blue, Orientation::Back))
        );

        assert_eq!(puzzle.robots[Color::Yellow], Position::new(0, 0));
        assert_eq!(puzzle.robots[Color::Blue], Position::new(3, 3));
        assert_eq!(puzzle.target, Target::new(Color::Green, Position::new(10, 11)));
    }

    #[test]
    fn bundled_puzzles() {
        for input in &[
            include_str!("../puzzles/original.txt"),
            include_str!("../puzzles/open.txt"),
            include_str!("../puzzles/corner.txt"),
            include_str!("../puzzles/bounce.txt"),
            include_str!("../puzzles/boxed.txt"),
        ] {
            input.parse::<Puzzle>().unwrap();
        }

        let original: Puzzle = include_str!("../puzzles/original.txt").parse().unwrap();
        assert_eq!(original.board.diagonal_count(), 8);
        assert_eq!(original.board.row_walls(7), vec![6, 7, 9]);
        assert_eq!(original.board.col_walls(7), vec![7, 9, 11]);
        assert_eq!(original.target, Target::new(Color::Green, Position::new(11, 13)));
    }
}
