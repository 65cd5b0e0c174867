use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::board_formatter::BoardFormatter;
use crate::data::{Color, Position};
use crate::moves::Moves;
use crate::robots::Robots;
use crate::solution_formatter::SolutionFormatter;

/// Which robot has to end up where.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub color: Color,
    pub pos: Position,
}

impl Target {
    pub fn new(color: Color, pos: Position) -> Self {
        Target { color, pos }
    }

    pub fn is_reached(self, robots: &Robots) -> bool {
        robots[self.color] == self.pos
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} robot to {}", self.color, self.pos)
    }
}

#[derive(Clone)]
pub struct Puzzle {
    pub board: Board,
    pub robots: Robots,
    pub target: Target,
}

impl Puzzle {
    pub fn new(board: Board, robots: Robots, target: Target) -> Self {
        Puzzle {
            board,
            robots,
            target,
        }
    }

    pub fn format(&self) -> BoardFormatter<'_> {
        self.board.format(Some(&self.robots), Some(self.target.pos))
    }

    pub fn format_solution<'a>(&'a self, moves: &'a Moves) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.board, &self.robots, self.target.pos, moves)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", self.robots)?;
        write!(f, "{:?}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::Dir;
    use crate::moves::Move;

    #[test]
    fn reaching_target() {
        let puzzle: Puzzle = include_str!("../puzzles/corner.txt").parse().unwrap();
        let target = puzzle.target;
        assert_eq!(target.to_string(), "yellow robot to (15, 15)");
        assert!(!target.is_reached(&puzzle.robots));

        let moves = Moves::new(vec![
            Move::new(Color::Yellow, Dir::East),
            Move::new(Color::Yellow, Dir::South),
        ]);
        let end = puzzle.board.replay(&puzzle.robots, &moves);
        assert!(target.is_reached(&end));

        // only the right robot counts
        let other = puzzle.robots.with(Color::Red, target.pos);
        assert!(!target.is_reached(&other));
    }

    #[test]
    fn formatting_puzzle() {
        let puzzle: Puzzle = include_str!("../puzzles/original.txt").parse().unwrap();
        let rendered = puzzle.to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 17);
        // blue in the corner, wall after column 4
        assert!(lines[1].starts_with("| B .   .   .   .   |"));
        // target with a wall south of it
        assert!(lines[12].contains("_*_"));
        // red diagonal `\` in row 1 column 2
        assert!(lines[2].starts_with("|   .   . \\ ."));
        assert_eq!(rendered, puzzle.format().to_string());
    }
}
