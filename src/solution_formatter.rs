use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::Position;
use crate::moves::Moves;
use crate::robots::Robots;

/// Prints the board before the first move and after each move.
#[derive(Clone, Copy)]
pub struct SolutionFormatter<'a> {
    board: &'a Board,
    initial_robots: &'a Robots,
    target: Position,
    moves: &'a Moves,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(
        board: &'a Board,
        initial_robots: &'a Robots,
        target: Position,
        moves: &'a Moves,
    ) -> Self {
        Self {
            board,
            initial_robots,
            target,
            moves,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            self.board.format(Some(self.initial_robots), Some(self.target))
        )?;
        let mut robots = *self.initial_robots;
        for &mov in self.moves {
            // moves that go nowhere are still printed so the output lines up with the move list
            let end = self.board.slide(&robots, mov.color, mov.dir);
            robots = robots.with(mov.color, end);
            writeln!(f, "{}", mov)?;
            writeln!(f, "{}", self.board.format(Some(&robots), Some(self.target)))?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::{Color, Dir};
    use crate::moves::{Move, Moves};
    use crate::puzzle::Puzzle;

    #[test]
    fn formatting_solution() {
        let puzzle: Puzzle = include_str!("../puzzles/corner.txt").parse().unwrap();
        let moves = Moves::new(vec![
            Move::new(Color::Yellow, Dir::East),
            Move::new(Color::Yellow, Dir::South),
        ]);
        let rendered = puzzle.format_solution(&moves).to_string();
        let lines: Vec<_> = rendered.lines().collect();

        // 3 boards of 17 lines, 2 move lines, blank line after each board
        assert_eq!(lines.len(), 3 * 18 + 2);
        assert_eq!(lines[18], "Ye");
        assert!(lines[19 + 1].ends_with(" Y |"));
        assert_eq!(lines[37], "Ys");
        assert!(lines[38 + 16].ends_with("_Y_|"));
        assert!(!lines[38 + 16].contains('*'));
    }
}
