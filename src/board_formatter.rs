use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::{Orientation, Position, BOARD_SIZE};
use crate::robots::Robots;

/// ASCII rendering of a board, optionally with robots and the target.
///
/// Each square is 3 characters wide followed by `|` if there's a wall to its east or `.` if not.
/// Squares with a wall to their south are underlined.
/// Robots show up as their initial on their side of a diagonal, the target as `*`.
#[derive(Clone, Copy)]
pub struct BoardFormatter<'a> {
    board: &'a Board,
    robots: Option<&'a Robots>,
    target: Option<Position>,
}

impl<'a> BoardFormatter<'a> {
    pub(crate) fn new(
        board: &'a Board,
        robots: Option<&'a Robots>,
        target: Option<Position>,
    ) -> Self {
        Self {
            board,
            robots,
            target,
        }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, ".")?;
        for _ in 0..BOARD_SIZE {
            write!(f, "___.")?;
        }
        writeln!(f)?;

        for r in 0..BOARD_SIZE {
            write!(f, "|")?;
            for c in 0..BOARD_SIZE {
                self.write_cell(Position::new(r, c), f)?;
                if self.board.has_row_wall(r, c + 1) {
                    write!(f, "|")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell(&self, pos: Position, f: &mut Formatter<'_>) -> fmt::Result {
        let fill = if self.board.has_col_wall(pos.row + 1, pos.col) {
            '_'
        } else {
            ' '
        };

        // a robot hides the target
        let marker = self
            .robots
            .and_then(|robots| robots.iter().find(|&(_, robot)| robot == pos))
            .map(|(color, robot)| (color.letter(), robot.above_diagonal))
            .or_else(|| self.target.filter(|&t| t == pos).map(|_| ('*', true)));

        let cell = match (self.board.diagonal_at(pos.row, pos.col), marker) {
            (None, Some((m, _))) => [fill, m, fill],
            (None, None) => [fill, fill, fill],
            (Some(diagonal), marker) => {
                let symbol = diagonal.orientation.symbol();
                match (diagonal.orientation, marker) {
                    (_, None) => [fill, symbol, fill],
                    (Orientation::Forward, Some((m, true))) => [m, symbol, fill],
                    (Orientation::Forward, Some((m, false))) => [fill, symbol, m],
                    (Orientation::Back, Some((m, true))) => [fill, symbol, m],
                    (Orientation::Back, Some((m, false))) => [m, symbol, fill],
                }
            }
        };
        for &ch in &cell {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl<'a> Display for BoardFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for BoardFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
