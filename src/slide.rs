use log::{debug, trace};

use crate::board::Board;
use crate::data::{Color, Dir, Position, COLORS, DIRECTIONS};
use crate::moves::{Move, Moves};
use crate::robots::Robots;

/// Where a sliding robot ended up and how it got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub end: Position,
    /// Direction of the last leg - differs from the initial direction after a deflection.
    pub heading: Dir,
    pub deflections: usize,
}

enum Leg {
    Stopped(Position),
    /// Pinned on a diagonal, continues in the new direction.
    Deflected(Position, Dir),
}

impl Board {
    /// Final position of the `color` robot after sliding in `dir`.
    ///
    /// Returns a position equal to the current one if the robot can't move.
    pub fn slide(&self, robots: &Robots, color: Color, dir: Dir) -> Position {
        self.trace(robots, color, dir).end
    }

    /// Follows the `color` robot through every deflection until it stops.
    ///
    /// # Panics
    ///
    /// If the robot never stops, which can only happen on a board where `find_loop` finds a loop.
    pub fn trace(&self, robots: &Robots, color: Color, dir: Dir) -> Slide {
        match self.follow(Some(robots), color, robots[color], dir) {
            Ok(slide) => slide,
            Err(last) => {
                debug!(
                    "{} robot from {:?} heading {} circles through {:?} heading {}",
                    color, robots[color], dir, last.end, last.heading
                );
                panic!(
                    "The {} robot is bouncing between diagonals forever, last at {:?} heading {}",
                    color, last.end, last.heading
                );
            }
        }
    }

    /// A robot and the square and heading it can start from to slide around forever.
    ///
    /// Other robots can only cut a slide short so an empty board is enough to find loops.
    /// Any loop passes through a diagonal right after a deflection
    /// so only those starting points are tried.
    pub fn find_loop(&self) -> Option<(Color, Position, Dir)> {
        for diagonal in self.diagonals() {
            for &color in COLORS.iter().filter(|&&color| color != diagonal.color) {
                for &dir in &DIRECTIONS {
                    let above = diagonal.orientation.is_above(dir);
                    let start = Position::with_side(diagonal.row, diagonal.col, above);
                    if self.follow(None, color, start, dir).is_err() {
                        return Some((color, start, dir));
                    }
                }
            }
        }
        None
    }

    /// `Err` holds where the robot was pinned when it ran over the deflection limit.
    fn follow(
        &self,
        robots: Option<&Robots>,
        color: Color,
        mut start: Position,
        dir: Dir,
    ) -> Result<Slide, Slide> {
        // A robot can reach each diagonal from at most 4 directions,
        // any more means it's going in circles.
        let max_deflections = 4 * self.diagonal_count();

        let mut heading = dir;
        let mut deflections = 0;
        loop {
            match self.slide_leg(robots, color, start, heading) {
                Leg::Stopped(end) => {
                    let end = if self.has_diagonal(end.row, end.col) {
                        end
                    } else {
                        // the flag is idle without a diagonal, keep it canonical
                        end.set_side(true)
                    };
                    return Ok(Slide {
                        end,
                        heading,
                        deflections,
                    });
                }
                Leg::Deflected(pinned, new_heading) => {
                    deflections += 1;
                    if deflections > max_deflections {
                        return Err(Slide {
                            end: pinned,
                            heading: new_heading,
                            deflections,
                        });
                    }
                    trace!(
                        "{} deflected at {:?} from {} to {}",
                        color,
                        pinned,
                        heading,
                        new_heading
                    );
                    start = pinned;
                    heading = new_heading;
                }
            }
        }
    }

    /// Slides in a straight line until something stops or deflects the robot.
    ///
    /// Other robots are read from `robots`, the moving robot's entry there is ignored.
    /// Without `robots` the board is treated as empty.
    fn slide_leg(&self, robots: Option<&Robots>, color: Color, start: Position, dir: Dir) -> Leg {
        let mut cur = start;
        loop {
            if let Some(diagonal) = self.diagonal_at(cur.row, cur.col) {
                let orientation = diagonal.orientation;
                let exit_side = orientation.is_above(dir);
                if diagonal.color == color {
                    cur = cur.set_side(exit_side);
                } else if cur == start && cur.above_diagonal == exit_side {
                    // starts on the far side already, nothing to bounce off
                } else {
                    let new_dir = orientation.deflect(dir);
                    return Leg::Deflected(cur.set_side(orientation.is_above(new_dir)), new_dir);
                }
            }

            if self.has_wall(cur, dir) {
                return Leg::Stopped(cur);
            }
            match cur.neighbor(dir) {
                Some(next) if robots.map_or(true, |r| r.robot_at(next, color).is_none()) => {
                    cur = next
                }
                _ => return Leg::Stopped(cur),
            }
        }
    }

    /// Wall on the edge of `pos` facing `dir`.
    fn has_wall(&self, pos: Position, dir: Dir) -> bool {
        match dir {
            Dir::North => self.has_col_wall(pos.row, pos.col),
            Dir::South => self.has_col_wall(pos.row + 1, pos.col),
            Dir::West => self.has_row_wall(pos.row, pos.col),
            Dir::East => self.has_row_wall(pos.row, pos.col + 1),
        }
    }

    /// Configuration after the move or `None` if the robot doesn't move.
    pub fn make_move(&self, robots: &Robots, mov: Move) -> Option<Robots> {
        let old = robots[mov.color];
        let new = self.slide(robots, mov.color, mov.dir);
        if new == old {
            None
        } else {
            Some(robots.with(mov.color, new))
        }
    }

    /// Applies all moves in order. No-op moves leave the robots where they are.
    pub fn replay(&self, robots: &Robots, moves: &Moves) -> Robots {
        moves.iter().fold(*robots, |robots, &mov| {
            robots.with(mov.color, self.slide(&robots, mov.color, mov.dir))
        })
    }
}
