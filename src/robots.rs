use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use crate::data::{Color, Position, COLORS};

/// Where each of the four robots is.
///
/// Exactly one entry per color - indexed by `Color`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Robots([Position; 4]);

impl Robots {
    pub fn new(yellow: Position, red: Position, green: Position, blue: Position) -> Self {
        Robots([yellow, red, green, blue])
    }

    /// Copy with one robot moved.
    pub(crate) fn with(mut self, color: Color, pos: Position) -> Self {
        self.0[color as usize] = pos;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, Position)> + '_ {
        COLORS.iter().map(move |&color| (color, self[color]))
    }

    /// The robot standing on `pos`, not counting `except`.
    pub fn robot_at(&self, pos: Position, except: Color) -> Option<Color> {
        self.iter()
            .find(|&(color, robot)| color != except && robot == pos)
            .map(|(color, _)| color)
    }

    /// First pair of robots sharing a square, if any.
    pub fn overlap(&self) -> Option<(Color, Color)> {
        for (i, &a) in COLORS.iter().enumerate() {
            for &b in &COLORS[i + 1..] {
                if self[a] == self[b] {
                    return Some((a, b));
                }
            }
        }
        None
    }

    /// Packs all four positions including side flags in color order.
    /// Unlike `==`, this tells apart robots resting on different sides of a diagonal.
    pub(crate) fn key(&self) -> u64 {
        self.0
            .iter()
            .enumerate()
            .fold(0, |key, (i, pos)| key | pos.pack() << (9 * i))
    }
}

impl Index<Color> for Robots {
    type Output = Position;

    fn index(&self, color: Color) -> &Position {
        &self.0[color as usize]
    }
}

impl Display for Robots {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (color, pos) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}{}", color.letter(), pos)?;
        }
        Ok(())
    }
}

impl Debug for Robots {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (color, pos) in self.iter() {
            write!(f, "{}{:?}", color.letter(), pos)?;
        }
        Ok(())
    }
}
