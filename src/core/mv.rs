use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::piece::Color;

/// A move for one side: the start cell followed by every landing cell.
///
/// `captured` holds one cell per jump, in jump order; it is empty for a simple step.
/// A single jump therefore has a two-cell path and one captured cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub color: Color,
    pub path: Vec<Coord>,
    pub captured: Vec<Coord>,
}

impl Move {
    pub fn step(color: Color, from: Coord, to: Coord) -> Self {
        Self {
            color,
            path: vec![from, to],
            captured: Vec::new(),
        }
    }

    pub fn new(color: Color, path: Vec<Coord>, captured: Vec<Coord>) -> Self {
        Self {
            color,
            path,
            captured,
        }
    }

    #[inline]
    pub fn from(&self) -> Coord {
        self.path[0]
    }

    #[inline]
    pub fn to(&self) -> Coord {
        self.path[self.path.len() - 1]
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Number of jumps (zero for a simple step).
    #[inline]
    pub fn jumps(&self) -> usize {
        self.captured.len()
    }

    /// Consecutive `(from, to)` pairs of the path.
    pub fn segments(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { "x" } else { "-" };
        for (i, c) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
