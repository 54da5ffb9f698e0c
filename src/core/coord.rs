use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Board side length.
pub const BOARD_SIZE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Dark squares only: `(row + col)` odd.
    #[inline]
    pub fn is_playable(self) -> bool {
        self.in_bounds() && (self.row + self.col) % 2 == 1
    }

    /// Unit diagonal direction and distance from `self` to `to`, if the two share a diagonal.
    #[inline]
    pub fn diagonal_to(self, to: Coord) -> Option<(Coord, i32)> {
        let d = to - self;
        if d.row == 0 || d.row.abs() != d.col.abs() {
            return None;
        }
        Some((Coord::new(d.row.signum(), d.col.signum()), d.row.abs()))
    }

    /// Row-major index into a `BOARD_SIZE * BOARD_SIZE` array.
    #[inline]
    pub(crate) fn index(self) -> usize {
        debug_assert!(self.in_bounds());
        (self.row * BOARD_SIZE + self.col) as usize
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

/// The four diagonal directions, in the fixed enumeration order used by move generation.
pub const DIAGONALS: [Coord; 4] = [
    Coord { row: -1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: 1, col: 1 },
];
