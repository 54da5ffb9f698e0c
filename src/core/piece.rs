use serde::{Deserialize, Serialize};

use crate::core::coord::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Row delta of a man's forward step.
    ///
    /// Black plays up the board (toward row 0), White plays down (toward row 9).
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Color::Black => -1,
            Color::White => 1,
        }
    }

    /// The row on which this color's men are promoted.
    #[inline]
    pub fn promotion_row(self) -> i32 {
        match self {
            Color::Black => 0,
            Color::White => BOARD_SIZE - 1,
        }
    }

    /// This color's own back rank (the opponent's promotion row).
    #[inline]
    pub fn home_row(self) -> i32 {
        self.other().promotion_row()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    #[inline]
    pub const fn man(color: Color) -> Self {
        Self::new(color, Rank::Man)
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        Self::new(color, Rank::King)
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    #[inline]
    pub fn promoted(self) -> Self {
        Self::king(self.color)
    }
}
