//! Board model primitives.
//!
//! - [`coord`]: `(row, col)` coordinates, playable-cell parity and the diagonal directions.
//! - [`piece`]: colors, ranks and the `Piece` value.
//! - [`mv`]: a move as a path of cells plus the cells it captures.
//! - [`board`]: the immutable 10×10 board and move application.

pub mod board;
pub mod coord;
pub mod mv;
pub mod piece;
