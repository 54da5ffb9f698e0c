//! Structured errors returned by the board model, move generation and search.

use thiserror::Error;

use crate::core::coord::Coord;
use crate::core::piece::Color;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A coordinate outside the 10×10 grid.
    #[error("coordinate {coord} is outside the board")]
    OutOfBounds { coord: Coord },

    /// A piece was placed on a light (never playable) cell.
    #[error("cell {coord} is not a playable cell")]
    UnplayableCell { coord: Coord },

    /// A move that is inconsistent with the board it was applied to.
    #[error("illegal move: {reason}")]
    IllegalMove { reason: String },

    /// The side to move has no legal move; in draughts this is a loss for that side.
    #[error("no legal moves for {color:?}")]
    NoLegalMoves { color: Color },

    /// A configured search budget was exceeded.
    #[error("limit exceeded at {stage}: {metric} (limit={limit}, observed={observed})")]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
    },
}

impl EngineError {
    pub(crate) fn illegal(reason: impl Into<String>) -> Self {
        EngineError::IllegalMove {
            reason: reason.into(),
        }
    }
}
