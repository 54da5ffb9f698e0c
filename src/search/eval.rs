//! Static position evaluation.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::piece::{Color, Rank};
use crate::rules::movegen::MoveGen;
use crate::search::negamax::{MAX_PLY, WIN_SCORE};

/// Centi-man score; positive is good for the perspective color.
pub type Score = i32;

/// Largest magnitude a heuristic score may take; anything beyond is reserved for won/lost nodes.
pub const MAX_EVAL: Score = WIN_SCORE - MAX_PLY - 1;

/// Most pieces a board can hold (one per playable cell).
const MAX_PIECES: i64 = 50;

/// Move count assumed per side when bounding the mobility term.
const MOBILITY_MOVES: i64 = 256;

/// Weights of the evaluation terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub man: Score,
    pub king: Score,
    /// Per legal move more than the opponent.
    pub mobility: Score,
    /// Per row a man has advanced from its own back rank.
    pub advancement: Score,
    /// Per man still guarding its own back rank.
    pub back_rank: Score,
}

impl EvalWeights {
    /// Upper bound on `|score|` before clamping, over boards with up to fifty pieces and 256 legal
    /// moves per side.
    pub fn worst_case(&self) -> i64 {
        let abs = |w: Score| i64::from(w).abs();
        let per_man = abs(self.man) + 9 * abs(self.advancement) + abs(self.back_rank);
        let per_piece = per_man.max(abs(self.king));
        MAX_PIECES * per_piece + 2 * MOBILITY_MOVES * abs(self.mobility)
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            man: 100,
            king: 300,
            mobility: 5,
            advancement: 2,
            back_rank: 10,
        }
    }
}

/// Side-symmetric evaluator: `score(b, Black) == -score(b, White)` for every board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    movegen: MoveGen,
    weights: EvalWeights,
}

impl Evaluator {
    pub fn new(movegen: MoveGen, weights: EvalWeights) -> Self {
        Self { movegen, weights }
    }

    /// Always within `±MAX_EVAL`, whatever the weights.
    pub fn score(&self, board: &Board, perspective: Color) -> Score {
        let black = self.side_terms(board, Color::Black);
        let white = self.side_terms(board, Color::White);
        let limit = i64::from(MAX_EVAL);
        let black_view = (black - white).clamp(-limit, limit) as Score;
        match perspective {
            Color::Black => black_view,
            Color::White => -black_view,
        }
    }

    fn side_terms(&self, board: &Board, color: Color) -> i64 {
        let w = &self.weights;
        let home = color.home_row();

        let mut total: i64 = 0;
        for (c, p) in board.iter().filter(|(_, p)| p.color == color) {
            match p.rank {
                Rank::King => total += i64::from(w.king),
                Rank::Man => {
                    total += i64::from(w.man);
                    total += i64::from(w.advancement) * i64::from((c.row - home).abs());
                    if c.row == home {
                        total += i64::from(w.back_rank);
                    }
                }
            }
        }

        if w.mobility != 0 {
            total += i64::from(w.mobility) * self.movegen.legal_moves(board, color).len() as i64;
        }
        total
    }
}
