//! Iterative-deepening negamax with alpha-beta pruning.
//!
//! Scores are always from the point of view of the side to move at the node. A node without
//! legal moves is a loss for the side to move and scores `-(WIN_SCORE - ply)`, so shorter wins
//! are preferred and the heuristic evaluator is never consulted for terminal nodes.

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::core::board::Board;
use crate::core::mv::Move;
use crate::core::piece::Color;
use crate::error::EngineError;
use crate::rules::movegen::MoveGen;
use crate::search::eval::{Evaluator, Score};
use crate::search::resources::{ResourceTracker, SearchLimits};

/// Magnitude of a won/lost terminal score.
pub const WIN_SCORE: Score = 1_000_000;

/// Plies beyond which a terminal score is no longer told apart from a heuristic one.
pub(crate) const MAX_PLY: Score = 1_000;

const INF: Score = WIN_SCORE + 1;

/// The chosen root move with the data of the iteration that chose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub best: Move,
    pub score: Score,
    /// Last fully completed depth; 0 if no iteration completed.
    pub depth: u32,
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    movegen: MoveGen,
    evaluator: Evaluator,
    limits: SearchLimits,
}

impl Searcher {
    pub fn new(movegen: MoveGen, evaluator: Evaluator, limits: SearchLimits) -> Self {
        Self {
            movegen,
            evaluator,
            limits,
        }
    }

    /// Pick a move for `color` on `board`.
    ///
    /// Ties between root moves go to the one generated first. Returns
    /// [`EngineError::NoLegalMoves`] if `color` cannot move.
    pub fn search(&self, board: &Board, color: Color) -> Result<SearchOutcome, EngineError> {
        let started = Instant::now();
        let root_moves = self.movegen.legal_moves(board, color);
        if root_moves.is_empty() {
            return Err(EngineError::NoLegalMoves { color });
        }
        trace!(?color, moves = root_moves.len(), "root moves generated");

        let children = root_moves
            .iter()
            .map(|m| board.apply(m))
            .collect::<Result<Vec<_>, _>>()?;

        let mut tracker = self.limits.tracker(started);
        let mut best: Option<(usize, Score, u32)> = None;

        for depth in 1..=self.limits.max_depth.max(1) {
            let iteration = if self.limits.parallel {
                self.root_parallel(&children, color, depth, &mut tracker)
            } else {
                self.root_sequential(&children, color, depth, &mut tracker)
            };

            match iteration {
                Ok((idx, score)) => {
                    debug!(
                        depth,
                        score,
                        nodes = tracker.nodes(),
                        best = %root_moves[idx],
                        "depth completed"
                    );
                    best = Some((idx, score, depth));
                    if score.abs() >= WIN_SCORE - MAX_PLY {
                        break;
                    }
                }
                Err(err @ EngineError::LimitExceeded { .. }) => {
                    debug!(depth, %err, "search budget exhausted");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        let outcome = match best {
            Some((idx, score, depth)) => SearchOutcome {
                best: root_moves[idx].clone(),
                score,
                depth,
                nodes: tracker.nodes(),
            },
            None => {
                warn!("no search depth completed; playing the first legal move");
                SearchOutcome {
                    best: root_moves[0].clone(),
                    score: -self.evaluator.score(&children[0], color.other()),
                    depth: 0,
                    nodes: tracker.nodes(),
                }
            }
        };
        Ok(outcome)
    }

    fn root_sequential(
        &self,
        children: &[Board],
        color: Color,
        depth: u32,
        tracker: &mut ResourceTracker,
    ) -> Result<(usize, Score), EngineError> {
        tracker.check_time("root")?;

        let mut alpha = -INF;
        let mut best = (0, -INF);
        for (i, child) in children.iter().enumerate() {
            let score = -self.negamax(child, color.other(), depth - 1, 1, -INF, -alpha, tracker)?;
            if score > best.1 {
                best = (i, score);
            }
            alpha = alpha.max(score);
        }
        Ok(best)
    }

    /// Every root move gets its own tracker and a full window, so the merged result does not
    /// depend on which worker finishes first.
    fn root_parallel(
        &self,
        children: &[Board],
        color: Color,
        depth: u32,
        tracker: &mut ResourceTracker,
    ) -> Result<(usize, Score), EngineError> {
        tracker.check_time("root")?;

        let parent: &ResourceTracker = tracker;
        let results: Vec<Result<(Score, ResourceTracker), EngineError>> = children
            .par_iter()
            .map(|child| {
                let mut sub = parent.child();
                let score =
                    -self.negamax(child, color.other(), depth - 1, 1, -INF, INF, &mut sub)?;
                Ok((score, sub))
            })
            .collect();

        let mut best = (0, -INF);
        for (i, result) in results.into_iter().enumerate() {
            let (score, sub) = result?;
            tracker.absorb("root", &sub)?;
            if score > best.1 {
                best = (i, score);
            }
        }
        Ok(best)
    }

    #[allow(clippy::too_many_arguments)]
    fn negamax(
        &self,
        board: &Board,
        color: Color,
        depth: u32,
        ply: u32,
        mut alpha: Score,
        beta: Score,
        tracker: &mut ResourceTracker,
    ) -> Result<Score, EngineError> {
        tracker.bump_nodes("negamax", 1)?;

        let moves = self.movegen.legal_moves(board, color);
        if moves.is_empty() {
            return Ok(-(WIN_SCORE - ply as Score));
        }
        if depth == 0 {
            return Ok(self.evaluator.score(board, color));
        }

        let mut best = -INF;
        for mv in &moves {
            let child = board.apply(mv)?;
            let score =
                -self.negamax(&child, color.other(), depth - 1, ply + 1, -beta, -alpha, tracker)?;
            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }
}
