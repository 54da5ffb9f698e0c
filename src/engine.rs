//! The engine facade: one board snapshot in, one move out.

use crate::config::EngineConfig;
use crate::core::board::Board;
use crate::core::mv::Move;
use crate::core::piece::Color;
use crate::error::EngineError;
use crate::rules::movegen::MoveGen;
use crate::search::eval::{Evaluator, Score};
use crate::search::negamax::{SearchOutcome, Searcher};

#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
    movegen: MoveGen,
    evaluator: Evaluator,
    searcher: Searcher,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let movegen = MoveGen::new(config.rules);
        let evaluator = Evaluator::new(movegen, config.weights);
        let searcher = Searcher::new(movegen, evaluator, config.limits);
        Self {
            config,
            movegen,
            evaluator,
            searcher,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        self.movegen.legal_moves(board, color)
    }

    pub fn evaluate(&self, board: &Board, perspective: Color) -> Score {
        self.evaluator.score(board, perspective)
    }

    pub fn analyse(&self, board: &Board, color: Color) -> Result<SearchOutcome, EngineError> {
        self.searcher.search(board, color)
    }

    pub fn choose_move(&self, board: &Board, color: Color) -> Result<Move, EngineError> {
        self.analyse(board, color).map(|outcome| outcome.best)
    }
}
