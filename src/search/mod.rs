//! Move selection: static evaluation, budgets and the game-tree search.

pub mod eval;
pub mod negamax;
pub mod resources;
