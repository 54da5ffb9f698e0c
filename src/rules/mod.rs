//! Draughts rules: the configurable rule family and legal move generation.

pub mod movegen;
pub mod ruleset;
