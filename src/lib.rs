//! A move engine for 10×10 international draughts.
//!
//! Given a board and the side to move, [`engine::Engine`] enumerates the legal moves (mandatory
//! captures, multi-jump chains, flying kings) and picks one with an iterative-deepening
//! alpha-beta search.

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod logging;
pub mod notation;
pub mod rules;
pub mod search;
