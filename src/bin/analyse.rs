use std::path::PathBuf;

use dame::config::EngineConfig;
use dame::core::mv::Move;
use dame::core::piece::Color;
use dame::engine::Engine;
use dame::notation::{parse_position, render_move};
use dame::search::eval::Score;
use dame::search::negamax::SearchOutcome;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct MoveEntry {
    notation: String,
    captures: usize,
    #[serde(rename = "move")]
    mv: Move,
}

#[derive(Debug, Serialize)]
struct Report {
    to_move: Color,
    static_score: Score,
    legal_moves: Vec<MoveEntry>,
    chosen: Option<SearchOutcome>,
    config: EngineConfig,
}

fn main() {
    dame::logging::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 && args.len() != 3 {
        eprintln!("Usage: analyse <position.txt> [engine.json]");
        std::process::exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let config = match args.get(2) {
        Some(cfg) => match EngineConfig::from_json_file(cfg) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        },
        None => EngineConfig::default(),
    };

    let (color, board) = match parse_position(&text) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid position in {}: {e}", path.display());
            std::process::exit(2);
        }
    };

    let engine = Engine::new(config);
    let legal_moves = engine
        .legal_moves(&board, color)
        .into_iter()
        .map(|mv| MoveEntry {
            notation: render_move(&mv),
            captures: mv.jumps(),
            mv,
        })
        .collect::<Vec<_>>();

    // An empty move list is reported as `chosen: null`, not as a failure.
    let chosen = match engine.analyse(&board, color) {
        Ok(outcome) => Some(outcome),
        Err(dame::error::EngineError::NoLegalMoves { .. }) => None,
        Err(e) => {
            eprintln!("Engine error: {e}");
            std::process::exit(1);
        }
    };

    let report = Report {
        to_move: color,
        static_score: engine.evaluate(&board, color),
        legal_moves,
        chosen,
        config: *engine.config(),
    };

    match serde_json::to_string_pretty(&report) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize report: {e}");
            std::process::exit(1);
        }
    }
}
