use std::io::{Read, Write};

use dame::config::EngineConfig;
use dame::engine::Engine;
use dame::error::EngineError;
use dame::notation::{parse_position, render_move};

const USAGE: &str = "Usage: dame [--config <engine.json>] [--depth <plies>] [--parallel] < position.txt";

fn parse_args(args: &[String]) -> Result<EngineConfig, String> {
    let mut config = EngineConfig::default();
    let mut depth: Option<u32> = None;
    let mut parallel = false;

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                let path = it.next().ok_or("--config needs a path")?;
                config = EngineConfig::from_json_file(path).map_err(|e| e.to_string())?;
            }
            "--depth" => {
                let v = it.next().ok_or("--depth needs a value")?;
                depth = Some(v.parse().map_err(|e| format!("bad --depth {v:?}: {e}"))?);
            }
            "--parallel" => parallel = true,
            other => return Err(format!("unknown argument {other:?}")),
        }
    }

    if let Some(d) = depth {
        if d == 0 {
            return Err("--depth must be >= 1".to_string());
        }
        config.limits.max_depth = d;
    }
    if parallel {
        config.limits.parallel = true;
    }
    Ok(config)
}

fn main() {
    dame::logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read stdin: {e}");
        std::process::exit(1);
    }

    let (color, board) = match parse_position(&input) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid position: {e}");
            std::process::exit(2);
        }
    };

    let engine = Engine::new(config);
    match engine.choose_move(&board, color) {
        Ok(mv) => {
            let mut out = std::io::stdout().lock();
            if let Err(e) = writeln!(out, "{}", render_move(&mv)) {
                eprintln!("Failed to write move: {e}");
                std::process::exit(1);
            }
        }
        Err(EngineError::NoLegalMoves { .. }) => {
            eprintln!("No moves were returned.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Engine error: {e}");
            std::process::exit(1);
        }
    }
}
