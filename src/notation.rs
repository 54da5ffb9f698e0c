//! Line-oriented text boundary.
//!
//! Input: a side-to-move line (`b…`/`w…`) followed by ten board rows, row 0 first. Each row is a
//! comma-separated list of cell tokens: empty for an empty cell, otherwise a rank letter
//! (`m`an/`k`ing) followed by a color letter (`b`lack/`w`hite), case-insensitive.
//!
//! Output: one `{row}{col},{row}{col};` line per step or jump of the chosen move.

use thiserror::Error;

use crate::core::board::Board;
use crate::core::coord::{Coord, BOARD_SIZE};
use crate::core::mv::Move;
use crate::core::piece::{Color, Piece, Rank};
use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("missing side-to-move line")]
    MissingColor,
    #[error("unknown side-to-move token {token:?}")]
    BadColor { token: String },
    #[error("expected {expected} board rows, found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("row {row} has {count} cells, at most {max} allowed")]
    TooManyCells { row: usize, count: usize, max: usize },
    #[error("bad cell token {token:?} at row {row}, column {col}")]
    BadToken {
        row: usize,
        col: usize,
        token: String,
    },
    #[error("cannot place piece at row {row}, column {col}: {source}")]
    Placement {
        row: usize,
        col: usize,
        #[source]
        source: EngineError,
    },
}

/// Parse a side-to-move token; only its first non-blank character matters.
pub fn parse_color(token: &str) -> Result<Color, NotationError> {
    let trimmed = token.trim();
    match trimmed.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('b') => Ok(Color::Black),
        Some('w') => Ok(Color::White),
        Some(_) => Err(NotationError::BadColor {
            token: trimmed.to_string(),
        }),
        None => Err(NotationError::MissingColor),
    }
}

/// Parse one cell token at `(row, col)`; `Ok(None)` for an empty cell.
fn parse_cell(row: usize, col: usize, token: &str) -> Result<Option<Piece>, NotationError> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(None);
    }
    let mut chars = token.chars().map(|c| c.to_ascii_lowercase());
    let rank = match chars.next() {
        Some('m') => Some(Rank::Man),
        Some('k') => Some(Rank::King),
        _ => None,
    };
    let color = match chars.next() {
        Some('b') => Some(Color::Black),
        Some('w') => Some(Color::White),
        _ => None,
    };
    match (rank, color, chars.next()) {
        (Some(rank), Some(color), None) => Ok(Some(Piece::new(color, rank))),
        _ => Err(NotationError::BadToken {
            row,
            col,
            token: token.to_string(),
        }),
    }
}

/// Parse exactly ten board rows.
pub fn parse_board<'a>(rows: impl IntoIterator<Item = &'a str>) -> Result<Board, NotationError> {
    let size = BOARD_SIZE as usize;
    let mut board = Board::empty();
    let mut found = 0usize;

    for (row, line) in rows.into_iter().take(size).enumerate() {
        found += 1;
        let tokens: Vec<&str> = line.trim().split(',').collect();
        // Tolerate trailing empty tokens (e.g. a trailing comma).
        let used = tokens
            .iter()
            .rposition(|t| !t.trim().is_empty())
            .map_or(0, |i| i + 1);
        if used > size {
            return Err(NotationError::TooManyCells {
                row,
                count: used,
                max: size,
            });
        }

        for (col, token) in tokens.iter().take(used).enumerate() {
            let Some(piece) = parse_cell(row, col, token)? else {
                continue;
            };
            board = board
                .with_piece(Coord::new(row as i32, col as i32), piece)
                .map_err(|source| NotationError::Placement { row, col, source })?;
        }
    }

    if found < size {
        return Err(NotationError::MissingRows {
            expected: size,
            found,
        });
    }
    Ok(board)
}

/// Parse the full input: side-to-move line, then ten rows. Lines after the board are ignored.
pub fn parse_position(input: &str) -> Result<(Color, Board), NotationError> {
    let mut lines = input.lines();
    let color = parse_color(lines.next().ok_or(NotationError::MissingColor)?)?;
    let board = parse_board(lines)?;
    Ok((color, board))
}

/// One `{from},{to};` line per segment of the move.
pub fn render_move(mv: &Move) -> String {
    mv.segments()
        .map(|(a, b)| format!("{}{},{}{};", a.row, a.col, b.row, b.col))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_cell(piece: Option<Piece>) -> &'static str {
    match piece {
        None => "",
        Some(Piece { rank: Rank::Man, color: Color::Black }) => "mb",
        Some(Piece { rank: Rank::Man, color: Color::White }) => "mw",
        Some(Piece { rank: Rank::King, color: Color::Black }) => "kb",
        Some(Piece { rank: Rank::King, color: Color::White }) => "kw",
    }
}

/// Render `color` and `board` in the input format accepted by [`parse_position`].
pub fn render_position(color: Color, board: &Board) -> String {
    let mut out = String::new();
    out.push_str(match color {
        Color::Black => "b",
        Color::White => "w",
    });
    out.push('\n');
    for row in 0..BOARD_SIZE {
        let cells: Vec<&str> = (0..BOARD_SIZE)
            .map(|col| render_cell(board.get(Coord::new(row, col))))
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}
