#![allow(dead_code)]

use dame::core::board::Board;
use dame::core::coord::Coord;
use dame::core::piece::{Color, Piece};
use dame::rules::movegen::MoveGen;

pub const BM: Piece = Piece::man(Color::Black);
pub const WM: Piece = Piece::man(Color::White);
pub const BK: Piece = Piece::king(Color::Black);
pub const WK: Piece = Piece::king(Color::White);

pub fn c(row: i32, col: i32) -> Coord {
    Coord::new(row, col)
}

pub fn board(pieces: &[((i32, i32), Piece)]) -> Board {
    pieces.iter().fold(Board::empty(), |b, &((r, col), p)| {
        b.with_piece(c(r, col), p).unwrap()
    })
}

pub fn paths(moves: &[dame::core::mv::Move]) -> Vec<Vec<Coord>> {
    moves.iter().map(|m| m.path.clone()).collect()
}

/// A deterministic set of positions: some hand-built tactical ones plus every position reached
/// while playing out a fixed move-choice pattern from the initial position.
pub fn corpus() -> Vec<(Board, Color)> {
    let mut out = vec![
        (board(&[((4, 3), BM), ((3, 2), WM)]), Color::Black),
        (
            board(&[((6, 5), BM), ((5, 4), WM), ((5, 6), WM), ((3, 2), WM)]),
            Color::Black,
        ),
        (
            board(&[((3, 2), WM), ((2, 3), BM), ((2, 5), BM), ((4, 5), BM), ((4, 3), BM)]),
            Color::White,
        ),
        (
            board(&[((7, 2), WK), ((5, 4), BM), ((8, 1), BM), ((0, 9), BK)]),
            Color::White,
        ),
        (
            board(&[((0, 1), WK), ((3, 4), BM), ((6, 5), BM), ((6, 1), BK), ((2, 7), WM)]),
            Color::Black,
        ),
    ];

    let gen = MoveGen::default();
    let mut b = Board::initial();
    let mut color = Color::White;
    for step in 0..60usize {
        out.push((b, color));
        let moves = gen.legal_moves(&b, color);
        if moves.is_empty() {
            break;
        }
        let pick = (step * 7 + 3) % moves.len();
        b = b.apply(&moves[pick]).unwrap();
        color = color.other();
    }
    out
}
