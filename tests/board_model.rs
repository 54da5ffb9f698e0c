mod common;

use common::{board, c, BK, BM, WK, WM};
use dame::core::board::Board;
use dame::core::mv::Move;
use dame::core::piece::{Color, Piece, Rank};
use dame::error::EngineError;

#[test]
fn at_rejects_coordinates_outside_the_grid() {
    let b = Board::initial();
    assert_eq!(b.at(c(10, 1)), Err(EngineError::OutOfBounds { coord: c(10, 1) }));
    assert_eq!(b.at(c(0, -1)), Err(EngineError::OutOfBounds { coord: c(0, -1) }));
    assert_eq!(b.at(c(6, 1)), Ok(Some(BM)));
    assert_eq!(b.at(c(5, 0)), Ok(None));
}

#[test]
fn pieces_cannot_be_placed_on_light_cells() {
    let err = Board::empty().with_piece(c(4, 4), BM).unwrap_err();
    assert_eq!(err, EngineError::UnplayableCell { coord: c(4, 4) });
}

#[test]
fn initial_position_has_twenty_men_per_side_on_playable_cells() {
    let b = Board::initial();
    assert_eq!(b.count(Color::Black, Rank::Man), 20);
    assert_eq!(b.count(Color::White, Rank::Man), 20);
    assert_eq!(b.piece_count(), 40);
    assert!(b.iter().all(|(coord, _)| coord.is_playable()));
    assert!(b.pieces_of(Color::White).iter().all(|c| c.row <= 3));
    assert!(b.pieces_of(Color::Black).iter().all(|c| c.row >= 6));
}

#[test]
fn pieces_of_is_row_major() {
    let b = board(&[((5, 2), BM), ((1, 4), BM), ((1, 0), BM), ((3, 4), WM)]);
    assert_eq!(b.pieces_of(Color::Black), vec![c(1, 0), c(1, 4), c(5, 2)]);
    assert_eq!(b.pieces_of(Color::White), vec![c(3, 4)]);
}

#[test]
fn apply_returns_a_new_board_and_leaves_the_input_alone() {
    let b = board(&[((6, 1), BM)]);
    let next = b.apply(&Move::step(Color::Black, c(6, 1), c(5, 2))).unwrap();
    assert_eq!(b.at(c(6, 1)), Ok(Some(BM)));
    assert_eq!(next.at(c(6, 1)), Ok(None));
    assert_eq!(next.at(c(5, 2)), Ok(Some(BM)));
}

#[test]
fn black_man_reaching_row_zero_becomes_a_king() {
    let b = board(&[((1, 2), BM)]);
    let next = b.apply(&Move::step(Color::Black, c(1, 2), c(0, 1))).unwrap();
    assert_eq!(next.at(c(0, 1)), Ok(Some(BK)));
}

#[test]
fn white_man_promotes_on_row_nine_only() {
    let b = board(&[((8, 3), WM), ((7, 6), WM)]);
    let promoted = b.apply(&Move::step(Color::White, c(8, 3), c(9, 4))).unwrap();
    assert_eq!(promoted.at(c(9, 4)), Ok(Some(WK)));
    let not_yet = b.apply(&Move::step(Color::White, c(7, 6), c(8, 7))).unwrap();
    assert_eq!(not_yet.at(c(8, 7)), Ok(Some(WM)));
}

#[test]
fn capture_chain_removes_every_jumped_piece() {
    let b = board(&[((6, 1), BM), ((5, 2), WM), ((3, 4), WM), ((0, 9), WM)]);
    let mv = Move::new(
        Color::Black,
        vec![c(6, 1), c(4, 3), c(2, 5)],
        vec![c(5, 2), c(3, 4)],
    );
    let next = b.apply(&mv).unwrap();
    assert_eq!(next.piece_count(), 2);
    assert_eq!(next.at(c(2, 5)), Ok(Some(BM)));
    assert_eq!(next.at(c(5, 2)), Ok(None));
    assert_eq!(next.at(c(3, 4)), Ok(None));
}

#[test]
fn flying_king_capture_may_land_far_beyond_the_victim() {
    let b = board(&[((0, 1), WK), ((3, 4), BM)]);
    let mv = Move::new(Color::White, vec![c(0, 1), c(6, 7)], vec![c(3, 4)]);
    let next = b.apply(&mv).unwrap();
    assert_eq!(next.at(c(6, 7)), Ok(Some(WK)));
    assert_eq!(next.piece_count(), 1);
}

fn illegal(b: &Board, mv: &Move) -> bool {
    matches!(b.apply(mv), Err(EngineError::IllegalMove { .. }))
}

#[test]
fn apply_rejects_moves_inconsistent_with_the_board() {
    let b = board(&[((6, 1), BM), ((5, 2), WM), ((3, 4), WM), ((7, 2), BM)]);

    // empty start
    assert!(illegal(&b, &Move::step(Color::Black, c(6, 3), c(5, 4))));
    // wrong color
    assert!(illegal(&b, &Move::step(Color::White, c(6, 1), c(5, 0))));
    // occupied landing
    assert!(illegal(&b, &Move::step(Color::Black, c(6, 1), c(5, 2))));
    // man stepping backward
    assert!(illegal(&b, &Move::step(Color::Black, c(6, 1), c(7, 0))));
    // man sliding two cells
    assert!(illegal(&b, &Move::step(Color::Black, c(7, 2), c(5, 0))));
    // not diagonal
    assert!(illegal(&b, &Move::step(Color::Black, c(6, 1), c(4, 1))));
    // landing on a light cell
    assert!(illegal(&b, &Move::step(Color::Black, c(6, 1), c(5, 1))));
    // jumping over nothing
    assert!(illegal(
        &b,
        &Move::new(Color::Black, vec![c(7, 2), c(5, 4)], vec![c(6, 3)])
    ));
    // jumping an own piece
    assert!(illegal(
        &b,
        &Move::new(Color::Black, vec![c(7, 2), c(5, 0)], vec![c(6, 1)])
    ));
    // captured list disagreeing with the path
    assert!(illegal(
        &b,
        &Move::new(Color::Black, vec![c(6, 1), c(4, 3)], vec![c(3, 4)])
    ));
    // more jumps than captured cells
    assert!(illegal(
        &b,
        &Move::new(Color::Black, vec![c(6, 1), c(4, 3), c(2, 5)], vec![c(5, 2)])
    ));
}

#[test]
fn apply_rejects_jumping_the_same_piece_twice() {
    // The king jumps (4,3) going up and then tries to jump it again coming back.
    let b = board(&[((6, 1), BK), ((4, 3), WM)]);
    let mv = Move::new(
        Color::Black,
        vec![c(6, 1), c(3, 4), c(7, 0)],
        vec![c(4, 3), c(4, 3)],
    );
    assert!(illegal(&b, &mv));
}

#[test]
fn apply_rejects_landing_on_a_piece_captured_earlier_in_the_chain() {
    let b = board(&[((7, 0), BK), ((5, 2), WM), ((5, 6), WM), ((7, 6), WM), ((6, 3), WM)]);
    // (5,2) is still on the board until the chain ends, so it cannot be a landing cell.
    let mv = Move::new(
        Color::Black,
        vec![c(7, 0), c(3, 4), c(6, 7), c(8, 5), c(5, 2)],
        vec![c(5, 2), c(5, 6), c(7, 6), c(6, 3)],
    );
    assert!(illegal(&b, &mv));
}

#[test]
fn kings_are_not_promoted_again() {
    let b = board(&[((1, 2), BK)]);
    let next = b.apply(&Move::step(Color::Black, c(1, 2), c(0, 1))).unwrap();
    assert_eq!(next.at(c(0, 1)), Ok(Some(Piece::king(Color::Black))));
}
