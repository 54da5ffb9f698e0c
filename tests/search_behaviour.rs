mod common;

use common::{board, c, corpus, BM, WM};
use dame::core::board::Board;
use dame::core::piece::Color;
use dame::error::EngineError;
use dame::rules::movegen::MoveGen;
use dame::search::eval::Evaluator;
use dame::search::negamax::{Searcher, WIN_SCORE};
use dame::search::resources::SearchLimits;

fn searcher(limits: SearchLimits) -> Searcher {
    Searcher::new(MoveGen::default(), Evaluator::default(), limits)
}

#[test]
fn no_pieces_means_no_legal_moves() {
    let b = board(&[((3, 2), WM)]);
    let err = searcher(SearchLimits::default()).search(&b, Color::Black).unwrap_err();
    assert_eq!(err, EngineError::NoLegalMoves { color: Color::Black });
}

#[test]
fn blocked_side_has_no_legal_moves() {
    let b = board(&[((1, 0), BM), ((0, 1), WM)]);
    let err = searcher(SearchLimits::default()).search(&b, Color::Black).unwrap_err();
    assert_eq!(err, EngineError::NoLegalMoves { color: Color::Black });
}

#[test]
fn capture_that_ends_the_game_is_scored_as_a_win() {
    let b = board(&[((4, 3), BM), ((3, 2), WM)]);
    let out = searcher(SearchLimits::default()).search(&b, Color::Black).unwrap();
    assert_eq!(out.best.path, vec![c(4, 3), c(2, 1)]);
    assert_eq!(out.score, WIN_SCORE - 1);
    assert_eq!(out.depth, 1);
}

#[test]
fn search_prefers_the_chain_that_wins_more_material() {
    let b = board(&[((6, 5), BM), ((5, 4), WM), ((5, 6), WM), ((3, 2), WM)]);
    let out = searcher(SearchLimits::default().with_max_depth(4))
        .search(&b, Color::Black)
        .unwrap();
    assert_eq!(out.best.path, vec![c(6, 5), c(4, 3), c(2, 1)]);
}

#[test]
fn search_is_deterministic() {
    let s = searcher(SearchLimits::default().with_max_depth(3));
    for (b, color) in corpus().into_iter().step_by(7) {
        let first = s.search(&b, color);
        let second = s.search(&b, color);
        assert_eq!(first, second);
    }
}

#[test]
fn chosen_move_is_always_legal() {
    let s = searcher(SearchLimits::default().with_max_depth(2));
    let gen = MoveGen::default();
    for (b, color) in corpus() {
        let legal = gen.legal_moves(&b, color);
        match s.search(&b, color) {
            Ok(out) => assert!(legal.contains(&out.best)),
            Err(e) => {
                assert!(legal.is_empty());
                assert_eq!(e, EngineError::NoLegalMoves { color });
            }
        }
    }
}

#[test]
fn parallel_root_agrees_with_sequential_root() {
    let seq = searcher(SearchLimits::default().with_max_depth(3));
    let par = searcher(SearchLimits::default().with_max_depth(3).with_parallel(true));
    for (b, color) in corpus().into_iter().step_by(5) {
        let a = seq.search(&b, color).map(|o| (o.best, o.score, o.depth));
        let p = par.search(&b, color).map(|o| (o.best, o.score, o.depth));
        assert_eq!(a, p);
    }
}

#[test]
fn exhausted_budget_falls_back_to_the_last_completed_depth() {
    let b = Board::initial();
    // Depth 1 visits the nine children; depth 2 needs far more than twenty nodes.
    let out = searcher(SearchLimits::default().with_max_nodes(20))
        .search(&b, Color::Black)
        .unwrap();
    assert_eq!(out.depth, 1);

    let unbounded = searcher(SearchLimits::default().with_max_depth(1))
        .search(&b, Color::Black)
        .unwrap();
    assert_eq!(out.best, unbounded.best);
}

#[test]
fn parallel_root_spends_one_budget_across_depths() {
    let b = Board::initial();
    // Each depth-2 subtree fits in the eleven nodes left after depth 1, but all nine together do not.
    let limits = SearchLimits::default().with_max_nodes(20);
    let par = searcher(limits.with_parallel(true))
        .search(&b, Color::Black)
        .unwrap();
    let seq = searcher(limits).search(&b, Color::Black).unwrap();
    assert_eq!(par.depth, 1);
    assert_eq!(par.best, seq.best);
    assert_eq!(par.score, seq.score);
}

#[test]
fn budget_too_small_for_one_ply_plays_the_first_legal_move() {
    let b = Board::initial();
    let out = searcher(SearchLimits::default().with_max_nodes(1))
        .search(&b, Color::Black)
        .unwrap();
    assert_eq!(out.depth, 0);
    assert_eq!(out.best, MoveGen::default().legal_moves(&b, Color::Black)[0]);
}

#[test]
fn spent_time_budget_still_returns_a_move() {
    let b = Board::initial();
    let out = searcher(
        SearchLimits::default()
            .with_max_depth(30)
            .with_time_budget(Some(std::time::Duration::from_millis(0))),
    )
    .search(&b, Color::White)
    .unwrap();
    assert_eq!(out.depth, 0);
    assert!(MoveGen::default()
        .legal_moves(&b, Color::White)
        .contains(&out.best));
}
