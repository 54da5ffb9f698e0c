use rustc_hash::FxHashSet;

use crate::core::board::Board;
use crate::core::coord::{Coord, DIAGONALS};
use crate::core::mv::Move;
use crate::core::piece::{Color, Piece, Rank};
use crate::rules::ruleset::{CaptureRule, KingLanding, KingMovement, RuleSet};

/// Legal move generation under a fixed [`RuleSet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveGen {
    rules: RuleSet,
}

impl MoveGen {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// All legal moves for `color`, deduplicated by path.
    ///
    /// Captures are mandatory: if any piece can capture, only complete capture chains are
    /// returned. Order is fixed: pieces row-major, then directions as in [`DIAGONALS`], then
    /// distance. An empty result means `color` has no legal move.
    pub fn legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        let pieces = board.pieces_of(color);

        let mut captures: Vec<Move> = Vec::new();
        for &from in &pieces {
            self.capture_chains_from(board, from, &mut captures);
        }

        if !captures.is_empty() {
            if self.rules.capture_rule == CaptureRule::LongestChain {
                let longest = captures.iter().map(Move::jumps).max().unwrap_or(0);
                captures.retain(|m| m.jumps() == longest);
            }
            debug_assert!(captures.iter().all(|m| !self.has_continuation(board, m)));
            return dedup_by_path(captures);
        }

        let mut out: Vec<Move> = Vec::new();
        for &from in &pieces {
            self.simple_moves_from(board, from, &mut out);
        }
        dedup_by_path(out)
    }

    /// Whether any piece of `color` can capture.
    pub fn captures_exist(&self, board: &Board, color: Color) -> bool {
        board.pieces_of(color).into_iter().any(|from| {
            let Some(piece) = board.get(from) else {
                return false;
            };
            !self.jumps_from(&board.lifted(from), piece, from, &[]).is_empty()
        })
    }

    /// Whether the piece finishing `mv` could jump again from its last cell.
    ///
    /// `board` is the position *before* `mv`; the pieces `mv` captures are treated as still
    /// standing and not capturable again, as they are inside a chain. A generated capture never
    /// has a continuation.
    pub fn has_continuation(&self, board: &Board, mv: &Move) -> bool {
        if !mv.is_capture() || mv.path.len() < 2 {
            return false;
        }
        let from = mv.from();
        if !from.in_bounds() || !mv.to().in_bounds() {
            return false;
        }
        let Some(piece) = board.get(from) else {
            return false;
        };
        !self
            .jumps_from(&board.lifted(from), piece, mv.to(), &mv.captured)
            .is_empty()
    }

    fn simple_moves_from(&self, board: &Board, from: Coord, out: &mut Vec<Move>) {
        let Some(piece) = board.get(from) else {
            return;
        };
        let slides = self.slides(piece);

        for dir in DIAGONALS {
            if piece.rank == Rank::Man && dir.row != piece.color.forward() {
                continue;
            }
            let mut to = from + dir;
            while to.in_bounds() && board.get(to).is_none() {
                out.push(Move::step(piece.color, from, to));
                if !slides {
                    break;
                }
                to = to + dir;
            }
        }
    }

    fn capture_chains_from(&self, board: &Board, from: Coord, out: &mut Vec<Move>) {
        let Some(piece) = board.get(from) else {
            return;
        };
        // The mover leaves its start cell for the whole chain.
        let lifted = board.lifted(from);
        let mut path = vec![from];
        let mut captured = Vec::new();
        self.extend_chain(&lifted, piece, &mut path, &mut captured, out);
    }

    fn extend_chain(
        &self,
        board: &Board,
        piece: Piece,
        path: &mut Vec<Coord>,
        captured: &mut Vec<Coord>,
        out: &mut Vec<Move>,
    ) {
        let at = path[path.len() - 1];
        let jumps = self.jumps_from(board, piece, at, captured);

        if jumps.is_empty() {
            if !captured.is_empty() {
                out.push(Move::new(piece.color, path.clone(), captured.clone()));
            }
            return;
        }

        for (victim, landing) in jumps {
            path.push(landing);
            captured.push(victim);
            self.extend_chain(board, piece, path, captured, out);
            path.pop();
            captured.pop();
        }
    }

    /// Single jumps `(captured cell, landing cell)` for `piece` standing on `at`.
    ///
    /// `board` must not contain the moving piece. Cells in `captured` still hold their pieces:
    /// they block rays and landings and cannot be captured again.
    fn jumps_from(
        &self,
        board: &Board,
        piece: Piece,
        at: Coord,
        captured: &[Coord],
    ) -> Vec<(Coord, Coord)> {
        let slides = self.slides(piece);
        let mut out = Vec::new();

        for dir in DIAGONALS {
            if piece.rank == Rank::Man
                && !self.rules.men_capture_backward
                && dir.row != piece.color.forward()
            {
                continue;
            }

            let mut cur = at + dir;
            let victim = loop {
                if !cur.in_bounds() {
                    break None;
                }
                match board.get(cur) {
                    Some(p) => break Some((cur, p)),
                    None if slides => cur = cur + dir,
                    None => break None,
                }
            };

            let Some((victim, victim_piece)) = victim else {
                continue;
            };
            if victim_piece.color == piece.color || captured.contains(&victim) {
                continue;
            }

            let mut landing = victim + dir;
            while landing.in_bounds() && board.get(landing).is_none() {
                out.push((victim, landing));
                if !slides || self.rules.king_landing == KingLanding::Adjacent {
                    break;
                }
                landing = landing + dir;
            }
        }

        out
    }

    #[inline]
    fn slides(&self, piece: Piece) -> bool {
        piece.is_king() && self.rules.king_movement == KingMovement::Flying
    }
}

fn dedup_by_path(moves: Vec<Move>) -> Vec<Move> {
    let mut seen: FxHashSet<Vec<Coord>> = FxHashSet::default();
    moves
        .into_iter()
        .filter(|m| seen.insert(m.path.clone()))
        .collect()
}
