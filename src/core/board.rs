use crate::core::coord::{Coord, BOARD_SIZE};
use crate::core::mv::Move;
use crate::core::piece::{Color, Piece, Rank};
use crate::error::EngineError;

const CELLS: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// A 10×10 draughts board.
///
/// Only playable cells (see [`Coord::is_playable`]) are ever occupied. The board is a plain `Copy`
/// value: applying a move returns a new board and leaves `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [None; CELLS] }
    }

    /// The standard starting position: four rows of men per side.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            let color = match row {
                0..=3 => Color::White,
                6..=9 => Color::Black,
                _ => continue,
            };
            for col in 0..BOARD_SIZE {
                let c = Coord::new(row, col);
                if c.is_playable() {
                    board.cells[c.index()] = Some(Piece::man(color));
                }
            }
        }
        board
    }

    /// Returns a copy of this board with `piece` placed on `coord`.
    pub fn with_piece(mut self, coord: Coord, piece: Piece) -> Result<Self, EngineError> {
        check_playable(coord)?;
        self.cells[coord.index()] = Some(piece);
        Ok(self)
    }

    pub fn at(&self, coord: Coord) -> Result<Option<Piece>, EngineError> {
        check_in_bounds(coord)?;
        Ok(self.cells[coord.index()])
    }

    /// Unchecked lookup for callers that already walk inside the board.
    #[inline]
    pub(crate) fn get(&self, coord: Coord) -> Option<Piece> {
        self.cells[coord.index()]
    }

    /// Copy of this board with `coord` emptied; `coord` must be on the board.
    #[inline]
    pub(crate) fn lifted(&self, coord: Coord) -> Board {
        let mut next = *self;
        next.cells[coord.index()] = None;
        next
    }

    /// All occupied cells with their pieces, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, p)| {
            p.map(|p| {
                let i = i as i32;
                (Coord::new(i / BOARD_SIZE, i % BOARD_SIZE), p)
            })
        })
    }

    /// Cells occupied by `color`, in row-major order.
    pub fn pieces_of(&self, color: Color) -> Vec<Coord> {
        self.iter()
            .filter(|(_, p)| p.color == color)
            .map(|(c, _)| c)
            .collect()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|p| p.is_some()).count()
    }

    pub fn count(&self, color: Color, rank: Rank) -> usize {
        self.iter()
            .filter(|(_, p)| p.color == color && p.rank == rank)
            .count()
    }

    /// Apply `mv` and return the resulting board.
    ///
    /// The moved piece ends on the last cell of the path, every captured piece is removed, and a
    /// man finishing on its promotion row becomes a king. Captured pieces stay on the board while
    /// the path is checked, so no cell may be used as a landing cell before its piece is removed.
    pub fn apply(&self, mv: &Move) -> Result<Board, EngineError> {
        if mv.path.len() < 2 {
            return Err(EngineError::illegal("a move needs a start and a landing cell"));
        }

        let from = mv.from();
        let piece = self
            .at(from)?
            .ok_or_else(|| EngineError::illegal(format!("start cell {from} is empty")))?;
        if piece.color != mv.color {
            return Err(EngineError::illegal(format!(
                "start cell {from} holds a {:?} piece, not {:?}",
                piece.color, mv.color
            )));
        }

        let mut next = *self;
        next.cells[from.index()] = None;

        if mv.is_capture() {
            next.check_capture_path(mv, piece)?;
            for &c in &mv.captured {
                next.cells[c.index()] = None;
            }
        } else {
            if mv.path.len() != 2 {
                return Err(EngineError::illegal(
                    "a non-capturing move has exactly one step",
                ));
            }
            next.check_step(from, mv.to(), piece)?;
        }

        let to = mv.to();
        let landed = if piece.rank == Rank::Man && to.row == piece.color.promotion_row() {
            piece.promoted()
        } else {
            piece
        };
        next.cells[to.index()] = Some(landed);
        Ok(next)
    }

    fn check_landing(&self, to: Coord) -> Result<(), EngineError> {
        check_playable(to).map_err(|e| match e {
            EngineError::UnplayableCell { coord } => {
                EngineError::illegal(format!("landing cell {coord} is not playable"))
            }
            other => other,
        })?;
        if self.get(to).is_some() {
            return Err(EngineError::illegal(format!("landing cell {to} is occupied")));
        }
        Ok(())
    }

    fn check_step(&self, from: Coord, to: Coord, piece: Piece) -> Result<(), EngineError> {
        self.check_landing(to)?;
        let (dir, dist) = from
            .diagonal_to(to)
            .ok_or_else(|| EngineError::illegal(format!("{from} -> {to} is not diagonal")))?;

        if piece.rank == Rank::Man && (dist != 1 || dir.row != piece.color.forward()) {
            return Err(EngineError::illegal(format!(
                "a man cannot step from {from} to {to}"
            )));
        }
        if (1..dist).any(|k| self.get(from + dir * k).is_some()) {
            return Err(EngineError::illegal(format!(
                "the diagonal from {from} to {to} is blocked"
            )));
        }
        Ok(())
    }

    fn check_capture_path(&self, mv: &Move, piece: Piece) -> Result<(), EngineError> {
        if mv.captured.len() + 1 != mv.path.len() {
            return Err(EngineError::illegal(format!(
                "{} jumps but {} captured cells",
                mv.path.len() - 1,
                mv.captured.len()
            )));
        }

        for (i, (a, b)) in mv.segments().enumerate() {
            self.check_landing(b)?;
            let (dir, dist) = a
                .diagonal_to(b)
                .ok_or_else(|| EngineError::illegal(format!("{a} -> {b} is not diagonal")))?;
            if piece.rank == Rank::Man && dist != 2 {
                return Err(EngineError::illegal(format!(
                    "a man jumps exactly two cells, not {a} -> {b}"
                )));
            }

            let mut jumped: Option<Coord> = None;
            for k in 1..dist {
                let c = a + dir * k;
                let Some(other) = self.get(c) else {
                    continue;
                };
                if other.color == piece.color {
                    return Err(EngineError::illegal(format!("own piece on {c} blocks the jump")));
                }
                if jumped.replace(c).is_some() {
                    return Err(EngineError::illegal(format!(
                        "more than one piece between {a} and {b}"
                    )));
                }
            }

            let Some(jumped) = jumped else {
                return Err(EngineError::illegal(format!("nothing to capture between {a} and {b}")));
            };
            if mv.captured[i] != jumped {
                return Err(EngineError::illegal(format!(
                    "jump {a} -> {b} captures {jumped}, recorded {}",
                    mv.captured[i]
                )));
            }
            if mv.captured[..i].contains(&jumped) {
                return Err(EngineError::illegal(format!("{jumped} is jumped twice")));
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

fn check_in_bounds(coord: Coord) -> Result<(), EngineError> {
    if coord.in_bounds() {
        Ok(())
    } else {
        Err(EngineError::OutOfBounds { coord })
    }
}

fn check_playable(coord: Coord) -> Result<(), EngineError> {
    check_in_bounds(coord)?;
    if coord.is_playable() {
        Ok(())
    } else {
        Err(EngineError::UnplayableCell { coord })
    }
}
