use std::fmt;

use shakmaty::san::SanPlus;
use shakmaty::{CastlingSide, Chess, Position, Role, Square};
use thiserror::Error;

/// A single reversible transition between two positions.
///
/// Produced by the move generator and immutable from then on; the search
/// treats it as an opaque token handed back to `apply`. Castling is reported
/// as the king's origin and destination squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
    /// Standard algebraic notation, with check and mate suffixes.
    pub san: String,
    pub(crate) inner: shakmaty::Move,
}

impl Move {
    pub(crate) fn from_inner(pos: &Chess, inner: shakmaty::Move) -> Self {
        let (from, to) = match &inner {
            shakmaty::Move::Normal { from, to, .. } => (*from, *to),
            shakmaty::Move::EnPassant { from, to } => (*from, *to),
            shakmaty::Move::Castle { king, rook } => {
                let side = if rook.file() > king.file() {
                    CastlingSide::KingSide
                } else {
                    CastlingSide::QueenSide
                };
                (*king, side.king_to(pos.turn()))
            }
            // Drops only exist in crazyhouse; standard play never produces them.
            shakmaty::Move::Put { to, .. } => (*to, *to),
        };
        let san = SanPlus::from_move(pos.clone(), &inner).to_string();
        Self {
            from,
            to,
            promotion: inner.promotion(),
            san,
            inner,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.inner.is_capture()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.san)
    }
}

/// Lifecycle of a game, as reported to outer callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Checkmate,
    Stalemate,
    Draw,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] shakmaty::fen::ParseFenError),
    #[error("illegal position: {0}")]
    IllegalPosition(String),
    #[error("no legal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },
}
