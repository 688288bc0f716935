use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Piece, Position, Role, Square};

use crate::types::{Error, GameStatus, Move};

/// A mutable chess position with undo history.
///
/// The search core explores the game tree by mutating a single `Game` in
/// place: `apply` before recursing, `undo` after returning. Undo restores
/// the exact prior state, so any balanced apply/undo sequence leaves the
/// position untouched. A `Game` must not be shared between concurrent
/// searches.
#[derive(Debug, Clone)]
pub struct Game {
    pos: Chess,
    history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    prev: Chess,
    mv: Move,
}

impl Game {
    /// Standard starting position.
    pub fn new() -> Self {
        Self {
            pos: Chess::default(),
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, Error> {
        let fen: Fen = fen.parse()?;
        let pos = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| Error::IllegalPosition(e.to_string()))?;
        Ok(Self {
            pos,
            history: Vec::new(),
        })
    }

    pub fn fen(&self) -> String {
        Fen::from_position(self.pos.clone(), EnPassantMode::Legal).to_string()
    }

    /// All legal moves in the current position. Generation order is
    /// deterministic for a given position.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.pos
            .legal_moves()
            .into_iter()
            .map(|m| Move::from_inner(&self.pos, m))
            .collect()
    }

    /// Legal moves from a single origin square.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|m| m.from == from)
            .collect()
    }

    /// Apply `mv` in place. `mv` must have been produced by `legal_moves`
    /// on the current position.
    pub fn apply(&mut self, mv: &Move) {
        self.history.push(HistoryEntry {
            prev: self.pos.clone(),
            mv: mv.clone(),
        });
        self.pos.play_unchecked(&mv.inner);
    }

    /// Revert the most recent `apply`, restoring the exact prior state.
    /// Returns the reverted move, or `None` when nothing has been played.
    pub fn undo(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        self.pos = entry.prev;
        Some(entry.mv)
    }

    /// Validated move entry for outer callers: resolve a from/to/promotion
    /// request against the legal moves and apply the match.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<Move, Error> {
        let mv = self
            .legal_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to && m.promotion == promotion)
            .ok_or(Error::IllegalMove { from, to })?;
        self.apply(&mv);
        Ok(mv)
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Move> {
        self.history.iter().map(|e| &e.mv)
    }

    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pos.board().piece_at(square)
    }

    pub fn in_check(&self) -> bool {
        self.pos.is_check()
    }

    /// Checkmate, stalemate, or a drawn position (insufficient material or
    /// the fifty-move rule). Threefold repetition is not tracked.
    pub fn is_over(&self) -> bool {
        self.pos.is_game_over() || self.pos.halfmoves() >= 100
    }

    pub fn status(&self) -> GameStatus {
        if self.pos.is_checkmate() {
            GameStatus::Checkmate
        } else if self.pos.is_stalemate() {
            GameStatus::Stalemate
        } else if self.pos.is_insufficient_material() || self.pos.halfmoves() >= 100 {
            GameStatus::Draw
        } else {
            GameStatus::Active
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
