use log::{debug, trace};
use rules::{Color, Game, Move};

use crate::evaluation::evaluate_position;
use crate::types::{SearchResult, INFINITY_SCORE};

/// Depth-bounded negamax search with alpha-beta pruning.
///
/// Explores the legal-move tree by mutating the caller's `Game` in place:
/// each candidate is applied, searched one ply deeper, and undone before the
/// next candidate is tried. The game is left exactly as it was passed in.
pub struct SearchEngine {
    pub nodes_searched: u64,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self { nodes_searched: 0 }
    }

    /// Search `game` to `depth` plies and return the move judged best for
    /// the side to move, assuming optimal replies. Returns no move exactly
    /// when the position has no legal moves. A depth of 0 degenerates to
    /// greedy one-ply lookahead on the static evaluation.
    pub fn search(&mut self, game: &mut Game, depth: u32) -> SearchResult {
        self.nodes_searched = 0;
        let (best_move, evaluation) = self.negamax_root(game, depth as i32);
        debug!(
            "depth {depth}: best {} ({evaluation}cp, {} nodes)",
            best_move.as_ref().map_or("-", |m| m.san.as_str()),
            self.nodes_searched
        );
        SearchResult {
            best_move,
            evaluation,
            depth,
            nodes_searched: self.nodes_searched,
        }
    }

    fn negamax_root(&mut self, game: &mut Game, depth: i32) -> (Option<Move>, i32) {
        let moves = game.legal_moves();
        if moves.is_empty() {
            return (None, relative_evaluation(game));
        }
        debug!("searching {} root moves at depth {depth}", moves.len());

        let mut best_move = None;
        let mut best_score = -INFINITY_SCORE;
        let mut alpha = -INFINITY_SCORE;
        let beta = INFINITY_SCORE;

        for mv in &moves {
            game.apply(mv);
            let score = -self.negamax(game, depth - 1, -beta, -alpha);
            game.undo();
            trace!("{} scored {score}", mv.san);

            // Ties keep the first move seen; generation order decides.
            if score > best_score {
                best_score = score;
                best_move = Some(mv.clone());
            }
            if score > alpha {
                alpha = score;
            }
        }

        (best_move, best_score)
    }

    fn negamax(&mut self, game: &mut Game, depth: i32, mut alpha: i32, beta: i32) -> i32 {
        self.nodes_searched += 1;

        if depth <= 0 || game.is_over() {
            return relative_evaluation(game);
        }

        let moves = game.legal_moves();
        let mut best = -INFINITY_SCORE;

        for mv in &moves {
            game.apply(mv);
            let score = -self.negamax(game, depth - 1, -beta, -alpha);
            game.undo();

            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break; // beta cutoff
            }
        }

        best
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Static evaluation from the side to move's perspective. The evaluator is
/// White-centric; this is the single point where the sign convention is
/// reconciled with the negamax recursion.
fn relative_evaluation(game: &Game) -> i32 {
    match game.turn() {
        Color::White => evaluate_position(game),
        Color::Black => -evaluate_position(game),
    }
}
