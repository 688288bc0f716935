use rules::{Game, Square};

use crate::types::piece_value;

/// Evaluate a position by material, from White's perspective.
///
/// Sums a fixed value per piece (pawn=1, knight=3, bishop=3, rook=5,
/// queen=9, king=0), added for White and subtracted for Black, and scales
/// the total to centipawns. Pure and deterministic; no positional terms.
/// Checkmate is not special-cased, so a mated side is still scored on the
/// material it has left.
pub fn evaluate_position(game: &Game) -> i32 {
    let mut score = 0;
    for index in 0..64 {
        if let Some(piece) = game.piece_at(Square::new(index)) {
            let value = piece_value(piece.role);
            if piece.color.is_white() {
                score += value;
            } else {
                score -= value;
            }
        }
    }
    score * 100 // centipawns
}

/// Format a centipawn score for display: pawns to one decimal place, or a
/// mate marker for scores beyond ten pawns.
pub fn format_evaluation(score: i32) -> String {
    if score.abs() > 1000 {
        return if score > 0 { "+M" } else { "-M" }.to_string();
    }
    format!("{:.1}", f64::from(score) / 100.0)
}

/// Map a centipawn score onto a 5..95 percentage for an evaluation bar,
/// using a sigmoid normalized around a five-pawn advantage.
pub fn evaluation_percentage(score: i32) -> f64 {
    let normalized = f64::from(score) / 500.0;
    let percentage = 100.0 / (1.0 + (-normalized).exp());
    percentage.clamp(5.0, 95.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Swap the color of every piece (mirroring ranks so pawns stay legal)
    /// and hand the move to the other side. Only valid for FENs without
    /// castling rights or an en passant square.
    fn flip_colors(fen: &str) -> String {
        let (board, rest) = fen.split_once(' ').expect("board and fields");
        let board: Vec<String> = board
            .split('/')
            .rev()
            .map(|rank| {
                rank.chars()
                    .map(|c| {
                        if c.is_ascii_uppercase() {
                            c.to_ascii_lowercase()
                        } else if c.is_ascii_lowercase() {
                            c.to_ascii_uppercase()
                        } else {
                            c
                        }
                    })
                    .collect()
            })
            .collect();
        let rest = if let Some(tail) = rest.strip_prefix('w') {
            format!("b{tail}")
        } else {
            format!("w{}", rest.strip_prefix('b').expect("side to move"))
        };
        format!("{} {}", board.join("/"), rest)
    }

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(evaluate_position(&Game::new()), 0);
    }

    #[test]
    fn material_imbalances_are_counted_in_centipawns() {
        // Lone white queen.
        let game = Game::from_fen("k7/8/8/8/8/8/8/1QK5 w - - 0 1").unwrap();
        assert_eq!(evaluate_position(&game), 900);

        // Queen and two black pawns.
        let game = Game::from_fen("k7/2p5/3p4/8/8/8/3Q4/K7 w - - 0 1").unwrap();
        assert_eq!(evaluate_position(&game), 700);

        // Bishop + knight + two pawns vs rook + two pawns.
        let game = Game::from_fen("1k6/1pp3r1/8/8/3B4/2P5/1P6/1K1N4 w - - 0 1").unwrap();
        assert_eq!(evaluate_position(&game), 100);
    }

    #[test]
    fn evaluation_is_antisymmetric_under_color_inversion() {
        for fen in [
            "k7/2p5/3p4/8/8/8/3Q4/K7 w - - 0 1",
            "1k6/1pp3r1/8/8/3B4/2P5/1P6/1K1N4 w - - 0 1",
            "k7/8/8/8/8/8/8/1QK5 w - - 0 1",
        ] {
            let game = Game::from_fen(fen).unwrap();
            let flipped = Game::from_fen(&flip_colors(fen)).unwrap();
            assert_eq!(
                evaluate_position(&game),
                -evaluate_position(&flipped),
                "color inversion of {fen}"
            );
        }
    }

    #[test]
    fn evaluation_is_pure() {
        let game = Game::from_fen("1k6/1pp3r1/8/8/3B4/2P5/1P6/1K1N4 w - - 0 1").unwrap();
        assert_eq!(evaluate_position(&game), evaluate_position(&game));
    }

    #[test]
    fn evaluation_does_not_depend_on_the_side_to_move() {
        let white = Game::from_fen("k7/2p5/3p4/8/8/8/3Q4/K7 w - - 0 1").unwrap();
        let black = Game::from_fen("k7/2p5/3p4/8/8/8/3Q4/K7 b - - 0 1").unwrap();
        assert_eq!(evaluate_position(&white), evaluate_position(&black));
    }

    #[test]
    fn scores_format_as_pawns() {
        assert_eq!(format_evaluation(0), "0.0");
        assert_eq!(format_evaluation(150), "1.5");
        assert_eq!(format_evaluation(-50), "-0.5");
        assert_eq!(format_evaluation(1100), "+M");
        assert_eq!(format_evaluation(-1100), "-M");
    }

    #[test]
    fn percentage_is_centered_and_clamped() {
        assert_eq!(evaluation_percentage(0), 50.0);
        assert!(evaluation_percentage(300) > 50.0);
        assert!(evaluation_percentage(-300) < 50.0);
        assert_eq!(evaluation_percentage(10_000), 95.0);
        assert_eq!(evaluation_percentage(-10_000), 5.0);
    }
}
