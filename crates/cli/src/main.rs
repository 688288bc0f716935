use ai::{format_evaluation, SearchEngine, DEFAULT_DEPTH};
use anyhow::Result;
use clap::Parser;
use rules::Game;

/// Fallback best-move search: a fixed-depth material search over a single
/// position, for when no hosted move-suggestion service is available.
#[derive(Parser, Debug)]
#[command(about = "depth-bounded best-move search over a FEN position")]
struct Cli {
    /// Position to search, as a FEN string. Defaults to the starting
    /// position.
    #[arg(long)]
    fen: Option<String>,

    /// Search depth in plies.
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut game = match &cli.fen {
        Some(fen) => Game::from_fen(fen)?,
        None => Game::new(),
    };

    let mut engine = SearchEngine::new();
    let result = engine.search(&mut game, cli.depth);

    match result.best_move {
        Some(mv) => {
            println!("best move: {} ({} -> {})", mv.san, mv.from, mv.to);
            println!(
                "evaluation: {} ({} for the side to move)",
                result.evaluation,
                format_evaluation(result.evaluation)
            );
            println!(
                "searched {} nodes at depth {}",
                result.nodes_searched, result.depth
            );
        }
        None => {
            println!("no legal moves: {:?}", game.status());
        }
    }

    Ok(())
}
