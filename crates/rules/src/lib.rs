pub mod game;
pub mod types;

pub use game::*;
pub use types::*;

pub use shakmaty::{Color, File, Piece, Rank, Role, Square};
