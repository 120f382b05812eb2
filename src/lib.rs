pub mod board;
pub mod error;
pub mod game;
pub mod piece;
pub mod protocol;
pub mod rules;
pub mod status;
pub mod utils;

pub use board::{Board, Square};
pub use error::MoveError;
pub use game::{is_king, Game, MoveOutcome, TurnState};
pub use piece::{Piece, Side};
pub use status::{count_pieces, PieceCount};

/// Fresh game: standard layout, Light to move.
pub fn new_game() -> (Board, TurnState) {
    (Board::new(), TurnState::new())
}

/// Install the stderr log subscriber used by the binaries. `filter` takes
/// `RUST_LOG` syntax; without it the environment decides, defaulting to `warn`.
pub fn init_logging(filter: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
