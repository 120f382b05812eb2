//! Error types for the rule engine and its text driver
//!
//! Every rejection is an ordinary value: a refused move leaves the board and
//! the turn state exactly as they were.

use thiserror::Error;

use crate::board::Square;

/// Reasons a move attempt is refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Nothing selected, or the source square is empty
    #[error("no piece selected")]
    NoPieceSelected,

    /// The piece belongs to the side not on move
    #[error("not your turn")]
    OutOfTurn,

    /// Target square already holds a piece
    #[error("destination is occupied")]
    OccupiedDestination,

    /// Neither a valid step nor a valid capture
    #[error("illegal move")]
    IllegalMove,

    /// A capture chain is running and this is not its next capture
    #[error("must continue capturing")]
    MustContinueCapture,
}

impl MoveError {
    /// Stable tag used by the text driver
    pub fn kind(self) -> &'static str {
        match self {
            MoveError::NoPieceSelected => "NoPieceSelected",
            MoveError::OutOfTurn => "OutOfTurn",
            MoveError::OccupiedDestination => "OccupiedDestination",
            MoveError::IllegalMove => "IllegalMove",
            MoveError::MustContinueCapture => "MustContinueCapture",
        }
    }
}

/// Malformed square or move notation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square notation: {0:?} (expected row,col)")]
    Square(String),

    #[error("square {0} is off the board")]
    OffBoard(Square),

    #[error("invalid move notation: {0:?} (expected row,col-row,col)")]
    Move(String),
}

/// Rejected `setoption` commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    Unknown(String),

    #[error("option {name} requires a value")]
    MissingValue { name: String },

    #[error("invalid value for option {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Result type alias for move attempts
pub type MoveResult<T> = Result<T, MoveError>;
