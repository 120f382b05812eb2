// Board coordinates: row 0 is the top of the diagram (Dark's back rank),
// row 7 the bottom (Light's back rank). Only squares with odd row+col are played on.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::piece::{Piece, Side};
use crate::utils::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Dark squares, the only ones pieces ever stand on.
    pub fn is_playable(self) -> bool {
        (i16::from(self.row) + i16::from(self.col)) % 2 != 0
    }

    /// Saturates instead of overflowing; a saturated square is always off the board.
    pub fn offset(self, drow: i8, dcol: i8) -> Square {
        Square::new(self.row.saturating_add(drow), self.col.saturating_add(dcol))
    }

    /// `(to.row - self.row, to.col - self.col)`, widened so any two squares fit.
    pub fn delta(self, to: Square) -> (i16, i16) {
        (
            i16::from(to.row) - i16::from(self.row),
            i16::from(to.col) - i16::from(self.col),
        )
    }

    // Callers guarantee the square is on the board
    fn index(self) -> (usize, usize) {
        debug_assert!(self.is_on_board());
        (self.row as usize, self.col as usize)
    }
}

/// Notation used by the text driver: `row,col`, e.g. `5,2`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| ParseError::Square(s.to_string()))?;
        let row: i8 = row
            .trim()
            .parse()
            .map_err(|_| ParseError::Square(s.to_string()))?;
        let col: i8 = col
            .trim()
            .parse()
            .map_err(|_| ParseError::Square(s.to_string()))?;
        let sq = Square::new(row, col);
        if !sq.is_on_board() {
            return Err(ParseError::OffBoard(sq));
        }
        Ok(sq)
    }
}

/// Parse a `from-to` pair such as `5,2-4,3`.
pub fn parse_move(s: &str) -> Result<(Square, Square), ParseError> {
    let (from, to) = s
        .split_once('-')
        .ok_or_else(|| ParseError::Move(s.to_string()))?;
    Ok((from.parse()?, to.parse()?))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting layout: Dark men on rows 0-2, Light men on rows 5-7.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let sq = Square::new(row, col);
                if !sq.is_playable() {
                    continue;
                }
                if row <= 2 {
                    board.set_piece(sq, Piece::man(Side::Dark));
                } else if row >= 5 {
                    board.set_piece(sq, Piece::man(Side::Light));
                }
            }
        }
        board
    }

    // Empty board, for hand-built positions
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        let (r, c) = sq.index();
        self.squares[r][c]
    }

    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_on(sq).is_some()
    }

    /// Places a piece, replacing whatever stood there. Off-board squares are ignored.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        if !sq.is_on_board() {
            return;
        }
        let (r, c) = sq.index();
        self.squares[r][c] = Some(piece);
    }

    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        let (r, c) = sq.index();
        self.squares[r][c].take()
    }

    /// Moves whatever stands on `from` to `to`. Returns the moved piece.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.remove_piece(from)?;
        self.set_piece(to, piece);
        Some(piece)
    }

    /// All occupied squares with their pieces, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, p)| {
                (*p).map(|piece| (Square::new(r as i8, c as i8), piece))
            })
        })
    }
}

// Simple diagram, row 0 first
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match self.piece_on(Square::new(row, col)) {
                    Some(p) => write!(f, "{} ", p.symbol())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
