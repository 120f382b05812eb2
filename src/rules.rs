//! Move validation.
//!
//! Everything here is a pure function of a board snapshot and the turn state;
//! nothing mutates. [`classify`] is the single entry point the executor uses,
//! the smaller predicates are exposed for callers that want to query shapes
//! (highlighting, tests, tooling).

use crate::board::{Board, Square};
use crate::error::{MoveError, MoveResult};
use crate::game::TurnState;
use crate::piece::{Piece, Side};
use crate::utils::{diagonal_direction, ray, DIAGONALS};

/// Rule switches that vary between house rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules {
    /// Let men open a capture sequence backwards. Off by default: men only
    /// move backwards once a capture chain is running.
    pub backward_captures: bool,
}

/// Shape of a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Simple,
    Capture { captured: Square },
}

pub fn is_on_board(sq: Square) -> bool {
    sq.is_on_board()
}

pub fn is_occupied(board: &Board, sq: Square) -> bool {
    board.is_occupied(sq)
}

/// True when `sq` holds a piece of the side opposing `side`.
pub fn is_opponent(board: &Board, sq: Square, side: Side) -> bool {
    matches!(board.piece_on(sq), Some(p) if p.side != side)
}

pub fn is_diagonal_step(from: Square, to: Square, n: i8) -> bool {
    let (dr, dc) = from.delta(to);
    n > 0 && dr.abs() == i16::from(n) && dc.abs() == i16::from(n)
}

/// One diagonal step onto an empty square. Direction is not checked here.
pub fn is_simple_move(board: &Board, from: Square, to: Square) -> bool {
    to.is_on_board() && is_diagonal_step(from, to, 1) && !board.is_occupied(to)
}

/// Diagonal slide over empty squares only, `to` included.
pub fn is_clear_path(board: &Board, from: Square, to: Square) -> bool {
    if !to.is_on_board() {
        return false;
    }
    let Some(dir) = diagonal_direction(from, to) else {
        return false;
    };
    for sq in ray(from, dir) {
        if board.is_occupied(sq) {
            return false;
        }
        if sq == to {
            return true;
        }
    }
    false
}

/// Men always step toward the opponent's back rank, except mid-chain.
pub fn is_forward_for_non_king(side: Side, from: Square, to: Square, chain_active: bool) -> bool {
    chain_active || from.delta(to).0.signum() == i16::from(side.forward())
}

/// Fly-over scan along one diagonal: the first occupied square must be an
/// opponent and the square right behind it must be empty and on the board.
/// Returns `(captured, landing)`.
fn king_capture_in_direction(
    board: &Board,
    side: Side,
    from: Square,
    dir: (i8, i8),
) -> Option<(Square, Square)> {
    let blocker = ray(from, dir).find(|sq| board.is_occupied(*sq))?;
    if !is_opponent(board, blocker, side) {
        return None;
    }
    let landing = blocker.offset(dir.0, dir.1);
    if landing.is_on_board() && !board.is_occupied(landing) {
        Some((blocker, landing))
    } else {
        None
    }
}

/// Square of the piece `piece` would capture moving `from` → `to`, if the
/// move has a capture shape. Direction rules for men are applied by [`classify`].
pub fn capture_target(board: &Board, piece: Piece, from: Square, to: Square) -> Option<Square> {
    if !to.is_on_board() || board.is_occupied(to) {
        return None;
    }
    if piece.king {
        let dir = diagonal_direction(from, to)?;
        let (captured, landing) = king_capture_in_direction(board, piece.side, from, dir)?;
        return (landing == to).then_some(captured);
    }
    if !is_diagonal_step(from, to, 2) {
        return None;
    }
    let (dr, dc) = from.delta(to);
    let mid = from.offset((dr / 2) as i8, (dc / 2) as i8);
    is_opponent(board, mid, piece.side).then_some(mid)
}

pub fn is_capture_step(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    capture_target(board, piece, from, to).is_some()
}

/// Whether `piece` standing on `from` has any capture available.
pub fn can_capture_from(board: &Board, piece: Piece, from: Square) -> bool {
    DIAGONALS.iter().any(|&dir| {
        if piece.king {
            return king_capture_in_direction(board, piece.side, from, dir).is_some();
        }
        let over = from.offset(dir.0, dir.1);
        let landing = over.offset(dir.0, dir.1);
        is_opponent(board, over, piece.side) && landing.is_on_board() && !board.is_occupied(landing)
    })
}

/// Validate `from` → `to` for the piece standing on `from`.
///
/// Checks run in a fixed order so that callers get the most specific reason:
/// empty source, turn ownership, destination, capture-chain ownership, then
/// the move shape itself.
pub fn classify(
    board: &Board,
    turn: &TurnState,
    rules: &Rules,
    from: Square,
    to: Square,
) -> MoveResult<MoveKind> {
    let piece = board.piece_on(from).ok_or(MoveError::NoPieceSelected)?;
    if piece.side != turn.active_side {
        return Err(MoveError::OutOfTurn);
    }
    if !to.is_on_board() {
        return Err(MoveError::IllegalMove);
    }
    if board.is_occupied(to) {
        return Err(MoveError::OccupiedDestination);
    }

    let chain_active = turn.capture_chain_active();
    if let Some(chained) = turn.capture_chain {
        if chained != from {
            return Err(MoveError::MustContinueCapture);
        }
    }

    if let Some(captured) = capture_target(board, piece, from, to) {
        let direction_ok = piece.king
            || rules.backward_captures
            || is_forward_for_non_king(piece.side, from, to, chain_active);
        return if direction_ok {
            Ok(MoveKind::Capture { captured })
        } else {
            Err(MoveError::IllegalMove)
        };
    }

    if chain_active {
        return Err(MoveError::MustContinueCapture);
    }

    let simple = if piece.king {
        is_clear_path(board, from, to)
    } else {
        is_simple_move(board, from, to) && is_forward_for_non_king(piece.side, from, to, false)
    };
    if simple {
        Ok(MoveKind::Simple)
    } else {
        Err(MoveError::IllegalMove)
    }
}

pub fn is_legal_move_for(
    board: &Board,
    turn: &TurnState,
    rules: &Rules,
    from: Square,
    to: Square,
) -> bool {
    classify(board, turn, rules, from, to).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn test_king_path_blocked_by_friend() {
        let mut board = Board::empty();
        board.set_piece(sq(4, 4), Piece::king(Side::Light));
        board.set_piece(sq(2, 2), Piece::man(Side::Light));
        assert!(!is_clear_path(&board, sq(4, 4), sq(1, 1)));
        assert!(is_clear_path(&board, sq(4, 4), sq(3, 3)));
        assert!(capture_target(&board, Piece::king(Side::Light), sq(4, 4), sq(1, 1)).is_none());
    }

    #[test]
    fn test_man_capture_needs_opponent_on_midpoint() {
        let mut board = Board::empty();
        let man = Piece::man(Side::Dark);
        board.set_piece(sq(3, 4), man);
        assert!(!is_capture_step(&board, man, sq(3, 4), sq(5, 6)));
        board.set_piece(sq(4, 5), Piece::man(Side::Dark));
        assert!(!is_capture_step(&board, man, sq(3, 4), sq(5, 6)));
        board.set_piece(sq(4, 5), Piece::man(Side::Light));
        assert_eq!(capture_target(&board, man, sq(3, 4), sq(5, 6)), Some(sq(4, 5)));
    }
}
