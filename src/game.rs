//! Move execution and turn control.
//!
//! A turn moves through three states: awaiting a move, inside a capture
//! chain (the same piece must keep capturing), and complete (the other side
//! is on move). [`Game`] owns the board and the turn state; callers only get
//! shared references to them.

use tracing::{debug, info};

use crate::board::{Board, Square};
use crate::error::{MoveError, MoveResult};
use crate::piece::Side;
use crate::rules::{self, MoveKind, Rules};
use crate::status::{count_pieces, PieceCount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnState {
    pub active_side: Side,
    /// Square of the piece that must keep capturing, while a chain is running.
    pub capture_chain: Option<Square>,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnState {
    /// Light opens the game.
    pub fn new() -> Self {
        Self {
            active_side: Side::Light,
            capture_chain: None,
        }
    }

    pub fn capture_chain_active(&self) -> bool {
        self.capture_chain.is_some()
    }

    fn end_turn(&mut self) {
        self.capture_chain = None;
        self.active_side = self.active_side.opposite();
    }
}

/// What an accepted move did, for whoever redraws the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moved_from: Square,
    pub moved_to: Square,
    pub captured: Option<Square>,
    pub promoted: bool,
    pub chain_continues: bool,
    pub next_active_side: Side,
}

/// Turn controller: the only owner of the board and the turn state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: TurnState,
    rules: Rules,
    selected: Option<Square>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard layout, Light to move.
    pub fn new() -> Self {
        Self::with_position(Board::new(), TurnState::new())
    }

    /// Start from an arbitrary position. A running capture chain also selects
    /// its piece.
    pub fn with_position(board: Board, turn: TurnState) -> Self {
        Self {
            board,
            turn,
            rules: Rules::default(),
            selected: turn.capture_chain,
        }
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn count_pieces(&self) -> PieceCount {
        count_pieces(&self.board)
    }

    /// Pick up the piece on `sq`. Ownership is checked when the move is made,
    /// so an opponent piece can be selected but not moved.
    pub fn select(&mut self, sq: Square) -> MoveResult<()> {
        if let Some(chained) = self.turn.capture_chain {
            if sq != chained {
                return Err(MoveError::MustContinueCapture);
            }
        }
        if !self.board.is_occupied(sq) {
            return Err(MoveError::NoPieceSelected);
        }
        self.selected = Some(sq);
        Ok(())
    }

    /// Drop the selection. Not allowed mid-chain: the chained piece stays selected.
    pub fn deselect(&mut self) -> MoveResult<()> {
        if self.turn.capture_chain_active() {
            return Err(MoveError::MustContinueCapture);
        }
        self.selected = None;
        Ok(())
    }

    /// Move the selected piece to `to`.
    pub fn move_selected(&mut self, to: Square) -> MoveResult<MoveOutcome> {
        let from = self.selected.ok_or(MoveError::NoPieceSelected)?;
        self.attempt_move(from, to)
    }

    /// Validate and play `from` → `to`.
    ///
    /// Either the whole move is applied (board, turn state and selection) or
    /// nothing changes and the reason comes back as an error.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveResult<MoveOutcome> {
        let kind = match rules::classify(&self.board, &self.turn, &self.rules, from, to) {
            Ok(kind) => kind,
            Err(e) => {
                debug!(%from, %to, reason = e.kind(), "move rejected");
                return Err(e);
            }
        };

        // classify guarantees a piece on `from`
        let Some(piece) = self.board.relocate(from, to) else {
            return Err(MoveError::NoPieceSelected);
        };

        let captured = match kind {
            MoveKind::Simple => {
                debug!(side = %piece.side, %from, %to, "single move");
                None
            }
            MoveKind::Capture { captured } => {
                debug!(side = %piece.side, %from, %to, %captured, "capture");
                self.board.remove_piece(captured);
                Some(captured)
            }
        };

        let promoted = !piece.king && to.row == piece.side.far_row();
        let piece = if promoted {
            info!(side = %piece.side, square = %to, "piece crowned");
            let king = piece.crowned();
            self.board.set_piece(to, king);
            king
        } else {
            piece
        };

        let chain_continues =
            captured.is_some() && rules::can_capture_from(&self.board, piece, to);
        if chain_continues {
            debug!(square = %to, "capture chain continues");
            self.turn.capture_chain = Some(to);
            self.selected = Some(to);
        } else {
            self.turn.end_turn();
            self.selected = None;
            info!(side = %self.turn.active_side, "turn passes");
        }

        Ok(MoveOutcome {
            moved_from: from,
            moved_to: to,
            captured,
            promoted,
            chain_continues,
            next_active_side: self.turn.active_side,
        })
    }
}

/// True when a king stands on `sq`.
pub fn is_king(board: &Board, sq: Square) -> bool {
    board.piece_on(sq).is_some_and(|p| p.king)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;

    #[test]
    fn test_opening_move_flips_turn() {
        let mut game = Game::new();
        let outcome = game
            .attempt_move(Square::new(5, 2), Square::new(4, 3))
            .unwrap();
        assert_eq!(outcome.captured, None);
        assert!(!outcome.chain_continues);
        assert_eq!(outcome.next_active_side, Side::Dark);
        assert_eq!(game.turn().active_side, Side::Dark);
        assert!(game.board().is_occupied(Square::new(4, 3)));
        assert!(!game.board().is_occupied(Square::new(5, 2)));
    }

    #[test]
    fn test_selection_flow() {
        let mut game = Game::new();
        assert_eq!(
            game.move_selected(Square::new(4, 3)),
            Err(MoveError::NoPieceSelected)
        );
        assert_eq!(game.select(Square::new(4, 3)), Err(MoveError::NoPieceSelected));
        game.select(Square::new(5, 2)).unwrap();
        game.move_selected(Square::new(4, 1)).unwrap();
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn test_deselect_refused_mid_chain() {
        let mut board = Board::empty();
        board.set_piece(Square::new(3, 2), Piece::man(Side::Light));
        let turn = TurnState {
            active_side: Side::Light,
            capture_chain: Some(Square::new(3, 2)),
        };
        let mut game = Game::with_position(board, turn);
        assert_eq!(game.selected(), Some(Square::new(3, 2)));
        assert_eq!(game.deselect(), Err(MoveError::MustContinueCapture));
    }

    #[test]
    fn test_select_pinned_to_chained_piece() {
        let mut board = Board::empty();
        board.set_piece(Square::new(3, 2), Piece::man(Side::Light));
        board.set_piece(Square::new(6, 1), Piece::man(Side::Light));
        board.set_piece(Square::new(2, 3), Piece::man(Side::Dark));
        let turn = TurnState {
            active_side: Side::Light,
            capture_chain: Some(Square::new(3, 2)),
        };
        let mut game = Game::with_position(board, turn);

        assert_eq!(
            game.select(Square::new(6, 1)),
            Err(MoveError::MustContinueCapture)
        );
        assert_eq!(game.selected(), Some(Square::new(3, 2)));
        assert_eq!(game.select(Square::new(3, 2)), Ok(()));

        let outcome = game.move_selected(Square::new(1, 4)).unwrap();
        assert_eq!(outcome.captured, Some(Square::new(2, 3)));
        assert!(!outcome.chain_continues);
    }

    #[test]
    fn test_is_king() {
        let mut board = Board::empty();
        board.set_piece(Square::new(0, 1), Piece::king(Side::Light));
        board.set_piece(Square::new(0, 3), Piece::man(Side::Dark));
        assert!(is_king(&board, Square::new(0, 1)));
        assert!(!is_king(&board, Square::new(0, 3)));
        assert!(!is_king(&board, Square::new(4, 4)));
    }
}
