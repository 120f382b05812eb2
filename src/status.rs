//! Piece counts derived from the board, recomputed on every call.

use crate::board::Board;
use crate::game::TurnState;
use crate::piece::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCount {
    pub light: usize,
    pub dark: usize,
}

impl PieceCount {
    pub fn for_side(&self, side: Side) -> usize {
        match side {
            Side::Light => self.light,
            Side::Dark => self.dark,
        }
    }

    /// The side still holding pieces once the other has none.
    pub fn winner(&self) -> Option<Side> {
        match (self.light, self.dark) {
            (0, 0) => None,
            (_, 0) => Some(Side::Light),
            (0, _) => Some(Side::Dark),
            _ => None,
        }
    }
}

pub fn count_pieces(board: &Board) -> PieceCount {
    board
        .pieces()
        .fold(PieceCount::default(), |mut count, (_, piece)| {
            match piece.side {
                Side::Light => count.light += 1,
                Side::Dark => count.dark += 1,
            }
            count
        })
}

pub fn status_line(count: &PieceCount, turn: &TurnState) -> String {
    let mut line = format!(
        "Light pieces: {}, Dark pieces: {}, to move: {}",
        count.light, count.dark, turn.active_side
    );
    if let Some(sq) = turn.capture_chain {
        line.push_str(&format!(", capturing with {}", sq));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::piece::Piece;

    #[test]
    fn test_start_counts() {
        let count = count_pieces(&Board::new());
        assert_eq!(count, PieceCount { light: 12, dark: 12 });
        assert_eq!(count.winner(), None);
    }

    #[test]
    fn test_winner() {
        let mut board = Board::empty();
        board.set_piece(Square::new(3, 4), Piece::king(Side::Dark));
        let count = count_pieces(&board);
        assert_eq!(count.for_side(Side::Dark), 1);
        assert_eq!(count.winner(), Some(Side::Dark));
    }

    #[test]
    fn test_status_line() {
        let line = status_line(&PieceCount { light: 12, dark: 11 }, &TurnState::new());
        assert_eq!(line, "Light pieces: 12, Dark pieces: 11, to move: light");
    }
}
