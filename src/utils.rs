// Direction deltas and ray walking helpers for move validation

use crate::board::Square;

pub const BOARD_SIZE: i8 = 8;

// Direction deltas as (row, col); row 0 is Dark's back rank
pub const NORTH_WEST: (i8, i8) = (-1, -1);
pub const NORTH_EAST: (i8, i8) = (-1, 1);
pub const SOUTH_WEST: (i8, i8) = (1, -1);
pub const SOUTH_EAST: (i8, i8) = (1, 1);

pub const DIAGONALS: [(i8, i8); 4] = [NORTH_WEST, NORTH_EAST, SOUTH_WEST, SOUTH_EAST];

/// Squares along a diagonal, starting one step away from the origin and
/// stopping at the board edge.
pub struct Ray {
    next: Square,
    dir: (i8, i8),
}

impl Iterator for Ray {
    type Item = Square;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_on_board() {
            return None;
        }
        let sq = self.next;
        self.next = sq.offset(self.dir.0, self.dir.1);
        Some(sq)
    }
}

#[inline]
pub fn ray(from: Square, dir: (i8, i8)) -> Ray {
    Ray {
        next: from.offset(dir.0, dir.1),
        dir,
    }
}

/// Unit direction from `from` toward `to`, if the two lie on a common diagonal.
pub fn diagonal_direction(from: Square, to: Square) -> Option<(i8, i8)> {
    let (dr, dc) = from.delta(to);
    if dr == 0 || dr.abs() != dc.abs() {
        return None;
    }
    Some((dr.signum() as i8, dc.signum() as i8))
}
