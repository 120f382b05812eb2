//! Sides and pieces.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Light = 0,
    Dark = 1,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Row delta of a forward step: Light climbs toward row 0, Dark toward row 7.
    pub fn forward(self) -> i8 {
        match self {
            Side::Light => -1,
            Side::Dark => 1,
        }
    }

    /// Promotion row for this side's men.
    pub fn far_row(self) -> i8 {
        match self {
            Side::Light => 0,
            Side::Dark => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Light => "light",
            Side::Dark => "dark",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A man or a king. Pieces carry no identity of their own: the board square
/// they sit on is what names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub king: bool,
}

impl Piece {
    pub fn new(side: Side, king: bool) -> Self {
        Self { side, king }
    }

    pub fn man(side: Side) -> Self {
        Self::new(side, false)
    }

    pub fn king(side: Side) -> Self {
        Self::new(side, true)
    }

    /// Returns the crowned piece. Crowning a king is a no-op.
    pub fn crowned(self) -> Self {
        Self { king: true, ..self }
    }

    /// Diagram character: `l`/`d` for men, `L`/`D` for kings.
    pub fn symbol(self) -> char {
        match (self.side, self.king) {
            (Side::Light, false) => 'l',
            (Side::Light, true) => 'L',
            (Side::Dark, false) => 'd',
            (Side::Dark, true) => 'D',
        }
    }
}
