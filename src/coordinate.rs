//! Board coordinates.

use core::fmt;

use crate::config::ROW_LABELS;

/// A cell on the board, addressed by row and column.
///
/// Compared structurally, so `(1, 23)` and `(12, 3)` never collide the way
/// concatenated text keys would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both indices fall inside a `board_size` square.
    pub fn in_bounds(&self, board_size: usize) -> bool {
        self.row < board_size && self.col < board_size
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

/// Formats as the guess text that parses back to this cell, e.g. `B4`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ROW_LABELS.get(self.row) {
            Some(&label) => write!(f, "{}{}", label as char, self.col),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
