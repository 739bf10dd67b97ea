//! Guess text to board coordinate.

use crate::common::ParseError;
use crate::config::ROW_LABELS;
use crate::coordinate::Coordinate;

/// Parse a guess such as `"B4"` into a coordinate on a `board_size` board.
///
/// The letter selects the row (case-insensitive), the digit the column.
/// Anything other than exactly two characters is `MalformedInput`; a letter
/// or digit past the board edge is `OutOfBounds`.
pub fn parse_guess(raw: &str, board_size: usize) -> Result<Coordinate, ParseError> {
    let mut chars = raw.chars();
    let (row_ch, col_ch) = match (chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(c), None) => (r, c),
        _ => return Err(ParseError::MalformedInput),
    };

    let row_ch = row_ch.to_ascii_uppercase();
    let row = ROW_LABELS
        .iter()
        .take(board_size)
        .position(|&label| label as char == row_ch)
        .ok_or(ParseError::OutOfBounds)?;

    let col = col_ch
        .to_digit(10)
        .map(|d| d as usize)
        .filter(|&d| d < board_size)
        .ok_or(ParseError::OutOfBounds)?;

    Ok(Coordinate::new(row, col))
}
