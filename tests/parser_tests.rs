use proptest::prelude::*;
use seabattle::{parse_guess, Coordinate, ParseError};

#[test]
fn test_parse_valid_guesses() {
    assert_eq!(parse_guess("B4", 7), Ok(Coordinate::new(1, 4)));
    assert_eq!(parse_guess("A0", 7), Ok(Coordinate::new(0, 0)));
    assert_eq!(parse_guess("G6", 7), Ok(Coordinate::new(6, 6)));
    assert_eq!(parse_guess("J9", 10), Ok(Coordinate::new(9, 9)));
}

#[test]
fn test_parse_lowercase_row() {
    assert_eq!(parse_guess("c2", 7), Ok(Coordinate::new(2, 2)));
}

#[test]
fn test_parse_wrong_length_is_malformed() {
    assert_eq!(parse_guess("A", 7), Err(ParseError::MalformedInput));
    assert_eq!(parse_guess("", 7), Err(ParseError::MalformedInput));
    assert_eq!(parse_guess("A10", 10), Err(ParseError::MalformedInput));
    assert_eq!(parse_guess(" B4", 7), Err(ParseError::MalformedInput));
}

#[test]
fn test_parse_length_counts_characters_not_bytes() {
    assert_eq!(parse_guess("É4", 7), Err(ParseError::OutOfBounds));
    assert_eq!(parse_guess("A٣", 7), Err(ParseError::OutOfBounds));
}

#[test]
fn test_parse_row_out_of_bounds() {
    assert_eq!(parse_guess("H1", 7), Err(ParseError::OutOfBounds));
    assert_eq!(parse_guess("Z1", 7), Err(ParseError::OutOfBounds));
    assert_eq!(parse_guess("41", 7), Err(ParseError::OutOfBounds));
    assert_eq!(parse_guess("C1", 2), Err(ParseError::OutOfBounds));
}

#[test]
fn test_parse_column_out_of_bounds() {
    assert_eq!(parse_guess("A9", 7), Err(ParseError::OutOfBounds));
    assert_eq!(parse_guess("A7", 7), Err(ParseError::OutOfBounds));
    assert_eq!(parse_guess("AB", 7), Err(ParseError::OutOfBounds));
    assert_eq!(parse_guess("A-", 7), Err(ParseError::OutOfBounds));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn parse_inverts_display(size in 1usize..=10, row in 0usize..10, col in 0usize..10) {
        let coord = Coordinate::new(row % size, col % size);
        let text = coord.to_string();
        prop_assert_eq!(parse_guess(&text, size), Ok(coord));
        prop_assert_eq!(parse_guess(&text.to_lowercase(), size), Ok(coord));
    }

    #[test]
    fn parsed_coordinates_are_on_board(raw in "\\PC{0,3}", size in 1usize..=10) {
        match parse_guess(&raw, size) {
            Ok(coord) => prop_assert!(coord.in_bounds(size)),
            Err(ParseError::MalformedInput) => prop_assert_ne!(raw.chars().count(), 2),
            Err(ParseError::OutOfBounds) => prop_assert_eq!(raw.chars().count(), 2),
        }
    }
}
