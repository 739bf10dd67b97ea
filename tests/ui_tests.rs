use seabattle::ui::{error_message, render_grid, shot_message, CellMark, ShotLog};
use seabattle::{Coordinate, ParseError, ShotReport};

fn report(row: usize, col: usize, hit: bool, ship_sunk: bool, all_sunk: bool) -> ShotReport {
    ShotReport {
        coordinate: Coordinate::new(row, col),
        hit,
        ship_sunk,
        all_sunk,
        guess_count: 12,
    }
}

#[test]
fn test_render_empty_grid() {
    let log = ShotLog::new(3);
    assert_eq!(render_grid(&log), "   0 1 2\nA  . . .\nB  . . .\nC  . . .\n");
}

#[test]
fn test_render_hits_and_misses() {
    let mut log = ShotLog::new(3);
    log.record(&report(0, 1, true, false, false));
    log.record(&report(2, 2, false, false, false));
    assert_eq!(render_grid(&log), "   0 1 2\nA  . X .\nB  . . .\nC  . . o\n");
}

#[test]
fn test_hit_is_not_overwritten_by_miss() {
    let mut log = ShotLog::new(3);
    log.record(&report(1, 1, true, false, false));
    log.record(&report(1, 1, false, false, false));
    assert_eq!(log.mark(Coordinate::new(1, 1)), CellMark::Hit);
    assert_eq!(log.mark(Coordinate::new(9, 9)), CellMark::Unknown);
}

#[test]
fn test_messages() {
    assert_eq!(shot_message(&report(0, 0, false, false, false)), "You missed.");
    assert_eq!(shot_message(&report(0, 0, true, false, false)), "HIT!");
    assert_eq!(
        shot_message(&report(0, 0, true, true, false)),
        "You sank my battleship!"
    );
    assert_eq!(
        shot_message(&report(0, 0, true, true, true)),
        "You sank all my battleships, in 12 guesses"
    );
    assert_eq!(
        error_message(&ParseError::MalformedInput),
        "Oops, please enter a letter and a number on the board."
    );
    assert_eq!(
        error_message(&ParseError::OutOfBounds),
        "Oops, that's not on the board."
    );
}
