#![cfg(feature = "std")]

//! Text presentation: shot marks, grid rendering and player messages.

use std::fmt::Write;

use crate::{
    common::ParseError,
    config::ROW_LABELS,
    coordinate::Coordinate,
    game::ShotReport,
};

/// What the player knows about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    Unknown,
    Hit,
    Miss,
}

impl CellMark {
    fn symbol(self) -> char {
        match self {
            CellMark::Unknown => '.',
            CellMark::Hit => 'X',
            CellMark::Miss => 'o',
        }
    }
}

/// Marks left on the board by the player's shots.
#[derive(Debug, Clone)]
pub struct ShotLog {
    size: usize,
    marks: Vec<CellMark>,
}

impl ShotLog {
    pub fn new(board_size: usize) -> Self {
        Self {
            size: board_size,
            marks: vec![CellMark::Unknown; board_size * board_size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Mark the cell of `report`. A hit is never downgraded to a miss.
    pub fn record(&mut self, report: &ShotReport) {
        if let Some(idx) = self.index(report.coordinate) {
            if report.hit {
                self.marks[idx] = CellMark::Hit;
            } else if self.marks[idx] == CellMark::Unknown {
                self.marks[idx] = CellMark::Miss;
            }
        }
    }

    pub fn mark(&self, coord: Coordinate) -> CellMark {
        self.index(coord)
            .map(|idx| self.marks[idx])
            .unwrap_or(CellMark::Unknown)
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        coord
            .in_bounds(self.size)
            .then(|| coord.row * self.size + coord.col)
    }
}

/// Render the shot log as a grid: digits across, letters down.
pub fn render_grid(log: &ShotLog) -> String {
    let mut out = String::from("  ");
    for c in 0..log.size() {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for r in 0..log.size() {
        out.push(ROW_LABELS.get(r).map(|&b| b as char).unwrap_or('?'));
        out.push(' ');
        for c in 0..log.size() {
            out.push(' ');
            out.push(log.mark(Coordinate::new(r, c)).symbol());
        }
        out.push('\n');
    }
    out
}

/// Message shown after an accepted guess.
pub fn shot_message(report: &ShotReport) -> String {
    if report.all_sunk && report.ship_sunk {
        format!(
            "You sank all my battleships, in {} guesses",
            report.guess_count
        )
    } else if report.ship_sunk {
        String::from("You sank my battleship!")
    } else if report.hit {
        String::from("HIT!")
    } else {
        String::from("You missed.")
    }
}

/// Message shown when a guess is rejected.
pub fn error_message(err: &ParseError) -> &'static str {
    match err {
        ParseError::MalformedInput => "Oops, please enter a letter and a number on the board.",
        ParseError::OutOfBounds => "Oops, that's not on the board.",
    }
}
