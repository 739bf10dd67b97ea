//! Commonly used types and utilities for ease of import.

pub use crate::{
    init_game, parse_guess, Coordinate, Game, GameConfig, GameError, GameStatus, ParseError,
    ShotReport,
};

#[cfg(feature = "std")]
pub use crate::{
    init_logging,
    ui::{error_message, render_grid, shot_message, ShotLog},
};
