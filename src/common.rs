//! Common types: shot outcomes and the error enums shared across the game.

/// Result of firing at a single coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FireOutcome {
    /// The coordinate held a ship segment.
    pub hit: bool,
    /// This shot completed a ship that had not been sunk before.
    pub ship_sunk: bool,
    /// Every ship on the board is sunk after this shot.
    pub all_sunk: bool,
}

/// Errors returned when turning user text into a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseError {
    /// Guess was not exactly one letter followed by one digit.
    MalformedInput,
    /// Row letter or column digit lies outside the board.
    OutOfBounds,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::MalformedInput => write!(f, "Guess must be a letter followed by a digit"),
            ParseError::OutOfBounds => write!(f, "Guess is outside the board"),
        }
    }
}

/// Reasons a [`GameConfig`](crate::GameConfig) cannot host a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board has no cells.
    BoardTooSmall,
    /// Board is larger than a one-letter, one-digit guess can address.
    BoardTooLarge { size: usize, max: usize },
    /// Fleet contains no ships.
    NoShips,
    /// Ships must have at least one segment.
    EmptyShip,
    /// Ship does not fit along a row or column.
    ShipTooLong { length: usize, board_size: usize },
    /// Ships would cover the whole board or more.
    FleetTooLarge { cells: usize, capacity: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::BoardTooSmall => write!(f, "Board size must be at least 1"),
            ConfigError::BoardTooLarge { size, max } => {
                write!(f, "Board size {} exceeds the maximum of {}", size, max)
            }
            ConfigError::NoShips => write!(f, "At least one ship is required"),
            ConfigError::EmptyShip => write!(f, "Ship length must be at least 1"),
            ConfigError::ShipTooLong { length, board_size } => write!(
                f,
                "Ship length {} does not fit on a {}x{} board",
                length, board_size, board_size
            ),
            ConfigError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, capacity
            ),
        }
    }
}

/// Errors raised while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Configuration rejected before placement started.
    InvalidConfig(ConfigError),
    /// Placement retries for a ship were exhausted.
    UnableToPlaceShip { ship_index: usize, attempts: usize },
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::InvalidConfig(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidConfig(e) => write!(f, "Invalid configuration: {}", e),
            GameError::UnableToPlaceShip {
                ship_index,
                attempts,
            } => write!(
                f,
                "Unable to place ship {} after {} attempts",
                ship_index, attempts
            ),
        }
    }
}
