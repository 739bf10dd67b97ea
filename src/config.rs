use crate::common::ConfigError;

pub const DEFAULT_BOARD_SIZE: usize = 7;
pub const DEFAULT_NUM_SHIPS: usize = 3;
pub const DEFAULT_SHIP_LENGTH: usize = 3;

/// Largest board a single letter plus a single digit can address.
pub const MAX_BOARD_SIZE: usize = 10;

/// Candidate samples allowed per ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Row labels, indexed by row.
pub const ROW_LABELS: &[u8; MAX_BOARD_SIZE] = b"ABCDEFGHIJ";

/// Board dimensions and fleet shape for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub num_ships: usize,
    pub ship_length: usize,
}

impl GameConfig {
    pub const fn new(board_size: usize, num_ships: usize, ship_length: usize) -> Self {
        Self {
            board_size,
            num_ships,
            ship_length,
        }
    }

    /// Total number of cells covered by the fleet.
    pub fn fleet_cells(&self) -> usize {
        self.num_ships.saturating_mul(self.ship_length)
    }

    /// Check the board is addressable and the fleet fits by size: every ship
    /// fits along a row or column and the fleet leaves at least one free cell.
    /// These conditions are necessary, not sufficient; placement still has a
    /// retry cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::BoardTooSmall);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.num_ships == 0 {
            return Err(ConfigError::NoShips);
        }
        if self.ship_length == 0 {
            return Err(ConfigError::EmptyShip);
        }
        if self.ship_length > self.board_size {
            return Err(ConfigError::ShipTooLong {
                length: self.ship_length,
                board_size: self.board_size,
            });
        }
        let capacity = self.board_size * self.board_size;
        let cells = self.fleet_cells();
        if cells >= capacity {
            return Err(ConfigError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_NUM_SHIPS, DEFAULT_SHIP_LENGTH)
    }
}
