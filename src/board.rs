//! Fleet state and shot resolution.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{FireOutcome, GameError};
use crate::config::GameConfig;
use crate::coordinate::Coordinate;
use crate::placement::{collides, generate_ship_locations};
use crate::ship::Ship;

/// The hidden fleet and how many of its ships have gone down.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    ships: Vec<Ship>,
    ships_sunk: usize,
}

impl Board {
    /// Validate `config` and place a fresh random fleet.
    pub fn generate<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let ships = generate_ship_locations(&config, rng)?;
        Ok(Self::with_ships(config, ships))
    }

    /// Build a board from ships placed by the caller.
    ///
    /// The fleet must match `config` in size and ship length and must not
    /// overlap; debug builds assert this.
    pub fn with_ships(config: GameConfig, ships: Vec<Ship>) -> Self {
        debug_assert_eq!(ships.len(), config.num_ships, "fleet size mismatch");
        debug_assert!(
            ships.iter().all(|s| s.len() == config.ship_length),
            "ship length mismatch"
        );
        debug_assert!(
            (1..ships.len()).all(|i| !collides(&ships[i], &ships[..i])),
            "ships overlap"
        );
        Board {
            config,
            ships,
            ships_sunk: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships_sunk
    }

    /// Returns `true` when every ship has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships_sunk == self.ships.len()
    }

    /// Resolve a shot at `coord`.
    ///
    /// Ships never overlap, so at most one segment matches. A ship is
    /// counted as sunk only on the shot that first completes it.
    pub fn fire(&mut self, coord: Coordinate) -> FireOutcome {
        let mut outcome = FireOutcome::default();
        if let Some(ship) = self.ships.iter_mut().find(|s| s.contains(coord)) {
            ship.register_hit(coord);
            outcome.hit = true;
            if ship.is_sunk() && ship.mark_counted() {
                self.ships_sunk += 1;
                outcome.ship_sunk = true;
            }
        }
        outcome.all_sunk = self.all_sunk();
        log::debug!("shot at {} -> {:?}", coord, outcome);
        outcome
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  config: {:?},\n  ships_sunk: {},\n  ships: {:?}\n}}",
            self.config, self.ships_sunk, self.ships
        )
    }
}
