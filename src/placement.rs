//! Random, non-overlapping fleet placement.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::GameError;
use crate::config::{GameConfig, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Uniform draw from `[0, upper)`; an empty range yields 0.
fn bounded<R: Rng>(rng: &mut R, upper: usize) -> usize {
    if upper == 0 {
        0
    } else {
        rng.random_range(0..upper)
    }
}

/// Sample one candidate ship without regard to other ships.
///
/// The axis the ship extends along is drawn from
/// `[0, board_size - ship_length)`, the fixed axis from `[0, board_size)`.
/// `config` is expected to be valid; a ship longer than the board runs off
/// its edge.
pub fn generate_ship<R: Rng>(config: &GameConfig, rng: &mut R) -> Ship {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let span = config.board_size.saturating_sub(config.ship_length);
    let origin = match orientation {
        Orientation::Horizontal => {
            Coordinate::new(bounded(rng, config.board_size), bounded(rng, span))
        }
        Orientation::Vertical => {
            Coordinate::new(bounded(rng, span), bounded(rng, config.board_size))
        }
    };
    Ship::new(origin, orientation, config.ship_length)
}

/// Returns `true` if `candidate` shares a cell with any ship in `placed`.
pub fn collides(candidate: &Ship, placed: &[Ship]) -> bool {
    placed
        .iter()
        .any(|ship| ship.overlaps(candidate.locations()))
}

/// Place `config.num_ships` ships one after another, resampling each until
/// it clears every ship placed before it. The config is validated first.
pub fn generate_ship_locations<R: Rng>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec<Ship>, GameError> {
    config.validate()?;
    place_fleet(config, rng)
}

fn place_fleet<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Vec<Ship>, GameError> {
    let mut ships: Vec<Ship> = Vec::with_capacity(config.num_ships);
    for ship_index in 0..config.num_ships {
        let mut attempts = 0;
        let ship = loop {
            if attempts == MAX_PLACEMENT_ATTEMPTS {
                log::warn!(
                    "giving up on ship {} after {} attempts",
                    ship_index,
                    attempts
                );
                return Err(GameError::UnableToPlaceShip {
                    ship_index,
                    attempts,
                });
            }
            attempts += 1;
            let candidate = generate_ship(config, rng);
            if !collides(&candidate, &ships) {
                break candidate;
            }
            log::trace!("ship {} candidate {:?} collides", ship_index, candidate);
        };
        log::debug!(
            "placed ship {} at {:?} after {} attempt(s)",
            ship_index,
            ship.locations(),
            attempts
        );
        ships.push(ship);
    }
    Ok(ships)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn bounded_zero_width_is_zero() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..32 {
            assert_eq!(bounded(&mut rng, 0), 0);
        }
    }

    #[test]
    fn bounded_stays_below_upper() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..256 {
            assert!(bounded(&mut rng, 4) < 4);
        }
    }

    #[test]
    fn placement_gives_up_after_cap() {
        // 12 ship cells on a 9-cell board, past validation on purpose
        let config = GameConfig::new(3, 6, 2);
        let mut rng = SmallRng::seed_from_u64(1);
        let err = place_fleet(&config, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GameError::UnableToPlaceShip { attempts, .. } if attempts == MAX_PLACEMENT_ATTEMPTS
        ));
    }

    #[test]
    fn full_width_ship_starts_at_edge() {
        let config = GameConfig::new(4, 1, 4);
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..32 {
            let ship = generate_ship(&config, &mut rng);
            let origin = ship.locations()[0];
            match ship.orientation() {
                Orientation::Horizontal => assert_eq!(origin.col, 0),
                Orientation::Vertical => assert_eq!(origin.row, 0),
            }
        }
    }
}
