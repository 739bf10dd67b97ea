//! Ship segments and per-segment hit tracking.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Segments share a row; the column varies.
    Horizontal,
    /// Segments share a column; the row varies.
    Vertical,
}

impl Orientation {
    /// Cell `offset` steps from `origin` along this orientation.
    pub fn step(self, origin: Coordinate, offset: usize) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(origin.row, origin.col + offset),
            Orientation::Vertical => Coordinate::new(origin.row + offset, origin.col),
        }
    }
}

/// A placed ship: its cells in order and a hit flag for each one.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    locations: Vec<Coordinate>,
    hits: Vec<bool>,
    counted_sunk: bool,
}

impl Ship {
    /// Lay out `length` contiguous cells starting at `origin`.
    pub fn new(origin: Coordinate, orientation: Orientation, length: usize) -> Self {
        let locations = (0..length)
            .map(|offset| orientation.step(origin, offset))
            .collect();
        Ship {
            orientation,
            locations,
            hits: vec![false; length],
            counted_sunk: false,
        }
    }

    /// Cells occupied by the ship, from the origin outwards.
    pub fn locations(&self) -> &[Coordinate] {
        &self.locations
    }

    /// Hit flags, index-aligned with [`Ship::locations`].
    pub fn hits(&self) -> &[bool] {
        &self.hits
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.locations.contains(&coord)
    }

    /// True if any of `cells` is already occupied by this ship.
    pub fn overlaps(&self, cells: &[Coordinate]) -> bool {
        cells.iter().any(|c| self.contains(*c))
    }

    /// Mark the segment at `coord` as hit. Returns `true` if the ship
    /// occupies `coord`. Hitting the same segment twice is harmless.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        match self.locations.iter().position(|c| *c == coord) {
            Some(idx) => {
                self.hits[idx] = true;
                true
            }
            None => false,
        }
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    /// Record that this ship's sinking has been tallied. Returns `false` if
    /// it was already tallied, so callers count each ship once.
    pub(crate) fn mark_counted(&mut self) -> bool {
        !core::mem::replace(&mut self.counted_sunk, true)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hit_count = self.hits.iter().filter(|&&h| h).count();
        write!(
            f,
            "Ship {{ orientation: {:?}, locations: {:?}, hits: {}/{} }}",
            self.orientation,
            self.locations,
            hit_count,
            self.len(),
        )
    }
}
