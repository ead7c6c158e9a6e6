//! Fleet composition and random non-overlapping placement.

use alloc::vec::Vec;

use rand::Rng;

use crate::common::GameError;
use crate::coord::Coord;
use crate::grid::{CellState, Grid};
use crate::ship::{Orientation, Ship, ShipClass};

/// Ordered collection of a session's ships.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.occupies(coord))
    }

    pub(crate) fn ship_at_mut(&mut self, coord: Coord) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|ship| ship.occupies(coord))
    }

    /// True once every ship has been destroyed. An empty fleet never
    /// counts as defeated.
    pub fn all_destroyed(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_destroyed)
    }
}

/// Place one ship of every class onto `grid`, trying up to `max_attempts`
/// random positions per ship before giving up.
///
/// Ships are placed in declaration order, so each ship's random search
/// sees every previously occupied cell. Cells covered by a successful
/// placement are marked [`CellState::Ship`].
pub fn place_fleet<R: Rng>(
    grid: &mut Grid,
    classes: &[ShipClass],
    max_attempts: usize,
    rng: &mut R,
) -> Result<Fleet, GameError> {
    let mut ships = Vec::with_capacity(classes.len());
    for (i, &class) in classes.iter().enumerate() {
        let positions = place_ship(grid, class, max_attempts, rng)?;
        for &coord in &positions {
            grid.set_state(coord, CellState::Ship);
        }
        ships.push(Ship::new(i + 1, class, positions));
    }
    Ok(Fleet { ships })
}

/// Retry loop around [`random_run`]: the first legal run wins.
fn place_ship<R: Rng>(
    grid: &Grid,
    class: ShipClass,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Coord>, GameError> {
    for attempt in 1..=max_attempts {
        match random_run(grid, class, rng) {
            Ok(positions) => return Ok(positions),
            Err(err) => {
                log::warn!(
                    "placement attempt {} for {} failed: {}",
                    attempt,
                    class.name(),
                    err
                );
            }
        }
    }
    Err(GameError::UnableToPlaceShip {
        class: class.name(),
    })
}

/// One placement attempt: a uniformly random orientation and start cell,
/// projected `size` cells along the run. Fails when the run leaves the
/// grid or crosses an occupied cell.
fn random_run<R: Rng>(
    grid: &Grid,
    class: ShipClass,
    rng: &mut R,
) -> Result<Vec<Coord>, GameError> {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let start = Coord::new(
        rng.random_range(0..grid.rows()),
        rng.random_range(0..grid.cols()),
    );

    let mut positions = Vec::with_capacity(class.size());
    for step in 0..class.size() {
        let coord = match orientation {
            Orientation::Horizontal => Coord::new(start.row, start.col + step),
            Orientation::Vertical => Coord::new(start.row + step, start.col),
        };
        if !coord.in_bounds(grid.rows(), grid.cols()) {
            return Err(GameError::ShipOutOfBounds);
        }
        if grid.state(coord) != Some(CellState::Empty) {
            return Err(GameError::ShipOverlaps);
        }
        positions.push(coord);
    }
    Ok(positions)
}
