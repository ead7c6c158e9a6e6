//! Session controller: lifecycle, attack resolution, and win detection.

use alloc::vec::Vec;

use rand::Rng;

use crate::common::{AttackOutcome, GameError};
use crate::config::GameConfig;
use crate::coord::{alphabet_subset, Coord};
use crate::fleet::{place_fleet, Fleet};
use crate::grid::{CellState, Grid};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    #[default]
    Idle,
    InProgress,
    GameOver,
}

/// One complete game: grid, fleet, and status.
///
/// The session exclusively owns its grid and fleet; all mutation goes
/// through [`init`](Self::init), [`reset`](Self::reset),
/// [`attack_by_coordinate`](Self::attack_by_coordinate), and
/// [`attack_cell`](Self::attack_cell).
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    fleet: Fleet,
    status: GameStatus,
}

impl GameSession {
    /// New idle session. Call [`init`](Self::init) to start playing.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            grid: Grid::default(),
            fleet: Fleet::default(),
            status: GameStatus::Idle,
        }
    }

    /// Build a fresh grid, place the fleet, and start the game.
    ///
    /// Fails with [`GameError::InvalidDimensions`] for an unusable grid and
    /// with [`GameError::UnableToPlaceShip`] when a ship finds no legal
    /// position within the attempt budget; the session is left untouched
    /// on failure.
    pub fn init<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let mut grid = Grid::generate(self.config.rows, self.config.cols)?;
        let fleet = place_fleet(
            &mut grid,
            &self.config.fleet,
            self.config.max_place_attempts,
            rng,
        )?;
        self.grid = grid;
        self.fleet = fleet;
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Start over, discarding the previous grid and fleet entirely.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.init(rng)
    }

    /// [`init`](Self::init) with the process-wide RNG.
    #[cfg(feature = "std")]
    pub fn init_random(&mut self) -> Result<(), GameError> {
        self.init(&mut rand::rng())
    }

    /// Attack the cell named by `coordinate`.
    ///
    /// Fails with [`GameError::InvalidCoordinate`] when the string does not
    /// resolve to a cell (malformed and out-of-range inputs alike) and with
    /// [`GameError::AlreadyAttacked`] when the cell is already spent. The
    /// session is unchanged on failure.
    pub fn attack_by_coordinate(&mut self, coordinate: &str) -> Result<AttackOutcome, GameError> {
        let cell = self
            .grid
            .find(coordinate)
            .ok_or(GameError::InvalidCoordinate)?;
        let (coord, state) = (cell.coord(), cell.state());
        if state.is_attacked() {
            return Err(GameError::AlreadyAttacked);
        }
        Ok(self.attack_cell(coord))
    }

    /// Resolve an attack on `coord` directly.
    ///
    /// Silently ignored unless the session is in progress and `coord` is on
    /// the grid. Spent cells are not re-evaluated; callers that want an
    /// error for those go through
    /// [`attack_by_coordinate`](Self::attack_by_coordinate).
    pub fn attack_cell(&mut self, coord: Coord) -> AttackOutcome {
        if self.status != GameStatus::InProgress {
            return AttackOutcome::Ignored;
        }
        match self.grid.state(coord) {
            Some(CellState::Ship) => {
                self.grid.set_state(coord, CellState::Hit);
                self.resolve_hit(coord)
            }
            Some(CellState::Empty) => {
                self.grid.set_state(coord, CellState::Miss);
                AttackOutcome::Miss
            }
            // off the grid, or already hit/missed
            _ => AttackOutcome::Ignored,
        }
    }

    fn resolve_hit(&mut self, coord: Coord) -> AttackOutcome {
        let Some(ship) = self.fleet.ship_at_mut(coord) else {
            // init marks grid and fleet together, so a Ship cell always has
            // an owner
            return AttackOutcome::Hit;
        };
        ship.record_hit();
        if !ship.is_destroyed() {
            return AttackOutcome::Hit;
        }
        let name = ship.name();
        if self.fleet.all_destroyed() {
            self.status = GameStatus::GameOver;
            AttackOutcome::Defeated(name)
        } else {
            AttackOutcome::Sunk(name)
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once every ship is destroyed.
    pub fn finished(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Shots taken so far, derived from cell states.
    pub fn shots_fired(&self) -> usize {
        self.grid.shot_count()
    }

    /// Row labels for the configured grid.
    pub fn headers(&self) -> Vec<char> {
        alphabet_subset(self.config.rows).unwrap_or_default()
    }

    /// Point-in-time report for front ends.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            status: self.status,
            shots_fired: self.shots_fired(),
            ships: self
                .fleet
                .ships()
                .iter()
                .map(|ship| ShipReport {
                    name: ship.name(),
                    size: ship.size(),
                    hits: ship.hits(),
                    destroyed: ship.is_destroyed(),
                })
                .collect(),
        }
    }
}

/// Snapshot of a session's progress, for rendering or logging.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSummary {
    pub status: GameStatus,
    pub shots_fired: usize,
    pub ships: Vec<ShipReport>,
}

/// Per-ship line in a [`GameSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipReport {
    pub name: &'static str,
    pub size: usize,
    pub hits: usize,
    pub destroyed: bool,
}
