//! Shared engine types: attack outcomes and game errors.

use core::fmt;

/// Result of resolving an attack against a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackOutcome {
    /// Attack had no effect: the session is not in progress, the target is
    /// off the grid, or the cell was already spent.
    Ignored,
    /// Attack landed on open water.
    Miss,
    /// Attack hit a ship that is still afloat.
    Hit,
    /// Attack destroyed a ship, carrying its class name.
    Sunk(&'static str),
    /// Attack destroyed the last ship; the game is over.
    Defeated(&'static str),
}

/// Errors returned by grid and session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Requested label count cannot be rendered as row or column headers.
    LabelOutOfRange { n: usize },
    /// Grid dimensions are outside the supported range.
    InvalidDimensions { rows: usize, cols: usize },
    /// Attack target does not resolve to a cell on the grid.
    InvalidCoordinate,
    /// Guess was already made at this position.
    AlreadyAttacked,
    /// Ship placement is out of bounds.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Unable to place a ship within the attempt budget.
    UnableToPlaceShip { class: &'static str },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::LabelOutOfRange { n } => write!(f, "label count {} is out of range", n),
            GameError::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "unsupported grid dimensions {}x{} (rows 1..=26, cols >= 1)",
                    rows, cols
                )
            }
            GameError::InvalidCoordinate => write!(f, "invalid coordinate"),
            GameError::AlreadyAttacked => write!(f, "position already attacked"),
            GameError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            GameError::ShipOverlaps => write!(f, "ship placement overlaps another ship"),
            GameError::UnableToPlaceShip { class } => write!(f, "unable to place {}", class),
        }
    }
}
