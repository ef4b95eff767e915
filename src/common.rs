//! Common types for the game core: shot results and error enums.

use core::fmt;

use crate::ship::ShipKind;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk(ShipKind),
}

impl ShotResult {
    /// `true` for both plain hits and sinking hits.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, ShotResult::Sunk(_))
    }
}

/// Reasons a ship placement is rejected. All of them are recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// At least one segment would fall outside the board.
    OutOfBounds,
    /// At least one segment would cover another ship.
    Overlap,
    /// Every ship of the fleet has already been placed.
    FleetComplete,
    /// The ship already occupies cells on a board.
    AlreadyPlaced,
    /// The requested length does not match the next ship in the fleet queue.
    WrongLength { expected: usize, got: usize },
    /// Battle cannot start while ships remain to be placed.
    FleetIncomplete { remaining: usize },
    /// Random placement gave up after too many attempts.
    NoRoom,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => write!(f, "Position occupied by another ship"),
            PlacementError::FleetComplete => write!(f, "All ships are already placed"),
            PlacementError::AlreadyPlaced => write!(f, "Ship is already placed on a board"),
            PlacementError::WrongLength { expected, got } => write!(
                f,
                "Next ship to place has length {}, not {}",
                expected, got
            ),
            PlacementError::FleetIncomplete { remaining } => {
                write!(f, "{} ships still have to be placed", remaining)
            }
            PlacementError::NoRoom => write!(f, "Unable to find room for ship"),
        }
    }
}

/// Reasons a shot is rejected. A rejected shot never consumes a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// The player fired while it was not the player's turn.
    NotPlayerTurn,
    /// A machine step was requested while it was not the machine's turn.
    NotMachineTurn,
    /// Shots are only accepted during battle.
    NotInBattle,
    /// The target cell was already hit, missed or sunk.
    AlreadyTargeted,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::NotPlayerTurn => write!(f, "It is not the player's turn"),
            ShotError::NotMachineTurn => write!(f, "It is not the machine's turn"),
            ShotError::NotInBattle => write!(f, "The battle is not in progress"),
            ShotError::AlreadyTargeted => write!(f, "That cell has already been targeted"),
        }
    }
}

/// Reasons a deserialised board is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStateError {
    /// The cell list does not hold exactly one entry per coordinate.
    WrongCellCount(usize),
    /// A ship lists a cell that is also claimed by another ship.
    SharedCell { row: u8, col: u8 },
    /// A ship cell is recorded as water or miss.
    InconsistentCell { row: u8, col: u8 },
    /// A cell is marked as ship-bearing but no ship claims it.
    Unclaimed { row: u8, col: u8 },
    /// More ships than the occupancy index can address.
    TooManyShips(usize),
    /// The ship at this index does not cover `length` consecutive cells in a line.
    ShipShape(usize),
    /// The hit count or sunk marking of the ship at this index disagrees with its cells.
    ShipDamage(usize),
}

impl fmt::Display for BoardStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardStateError::WrongCellCount(n) => write!(f, "expected 100 cells, found {}", n),
            BoardStateError::SharedCell { row, col } => {
                write!(f, "cell ({}, {}) is claimed by two ships", row, col)
            }
            BoardStateError::InconsistentCell { row, col } => {
                write!(f, "ship cell ({}, {}) has a non-ship state", row, col)
            }
            BoardStateError::Unclaimed { row, col } => {
                write!(f, "cell ({}, {}) has a ship state but no ship", row, col)
            }
            BoardStateError::TooManyShips(n) => write!(f, "{} ships cannot be indexed", n),
            BoardStateError::ShipShape(i) => {
                write!(f, "ship {} is not a straight line of its length", i)
            }
            BoardStateError::ShipDamage(i) => {
                write!(f, "ship {} damage does not match its cells", i)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardStateError {}
