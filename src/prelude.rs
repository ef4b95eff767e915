//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, CellState, Coordinate, Difficulty, GameEngine, GameStatus, Orientation, Phase,
    Session, ShipKind, ShootingStrategy, ShotResult, Side, Strategy,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, run_ai_turn_paced};
