#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ai;
pub mod autoplay;
mod board;
mod common;
mod config;
mod coordinate;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod pacing;
#[cfg(feature = "std")]
pub mod persistence;
pub mod prelude;
mod session;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::{
    AdjacentStrategy, HuntTargetStrategy, RandomStrategy, ShootingStrategy, Strategy,
};
pub use autoplay::{new_battle, play_out, AutoplayReport};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use pacing::run_ai_turn_paced;
pub use session::*;
pub use ship::*;
