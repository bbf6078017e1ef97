//! Core types: players, configuration, errors, RNG.
//!
//! These are shared by the board, the dice and the turn engine.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_DICE_FACES};
pub use error::ConfigError;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, RngStream};
