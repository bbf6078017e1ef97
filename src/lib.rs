//! # snakes-ladders
//!
//! A seeded Snakes & Ladders simulation engine.
//!
//! ## Design Principles
//!
//! 1. **Reproducible**: Board layout and dice come from `GameRng` streams
//!    derived from one seed. Same config, same game.
//!
//! 2. **Single-hop teleports**: Landing on a snake or ladder head applies
//!    that one teleport. The destination's own teleport is never chased.
//!
//! 3. **Data out, not text out**: The engine exposes histories, teleport
//!    maps and `GameRecord` snapshots. Printing and plotting are left to
//!    callers.
//!
//! ## Modules
//!
//! - `core`: Player IDs, configuration, errors, RNG
//! - `board`: Cells, teleports, board generation
//! - `dice`: Roll sources (seeded dice, scripted replays)
//! - `game`: Player move resolution, turn engine, records

pub mod board;
pub mod core;
pub mod dice;
pub mod game;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, PlayerMap, RngStream};

pub use crate::board::{Board, Cell, Teleport, TeleportKind};

pub use crate::dice::{Dice, RollSource, ScriptedDice};

pub use crate::game::{
    Engine, EngineState, GameRecord, GameResult, MoveOutcome, Player, PlayerRecord, RoundOutcome,
};
