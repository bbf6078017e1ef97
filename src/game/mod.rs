//! Players, the turn engine and game records.
//!
//! `Player::make_move` resolves a single roll against a `Board`.
//! `Engine` owns the players, board and dice and runs rounds until all but
//! one player has reached the final cell.

pub mod engine;
pub mod player;
pub mod record;

pub use engine::{Engine, EngineState, GameResult, RoundOutcome};
pub use player::{MoveOutcome, Player};
pub use record::{GameRecord, PlayerRecord};
