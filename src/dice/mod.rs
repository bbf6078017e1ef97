//! Dice: where roll values come from.
//!
//! The engine only sees the `RollSource` trait:
//! - `Dice`: uniform rolls from a seeded `GameRng` stream
//! - `ScriptedDice`: a fixed sequence, for replays and scenarios

pub mod source;

pub use source::{Dice, RollSource, ScriptedDice};
