//! Board generation and teleport lookup.
//!
//! A board is N² cells. Some cells are snake or ladder heads that send a
//! player to another cell. Boards are generated from a `GameRng` stream or
//! built from explicit pairs, and never change afterwards.

pub mod cell;
pub mod layout;

pub use layout::Board;
pub use cell::{Cell, Teleport, TeleportKind};
