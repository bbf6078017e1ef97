//! Configuration errors.
//!
//! Every error here is raised while building a board, dice or engine,
//! before any turn is played. Nothing that happens during play is an error:
//! self-loop teleports are skipped and overshooting rolls are rejected moves.

use thiserror::Error;

/// A game could not be set up with the requested configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be at least 1, got {0}")]
    InvalidPlayerCount(usize),

    #[error("board size must be positive")]
    InvalidBoardSize,

    #[error("dice must have at least one face")]
    InvalidDiceFaces,

    #[error("requested {requested} teleports but only {available} cells can hold one")]
    TooManyTeleports { requested: usize, available: usize },

    #[error("teleport {from} -> {to} leaves the placeable range 1..={max}")]
    TeleportOutOfRange { from: usize, to: usize, max: usize },

    #[error("cell {0} already holds a teleport")]
    DuplicateTeleport(usize),

    #[error("scripted dice need at least one roll")]
    EmptyRollScript,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::TooManyTeleports {
            requested: 120,
            available: 98,
        };
        assert_eq!(
            err.to_string(),
            "requested 120 teleports but only 98 cells can hold one"
        );

        assert_eq!(
            ConfigError::InvalidPlayerCount(0).to_string(),
            "player count must be at least 1, got 0"
        );
        assert_eq!(
            ConfigError::DuplicateTeleport(12).to_string(),
            "cell 12 already holds a teleport"
        );
    }
}
