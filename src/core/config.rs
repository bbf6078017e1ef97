//! Game configuration.
//!
//! A `GameConfig` carries everything needed to set up a game:
//! - player count and board edge length
//! - how many snake/ladder pairs to attempt
//! - dice faces and the seed for all randomness
//! - an optional round cap
//!
//! Validation happens once, in `validate()`, which `Engine::new` calls
//! before building anything.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of dice faces.
pub const DEFAULT_DICE_FACES: usize = 6;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (at least 1).
    pub player_count: usize,

    /// Board edge length N. The board has N² cells.
    pub board_size: usize,

    /// Snake/ladder pairs to attempt. Self-loops are skipped, so the
    /// realized count may be lower.
    pub teleport_count: usize,

    /// Faces on the die (default: 6).
    pub dice_faces: usize,

    /// Seed for board layout and dice.
    /// Same seed produces the same game.
    pub seed: u64,

    /// Stop after this many rounds even if the game is not over.
    /// `None` means no cap.
    pub max_rounds: Option<usize>,
}

impl GameConfig {
    /// Create a configuration with a six-sided die, seed 0 and no round cap.
    pub fn new(player_count: usize, board_size: usize, teleport_count: usize) -> Self {
        Self {
            player_count,
            board_size,
            teleport_count,
            dice_faces: DEFAULT_DICE_FACES,
            seed: 0,
            max_rounds: None,
        }
    }

    /// Set the number of dice faces.
    #[must_use]
    pub fn with_dice_faces(mut self, faces: usize) -> Self {
        self.dice_faces = faces;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Cap the number of rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.board_size.saturating_mul(self.board_size)
    }

    /// Check every field before a game is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count == 0 {
            return Err(ConfigError::InvalidPlayerCount(self.player_count));
        }
        if self.board_size == 0 {
            return Err(ConfigError::InvalidBoardSize);
        }
        if self.dice_faces == 0 {
            return Err(ConfigError::InvalidDiceFaces);
        }

        let available = self.cell_count().saturating_sub(2);
        if self.teleport_count > available {
            return Err(ConfigError::TooManyTeleports {
                requested: self.teleport_count,
                available,
            });
        }

        Ok(())
    }
}

impl Default for GameConfig {
    /// Two players on a 10×10 board with 10 attempted teleports.
    fn default() -> Self {
        Self::new(2, 10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.board_size, 10);
        assert_eq!(config.teleport_count, 10);
        assert_eq!(config.dice_faces, 6);
        assert_eq!(config.max_rounds, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new(4, 8, 12)
            .with_dice_faces(8)
            .with_seed(123)
            .with_max_rounds(500);

        assert_eq!(config.player_count, 4);
        assert_eq!(config.cell_count(), 64);
        assert_eq!(config.dice_faces, 8);
        assert_eq!(config.seed, 123);
        assert_eq!(config.max_rounds, Some(500));
    }

    #[test]
    fn test_validate_player_count() {
        assert_eq!(
            GameConfig::new(0, 10, 0).validate(),
            Err(ConfigError::InvalidPlayerCount(0))
        );
        assert!(GameConfig::new(1, 10, 0).validate().is_ok());
        assert!(GameConfig::new(300, 10, 0).validate().is_ok());
    }

    #[test]
    fn test_validate_board_and_dice() {
        assert_eq!(
            GameConfig::new(2, 0, 0).validate(),
            Err(ConfigError::InvalidBoardSize)
        );
        assert_eq!(
            GameConfig::new(2, 10, 0).with_dice_faces(0).validate(),
            Err(ConfigError::InvalidDiceFaces)
        );
    }

    #[test]
    fn test_validate_teleport_count() {
        // 10×10 board: cells 1..=98 can hold a teleport.
        assert!(GameConfig::new(2, 10, 98).validate().is_ok());
        assert_eq!(
            GameConfig::new(2, 10, 99).validate(),
            Err(ConfigError::TooManyTeleports {
                requested: 99,
                available: 98
            })
        );

        // A 1×1 board has no room at all.
        assert_eq!(
            GameConfig::new(2, 1, 1).validate(),
            Err(ConfigError::TooManyTeleports {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9).with_max_rounds(10);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
