//! Roll sources.

use crate::core::{ConfigError, GameRng, RngStream};

/// Anything that can produce the next roll value.
///
/// Values are expected to be at least 1.
pub trait RollSource {
    /// Produce the next roll.
    fn roll(&mut self) -> usize;
}

/// Uniform die with `face_count` faces, driven by a seeded stream.
#[derive(Clone, Debug)]
pub struct Dice {
    face_count: usize,
    seed: u64,
    rng: GameRng,
}

impl Dice {
    /// Create a die. The same seed yields the same rolls.
    ///
    /// Draws from the dice stream of `seed`, so it rolls exactly what an
    /// engine built with that seed rolls.
    pub fn new(face_count: usize, seed: u64) -> Result<Self, ConfigError> {
        Self::from_rng(face_count, GameRng::new(seed).for_stream(RngStream::Dice))
    }

    /// Create a die that draws from an existing stream.
    pub fn from_rng(face_count: usize, rng: GameRng) -> Result<Self, ConfigError> {
        if face_count == 0 {
            return Err(ConfigError::InvalidDiceFaces);
        }

        Ok(Self {
            face_count,
            seed: rng.seed(),
            rng,
        })
    }

    /// Get the number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Get the configured seed the rolls derive from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RollSource for Dice {
    fn roll(&mut self) -> usize {
        self.rng.gen_range_inclusive(1, self.face_count)
    }
}

/// Replays a fixed list of rolls, wrapping around when it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<usize>,
    next: usize,
}

impl ScriptedDice {
    /// Create scripted dice. Fails if `rolls` is empty.
    pub fn new(rolls: impl Into<Vec<usize>>) -> Result<Self, ConfigError> {
        let rolls = rolls.into();
        if rolls.is_empty() {
            return Err(ConfigError::EmptyRollScript);
        }
        Ok(Self { rolls, next: 0 })
    }

    /// Rolls handed out so far.
    #[must_use]
    pub fn rolls_used(&self) -> usize {
        self.next
    }
}

impl RollSource for ScriptedDice {
    fn roll(&mut self) -> usize {
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        value
    }
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn roll(&mut self) -> usize {
        (**self).roll()
    }
}
