//! Round-robin turn engine.
//!
//! The engine runs rounds until all but one player has finished:
//! - players act in `PlayerId` order
//! - finished players are skipped
//! - a round ends early the moment any move finishes a player
//! - the completion check runs only between rounds

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::player::{MoveOutcome, Player};
use super::record::GameRecord;
use crate::board::Board;
use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, PlayerMap, RngStream};
use crate::dice::{Dice, RollSource};

/// Turn-progression state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Running,
    Finished,
}

/// Result of asking the engine for one more round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A round was played. `moves` lists each turn in order.
    Played {
        round: usize,
        moves: Vec<(PlayerId, MoveOutcome)>,
    },
    /// The game was already over; nothing was played.
    GameOver,
}

/// How `Engine::play` ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// All but one player finished.
    Completed {
        rounds: usize,
        finish_order: Vec<PlayerId>,
    },
    /// The round cap was hit first.
    RoundLimitReached { rounds: usize },
}

impl GameResult {
    /// Get the number of rounds played.
    #[must_use]
    pub fn rounds(&self) -> usize {
        match *self {
            GameResult::Completed { rounds, .. } | GameResult::RoundLimitReached { rounds } => {
                rounds
            }
        }
    }

    /// First player to reach the final cell, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Completed { finish_order, .. } => finish_order.first().copied(),
            GameResult::RoundLimitReached { .. } => None,
        }
    }
}

/// Owns the players, the board and the dice, and drives the game.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::GameConfig;
/// use snakes_ladders::game::{Engine, GameResult};
///
/// let config = GameConfig::new(3, 10, 12).with_seed(7).with_max_rounds(10_000);
/// let mut engine = Engine::new(&config).unwrap();
///
/// if let GameResult::Completed { finish_order, .. } = engine.play() {
///     assert_eq!(finish_order.len(), 2);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Engine<R = Dice> {
    players: PlayerMap<Player>,
    dice: R,
    board: Board,
    state: EngineState,
    rounds: usize,
    max_rounds: Option<usize>,
    finish_order: Vec<PlayerId>,
}

impl Engine<Dice> {
    /// Validate `config`, then build the board and dice from its seed.
    ///
    /// Board layout and dice rolls come from separate streams of the same
    /// seed.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let root = GameRng::new(config.seed);
        let board = Board::generate(
            config.board_size,
            config.teleport_count,
            &mut root.for_stream(RngStream::Board),
        )?;
        let dice = Dice::from_rng(config.dice_faces, root.for_stream(RngStream::Dice))?;

        debug!(
            players = config.player_count,
            seed = config.seed,
            ladders = board.ladder_count(),
            snakes = board.snake_count(),
            "Created engine"
        );

        Self::with_parts(config.player_count, board, dice, config.max_rounds)
    }
}

impl<R: RollSource> Engine<R> {
    /// Assemble an engine from a ready board and roll source.
    pub fn with_parts(
        player_count: usize,
        board: Board,
        dice: R,
        max_rounds: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if player_count == 0 {
            return Err(ConfigError::InvalidPlayerCount(player_count));
        }

        Ok(Self {
            players: PlayerMap::new(player_count, Player::new),
            dice,
            board,
            state: EngineState::Running,
            rounds: 0,
            max_rounds,
            finish_order: Vec::new(),
        })
    }

    /// Get every player's state.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Get one player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the roll source.
    #[must_use]
    pub fn dice(&self) -> &R {
        &self.dice
    }

    /// Get the turn-progression state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Get the number of rounds played so far.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds
    }

    /// Players in the order they reached the final cell.
    #[must_use]
    pub fn finish_order(&self) -> &[PlayerId] {
        &self.finish_order
    }

    /// Get the number of players who have finished.
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.finish_order.len()
    }

    /// True once all but one player has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.finished_count() >= self.player_count() - 1
    }

    /// Play one round, or report that the game is over.
    ///
    /// This is a round boundary: if enough players have finished, the
    /// engine moves to `Finished` and no turn is played.
    pub fn play_round(&mut self) -> RoundOutcome {
        if self.state == EngineState::Finished || self.is_complete() {
            if self.state == EngineState::Running {
                self.state = EngineState::Finished;
                info!(
                    rounds = self.rounds,
                    finished = self.finished_count(),
                    "Game finished"
                );
            }
            return RoundOutcome::GameOver;
        }

        self.rounds += 1;
        let round = self.rounds;
        let mut moves = Vec::with_capacity(self.player_count());

        for id in PlayerId::all(self.player_count()) {
            let player = &mut self.players[id];
            if player.is_finished() {
                continue;
            }

            let roll = self.dice.roll();
            let outcome = player.make_move(roll, &self.board);
            moves.push((id, outcome));

            if outcome.finished() {
                self.finish_order.push(id);
                info!(player = %id, round, place = self.finish_order.len(), "Player reached the final cell");
                break;
            }
        }

        RoundOutcome::Played { round, moves }
    }

    /// Play rounds until the game is over or the round cap is hit.
    pub fn play(&mut self) -> GameResult {
        loop {
            if self.is_complete() {
                self.play_round();
                return GameResult::Completed {
                    rounds: self.rounds,
                    finish_order: self.finish_order.clone(),
                };
            }

            if self.max_rounds.is_some_and(|max| self.rounds >= max) {
                warn!(rounds = self.rounds, "Round limit reached before the game finished");
                return GameResult::RoundLimitReached {
                    rounds: self.rounds,
                };
            }

            self.play_round();
        }
    }

    /// Snapshot of the board, every player's history and the progress so far.
    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord::capture(self)
    }
}
