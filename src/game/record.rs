//! Serializable game snapshot for trace printers and trajectory plots.
//!
//! A `GameRecord` holds everything an external presenter needs: the
//! realized teleports with tallies, every player's roll and position
//! histories, and how far the game got.

use serde::{Deserialize, Serialize};

use super::engine::{Engine, EngineState};
use crate::board::Teleport;
use crate::core::PlayerId;
use crate::dice::RollSource;

/// One player's trajectory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub finished: bool,
    pub rolls: Vec<usize>,
    pub positions: Vec<usize>,
}

/// Board, trajectories and progress of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub board_size: usize,
    pub teleports: Vec<Teleport>,
    pub ladder_count: usize,
    pub snake_count: usize,
    pub players: Vec<PlayerRecord>,
    pub rounds: usize,
    pub finish_order: Vec<PlayerId>,
    pub state: EngineState,
}

impl GameRecord {
    /// Capture the current state of `engine`.
    pub fn capture<R: RollSource>(engine: &Engine<R>) -> Self {
        let board = engine.board();
        let players = engine
            .players()
            .values()
            .map(|p| PlayerRecord {
                id: p.id(),
                finished: p.is_finished(),
                rolls: p.roll_history().to_vec(),
                positions: p.position_history().to_vec(),
            })
            .collect();

        Self {
            board_size: board.size(),
            teleports: board.teleports().collect(),
            ladder_count: board.ladder_count(),
            snake_count: board.snake_count(),
            players,
            rounds: engine.rounds_played(),
            finish_order: engine.finish_order().to_vec(),
            state: engine.state(),
        }
    }

    /// Longest position history, i.e. the x-axis length of a trajectory plot.
    #[must_use]
    pub fn max_turns(&self) -> usize {
        self.players
            .iter()
            .map(|p| p.positions.len().saturating_sub(1))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::dice::ScriptedDice;

    #[test]
    fn test_capture() {
        let board = Board::with_teleports(3, [(2, 6), (5, 1)]).unwrap();
        let dice = ScriptedDice::new(vec![2, 5, 2]).unwrap();
        let mut engine = Engine::with_parts(2, board, dice, Some(1)).unwrap();
        engine.play();

        let record = engine.record();
        assert_eq!(record.board_size, 3);
        assert_eq!(record.teleports.len(), 2);
        assert_eq!(record.ladder_count, 1);
        assert_eq!(record.snake_count, 1);
        assert_eq!(record.rounds, 1);
        assert_eq!(record.state, EngineState::Running);

        // Player 0 rolls 2 and climbs to 6; player 1 rolls 5 and slides to 1.
        assert_eq!(record.players[0].positions, vec![0, 6]);
        assert_eq!(record.players[1].positions, vec![0, 1]);
        assert_eq!(record.players[1].rolls, vec![5]);
        assert_eq!(record.max_turns(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let board = Board::with_teleports(4, [(3, 9)]).unwrap();
        let dice = ScriptedDice::new(vec![3, 6]).unwrap();
        let mut engine = Engine::with_parts(2, board, dice, Some(3)).unwrap();
        engine.play();

        let record = engine.record();
        let json = serde_json::to_string(&record).unwrap();
        let restored: GameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }
}
