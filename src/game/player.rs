//! Per-player state and move resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, TeleportKind};
use crate::core::PlayerId;

/// What happened on one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Landed on a plain cell.
    Moved {
        from: Option<usize>,
        to: usize,
        finished: bool,
    },
    /// Landed on a snake or ladder head and took exactly one hop.
    Teleported {
        from: Option<usize>,
        via: usize,
        to: usize,
        kind: TeleportKind,
        finished: bool,
    },
    /// The roll would leave the board. The turn is used up without moving.
    Rejected { candidate: usize },
}

impl MoveOutcome {
    /// Did this move land the player on the final cell?
    #[must_use]
    pub fn finished(&self) -> bool {
        match *self {
            MoveOutcome::Moved { finished, .. } | MoveOutcome::Teleported { finished, .. } => {
                finished
            }
            MoveOutcome::Rejected { .. } => false,
        }
    }

    /// Position after the move, `None` if the move was rejected.
    #[must_use]
    pub fn destination(&self) -> Option<usize> {
        match *self {
            MoveOutcome::Moved { to, .. } | MoveOutcome::Teleported { to, .. } => Some(to),
            MoveOutcome::Rejected { .. } => None,
        }
    }
}

/// One participant.
///
/// `position` is `None` until the first accepted move. The first roll is
/// counted from a virtual square before cell 0, so rolling `r` lands on `r`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    position: Option<usize>,
    finished: bool,
    roll_history: Vec<usize>,
    position_history: Vec<usize>,
}

impl Player {
    /// Create a player who has not yet entered the board.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            position: None,
            finished: false,
            roll_history: Vec::new(),
            position_history: vec![0],
        }
    }

    /// Get the player's ID.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Current cell, `None` before the first accepted move.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Has any move been accepted yet?
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.position.is_some()
    }

    /// Has the player reached the final cell?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Every roll, in order.
    #[must_use]
    pub fn roll_history(&self) -> &[usize] {
        &self.roll_history
    }

    /// Position after every turn, starting with 0. Rejected turns repeat the
    /// previous value.
    #[must_use]
    pub fn position_history(&self) -> &[usize] {
        &self.position_history
    }

    /// Get the number of turns taken, rejected ones included.
    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.roll_history.len()
    }

    /// Apply `roll` on `board`.
    ///
    /// A roll past the last cell is wasted: the player stays put but the
    /// turn still lands in both histories. Otherwise the landing cell's
    /// teleport is applied once; the destination's own teleport is ignored.
    pub fn make_move(&mut self, roll: usize, board: &Board) -> MoveOutcome {
        debug_assert!(!self.finished, "{} already finished", self.id);

        let from = self.position;
        let candidate = from.map_or(roll, |p| p.saturating_add(roll));
        self.roll_history.push(roll);

        let Some(cell) = board.cell(candidate) else {
            let stay = from.unwrap_or(0);
            self.position_history.push(stay);
            debug!(player = %self.id, ?from, roll, candidate, "Roll overshoots the board");
            return MoveOutcome::Rejected { candidate };
        };

        let teleport = cell.teleport();
        let to = teleport.map_or(candidate, |t| t.to);
        self.finished = to == board.last_index();
        self.position = Some(to);
        self.position_history.push(to);

        debug!(player = %self.id, ?from, roll, to, finished = self.finished, "Player moved");

        match teleport {
            Some(t) => MoveOutcome::Teleported {
                from,
                via: candidate,
                to,
                kind: t.kind,
                finished: self.finished,
            },
            None => MoveOutcome::Moved {
                from,
                to,
                finished: self.finished,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_board() -> Board {
        Board::empty(10).unwrap()
    }

    #[test]
    fn test_new_player() {
        let player = Player::new(PlayerId::new(3));
        assert_eq!(player.id(), PlayerId::new(3));
        assert_eq!(player.position(), None);
        assert!(!player.has_moved());
        assert!(!player.is_finished());
        assert_eq!(player.position_history(), &[0]);
        assert!(player.roll_history().is_empty());
    }

    #[test]
    fn test_first_move_is_absolute() {
        let board = plain_board();
        let mut player = Player::new(PlayerId::new(0));

        let outcome = player.make_move(4, &board);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: None,
                to: 4,
                finished: false
            }
        );
        assert_eq!(player.position(), Some(4));

        player.make_move(3, &board);
        assert_eq!(player.position(), Some(7));
        assert_eq!(player.position_history(), &[0, 4, 7]);
        assert_eq!(player.roll_history(), &[4, 3]);
    }

    #[test]
    fn test_overshoot_is_rejected() {
        let board = plain_board();
        let mut player = Player::new(PlayerId::new(0));

        player.make_move(5, &board);
        player.make_move(90, &board);
        let outcome = player.make_move(10, &board);

        assert_eq!(outcome, MoveOutcome::Rejected { candidate: 105 });
        assert_eq!(outcome.destination(), None);
        assert_eq!(player.position(), Some(95));
        assert_eq!(player.position_history(), &[0, 5, 95, 95]);
        assert_eq!(player.roll_history(), &[5, 90, 10]);
        assert!(!player.is_finished());
    }

    #[test]
    fn test_rejected_before_first_move() {
        let board = Board::empty(2).unwrap();
        let mut player = Player::new(PlayerId::new(0));

        assert_eq!(player.make_move(6, &board), MoveOutcome::Rejected { candidate: 6 });
        assert_eq!(player.position(), None);
        assert_eq!(player.position_history(), &[0, 0]);
    }

    #[test]
    fn test_ladder_hop() {
        let board = Board::with_teleports(10, [(3, 50)]).unwrap();
        let mut player = Player::new(PlayerId::new(0));

        let outcome = player.make_move(3, &board);
        assert_eq!(
            outcome,
            MoveOutcome::Teleported {
                from: None,
                via: 3,
                to: 50,
                kind: TeleportKind::Ladder,
                finished: false
            }
        );
        assert_eq!(player.position_history(), &[0, 50]);
    }

    #[test]
    fn test_single_hop_only() {
        // 3 -> 50 and 50 -> 10: landing on 3 stops at 50.
        let board = Board::with_teleports(10, [(3, 50), (50, 10)]).unwrap();
        let mut player = Player::new(PlayerId::new(0));

        player.make_move(3, &board);
        assert_eq!(player.position(), Some(50));
    }

    #[test]
    fn test_exact_finish() {
        let board = plain_board();
        let mut player = Player::new(PlayerId::new(0));

        player.make_move(93, &board);
        let outcome = player.make_move(6, &board);

        assert!(outcome.finished());
        assert!(player.is_finished());
        assert_eq!(player.position(), Some(99));
    }

    #[test]
    fn test_finish_after_ladder() {
        let board = Board::with_teleports(3, [(4, 7)]).unwrap();
        let mut player = Player::new(PlayerId::new(0));

        player.make_move(4, &board);
        assert_eq!(player.position(), Some(7));
        assert!(!player.is_finished());

        let outcome = player.make_move(1, &board);
        assert!(outcome.finished());
        assert_eq!(player.position(), Some(8));
    }
}
