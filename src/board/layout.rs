//! The game board and random teleport placement.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::cell::{Cell, Teleport, TeleportKind};
use crate::core::{ConfigError, GameRng};

/// An N×N board stored as N² cells indexed `0..N²`.
///
/// Cell 0 and the final cell never hold a teleport. The board is read-only
/// once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ladder_count: usize,
    snake_count: usize,
    skipped_count: usize,
}

impl Board {
    /// A board of `size`² plain cells.
    pub fn empty(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidBoardSize);
        }

        let cell_count = size.saturating_mul(size);
        Ok(Self {
            size,
            cells: (0..cell_count).map(Cell::new).collect(),
            ladder_count: 0,
            snake_count: 0,
            skipped_count: 0,
        })
    }

    /// Build a board with up to `teleport_count` random snakes and ladders.
    ///
    /// Starts and ends are two independent draws without replacement from
    /// `1..=N²-2`, paired in draw order. Pairs with equal start and end are
    /// skipped, so fewer than `teleport_count` teleports may be realized.
    ///
    /// Fails if more teleports are requested than there are eligible cells.
    pub fn generate(
        size: usize,
        teleport_count: usize,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        let mut board = Self::empty(size)?;
        let available = board.placeable_count();
        let too_many = ConfigError::TooManyTeleports {
            requested: teleport_count,
            available,
        };

        let range = 1..available + 1;
        let starts = rng
            .sample_distinct(range.clone(), teleport_count)
            .ok_or_else(|| too_many.clone())?;
        let ends = rng
            .sample_distinct(range, teleport_count)
            .ok_or(too_many)?;

        for (from, to) in starts.into_iter().zip(ends) {
            board.place(from, to);
        }

        debug!(
            size,
            requested = teleport_count,
            ladders = board.ladder_count,
            snakes = board.snake_count,
            skipped = board.skipped_count,
            "Generated board"
        );

        Ok(board)
    }

    /// Build a board from explicit (start, end) pairs.
    ///
    /// Uses the same classification as `generate`: self-loops are skipped
    /// and tallied. Both ends of every pair must lie in `1..=N²-2` and no
    /// start may repeat.
    pub fn with_teleports(
        size: usize,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, ConfigError> {
        let mut board = Self::empty(size)?;
        let max = board.placeable_count();

        for (from, to) in pairs {
            let in_range = |i: usize| (1..=max).contains(&i);
            if !in_range(from) || !in_range(to) {
                return Err(ConfigError::TeleportOutOfRange { from, to, max });
            }
            if board.cells[from].target().is_some() {
                return Err(ConfigError::DuplicateTeleport(from));
            }
            board.place(from, to);
        }

        Ok(board)
    }

    fn place(&mut self, from: usize, to: usize) {
        let Some(cell) = Cell::with_teleport(from, to) else {
            warn!(from, to, "Ignoring self-loop teleport");
            self.skipped_count += 1;
            return;
        };

        match cell.kind() {
            TeleportKind::Ladder => self.ladder_count += 1,
            TeleportKind::Snake => self.snake_count += 1,
            TeleportKind::None => {}
        }
        self.cells[from] = cell;
    }

    /// Cells that may hold a teleport: everything but the first and last.
    fn placeable_count(&self) -> usize {
        self.cells.len().saturating_sub(2)
    }

    /// Edge length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (N²).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Index of the final cell (N² - 1).
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.cells.len() - 1
    }

    /// Is `index` a cell on this board?
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    /// Get the cell at `index`.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// The teleport starting at `index`, if any.
    #[must_use]
    pub fn teleport_at(&self, index: usize) -> Option<Teleport> {
        self.cell(index).and_then(Cell::teleport)
    }

    /// All realized teleports, ordered by source index.
    pub fn teleports(&self) -> impl Iterator<Item = Teleport> + '_ {
        self.cells.iter().filter_map(Cell::teleport)
    }

    /// Get the number of realized ladders.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.ladder_count
    }

    /// Get the number of realized snakes.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.snake_count
    }

    /// Self-loop pairs discarded while building the board.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped_count
    }
}

/// One line per teleport, e.g. `Ladder from 3 to 50`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for teleport in self.teleports() {
            writeln!(f, "{teleport}")?;
        }
        Ok(())
    }
}
