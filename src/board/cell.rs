//! Board cells and teleports.

use serde::{Deserialize, Serialize};

/// What a cell does when a player lands on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeleportKind {
    /// Plain cell.
    #[default]
    None,
    /// Moves the player backward.
    Snake,
    /// Moves the player forward.
    Ladder,
}

impl TeleportKind {
    /// Classify a (start, end) pair. `None` for a self-loop.
    #[must_use]
    pub fn classify(from: usize, to: usize) -> Option<Self> {
        match from.cmp(&to) {
            std::cmp::Ordering::Less => Some(TeleportKind::Ladder),
            std::cmp::Ordering::Greater => Some(TeleportKind::Snake),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for TeleportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TeleportKind::None => "None",
            TeleportKind::Snake => "Snake",
            TeleportKind::Ladder => "Ladder",
        };
        f.write_str(name)
    }
}

/// One realized snake or ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Teleport {
    /// Cell the player lands on.
    pub from: usize,
    /// Cell the player is sent to.
    pub to: usize,
    pub kind: TeleportKind,
}

impl std::fmt::Display for Teleport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} from {} to {}", self.kind, self.from, self.to)
    }
}

/// One board square.
///
/// A cell's teleport is fixed when the board is built. A stored target is
/// never the cell's own index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    index: usize,
    target: Option<usize>,
    kind: TeleportKind,
}

impl Cell {
    /// A plain cell.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            target: None,
            kind: TeleportKind::None,
        }
    }

    /// A cell that teleports to `target`. Returns `None` for a self-loop.
    #[must_use]
    pub fn with_teleport(index: usize, target: usize) -> Option<Self> {
        let kind = TeleportKind::classify(index, target)?;
        Some(Self {
            index,
            target: Some(target),
            kind,
        })
    }

    /// Get the cell's position on the board.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Destination index if this cell is a snake or ladder head.
    #[must_use]
    pub const fn target(&self) -> Option<usize> {
        self.target
    }

    /// Get what this cell does when landed on.
    #[must_use]
    pub const fn kind(&self) -> TeleportKind {
        self.kind
    }

    /// The teleport starting here, if any.
    #[must_use]
    pub fn teleport(&self) -> Option<Teleport> {
        self.target.map(|to| Teleport {
            from: self.index,
            to,
            kind: self.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(TeleportKind::classify(3, 50), Some(TeleportKind::Ladder));
        assert_eq!(TeleportKind::classify(50, 3), Some(TeleportKind::Snake));
        assert_eq!(TeleportKind::classify(7, 7), None);
    }

    #[test]
    fn test_plain_cell() {
        let cell = Cell::new(4);
        assert_eq!(cell.index(), 4);
        assert_eq!(cell.target(), None);
        assert_eq!(cell.kind(), TeleportKind::None);
        assert!(cell.teleport().is_none());
    }

    #[test]
    fn test_teleport_cell() {
        let ladder = Cell::with_teleport(3, 50).unwrap();
        assert_eq!(ladder.kind(), TeleportKind::Ladder);
        assert_eq!(ladder.target(), Some(50));

        let snake = Cell::with_teleport(40, 2).unwrap();
        assert_eq!(snake.teleport().unwrap().to_string(), "Snake from 40 to 2");
    }

    #[test]
    fn test_self_loop_rejected() {
        assert!(Cell::with_teleport(9, 9).is_none());
    }
}
