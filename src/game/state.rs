//! Game state and seat types.

use core::fmt;

use crate::options::PLAYER_COUNT;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Cards are dealt but no round has been played.
    NotStarted,
    /// Rounds are being played.
    RoundInProgress {
        /// The last round resolved (1-based).
        round: u8,
    },
    /// The game is over, either after the last round or an early exit.
    Finished,
}

/// A seat at the table, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Seat {
    /// First player.
    P1,
    /// Second player.
    P2,
    /// Third player.
    P3,
    /// Fourth player.
    P4,
}

impl Seat {
    /// All seats in play order.
    pub const ALL: [Self; PLAYER_COUNT] = [Self::P1, Self::P2, Self::P3, Self::P4];

    /// Returns the seat at a 0-based index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::P1),
            1 => Some(Self::P2),
            2 => Some(Self::P3),
            3 => Some(Self::P4),
            _ => None,
        }
    }

    /// Returns the 0-based index of the seat.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the player's lower-case name (`p1`..`p4`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::P1 => "p1",
            Self::P2 => "p2",
            Self::P3 => "p3",
            Self::P4 => "p4",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.index() + 1)
    }
}
