//! Round and game result types.

use crate::card::Card;
use crate::game::Seat;
use crate::options::PLAYER_COUNT;

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The round number (1-based).
    pub round: u8,
    /// Cards played this round, in seat order.
    pub cards: [Card; PLAYER_COUNT],
    /// The highest card of the round.
    pub winning_card: Card,
    /// The seat that played the winning card.
    pub winner: Seat,
}

/// Result of a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Number of rounds resolved.
    pub rounds_played: u8,
    /// Rounds won per seat, in seat order.
    pub wins: [u8; PLAYER_COUNT],
    /// The champion (lowest seat among those with the most wins).
    pub winner: Seat,
    /// Whether play stopped before the last round.
    pub stopped_early: bool,
}
