//! Error types for game operations.

use thiserror::Error;

use crate::game::Seat;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank or suit outside its domain.
    #[error("invalid card (rank {rank}, suit {suit})")]
    InvalidCard {
        /// The rejected rank.
        rank: u8,
        /// The rejected suit index.
        suit: u8,
    },
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when playing from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// No cards left in the hand.
    #[error("no cards left in the hand")]
    Empty,
}

/// Errors that can occur while playing rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game has already finished.
    #[error("the game has already finished")]
    GameOver,
    /// A hand ran out of cards before the round limit.
    ///
    /// A fully dealt game never reaches this; it means the hands were not
    /// dealt evenly.
    #[error("hand of {seat} ran out of cards")]
    HandExhausted {
        /// The seat whose hand was empty.
        seat: Seat,
    },
}
