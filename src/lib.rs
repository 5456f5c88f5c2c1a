//! A four-player "King of Spades" card game engine with optional `no_std` support.
//!
//! A standard deck is shuffled and dealt to four players, 13 cards each.
//! Every round each player reveals the front card of their hand and the
//! highest card (rank first, then suit) takes the round. The player with
//! the most rounds at the end is the champion.
//!
//! # Example
//!
//! ```
//! use king_of_spades::{AutoPlay, Game, GameOptions, Seat};
//!
//! let mut game = Game::new(GameOptions::default().with_shuffle(false));
//! let result = game.run(&mut AutoPlay).unwrap();
//! assert_eq!(result.rounds_played, 13);
//! assert_eq!(result.winner, Seat::P1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pile;
pub mod result;

// Re-export main types
pub use card::{ACE, Card, JACK, KING, MAX_RANK, MIN_RANK, QUEEN, Suit};
#[cfg(feature = "std")]
pub use console::ConsoleTable;
pub use deck::Deck;
pub use error::{CardError, DeckError, HandError, PlayError};
pub use game::{AutoPlay, Game, GameState, Seat, Spectator, StopAfter};
pub use hand::{Hand, LabeledHand};
pub use options::{DECK_SIZE, GameOptions, MAX_ROUNDS, PLAYER_COUNT};
pub use pile::{CardPile, CardRow};
pub use result::{GameResult, RoundResult};
