//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::PlayError;
use crate::hand::Hand;
use crate::options::{DECK_SIZE, GameOptions, PLAYER_COUNT};
use crate::result::GameResult;

pub mod round;
mod spectator;
pub mod state;

pub use spectator::{AutoPlay, Spectator, StopAfter};
pub use state::{GameState, Seat};

/// A King of Spades game: four hands, one deck, up to thirteen rounds.
///
/// Each game owns its hands outright; nothing is shared between games.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left undealt (empty after a normal deal).
    deck: Deck,
    /// Player hands in seat order.
    hands: [Hand; PLAYER_COUNT],
    /// Current game state.
    state: GameState,
    /// Rounds resolved so far.
    rounds_played: u8,
}

impl Game {
    /// Creates a new game: builds the deck, shuffles it (unless disabled)
    /// and deals all 52 cards round-robin starting with P1.
    ///
    /// # Example
    ///
    /// ```
    /// use king_of_spades::{CardPile, Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default().with_seed(42));
    /// assert!(game.hands().iter().all(|hand| hand.len() == 13));
    /// ```
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        let mut deck = Deck::new();
        if options.shuffle {
            let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
            deck.shuffle(&mut rng);
        }

        let mut hands: [Hand; PLAYER_COUNT] = Default::default();
        let dealt = deck.deal(&mut hands, DECK_SIZE);
        tracing::debug!(
            seed = options.seed,
            shuffle = options.shuffle,
            dealt,
            "new game dealt"
        );

        Self::from_parts(deck, hands)
    }

    /// Creates a game from hands that are already dealt.
    ///
    /// Useful for replaying a known deal. Hands shorter than the number of
    /// rounds make [`play_round`](Self::play_round) fail with
    /// [`PlayError::HandExhausted`] once they run out.
    #[must_use]
    pub fn with_hands(hands: [Hand; PLAYER_COUNT]) -> Self {
        Self::from_parts(Deck::from_cards(Vec::new()), hands)
    }

    const fn from_parts(deck: Deck, hands: [Hand; PLAYER_COUNT]) -> Self {
        Self {
            deck,
            hands,
            state: GameState::NotStarted,
            rounds_played: 0,
        }
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns all hands in seat order.
    #[must_use]
    pub const fn hands(&self) -> &[Hand; PLAYER_COUNT] {
        &self.hands
    }

    /// Returns the hand of a seat.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds resolved.
    #[must_use]
    pub const fn rounds_played(&self) -> u8 {
        self.rounds_played
    }

    /// Plays the game to the end, reporting to `spectator`.
    ///
    /// After every round the spectator is asked whether to continue; a
    /// `false` answer ends the game immediately. The answer after the last
    /// round does not change the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::GameOver`] if the game was already finished, or
    /// [`PlayError::HandExhausted`] if a hand runs out before the last round.
    pub fn run<S: Spectator + ?Sized>(
        &mut self,
        spectator: &mut S,
    ) -> Result<GameResult, PlayError> {
        if self.state == GameState::Finished {
            return Err(PlayError::GameOver);
        }
        if self.state == GameState::NotStarted {
            spectator.on_deal(&self.hands);
        }

        while self.state != GameState::Finished {
            let result = self.play_round()?;
            spectator.on_round(&result);

            let keep_going = spectator.should_continue(&result);
            if !keep_going && self.state != GameState::Finished {
                self.stop();
            }
        }

        let result = self.result();
        tracing::debug!(
            winner = %result.winner,
            rounds_played = result.rounds_played,
            wins = ?result.wins,
            "game finished"
        );
        spectator.on_finish(&result);
        Ok(result)
    }
}
