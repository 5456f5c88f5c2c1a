//! The 52-card deck.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, MAX_RANK, MIN_RANK, Suit};
use crate::error::DeckError;
use crate::options::DECK_SIZE;
use crate::pile::{CardPile, CardRow};

/// An ordered deck of cards, drawn from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck, suit-major with ranks ascending.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                cards.push(Card::new_unchecked(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck holding exactly the given cards, last card drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in deck order; the last card is drawn first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffles the deck in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the last card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn pop_from_end(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Deals up to `max_cards` cards round-robin into `hands`.
    ///
    /// The i-th card drawn goes to `hands[i % hands.len()]`. Dealing stops
    /// early when the deck runs out. Returns the number of cards dealt.
    pub fn deal<P: CardPile>(&mut self, hands: &mut [P], max_cards: usize) -> usize {
        if hands.is_empty() {
            return 0;
        }

        let mut dealt = 0;
        while dealt < max_cards {
            let Ok(card) = self.pop_from_end() else {
                break;
            };
            hands[dealt % hands.len()].add_card(card);
            dealt += 1;
        }

        tracing::trace!(dealt, remaining = self.cards.len(), "dealt cards");
        dealt
    }
}

impl CardPile for Deck {
    fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    fn len(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&CardRow(&self.cards), f)
    }
}
