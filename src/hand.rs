//! Player hand representation.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::HandError;
use crate::game::Seat;
use crate::pile::{CardPile, CardRow};

/// A player's hand.
///
/// Cards are played from the front, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, front card first.
    cards: VecDeque<Card>,
    /// Rounds won so far.
    wins: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
            wins: 0,
        }
    }

    /// Creates a hand holding the given cards, front card first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: VecDeque::from(cards),
            wins: 0,
        }
    }

    /// Returns the cards in play order.
    #[must_use]
    pub const fn cards(&self) -> &VecDeque<Card> {
        &self.cards
    }

    /// Removes and returns the earliest card added.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Empty`] if the hand has no cards.
    pub fn pop_front(&mut self) -> Result<Card, HandError> {
        self.cards.pop_front().ok_or(HandError::Empty)
    }

    /// Records one round won. The counter saturates at `u8::MAX`.
    pub const fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    /// Returns the number of rounds won.
    #[must_use]
    pub const fn wins(&self) -> u8 {
        self.wins
    }

    /// Returns a view that renders the hand under its owner's name.
    ///
    /// ```
    /// use king_of_spades::{Card, CardPile, Hand, Seat, Suit};
    ///
    /// let mut hand = Hand::new();
    /// assert_eq!(hand.labeled(Seat::P2).to_string(), "Hand of p2 is empty");
    ///
    /// hand.add_card(Card::new(Suit::Hearts, 10).unwrap());
    /// hand.add_card(Card::new(Suit::Spades, 14).unwrap());
    /// assert_eq!(hand.labeled(Seat::P2).to_string(), "Hand of p2 contains\n10♥  A♠");
    /// ```
    #[must_use]
    pub const fn labeled(&self, seat: Seat) -> LabeledHand<'_> {
        LabeledHand { seat, hand: self }
    }
}

impl CardPile for Hand {
    fn add_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    fn len(&self) -> usize {
        self.cards.len()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&CardRow(&self.cards), f)
    }
}

/// A hand rendered with its seat name.
#[derive(Debug, Clone, Copy)]
pub struct LabeledHand<'a> {
    seat: Seat,
    hand: &'a Hand,
}

impl fmt::Display for LabeledHand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand of {}", self.seat.name())?;
        if self.hand.is_empty() {
            return f.write_str(" is empty");
        }
        write!(f, " contains\n{}", self.hand)
    }
}
