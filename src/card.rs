//! Card types and rank constants.

use core::cmp::Ordering;
use core::fmt;

use crate::error::CardError;

/// Lowest rank (a two).
pub const MIN_RANK: u8 = 2;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;
/// Rank of an Ace, the highest rank.
pub const ACE: u8 = 14;
/// Highest rank.
pub const MAX_RANK: u8 = ACE;

/// Card suit.
///
/// Suits only break ties between equal ranks; the declaration order is the
/// tie-break order (`Clubs < Diamonds < Hearts < Spades`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs (index 0).
    Clubs,
    /// Diamonds (index 1).
    Diamonds,
    /// Hearts (index 2).
    Hearts,
    /// Spades (index 3).
    Spades,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit for an index in `0..=3`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Clubs),
            1 => Some(Self::Diamonds),
            2 => Some(Self::Hearts),
            3 => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the index of the suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the unicode glyph for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '\u{2663}',
            Self::Diamonds => '\u{2666}',
            Self::Hearts => '\u{2665}',
            Self::Spades => '\u{2660}',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
///
/// Cards are ordered by rank first and by suit when the ranks are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] if the rank is outside `2..=14`.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < MIN_RANK || rank > MAX_RANK {
            return Err(CardError::InvalidCard {
                rank,
                suit: suit.index(),
            });
        }
        Ok(Self { suit, rank })
    }

    /// Creates a card from raw rank and suit indices.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] if the rank is outside `2..=14` or
    /// the suit is outside `0..=3`.
    pub const fn from_indices(rank: u8, suit: u8) -> Result<Self, CardError> {
        match Suit::from_index(suit) {
            Some(suit) => Self::new(suit, rank),
            None => Err(CardError::InvalidCard { rank, suit }),
        }
    }

    /// Callers must pass a rank in `MIN_RANK..=MAX_RANK`.
    pub(crate) const fn new_unchecked(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card (11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            JACK => f.write_str("J")?,
            QUEEN => f.write_str("Q")?,
            KING => f.write_str("K")?,
            ACE => f.write_str("A")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, "{}", self.suit)
    }
}
