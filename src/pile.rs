//! Behaviour shared by every ordered card container.

use core::fmt;

use crate::card::Card;

/// An ordered container that can receive cards and render them.
///
/// [`Deck`](crate::Deck) and [`Hand`](crate::Hand) both implement this; they
/// differ only in which end they remove cards from.
pub trait CardPile: fmt::Display {
    /// Appends a card to the end of the pile.
    fn add_card(&mut self, card: Card);

    /// Returns the number of cards.
    fn len(&self) -> usize;

    /// Returns whether the pile is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders a row of cards separated by two spaces.
///
/// ```
/// use king_of_spades::{Card, CardRow, Suit};
///
/// let row = [Card::new(Suit::Clubs, 2).unwrap(), Card::new(Suit::Hearts, 12).unwrap()];
/// assert_eq!(CardRow(&row).to_string(), "2♣  Q♥");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CardRow<I>(pub I);

impl<'a, I> fmt::Display for CardRow<I>
where
    I: IntoIterator<Item = &'a Card> + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.0.clone().into_iter().enumerate() {
            if index > 0 {
                f.write_str("  ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
