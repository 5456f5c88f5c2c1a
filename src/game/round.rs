//! Round resolution.

use crate::card::Card;
use crate::error::PlayError;
use crate::options::{MAX_ROUNDS, PLAYER_COUNT};
use crate::pile::CardPile;
use crate::result::{GameResult, RoundResult};

use super::{Game, GameState, Seat};

fn first_max<T: Ord>(items: &[T]) -> Option<usize> {
    let mut best: Option<(usize, &T)> = None;
    for (index, item) in items.iter().enumerate() {
        match best {
            Some((_, top)) if item <= top => {}
            _ => best = Some((index, item)),
        }
    }
    best.map(|(index, _)| index)
}

/// Returns the index of the highest card.
///
/// When several cards are equal and maximal, the first one wins. Returns
/// `None` for an empty slice.
#[must_use]
pub fn highest_card(cards: &[Card]) -> Option<usize> {
    first_max(cards)
}

/// Returns the seat that played the highest card of a round.
#[must_use]
pub fn round_winner(cards: &[Card; PLAYER_COUNT]) -> Seat {
    highest_card(cards)
        .and_then(Seat::from_index)
        .unwrap_or(Seat::P1)
}

/// Returns the seat with the most wins, preferring the lowest seat on ties.
#[must_use]
pub fn leading_seat(wins: &[u8; PLAYER_COUNT]) -> Seat {
    first_max(wins)
        .and_then(Seat::from_index)
        .unwrap_or(Seat::P1)
}

impl Game {
    /// Plays the next round.
    ///
    /// Each seat plays the front card of its hand; the highest card takes the
    /// round. After the last round the game is finished.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::GameOver`] if the game is already finished, or
    /// [`PlayError::HandExhausted`] if a hand has no card to play. In the
    /// latter case no card is taken from any hand.
    pub fn play_round(&mut self) -> Result<RoundResult, PlayError> {
        let round = match self.state {
            GameState::NotStarted => 1,
            GameState::RoundInProgress { round } => round + 1,
            GameState::Finished => return Err(PlayError::GameOver),
        };

        if let Some(seat) = Seat::ALL
            .into_iter()
            .find(|seat| self.hands[seat.index()].is_empty())
        {
            tracing::error!(%seat, round, "hand exhausted before round");
            return Err(PlayError::HandExhausted { seat });
        }

        let [p1, p2, p3, p4] = Seat::ALL.map(|seat| {
            self.hands[seat.index()]
                .pop_front()
                .map_err(|_| PlayError::HandExhausted { seat })
        });
        let cards = [p1?, p2?, p3?, p4?];
        tracing::trace!(round, ?cards, "cards played");

        let winner = round_winner(&cards);
        let winning_card = cards[winner.index()];
        self.hands[winner.index()].record_win();

        self.state = if round >= MAX_ROUNDS {
            GameState::Finished
        } else {
            GameState::RoundInProgress { round }
        };
        self.rounds_played = round;

        tracing::debug!(round, %winner, card = %winning_card, "round resolved");

        Ok(RoundResult {
            round,
            cards,
            winning_card,
            winner,
        })
    }

    /// Ends the game early. Later calls to [`play_round`](Self::play_round)
    /// fail with [`PlayError::GameOver`].
    pub fn stop(&mut self) {
        if self.state != GameState::Finished {
            tracing::warn!(rounds_played = self.rounds_played, "game stopped early");
        }
        self.state = GameState::Finished;
    }

    /// Returns the rounds won by each seat, in seat order.
    #[must_use]
    pub fn wins(&self) -> [u8; PLAYER_COUNT] {
        let mut wins = [0; PLAYER_COUNT];
        for (slot, hand) in wins.iter_mut().zip(&self.hands) {
            *slot = hand.wins();
        }
        wins
    }

    /// Returns the seat currently leading on wins (lowest seat on ties).
    #[must_use]
    pub fn winner(&self) -> Seat {
        leading_seat(&self.wins())
    }

    /// Returns the end-of-game summary for the rounds played so far.
    #[must_use]
    pub fn result(&self) -> GameResult {
        let wins = self.wins();
        GameResult {
            rounds_played: self.rounds_played,
            wins,
            winner: leading_seat(&wins),
            stopped_early: self.state == GameState::Finished && self.rounds_played < MAX_ROUNDS,
        }
    }
}
