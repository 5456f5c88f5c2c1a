//! Hooks for observing and steering a running game.

use crate::hand::Hand;
use crate::options::PLAYER_COUNT;
use crate::result::{GameResult, RoundResult};

/// Receives game events and decides whether play continues.
///
/// Every method has a default, so implementors only override what they need.
/// Closures of type `FnMut(&RoundResult) -> bool` act as a spectator that
/// only answers [`should_continue`](Self::should_continue).
pub trait Spectator {
    /// Called once before the first round with the dealt hands.
    fn on_deal(&mut self, _hands: &[Hand; PLAYER_COUNT]) {}

    /// Called after each round is resolved.
    fn on_round(&mut self, _result: &RoundResult) {}

    /// Called after each round, including the last. Returning `false` ends
    /// the game early.
    fn should_continue(&mut self, _result: &RoundResult) -> bool {
        true
    }

    /// Called once when the game is over.
    fn on_finish(&mut self, _result: &GameResult) {}
}

/// Plays every round without stopping.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoPlay;

impl Spectator for AutoPlay {}

/// Stops the game once the given number of rounds has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter(pub u8);

impl Spectator for StopAfter {
    fn should_continue(&mut self, result: &RoundResult) -> bool {
        result.round < self.0
    }
}

impl<F> Spectator for F
where
    F: FnMut(&RoundResult) -> bool,
{
    fn should_continue(&mut self, result: &RoundResult) -> bool {
        self(result)
    }
}
