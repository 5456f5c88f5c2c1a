//! Line-oriented console table: prints the game and prompts between rounds.

use std::io::{self, BufRead, Write};

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::game::{Seat, Spectator};
use crate::hand::Hand;
use crate::options::PLAYER_COUNT;
use crate::result::{GameResult, RoundResult};

/// Prompt shown after every round.
pub const PROMPT: &str = "Press E to exit OR any key to Continue...";

/// A [`Spectator`] that writes the game to `W` and reads continue/exit
/// answers from `R`.
///
/// An answer of `E` (either case) ends the game; any other line, including
/// end of input, continues. Only the line ending is stripped, so `" e"` is
/// not an exit.
#[derive(Debug)]
pub struct ConsoleTable<R, W> {
    input: R,
    output: W,
    prompt: bool,
}

impl<R: BufRead, W: Write> ConsoleTable<R, W> {
    /// Creates a table that prompts after every round.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompt: true,
        }
    }

    /// Sets whether the table prompts between rounds. Without prompting
    /// every round is played.
    #[must_use]
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Returns the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = self.output.write_all(text.as_bytes()) {
            tracing::warn!(%err, "console write failed");
        }
    }

    fn emit_line(&mut self, text: &str) {
        self.emit(text);
        self.emit("\n");
    }

    fn read_answer(&mut self) -> io::Result<Option<String>> {
        self.emit(PROMPT);
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Spectator for ConsoleTable<R, W> {
    fn on_deal(&mut self, hands: &[Hand; PLAYER_COUNT]) {
        for seat in Seat::ALL {
            let listing = hands[seat.index()].labeled(seat).to_string();
            self.emit_line(&listing);
        }
        self.emit_line("Let the Game of K\u{2660} begin");
    }

    fn on_round(&mut self, result: &RoundResult) {
        let played: Vec<String> = result.cards.iter().map(ToString::to_string).collect();
        let text = alloc::format!(
            "Round {round}\n{played}\nWinner Card of Round {round}: {card}\nWinner of Round {round}: {winner}!!",
            round = result.round,
            played = played.join(" "),
            card = result.winning_card,
            winner = result.winner,
        );
        self.emit_line(&text);
    }

    fn should_continue(&mut self, result: &RoundResult) -> bool {
        if !self.prompt {
            return true;
        }
        match self.read_answer() {
            Ok(Some(answer)) => !answer.eq_ignore_ascii_case("e"),
            Ok(None) => {
                tracing::debug!(round = result.round, "input closed, continuing");
                true
            }
            Err(err) => {
                tracing::warn!(%err, round = result.round, "reading answer failed, continuing");
                true
            }
        }
    }

    fn on_finish(&mut self, result: &GameResult) {
        let text = alloc::format!(
            "Winner of K\u{2660} is: {} Congratulationsss !!!",
            result.winner
        );
        self.emit_line(&text);
    }
}
