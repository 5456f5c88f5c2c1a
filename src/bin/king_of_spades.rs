//! Interactive console table for King of Spades.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use king_of_spades::{ConsoleTable, Game, GameOptions};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "king-of-spades")]
#[command(about = "Four players, one deck: the highest card takes the round")]
struct Args {
    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Deal the deck in construction order instead of shuffling
    #[arg(long)]
    no_shuffle: bool,

    /// Play all rounds without prompting
    #[arg(long)]
    auto: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!(seed, shuffle = !args.no_shuffle, "starting game");

    let options = GameOptions::default()
        .with_seed(seed)
        .with_shuffle(!args.no_shuffle);
    let mut game = Game::new(options);

    let mut table =
        ConsoleTable::new(io::stdin().lock(), io::stdout().lock()).with_prompt(!args.auto);

    match game.run(&mut table) {
        Ok(result) => {
            info!(
                winner = %result.winner,
                rounds_played = result.rounds_played,
                stopped_early = result.stopped_early,
                "game over"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "game aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
