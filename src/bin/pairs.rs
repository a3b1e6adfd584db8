//! Headless driver: plays rounds with a simulated player and prints results.
//!
//! Set `RUST_LOG=rust_pairs=debug` to trace every pick and timer.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rust_pairs::agent::{play_round, MemoryAgent, PlayConfig};
use rust_pairs::core::{ConfigError, RoundConfig, STANDARD_PAIRS};
use rust_pairs::round::{Game, Outcome};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for dealing and for the simulated player
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of distinct identities (pairs) on the table
    #[arg(long, default_value_t = STANDARD_PAIRS)]
    pairs: u16,

    /// Starting countdown in seconds
    #[arg(long, default_value_t = 90)]
    countdown: u32,

    /// Probability the player remembers a card it saw (0.0 - 1.0)
    #[arg(long, default_value_t = 0.7)]
    recall: f64,

    /// Virtual milliseconds the player spends before each pick
    #[arg(long, default_value_t = 600)]
    think_ms: u64,

    /// Rounds to play; each one after the first is a reset
    #[arg(long, default_value_t = 1)]
    rounds: u32,
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = RoundConfig::with_pairs(cli.pairs).with_countdown(cli.countdown);
    let mut game = Game::new(config, cli.seed)?;
    let mut agent = MemoryAgent::new(cli.recall, game.fork_rng());
    let play = PlayConfig::new().with_think_time(Duration::from_millis(cli.think_ms));

    let mut wins = 0;
    for round in 1..=cli.rounds {
        if round > 1 {
            game.reset();
            agent.forget();
        }

        let report = play_round(&mut game, &mut agent, &play);
        let result = match report.outcome {
            Some(Outcome::Win) => {
                wins += 1;
                "You win the game!!"
            }
            Some(Outcome::Lose) => "Game Over!",
            None => "Unfinished",
        };

        println!(
            "round {round}: {result} score={} time_left={}s picks={} mismatches={}",
            report.score, report.time_remaining, report.picks, report.mismatches
        );
    }

    game.teardown();
    println!("won {wins} of {} rounds", cli.rounds);
    Ok(())
}
