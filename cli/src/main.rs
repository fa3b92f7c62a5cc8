// SPDX-License-Identifier: MIT OR Apache-2.0

//! Checkers CLI - console frontend for the rules engine
//!
//! Renders the board as text, reads moves from stdin and plays the other
//! side with the uniform-random opponent after a short "thinking" pause.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use checkers_core::engine::{PlayerBackend, RandomPlayer};
use checkers_core::{Game, Move, Side};
use clap::{Parser, ValueEnum};
use rand::Rng;
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "checkers-cli",
    about = "Console checkers against a uniform-random opponent",
    version
)]
struct Args {
    /// Board size
    #[clap(short, long, default_value = "8")]
    size: u8,

    /// Number of populated rows on each side at the start
    #[clap(short = 'd', long, default_value = "3")]
    start_depth: u8,

    /// Which side the automated opponent plays
    #[clap(long, value_enum, default_value = "dark")]
    bot: BotSeat,

    /// Average bot think time in seconds
    #[clap(long, default_value = "1.0")]
    think_time: f32,

    /// Seed for the bot's move selection (random when omitted)
    #[clap(long)]
    seed: Option<u64>,
}

/// Who the automated opponent plays, if anyone
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BotSeat {
    /// Two humans at the keyboard
    Off,
    /// Bot plays Light (moves first)
    Light,
    /// Bot plays Dark
    Dark,
}

impl BotSeat {
    fn side(self) -> Option<Side> {
        match self {
            BotSeat::Off => None,
            BotSeat::Light => Some(Side::Light),
            BotSeat::Dark => Some(Side::Dark),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> Result<()> {
    let mut game =
        Game::new(args.size, args.start_depth).context("invalid board configuration")?;
    let bot_side = args.bot.side();
    let mut bot = match args.seed {
        Some(seed) => RandomPlayer::seeded(seed),
        None => RandomPlayer::from_entropy(),
    };
    let mut jitter = rand::thread_rng();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{game}");
    while !game.is_over() {
        if bot_side == Some(game.turn()) {
            println!("{} is thinking...", game.turn());
            think_pause(args.think_time, &mut jitter);

            // The generator returns a move whenever the game is not over.
            let Some(mv) = bot.next_move(&game) else {
                break;
            };
            println!("{} plays: {mv}", game.turn());
            if let Err(reason) = game.play_move(&mv) {
                tracing::error!(%reason, "generated move was rejected");
                break;
            }
        } else {
            print!("{} to move (e.g. `c2 d3`, `quit`) > ", game.turn());
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Ok(()); // EOF
            };
            let text = line?.trim().to_lowercase();
            if text.is_empty() {
                continue;
            }
            if text == "quit" || text == "exit" {
                return Ok(());
            }

            let mv: Move = match text.parse() {
                Ok(mv) => mv,
                Err(err) => {
                    eprintln!("couldn't parse move: {err}");
                    continue;
                }
            };
            if let Err(reason) = game.play_move(&mv) {
                eprintln!("illegal move: {reason}");
                continue;
            }
        }

        println!("{game}");
    }

    if game.is_over() {
        println!("{}", outcome_banner(game.winner()));
    }
    Ok(())
}

/// Sleep for the configured think time, scaled by a random factor so the
/// bot does not feel metronomic.
fn think_pause<R: Rng>(think_time: f32, rng: &mut R) {
    if think_time <= 0.0 {
        return;
    }
    let factor = rng.gen_range(0.75..=1.25);
    thread::sleep(Duration::from_secs_f32(think_time * factor));
}

fn outcome_banner(winner: Option<Side>) -> String {
    match winner {
        Some(side) => format!("Game Over: {side} Won!"),
        None => "Game Over: Nobody Won!".to_string(),
    }
}
