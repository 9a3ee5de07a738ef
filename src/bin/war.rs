//! Console front end for War.
//!
//! Each Enter press advances the game one step, like a click on the table.
//! Set `RUST_LOG=debug` to follow every showdown.

use clap::Parser;
use std::io::{BufRead, Write};
use war_engine::{DealMode, RulesEngine, TurnOutcome, WarGameBuilder};

#[derive(Parser, Debug)]
#[command(name = "war", about = "Play the card game War")]
struct Args {
    /// Seed for the deal and reshuffles (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Deal the deck unshuffled
    #[arg(long)]
    ordered: bool,

    /// Cap war escalation per turn
    #[arg(long)]
    max_war_rounds: Option<u32>,

    /// Stop after this many steps
    #[arg(long, default_value_t = 1_000_000)]
    max_turns: usize,

    /// Play to the end without waiting for input
    #[arg(long)]
    auto: bool,
}

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mode = if args.ordered {
        DealMode::Ordered
    } else {
        DealMode::Shuffled
    };
    log::info!("{:<16}{}", "seed", seed);

    let mut game = WarGameBuilder::new()
        .deal_mode(mode)
        .max_war_rounds(args.max_war_rounds)
        .build(seed);

    if args.auto {
        match game.play_to_end(args.max_turns) {
            Some(_) => print!("{}", game.view()),
            None => println!("no winner after {} steps", args.max_turns),
        }
        let stats = game.stats();
        println!(
            "{} turns, {} war rounds, {} cards played",
            stats.turns_played, stats.war_rounds, stats.cards_played
        );
        return Ok(());
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    print!("{}", game.view());
    for _ in 0..args.max_turns {
        print!("[enter] to play, q to quit > ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        if line?.trim() == "q" {
            break;
        }

        if let TurnOutcome::Finished(_) = game.advance() {
            break;
        }
        print!("{}", game.view());
    }
    Ok(())
}
