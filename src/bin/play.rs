use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use broadside::{
    init_logging, AttackOutcome, CellState, Coord, GameConfig, GameError, GameSession,
};

/// Single-player Battleship in the terminal.
#[derive(Parser, Debug)]
#[command(name = "play", about = "Sink the hidden fleet from the command line.")]
struct Args {
    /// Grid rows (letter-labelled, at most 26).
    #[arg(long, default_value_t = 10)]
    rows: usize,
    /// Grid columns.
    #[arg(long, default_value_t = 10)]
    cols: usize,
    /// RNG seed for reproducible fleet placement.
    #[arg(long)]
    seed: Option<u64>,
    /// Reveal ship cells (debugging aid).
    #[arg(long)]
    reveal: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut session = GameSession::new(GameConfig::with_dimensions(args.rows, args.cols));
    session.init(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    println!(
        "Fleet deployed (seed {}). Fire by coordinate, e.g. A1. 'q' quits.",
        seed
    );

    let stdin = io::stdin();
    while !session.finished() {
        print_grid(&session, args.reveal);
        print!("target> ");
        io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading target")? == 0 {
            println!();
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        match session.attack_by_coordinate(input) {
            Ok(outcome) => report(input, outcome),
            Err(err @ (GameError::InvalidCoordinate | GameError::AlreadyAttacked)) => {
                println!("{}", err)
            }
            Err(err) => return Err(anyhow::anyhow!(err)),
        }
    }

    if session.finished() {
        print_grid(&session, true);
        println!("Victory in {} shots.", session.shots_fired());
    }
    println!("{}", serde_json::to_string_pretty(&session.summary())?);
    Ok(())
}

fn report(target: &str, outcome: AttackOutcome) {
    let target = target.to_uppercase();
    match outcome {
        AttackOutcome::Ignored => {}
        AttackOutcome::Miss => println!("{}: splash.", target),
        AttackOutcome::Hit => println!("{}: hit!", target),
        AttackOutcome::Sunk(name) => println!("{}: hit, {} destroyed!", target, name),
        AttackOutcome::Defeated(name) => {
            println!("{}: hit, {} destroyed. The fleet is sunk!", target, name)
        }
    }
}

fn print_grid(session: &GameSession, reveal: bool) {
    let grid = session.grid();
    print!("   ");
    for col in 1..=grid.cols() {
        print!("{:>3}", col);
    }
    println!();
    for (row, label) in session.headers().iter().enumerate() {
        print!(" {} ", label);
        for col in 0..grid.cols() {
            let ch = match grid.state(Coord::new(row, col)) {
                Some(CellState::Hit) => 'X',
                Some(CellState::Miss) => 'o',
                Some(CellState::Ship) if reveal => 'S',
                _ => '.',
            };
            print!("{:>3}", ch);
        }
        println!();
    }
}
