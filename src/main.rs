#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::prelude::*;
#[cfg(feature = "std")]
use seabattle::{DEFAULT_BOARD_SIZE, DEFAULT_NUM_SHIPS, DEFAULT_SHIP_LENGTH};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: usize,
    #[arg(long = "ships", default_value_t = DEFAULT_NUM_SHIPS)]
    num_ships: usize,
    #[arg(long, default_value_t = DEFAULT_SHIP_LENGTH)]
    ship_length: usize,
}

#[cfg(feature = "std")]
impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig::new(self.board_size, self.num_ships, self.ship_length)
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively, reading guesses like "B4" from stdin.
    Play {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Print one JSON record per guess instead of the board")]
        json: bool,
    },
    /// Fire at every cell in order and print a JSON summary.
    Sweep {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game, json } => {
            let mut rng = game.rng();
            let state = init_game(game.config(), &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            if json {
                play_json(state)?;
            } else {
                play_text(state)?;
            }
        }
        Commands::Sweep { game } => {
            let mut rng = game.rng();
            let state = init_game(game.config(), &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            sweep(state)?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play_text(mut game: Game) -> anyhow::Result<()> {
    let mut shots = ShotLog::new(game.config().board_size);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", render_grid(&shots));
    print!("Enter a guess: ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match game.submit_guess(line.trim()) {
            Ok(report) => {
                shots.record(&report);
                print!("{}", render_grid(&shots));
                println!("{}", shot_message(&report));
            }
            Err(e) => println!("{}", error_message(&e)),
        }
        if game.status() == GameStatus::Won {
            return Ok(());
        }
        print!("Enter a guess: ");
        stdout.flush()?;
    }
    println!();
    Ok(())
}

#[cfg(feature = "std")]
fn play_json(mut game: Game) -> anyhow::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let record = match game.submit_guess(line.trim()) {
            Ok(report) => json!({
                "valid": true,
                "coordinate": report.coordinate,
                "hit": report.hit,
                "ship_sunk": report.ship_sunk,
                "all_sunk": report.all_sunk,
                "guess_count": report.guess_count,
            }),
            Err(e) => json!({ "valid": false, "error_kind": e }),
        };
        println!("{}", serde_json::to_string(&record)?);
        if game.status() == GameStatus::Won {
            break;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn sweep(mut game: Game) -> anyhow::Result<()> {
    let size = game.config().board_size;
    let mut sunk_events = 0;
    'outer: for row in 0..size {
        for col in 0..size {
            let report = game
                .fire_at(Coordinate::new(row, col))
                .map_err(|e| anyhow::anyhow!(e))?;
            if report.ship_sunk {
                sunk_events += 1;
            }
            if report.all_sunk {
                break 'outer;
            }
        }
    }

    let result = json!({
        "status": game.status(),
        "guesses": game.guess_count(),
        "ships_sunk": game.board().ships_sunk(),
        "sunk_events": sunk_events,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
