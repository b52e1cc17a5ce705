use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use twenty48::engine::{Direction, GameState, DEFAULT_SIZE, INITIAL_TILES};
use twenty48::save;

#[derive(Debug, Parser)]
#[command(name = "twenty48", about = "Play a sliding-tile merge puzzle in the terminal")]
struct Args {
    /// Save file to load when present and to write on `o`
    savefile: Option<PathBuf>,

    /// Rows for a fresh board
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    rows: usize,

    /// Columns for a fresh board
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    cols: usize,

    /// Seed for a fresh game, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    anyhow::ensure!(args.rows > 0 && args.cols > 0, "board dimensions must be non-zero");

    let mut game = if let Some(path) = &args.savefile {
        println!("Attempting to load game from {}..", path.display());
        if path.exists() {
            save::parse_game_file(path)?
        } else {
            println!("No save found, starting a fresh game instead.");
            fresh_game(&args)
        }
    } else {
        println!("Starting a fresh random game...");
        fresh_game(&args)
    };

    let save_path = args
        .savefile
        .clone()
        .unwrap_or_else(|| PathBuf::from(save::DEFAULT_SAVE_PATH));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if game.is_game_over() {
            print!("{game}");
            println!("Game Over!");
            break;
        }
        print!("{game}> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.chars().count() != 1 {
            println!("Command must be one char long.");
            continue;
        }
        match line.as_str() {
            "w" => {
                game.make_move(Direction::Up);
            }
            "a" => {
                game.make_move(Direction::Left);
            }
            "s" => {
                game.make_move(Direction::Down);
            }
            "d" => {
                game.make_move(Direction::Right);
            }
            "o" => match save::write_game_to_path(&save_path, &game) {
                Ok(()) => println!("Saved current state to: {}", save_path.display()),
                Err(e) => eprintln!("Failed to save game: {e}"),
            },
            "q" => break,
            _ => println!(
                "Possible commands:\n w - up\n a - left\n s - down\n d - right\n o - save to file\n q - quit game"
            ),
        }
    }
    Ok(())
}

fn fresh_game(args: &Args) -> GameState {
    let mut game = match args.seed {
        Some(seed) => GameState::with_seed(args.rows, args.cols, seed),
        None => GameState::new(args.rows, args.cols),
    };
    for _ in 0..INITIAL_TILES {
        game.add_tile();
    }
    game
}
