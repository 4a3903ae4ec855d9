//! Parlor - Entry Point
//!
//! Loads content from disk, then drives the picture-puzzle or
//! word-scramble game in the terminal, with a small menu when no game
//! is named on the command line.

use clap::{Parser, ValueEnum};
use parlor::content::{load_puzzles, load_scrambles};
use parlor::core::config::{config, set_config, ParlorConfig};
use parlor::core::error::{ParlorError, Result};
use parlor::core::types::GameSummary;
use parlor::puzzle::{PuzzleSession, TileLayout};
use parlor::scramble::ScrambleSession;
use parlor::ui::{self, TerminalGuard};

use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Game {
    Puzzle,
    Scramble,
}

/// Casual picture-tile and word-scramble guessing games
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Casual picture-tile and word-scramble guessing games for the terminal")]
struct Args {
    /// Content directory holding puzzles/ and scrambles/
    #[arg(long, default_value = "content")]
    content_dir: PathBuf,

    /// Run one game directly instead of showing the menu
    #[arg(long, value_enum)]
    game: Option<Game>,

    /// Random seed for deterministic rounds
    #[arg(long)]
    seed: Option<u64>,

    /// Optional TOML settings file overriding the built-in defaults
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("parlor=info")
        .init();

    let args = Args::parse();

    if let Some(path) = &args.settings {
        let text = std::fs::read_to_string(path)?;
        let settings = ParlorConfig::from_toml_str(&text).map_err(ParlorError::ConfigError)?;
        settings.validate().map_err(ParlorError::ConfigError)?;
        if set_config(settings).is_err() {
            tracing::warn!("settings were already fixed, ignoring {}", path.display());
        }
    }

    match args.game {
        Some(game) => {
            let summary = run_game(game, &args)?;
            report(game, summary);
        }
        None => menu_loop(&args)?,
    }

    Ok(())
}

fn menu_loop(args: &Args) -> Result<()> {
    println!();
    println!("=== PARLOR ===");
    println!("Casual guessing games");
    println!();
    println!("  1 / puzzle    - Reassemble a scrambled picture");
    println!("  2 / scramble  - Unscramble a word before the hints give it away");
    println!("  q             - Quit");

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        let game = match input {
            "" => continue,
            "q" | "quit" => break,
            "1" | "puzzle" => Game::Puzzle,
            "2" | "scramble" => Game::Scramble,
            other => {
                println!("Unknown choice '{}'. Enter 1, 2, or q.", other);
                continue;
            }
        };

        match run_game(game, args) {
            Ok(summary) => report(game, summary),
            // Missing content should not kill the menu
            Err(ParlorError::ContentError(message)) => println!("{}", message),
            Err(e) => return Err(e),
        }
    }

    println!("\nGoodbye!");
    Ok(())
}

fn run_game(game: Game, args: &Args) -> Result<GameSummary> {
    match game {
        Game::Puzzle => {
            let dir = args.content_dir.join("puzzles");
            let puzzles = load_puzzles(&dir);
            if puzzles.is_empty() {
                return Err(ParlorError::ContentError(format!(
                    "No playable puzzles under {}.",
                    dir.display()
                )));
            }
            let layouts: Vec<TileLayout> = config()
                .tile_layouts
                .iter()
                .map(|&(rows, cols)| TileLayout::new(rows, cols))
                .collect();
            let mut session = match args.seed {
                Some(seed) => PuzzleSession::with_seed(puzzles, layouts, seed),
                None => PuzzleSession::new(puzzles, layouts),
            };
            let mut term = TerminalGuard::enter()?;
            ui::puzzle::run(&mut term, &mut session)
        }
        Game::Scramble => {
            let dir = args.content_dir.join("scrambles");
            let scrambles = load_scrambles(&dir);
            if scrambles.is_empty() {
                return Err(ParlorError::ContentError(format!(
                    "No playable scrambles under {}.",
                    dir.display()
                )));
            }
            let mut session = match args.seed {
                Some(seed) => ScrambleSession::with_seed(scrambles, seed),
                None => ScrambleSession::new(scrambles),
            };
            let mut term = TerminalGuard::enter()?;
            ui::scramble::run(&mut term, &mut session)
        }
    }
}

fn report(game: Game, summary: GameSummary) {
    let name = match game {
        Game::Puzzle => "Puzzle",
        Game::Scramble => "Word scramble",
    };
    println!(
        "\n{} game over: {} round(s) solved ({}).",
        name, summary.rounds_solved, summary.reason
    );
}
