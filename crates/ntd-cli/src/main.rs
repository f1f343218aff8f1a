//! Console game of non-transitive dice with provably fair rolls.

mod commands;
mod config;
mod logging;
mod table;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use config::GameConfig;

#[derive(Parser)]
#[command(
    name = "ntd",
    about = "Non-transitive dice: a two-player game with provably fair rolls",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game against the computer
    Play {
        /// Dice as comma-separated faces, e.g. 2,2,4,4,9,9
        #[arg(allow_hyphen_values = true)]
        dice: Vec<String>,

        /// Read dice from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Minimum number of dice
        #[arg(long, default_value = "3")]
        min_dice: usize,

        /// Number of faces every die must have
        #[arg(long, default_value = "6")]
        faces: usize,
    },

    /// Show the exact win and tie probabilities between dice
    Odds {
        /// Dice as comma-separated faces, e.g. 2,2,4,4,9,9
        #[arg(allow_hyphen_values = true)]
        dice: Vec<String>,

        /// Read dice from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Check a revealed key and value against the HMAC shown earlier
    Verify {
        /// Revealed key, as hex
        #[arg(long)]
        key: String,

        /// Revealed value
        #[arg(long)]
        value: u32,

        /// HMAC shown before your move, as hex
        #[arg(long)]
        hmac: String,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            dice,
            file,
            min_dice,
            faces,
        } => GameConfig::default()
            .with_min_dice(min_dice)
            .with_faces(faces)
            .load_game_dice(&dice, file.as_deref())
            .and_then(|dice| commands::play::run(&dice)),
        Commands::Odds { dice, file, format } => config::load_dice(&dice, file.as_deref())
            .and_then(|dice| commands::odds::run(&dice, &format)),
        Commands::Verify { key, value, hmac } => commands::verify::run(&key, value, &hmac),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
}
