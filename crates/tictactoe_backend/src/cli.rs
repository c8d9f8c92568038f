//! Command-line interface for the tictactoe backend.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe backend - console play, scripted moves, wire schema
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe rules engine backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game in the terminal
    Play,

    /// Apply cell indices to a fresh game and print the resulting state as JSON
    Moves {
        /// Cell indices (0-8, row-major) in play order
        #[arg(allow_negative_numbers = true)]
        indices: Vec<i64>,
    },

    /// Print the JSON Schema of the game state record
    Schema,
}
