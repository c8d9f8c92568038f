//! tictactoe - console driver for the tic-tac-toe backend.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_backend::{App, BackendConfig, console, init_tracing, script};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BackendConfig::load(cli.config.as_deref())?;
    init_tracing(&config);

    match cli.command {
        Command::Play => run_play(&config),
        Command::Moves { indices } => run_moves(&config, &indices),
        Command::Schema => run_schema(&config),
    }
}

/// Interactive game on stdin/stdout.
#[instrument(skip_all)]
fn run_play(config: &BackendConfig) -> Result<()> {
    info!("Starting console session");
    let mut app = App::new();
    let stdin = std::io::stdin();
    console::run(&mut app, config, stdin.lock(), std::io::stdout().lock())
}

/// Scripted moves; the final state goes to stdout.
fn run_moves(config: &BackendConfig, indices: &[i64]) -> Result<()> {
    let mut app = App::new();
    script::run_moves(&mut app, config, indices, std::io::stdout().lock())
}

/// JSON Schema of the state record front ends consume.
fn run_schema(config: &BackendConfig) -> Result<()> {
    script::write_schema(config, std::io::stdout().lock())
}
