//! Non-interactive commands: scripted moves and the wire schema.

use crate::app::App;
use crate::command::{Response, to_json};
use crate::config::BackendConfig;
use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_engine::GameStateView;
use tracing::{info, instrument};

/// Applies `indices` to `app` and writes the resulting record as JSON.
///
/// On the first rejected move the error record is written instead, and the
/// rejection is returned so the caller can exit non-zero.
#[instrument(skip(app, config, output))]
pub fn run_moves(
    app: &mut App,
    config: &BackendConfig,
    indices: &[i64],
    mut output: impl Write,
) -> Result<()> {
    match app.play_sequence(indices) {
        Ok(state) => {
            info!(moves = indices.len(), "Scripted game applied");
            writeln!(output, "{}", to_json(&Response::from(state), config)?)?;
            Ok(())
        }
        Err(err) => {
            writeln!(output, "{}", to_json(&Response::from(err.source), config)?)?;
            Err(err).context("scripted game stopped")
        }
    }
}

/// Writes the JSON Schema of [`GameStateView`].
#[instrument(skip_all)]
pub fn write_schema(config: &BackendConfig, mut output: impl Write) -> Result<()> {
    let schema = schemars::schema_for!(GameStateView);
    writeln!(output, "{}", to_json(&schema, config).context("serializing schema")?)?;
    Ok(())
}
