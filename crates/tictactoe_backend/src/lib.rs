//! Tic-tac-toe backend for desktop UI shells.
//!
//! # Architecture
//!
//! - **App**: owns the rules engine and exposes the four operations a shell
//!   calls (new game, initial state, make move, reset)
//! - **Command**: JSON request/response convention for those operations
//! - **Console**: line-oriented driver used in place of a desktop shell
//! - **Script**: non-interactive moves and schema output for the binary
//!
//! # Example
//!
//! ```
//! use tictactoe_backend::{App, Request, Response};
//!
//! let mut app = App::new();
//! let response = app.dispatch(Request::MakeMove { index: 4 });
//! assert!(!response.is_error());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod command;
mod config;
mod logging;

pub mod console;
pub mod script;

pub use app::{App, SequenceError};
pub use command::{ErrorBody, Request, Response, to_json};
pub use config::{BackendConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use logging::init_tracing;
