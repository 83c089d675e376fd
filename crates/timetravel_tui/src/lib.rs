//! Terminal frontend for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **Input**: keys and mouse clicks become [`Command`] values
//! - **App**: dispatches commands to the [`GameController`](timetravel_tictactoe::GameController)
//! - **UI**: draws a fresh [`GameView`](timetravel_tictactoe::GameView) each frame and
//!   records which screen regions issue which commands
//! - **Replay**: headless mode printing the view for a move script

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod command;
mod config;
mod error;
pub mod input;
mod logging;
mod replay;
mod terminal;
pub mod ui;

pub use app::{App, Flow, Focus};
pub use cli::{Cli, Command as CliCommand};
pub use command::Command;
pub use config::{DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILE, Settings};
pub use error::ConfigError;
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{IgnoredMove, ReplayReport, replay};
pub use terminal::run;
