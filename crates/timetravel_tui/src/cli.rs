//! Command-line interface for the `timetravel` binary.

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with a clickable, time-travelling move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (ignored if missing)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Start with the move list newest first
        #[arg(long)]
        descending: bool,

        /// Write logs to this file instead of the configured one
        #[arg(long)]
        log_file: Option<std::path::PathBuf>,

        /// Do not capture the mouse
        #[arg(long)]
        no_mouse: bool,
    },

    /// Apply a sequence of moves without a UI and print the result
    Replay {
        /// Cell indices 0-8 in row-major order, X first
        moves: Vec<usize>,

        /// Select this history step after playing the moves
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            descending: false,
            log_file: None,
            no_mouse: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::try_parse_from(["timetravel"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
        assert_eq!(cli.config, std::path::PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::try_parse_from([
            "timetravel",
            "replay",
            "4",
            "0",
            "8",
            "--jump",
            "1",
            "--json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![4, 0, 8],
                jump: Some(1),
                descending: false,
                json: true,
            })
        );
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["timetravel", "play", "--config", "alt.toml"]).unwrap();
        assert_eq!(cli.config, std::path::PathBuf::from("alt.toml"));
    }
}
