//! Time-travel tic-tac-toe - terminal game and headless replay.

use anyhow::Result;
use clap::Parser;
use timetravel_tui::{Cli, CliCommand, Settings};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    match cli.command.unwrap_or_default() {
        CliCommand::Play {
            descending,
            log_file,
            no_mouse,
        } => {
            let settings = settings.with_overrides(descending, log_file, no_mouse);
            timetravel_tui::init_file_logging(settings.log_file())?;
            timetravel_tui::run(&settings)
        }
        CliCommand::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            timetravel_tui::init_stderr_logging();
            let ascending = *settings.order_ascending() && !descending;
            info!(?moves, ?jump, ascending, "Replaying moves");
            let report = timetravel_tui::replay(&moves, jump, ascending)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.to_text());
            }
            Ok(())
        }
    }
}
