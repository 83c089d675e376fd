//! Terminal setup and the interactive event loop.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use timetravel_tictactoe::GameController;
use tracing::{error, info, instrument, warn};

use crate::app::{App, Flow};
use crate::{Settings, ui};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back into its normal state when dropped.
///
/// Each restore step runs even if an earlier one fails.
pub struct ScreenGuard<W: Write> {
    out: W,
    mouse: bool,
}

impl<W: Write> ScreenGuard<W> {
    /// Creates a guard that restores `out` without changing it yet.
    pub fn new(out: W, mouse: bool) -> Self {
        Self { out, mouse }
    }

    /// Switches to raw mode and the alternate screen.
    ///
    /// On error the guard still restores whatever was already changed.
    pub fn enter(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen)?;
        if self.mouse {
            execute!(self.out, EnableMouseCapture)?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for ScreenGuard<W> {
    fn drop(&mut self) {
        restore(&mut self.out, self.mouse);
    }
}

/// Leaves raw mode, the alternate screen and mouse capture, logging
/// failures instead of stopping at the first one.
fn restore(out: &mut impl Write, mouse: bool) {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to leave raw mode");
    }
    if mouse {
        if let Err(err) = execute!(out, DisableMouseCapture) {
            warn!(error = %err, "Failed to release mouse");
        }
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, Show) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Restores the terminal before the default panic report is printed.
fn install_panic_hook(mouse: bool) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        restore(&mut io::stdout(), mouse);
        previous(panic);
    }));
}

/// Runs the interactive game until the player quits.
///
/// The terminal is restored on every exit, including setup failures and
/// panics.
#[instrument(skip_all)]
pub fn run(settings: &Settings) -> Result<()> {
    info!(?settings, "Starting terminal game");

    let mouse = *settings.mouse();
    install_panic_hook(mouse);
    let mut guard = ScreenGuard::new(io::stdout(), mouse);
    guard.enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(GameController::with_order(*settings.order_ascending()));
    let res = run_app(&mut terminal, app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal game finished");
    res
}

/// Redraws after every event; the view is rebuilt from state each frame.
fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        let mut clicks = ui::ClickMap::default();
        terminal.draw(|f| clicks = ui::draw(f, &app))?;
        app.set_click_map(clicks);

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if app.handle_event(&event) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";
    const DISABLE_MOUSE: &str = "\x1b[?1000l";

    #[test]
    fn test_guard_restores_screen_on_drop() {
        let mut out = Vec::new();
        drop(ScreenGuard::new(&mut out, true));
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN), "{written:?}");
        assert!(written.contains(SHOW_CURSOR), "{written:?}");
        assert!(written.contains(DISABLE_MOUSE), "{written:?}");
    }

    #[test]
    fn test_guard_without_mouse_leaves_capture_alone() {
        let mut out = Vec::new();
        drop(ScreenGuard::new(&mut out, false));
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(!written.contains(DISABLE_MOUSE));
    }

    /// Writer that rejects everything.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_failed_restore_step_does_not_panic() {
        drop(ScreenGuard::new(BrokenPipe, true));
    }

    fn failing_setup(out: &mut Vec<u8>) -> io::Result<()> {
        let _guard = ScreenGuard::new(out, true);
        Err(io::Error::other("terminal unavailable"))
    }

    #[test]
    fn test_error_after_setup_still_restores() {
        let mut out = Vec::new();
        assert!(failing_setup(&mut out).is_err());
        assert!(String::from_utf8(out).unwrap().contains(LEAVE_ALTERNATE_SCREEN));
    }
}
