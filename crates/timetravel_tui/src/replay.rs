//! Headless replay of a move script.

use serde::Serialize;
use timetravel_tictactoe::{GameController, GameError, GameView, MoveOutcome};
use tracing::{info, instrument, warn};

/// A scripted move the controller did not apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_new::new)]
pub struct IgnoredMove {
    /// Position of the move in the script, starting at 0.
    pub script_index: usize,
    /// Cell index requested.
    pub cell: usize,
    /// Why it was ignored.
    pub reason: String,
}

/// Result of a replay: the final view plus any dropped moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// View of the selected step after the script.
    pub view: GameView,
    /// Moves that were ignored, in script order.
    pub ignored: Vec<IgnoredMove>,
}

impl ReplayReport {
    /// Plain-text report: the view followed by ignored moves.
    pub fn to_text(&self) -> String {
        let mut out = self.view.to_text();
        for ignored in &self.ignored {
            out.push_str(&format!(
                "ignored move {} (cell {}): {}\n",
                ignored.script_index + 1,
                ignored.cell,
                ignored.reason
            ));
        }
        out
    }
}

/// Plays `moves` from an empty board, then optionally selects `jump`.
///
/// # Errors
///
/// Returns [`GameError::StepOutOfRange`] if `jump` is past the recorded history.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(
    moves: &[usize],
    jump: Option<usize>,
    order_ascending: bool,
) -> Result<ReplayReport, GameError> {
    let mut game = GameController::with_order(order_ascending);
    let mut ignored = Vec::new();
    for (script_index, &cell) in moves.iter().enumerate() {
        if let MoveOutcome::Ignored(reason) = game.apply_index(cell) {
            warn!(script_index, cell, %reason, "Scripted move ignored");
            ignored.push(IgnoredMove::new(script_index, cell, reason.to_string()));
        }
    }
    if let Some(step) = jump {
        game.jump_to(step)?;
    }
    info!(status = %game.status(), "Replay finished");
    Ok(ReplayReport {
        view: game.view(),
        ignored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetravel_tictactoe::{Player, Status};

    #[test]
    fn test_replay_reports_winner() {
        let report = replay(&[0, 1, 4, 2, 8], None, true).unwrap();
        assert_eq!(report.view.status, Status::Winner(Player::X));
        assert!(report.ignored.is_empty());
        assert!(report.to_text().contains("Winner: X"));
    }

    #[test]
    fn test_replay_collects_ignored_moves() {
        let report = replay(&[4, 4, 12], None, true).unwrap();
        assert_eq!(report.view.moves.len(), 2);
        assert_eq!(report.ignored.len(), 2);
        assert_eq!(report.ignored[0].script_index, 1);
        assert_eq!(report.ignored[0].reason, "Center is already occupied");
        assert_eq!(report.ignored[1].reason, "index 12 is not a board cell");
        assert!(report.to_text().contains("ignored move 3 (cell 12)"));
    }

    #[test]
    fn test_replay_jump() {
        let report = replay(&[4, 0, 8], Some(1), false).unwrap();
        assert_eq!(report.view.status, Status::NextPlayer(Player::O));
        assert_eq!(report.view.moves[0].step, 3);
        assert!(replay(&[4], Some(5), true).is_err());
    }
}
