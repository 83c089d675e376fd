//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from
//! history bookkeeping so the controller and the view can share them.

pub mod win;

pub use win::{LINES, WinningLine, check_winner};
