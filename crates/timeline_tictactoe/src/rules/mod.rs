//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. Rules are kept apart from
//! history and session bookkeeping.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, WinningLine, LINES};
