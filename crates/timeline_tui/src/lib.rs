//! Terminal host for timeline tic-tac-toe.
//!
//! Renders [`timeline_tictactoe::GameListView`] trees with ratatui and
//! turns key presses back into intents.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod terminal;
mod ui;

pub use app::{App, Flow};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use input::{command_for, move_cursor, KeyCommand};
pub use logging::{init_file_logging, init_stderr_logging};
pub use terminal::run;
pub use ui::draw;
