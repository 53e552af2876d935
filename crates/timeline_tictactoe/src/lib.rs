//! Timeline tic-tac-toe - independent games with move history and replay.
//!
//! # Architecture
//!
//! - **Rules**: pure winner and draw detection over one board
//! - **Session**: one game, its history of boards and time travel
//! - **List**: open games keyed by stable ids
//! - **View**: declarative trees for a renderer, carrying [`Intent`]s back
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{GameList, Intent, Position};
//!
//! let mut games = GameList::new();
//! let id = games.add_game();
//! for position in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter] {
//!     games.dispatch(Intent::CellClick { game: id, position });
//! }
//! let view = games.view();
//! assert_eq!(view.games()[0].status_text(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod intent;
mod list;
mod position;
pub mod rules;
mod session;
mod types;
mod view;

pub use intent::Intent;
pub use list::{DispatchOutcome, GameId, GameList, ListError};
pub use position::Position;
pub use rules::{check_winner, is_full, WinningLine};
pub use session::{GameSession, SessionError};
pub use types::{Board, GameStatus, Player, Square};
pub use view::{view_schema, BoardView, CellView, GameListView, GameSessionView, MoveEntryView};
