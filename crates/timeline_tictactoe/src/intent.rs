//! User intents routed back from the renderer.

use crate::{GameId, Position};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Every action a renderer can report to the game list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intent {
    /// A board cell was clicked.
    CellClick {
        /// Game owning the board.
        game: GameId,
        /// Clicked cell.
        position: Position,
    },
    /// A history entry was selected.
    MoveSelect {
        /// Game owning the history.
        game: GameId,
        /// Selected step.
        step: usize,
    },
    /// "Add game" was pressed.
    AddGame,
    /// A game was closed.
    CloseGame {
        /// Game to remove.
        game: GameId,
    },
    /// "Reset games" was pressed.
    ResetAll,
}
