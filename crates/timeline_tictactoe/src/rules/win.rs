//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples, in detection order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three positions holding the same mark along one of [`LINES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct WinningLine {
    cells: [Position; 3],
    player: Player,
}

impl WinningLine {
    /// The three positions of the line.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// The line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }

    /// The player who completed the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Whether `pos` is one of the line's cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Finds the first completed line on the board.
///
/// Lines are checked in [`LINES`] order; on an unreachable board with
/// several completed lines the earliest one is returned.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinningLine {
                    cells: [a, b, c],
                    player,
                })
            }
            _ => None,
        }
    })
}
