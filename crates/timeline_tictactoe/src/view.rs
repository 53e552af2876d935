//! Declarative view trees handed to the renderer.
//!
//! Views hold no behaviour. Every clickable element carries the message
//! the renderer should send back when it is activated.

use crate::rules::WinningLine;
use crate::session::GameSession;
use crate::{Board, GameId, GameStatus, Intent, Player, Position};
use derive_getters::Getters;
use derive_new::new;
use schemars::JsonSchema;
use serde::Serialize;

/// One rendered board cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema, Getters)]
pub struct CellView<M> {
    /// Cell location; reading it back yields the original index.
    position: Position,
    /// Mark shown in the cell.
    mark: Option<Player>,
    /// Whether the cell is part of the winning line.
    highlighted: bool,
    /// Message sent when the cell is clicked.
    on_click: M,
}

/// A board laid out as three rows of three cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema, Getters)]
pub struct BoardView<M> {
    /// Rows top to bottom, cells left to right.
    rows: [[CellView<M>; 3]; 3],
}

impl<M> BoardView<M> {
    /// Lays out `board`, flagging cells on `highlight`.
    ///
    /// `on_cell_click` builds the message for each cell. No legality
    /// checks happen here.
    pub fn render(
        board: &Board,
        highlight: Option<&WinningLine>,
        on_cell_click: impl Fn(Position) -> M,
    ) -> Self {
        let rows = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let position = Position::ALL[row * 3 + col];
                CellView {
                    position,
                    mark: board.get(position).player(),
                    highlighted: highlight.is_some_and(|line| line.contains(position)),
                    on_click: on_cell_click(position),
                }
            })
        });
        Self { rows }
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &CellView<M>> {
        self.rows.iter().flatten()
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView<M> {
        &self.rows[pos.row()][pos.col()]
    }
}

/// One entry in a game's move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema, Getters, new)]
pub struct MoveEntryView {
    /// Step this entry jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// Button text without the `(row, col)` annotation.
    plain_label: String,
    /// Cell changed by this move; `None` for the game start.
    changed: Option<Position>,
    /// Whether this step is currently displayed.
    current: bool,
    /// Message sent when the entry is selected.
    on_select: Intent,
}

/// Everything needed to draw one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema, Getters)]
pub struct GameSessionView {
    /// Reconciliation key.
    id: GameId,
    /// Heading, `"Game #<id>"`.
    title: String,
    /// The displayed board.
    board: BoardView<Intent>,
    /// Structured status.
    status: GameStatus,
    /// Status line text.
    status_text: String,
    /// History entries, oldest first.
    moves: Vec<MoveEntryView>,
}

/// Top-level view: all open games plus the list controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema, Getters, new)]
pub struct GameListView {
    /// Open games in display order.
    games: Vec<GameSessionView>,
    /// Message for the "Add game" button.
    add_game: Intent,
    /// Message for the "Reset games" button.
    reset_all: Intent,
}

impl GameSession {
    /// Builds the view for this session under `id`.
    pub fn view(&self, id: GameId) -> GameSessionView {
        let board = BoardView::render(
            self.current_board(),
            self.winning_line().as_ref(),
            |position| Intent::CellClick { game: id, position },
        );

        let moves = self
            .move_labels()
            .into_iter()
            .enumerate()
            .map(|(step, label)| {
                MoveEntryView::new(
                    step,
                    label,
                    self.move_label_plain(step).unwrap_or_default(),
                    self.move_at(step).ok().flatten(),
                    step == self.current_step(),
                    Intent::MoveSelect { game: id, step },
                )
            })
            .collect();

        let status = self.status();
        GameSessionView {
            id,
            title: format!("Game #{}", id),
            board,
            status,
            status_text: status.to_string(),
            moves,
        }
    }
}

/// JSON schema describing [`GameListView`].
pub fn view_schema() -> schemars::Schema {
    schemars::schema_for!(GameListView)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_grid_is_row_major() {
        let view = BoardView::render(&Board::new(), None, |pos| pos.to_index());
        let indices: Vec<usize> = view.cells().map(|cell| *cell.on_click()).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
        assert_eq!(view.rows()[1][2].position(), &Position::MiddleRight);
    }

    #[test]
    fn test_render_without_highlight() {
        let board = Board::new().with_mark(Position::Center, Player::O);
        let view = BoardView::render(&board, None, |_| ());
        assert!(view.cells().all(|cell| !cell.highlighted()));
        assert_eq!(view.cell(Position::Center).mark(), &Some(Player::O));
    }

    #[test]
    fn test_schema_names_list_view() {
        let schema = view_schema();
        assert_eq!(schema.as_value()["title"], "GameListView");
    }
}
