//! Application state for the terminal host.

use crate::config::TuiConfig;
use crate::input::{move_cursor, KeyCommand};
use timeline_tictactoe::{DispatchOutcome, GameId, GameList, Intent, Position};
use tracing::{debug, info, instrument};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep processing events.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Host state: the games plus which one has focus.
#[derive(Debug)]
pub struct App {
    games: GameList,
    selected: Option<GameId>,
    cursor: Position,
    show_coordinates: bool,
}

impl App {
    /// Creates the app with the configured number of games open.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        let mut games = GameList::new();
        for _ in 0..*config.initial_games() {
            games.add_game();
        }
        let selected = games.ids().first().copied();
        info!(open = games.len(), "App created");
        Self {
            games,
            selected,
            cursor: Position::Center,
            show_coordinates: *config.show_coordinates(),
        }
    }

    /// The open games.
    pub fn games(&self) -> &GameList {
        &self.games
    }

    /// The focused game.
    pub fn selected(&self) -> Option<GameId> {
        self.selected
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether move labels show coordinates.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Applies one key command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: KeyCommand) -> Flow {
        match command {
            KeyCommand::Quit => return Flow::Quit,
            KeyCommand::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            KeyCommand::PlayCursor => self.play_at(self.cursor),
            KeyCommand::PlayAt(position) => {
                self.cursor = position;
                self.play_at(position);
            }
            KeyCommand::NextGame => self.cycle_selection(true),
            KeyCommand::PreviousGame => self.cycle_selection(false),
            KeyCommand::StepBack => self.step_by(-1),
            KeyCommand::StepForward => self.step_by(1),
            KeyCommand::AddGame => {
                if let DispatchOutcome::Added(id) = self.games.dispatch(Intent::AddGame) {
                    self.selected = Some(id);
                }
            }
            KeyCommand::CloseGame => self.close_selected(),
            KeyCommand::ResetAll => {
                self.games.dispatch(Intent::ResetAll);
                self.selected = None;
            }
        }
        Flow::Continue
    }

    fn play_at(&mut self, position: Position) {
        if let Some(game) = self.selected {
            self.games.dispatch(Intent::CellClick { game, position });
        }
    }

    fn step_by(&mut self, delta: isize) {
        let Some(game) = self.selected else {
            return;
        };
        let Some(current) = self.games.get(game).map(|s| s.current_step()) else {
            return;
        };
        // Stepping before the start is ignored; past the end is rejected by the session.
        if let Some(step) = current.checked_add_signed(delta) {
            self.games.dispatch(Intent::MoveSelect { game, step });
        }
    }

    fn close_selected(&mut self) {
        let Some(game) = self.selected else {
            return;
        };
        let ids = self.games.ids();
        let index = ids.iter().position(|id| *id == game).unwrap_or(0);
        self.games.dispatch(Intent::CloseGame { game });

        let remaining = self.games.ids();
        self.selected = remaining
            .get(index)
            .or_else(|| remaining.last())
            .copied();
        debug!(selected = ?self.selected, "Selection after close");
    }

    fn cycle_selection(&mut self, forward: bool) {
        let ids = self.games.ids();
        if ids.is_empty() {
            self.selected = None;
            return;
        }
        let current = self
            .selected
            .and_then(|id| ids.iter().position(|other| *other == id));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % ids.len(),
            (Some(i), false) => (i + ids.len() - 1) % ids.len(),
        };
        self.selected = Some(ids[next]);
    }
}
