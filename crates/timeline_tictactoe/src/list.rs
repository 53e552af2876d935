//! The list of independent games.

use crate::session::{GameSession, SessionError};
use crate::view::GameListView;
use crate::{Intent, Position};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// Stable identifier of a game within a [`GameList`].
///
/// Ids grow strictly and are never reused until the list is reset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    /// Wraps a raw id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Reasons a list operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ListError {
    /// No game with this id is open.
    #[display("No game #{}", _0)]
    UnknownGame(GameId),

    /// The game rejected the operation.
    #[display("{}", _0)]
    Session(SessionError),
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListError::UnknownGame(_) => None,
            ListError::Session(err) => Some(err),
        }
    }
}

impl From<SessionError> for ListError {
    fn from(err: SessionError) -> Self {
        ListError::Session(err)
    }
}

/// Result of dispatching one [`Intent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// State changed.
    Applied,
    /// A new game was opened.
    Added(GameId),
    /// Nothing changed; the intent was not legal.
    Rejected(ListError),
}

/// Ordered collection of games keyed by [`GameId`].
///
/// Iteration order is id order, which is also insertion order.
#[derive(Debug, Clone, Default)]
pub struct GameList {
    games: BTreeMap<GameId, GameSession>,
    next_id: u64,
}

impl GameList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a fresh game and returns its id.
    #[instrument(skip(self), fields(next_id = self.next_id))]
    pub fn add_game(&mut self) -> GameId {
        let id = GameId(self.next_id);
        self.games.insert(id, GameSession::new());
        self.next_id += 1;
        info!(game = %id, open = self.games.len(), "Game added");
        id
    }

    /// Removes one game. Its id is not handed out again.
    #[instrument(skip(self))]
    pub fn close_game(&mut self, id: GameId) -> Result<GameSession, ListError> {
        let session = self.games.remove(&id).ok_or(ListError::UnknownGame(id))?;
        info!(open = self.games.len(), "Game closed");
        Ok(session)
    }

    /// Discards every game and restarts ids at 0.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        let discarded = self.games.len();
        self.games.clear();
        self.next_id = 0;
        info!(discarded, "All games reset");
    }

    /// Looks up a game.
    pub fn get(&self, id: GameId) -> Option<&GameSession> {
        self.games.get(&id)
    }

    /// Number of open games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether no games are open.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Open game ids in display order.
    pub fn ids(&self) -> Vec<GameId> {
        self.games.keys().copied().collect()
    }

    /// Iterates games in display order.
    pub fn iter(&self) -> impl Iterator<Item = (GameId, &GameSession)> {
        self.games.iter().map(|(id, session)| (*id, session))
    }

    /// Plays a move in one game.
    pub fn play(&mut self, id: GameId, pos: Position) -> Result<(), ListError> {
        self.session_mut(id)?.play(pos)?;
        Ok(())
    }

    /// Moves one game's display to a recorded step.
    pub fn jump_to(&mut self, id: GameId, step: usize) -> Result<(), ListError> {
        self.session_mut(id)?.jump_to(step)?;
        Ok(())
    }

    /// Applies one intent from the renderer.
    ///
    /// Illegal intents are reported as [`DispatchOutcome::Rejected`] and
    /// leave the list unchanged.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> DispatchOutcome {
        let result = match intent {
            Intent::CellClick { game, position } => self.play(game, position),
            Intent::MoveSelect { game, step } => self.jump_to(game, step),
            Intent::AddGame => return DispatchOutcome::Added(self.add_game()),
            Intent::CloseGame { game } => self.close_game(game).map(|_| ()),
            Intent::ResetAll => {
                self.reset_all();
                Ok(())
            }
        };

        match result {
            Ok(()) => {
                debug!("Intent applied");
                DispatchOutcome::Applied
            }
            Err(err) => {
                warn!(error = %err, "Intent rejected");
                DispatchOutcome::Rejected(err)
            }
        }
    }

    /// Builds the view tree for every open game.
    pub fn view(&self) -> GameListView {
        GameListView::new(
            self.iter().map(|(id, session)| session.view(id)).collect(),
            Intent::AddGame,
            Intent::ResetAll,
        )
    }

    fn session_mut(&mut self, id: GameId) -> Result<&mut GameSession, ListError> {
        self.games.get_mut(&id).ok_or(ListError::UnknownGame(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_list_error_wraps_session_error() {
        let err = ListError::from(SessionError::CellOccupied(Position::Center));
        assert_eq!(err.to_string(), "Square Center is already occupied");
        let source = err.source().expect("session error is the source");
        assert_eq!(source.to_string(), err.to_string());
        assert!(ListError::UnknownGame(GameId::new(3)).source().is_none());
        assert_eq!(ListError::UnknownGame(GameId::new(3)).to_string(), "No game #3");
    }

    #[test]
    fn test_ids_increase() {
        let mut list = GameList::new();
        assert_eq!(list.add_game(), GameId::new(0));
        assert_eq!(list.add_game(), GameId::new(1));
        assert_eq!(list.ids(), vec![GameId::new(0), GameId::new(1)]);
    }

    #[test]
    fn test_closed_id_not_reused() {
        let mut list = GameList::new();
        let first = list.add_game();
        let second = list.add_game();
        list.close_game(second).expect("open game");
        assert_eq!(list.add_game(), GameId::new(2));
        assert_eq!(list.ids(), vec![first, GameId::new(2)]);
    }

    #[test]
    fn test_close_unknown_game() {
        let mut list = GameList::new();
        assert_eq!(
            list.close_game(GameId::new(7)).err(),
            Some(ListError::UnknownGame(GameId::new(7)))
        );
    }

    #[test]
    fn test_games_are_independent() {
        let mut list = GameList::new();
        let a = list.add_game();
        let b = list.add_game();
        list.play(a, Position::Center).expect("legal");
        assert_eq!(list.get(a).map(|s| s.current_step()), Some(1));
        assert_eq!(list.get(b).map(|s| s.current_step()), Some(0));
    }

    #[test]
    fn test_dispatch_rejects_unknown_game() {
        let mut list = GameList::new();
        let outcome = list.dispatch(Intent::MoveSelect {
            game: GameId::new(3),
            step: 0,
        });
        assert_eq!(
            outcome,
            DispatchOutcome::Rejected(ListError::UnknownGame(GameId::new(3)))
        );
    }
}
