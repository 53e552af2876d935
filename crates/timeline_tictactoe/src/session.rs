//! A single game with its full move history.
//!
//! A [`GameSession`] records every board it has shown. Jumping to an
//! earlier step only moves the cursor; the abandoned future is dropped
//! the next time a move is played from that step.

use crate::rules::{check_winner, is_full, WinningLine};
use crate::{Board, GameStatus, Player, Position};
use tracing::{debug, instrument};

/// Reasons a session operation was rejected.
///
/// A rejected operation leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    CellOutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameDecided(Player),

    /// Step outside the recorded history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded entries.
        len: usize,
    },
}

impl std::error::Error for SessionError {}

/// One independent tic-tac-toe game with time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    /// Board snapshots; entry 0 is the empty board.
    history: Vec<Board>,
    /// Index into `history` of the displayed board.
    current_step: usize,
    /// Completed line on the displayed board.
    winning_line: Option<WinningLine>,
}

impl GameSession {
    /// Creates a session at the game start.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
            winning_line: None,
        }
    }

    /// All recorded boards, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed board.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Completed line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.winning_line {
            GameStatus::Won(line.player())
        } else if is_full(self.current_board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_player())
        }
    }

    /// Status line shown above the move list.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Plays the next player's mark at a board index (0-8).
    pub fn play_index(&mut self, index: usize) -> Result<(), SessionError> {
        let pos = Position::from_index(index).ok_or(SessionError::CellOutOfBounds(index))?;
        self.play(pos)
    }

    /// Plays the next player's mark at `pos`.
    ///
    /// Any steps after the displayed one are discarded before the new
    /// board is appended.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn play(&mut self, pos: Position) -> Result<(), SessionError> {
        let board = *self.current_board();
        if let Some(line) = check_winner(&board) {
            debug!(winner = %line.player(), "Move rejected, game decided");
            return Err(SessionError::GameDecided(line.player()));
        }
        if !board.is_empty(pos) {
            debug!("Move rejected, square occupied");
            return Err(SessionError::CellOccupied(pos));
        }

        let player = self.next_player();
        let next_board = board.with_mark(pos, player);
        let mut history = self.history[..=self.current_step].to_vec();
        history.push(next_board);

        *self = Self {
            current_step: history.len() - 1,
            winning_line: check_winner(&next_board),
            history,
        };

        debug!(
            %player,
            step = self.current_step,
            status = %self.status(),
            "Move applied"
        );
        Ok(())
    }

    /// Displays the board recorded at `step`.
    ///
    /// The winning line is recomputed from that board, so jumping onto a
    /// finished position shows its winner immediately.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), SessionError> {
        let board = self.board_at(step)?;
        let winning_line = check_winner(board);
        self.current_step = step;
        self.winning_line = winning_line;
        debug!(next = %self.next_player(), "Jumped");
        Ok(())
    }

    /// Position changed by the move that produced `step`.
    ///
    /// Returns `Ok(None)` for step 0.
    pub fn move_at(&self, step: usize) -> Result<Option<Position>, SessionError> {
        let board = self.board_at(step)?;
        if step == 0 {
            return Ok(None);
        }
        Ok(self.history[step - 1].diff(board).first().copied())
    }

    /// Label for the history entry at `step`.
    ///
    /// `"Go to game start"` for step 0, otherwise
    /// `"Go to move #k (row, col)"` with a one-based coordinate.
    pub fn move_label(&self, step: usize) -> Result<String, SessionError> {
        let plain = self.move_label_plain(step)?;
        let label = match self.move_at(step)? {
            None => plain,
            Some(pos) => {
                let (row, col) = pos.coordinate();
                format!("{} ({}, {})", plain, row, col)
            }
        };
        Ok(label)
    }

    /// Label for `step` without the coordinate annotation.
    pub fn move_label_plain(&self, step: usize) -> Result<String, SessionError> {
        self.board_at(step)?;
        if step == 0 {
            Ok("Go to game start".to_string())
        } else {
            Ok(format!("Go to move #{}", step))
        }
    }

    /// Labels for every recorded step, in order.
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.history.len())
            .filter_map(|step| self.move_label(step).ok())
            .collect()
    }

    fn board_at(&self, step: usize) -> Result<&Board, SessionError> {
        self.history.get(step).ok_or(SessionError::StepOutOfRange {
            step,
            len: self.history.len(),
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(indices: &[usize]) -> GameSession {
        let mut session = GameSession::new();
        for &index in indices {
            session.play_index(index).expect("legal move");
        }
        session
    }

    #[test]
    fn test_new_session_starts_empty() {
        let session = GameSession::new();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_step(), 0);
        assert_eq!(session.next_player(), Player::X);
        assert_eq!(session.status_text(), "Next player: X");
    }

    #[test]
    fn test_play_out_of_bounds() {
        let mut session = GameSession::new();
        assert_eq!(session.play_index(9), Err(SessionError::CellOutOfBounds(9)));
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_move_on_decided_game_rejected() {
        let mut session = played(&[0, 3, 1, 4, 2]);
        let before = session.clone();
        assert_eq!(session.play_index(8), Err(SessionError::GameDecided(Player::X)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_jump_recomputes_winning_line() {
        let mut session = played(&[0, 3, 1, 4, 2]);
        session.jump_to(4).expect("in range");
        assert_eq!(session.winning_line(), None);
        session.jump_to(5).expect("in range");
        assert_eq!(session.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut session = played(&[4]);
        let before = session.clone();
        assert_eq!(
            session.jump_to(2),
            Err(SessionError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_move_label_coordinates() {
        let session = played(&[4, 5]);
        assert_eq!(session.move_label(0).as_deref(), Ok("Go to game start"));
        assert_eq!(session.move_label(1).as_deref(), Ok("Go to move #1 (2, 2)"));
        assert_eq!(session.move_label(2).as_deref(), Ok("Go to move #2 (2, 3)"));
        assert!(session.move_label(3).is_err());
    }

    #[test]
    fn test_move_label_plain_omits_coordinates() {
        let session = played(&[4, 5]);
        assert_eq!(session.move_label_plain(0).as_deref(), Ok("Go to game start"));
        assert_eq!(session.move_label_plain(2).as_deref(), Ok("Go to move #2"));
        assert_eq!(
            session.move_label_plain(3),
            Err(SessionError::StepOutOfRange { step: 3, len: 3 })
        );
    }
}
