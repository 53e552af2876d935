//! Keyboard mapping.

use crossterm::event::KeyCode;
use timeline_tictactoe::Position;

/// What a key press asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Leave the program.
    Quit,
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Play at the cursor.
    PlayCursor,
    /// Play at a specific cell.
    PlayAt(Position),
    /// Select the next game.
    NextGame,
    /// Select the previous game.
    PreviousGame,
    /// Show the previous history step.
    StepBack,
    /// Show the next history step.
    StepForward,
    /// Open a new game.
    AddGame,
    /// Close the selected game.
    CloseGame,
    /// Close every game.
    ResetAll,
}

/// Maps a key to a command, if it has one.
pub fn command_for(key: KeyCode) -> Option<KeyCommand> {
    let command = match key {
        KeyCode::Char('q') | KeyCode::Esc => KeyCommand::Quit,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => KeyCommand::Cursor(key),
        KeyCode::Enter | KeyCode::Char(' ') => KeyCommand::PlayCursor,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            KeyCommand::PlayAt(Position::from_index(index)?)
        }
        KeyCode::Tab => KeyCommand::NextGame,
        KeyCode::BackTab => KeyCommand::PreviousGame,
        KeyCode::Char('[') => KeyCommand::StepBack,
        KeyCode::Char(']') => KeyCommand::StepForward,
        KeyCode::Char('a') => KeyCommand::AddGame,
        KeyCode::Char('x') => KeyCommand::CloseGame,
        KeyCode::Char('R') => KeyCommand::ResetAll,
        _ => return None,
    };
    Some(command)
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
