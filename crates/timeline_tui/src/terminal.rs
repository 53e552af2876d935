//! Terminal setup and the event loop.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::app::{App, Flow};
use crate::config::TuiConfig;
use crate::input::command_for;
use crate::ui;

/// Runs the terminal UI until the user quits.
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Timeline Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut terminal = restore_on_err(open_terminal(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let mut app = App::new(config);
    let res = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("TUI exited");
    res
}

fn open_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Runs `restore` when setup failed, then hands the result back.
fn restore_on_err<T>(res: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if let Err(err) = &res {
        error!(error = ?err, "Terminal setup failed");
        restore();
    }
    res
}

#[instrument(skip_all)]
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(command) = command_for(key.code) else {
            debug!(key = ?key.code, "Unmapped key");
            continue;
        };
        if app.handle(command) == Flow::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_when_setup_fails() {
        let restored = Cell::new(false);
        let res: Result<()> = restore_on_err(Err(anyhow::anyhow!("no tty")), || restored.set(true));
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_restore_skipped_when_setup_succeeds() {
        let restored = Cell::new(false);
        let res = restore_on_err(Ok(7), || restored.set(true));
        assert_eq!(res.ok(), Some(7));
        assert!(!restored.get());
    }
}
