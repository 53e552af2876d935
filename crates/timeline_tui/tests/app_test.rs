//! Tests for key handling in the terminal host.

use crossterm::event::KeyCode;
use timeline_tictactoe::{GameId, Player, Position, Square};
use timeline_tui::{command_for, App, Flow, KeyCommand, TuiConfig};

fn press(app: &mut App, key: KeyCode) -> Flow {
    let command = command_for(key).expect("mapped key");
    app.handle(command)
}

#[test]
fn test_startup_opens_configured_games() {
    let app = App::new(&TuiConfig::default().with_initial_games(3));
    assert_eq!(app.games().len(), 3);
    assert_eq!(app.selected(), Some(GameId::new(0)));
}

#[test]
fn test_cursor_play_places_mark() {
    let mut app = App::new(&TuiConfig::default());
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.cursor(), Position::TopLeft);
    press(&mut app, KeyCode::Enter);

    let session = app.games().get(GameId::new(0)).expect("open game");
    assert_eq!(
        session.current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_history_keys_jump_and_stop_at_start() {
    let mut app = App::new(&TuiConfig::default());
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('['));
    press(&mut app, KeyCode::Char('['));
    press(&mut app, KeyCode::Char('['));

    let session = app.games().get(GameId::new(0)).expect("open game");
    assert_eq!(session.current_step(), 0);
    assert_eq!(session.history().len(), 3);

    press(&mut app, KeyCode::Char(']'));
    press(&mut app, KeyCode::Char(']'));
    press(&mut app, KeyCode::Char(']'));
    let session = app.games().get(GameId::new(0)).expect("open game");
    assert_eq!(session.current_step(), 2);
}

#[test]
fn test_add_close_and_reset() {
    let mut app = App::new(&TuiConfig::default());
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.selected(), Some(GameId::new(1)));

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.selected(), Some(GameId::new(0)));

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.games().ids(), vec![GameId::new(1)]);
    assert_eq!(app.selected(), Some(GameId::new(1)));

    press(&mut app, KeyCode::Char('R'));
    assert!(app.games().is_empty());
    assert_eq!(app.selected(), None);

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.selected(), Some(GameId::new(0)));
}

#[test]
fn test_play_without_games_is_ignored() {
    let mut app = App::new(&TuiConfig::default().with_initial_games(0));
    assert_eq!(press(&mut app, KeyCode::Enter), Flow::Continue);
    assert!(app.games().is_empty());
}

#[test]
fn test_quit_keys() {
    let mut app = App::new(&TuiConfig::default());
    assert_eq!(app.handle(KeyCommand::Quit), Flow::Quit);
    assert_eq!(press(&mut app, KeyCode::Esc), Flow::Quit);
    assert_eq!(command_for(KeyCode::Char('z')), None);
}
