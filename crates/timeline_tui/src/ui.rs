//! Stateless rendering of the game list view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use timeline_tictactoe::{CellView, GameSessionView, Intent, MoveEntryView, Player, Position};

use crate::app::App;

const HELP: &str =
    "arrows/1-9 move · enter play · tab game · [ ] history · a add · x close · R reset · q quit";

/// Draws the whole screen from the app's current view tree.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Games
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Timeline Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let view = app.games().view();
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(40)])
        .split(chunks[1]);

    draw_game_list(frame, body[0], view.games(), app);

    let selected = app
        .selected()
        .and_then(|id| view.games().iter().find(|game| *game.id() == id));
    match selected {
        Some(game) => draw_game(frame, body[1], game, app),
        None => {
            let empty = Paragraph::new("No games open. Press 'a' to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, body[1]);
        }
    }

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_game_list(frame: &mut Frame, area: Rect, games: &[GameSessionView], app: &App) {
    let items: Vec<ListItem> = games
        .iter()
        .map(|game| {
            let style = if Some(*game.id()) == app.selected() {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(game.title().as_str()).style(style)
        })
        .collect();
    let list = List::new(items).block(Block::default().title("Games").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn draw_game(frame: &mut Frame, area: Rect, game: &GameSessionView, app: &App) {
    let block = Block::default()
        .title(game.title().as_str())
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(23), Constraint::Min(20)])
        .split(inner);

    draw_board(frame, cols[0], game, app.cursor());

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(cols[1]);

    let status = Paragraph::new(game.status_text().as_str())
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(status, info[0]);

    let moves: Vec<ListItem> = game
        .moves()
        .iter()
        .map(|entry| move_item(entry, app.show_coordinates()))
        .collect();
    frame.render_widget(List::new(moves), info[1]);
}

fn move_item(entry: &MoveEntryView, show_coordinates: bool) -> ListItem<'static> {
    let label = if show_coordinates {
        entry.label()
    } else {
        entry.plain_label()
    };
    let text = format!("{:>2}. {}", entry.step() + 1, label);
    let style = if *entry.current() {
        Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
    };
    ListItem::new(text).style(style)
}

fn draw_board(frame: &mut Frame, area: Rect, game: &GameSessionView, cursor: Position) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    for (row, cells) in game.board().rows().iter().enumerate() {
        draw_row(frame, rows[row * 2], cells, cursor);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(rows[row * 2 + 1].width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &[CellView<Intent>; 3], cursor: Position) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for (col, cell) in cells.iter().enumerate() {
        draw_cell(frame, cols[col * 2], cell, cursor);
        if col < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView<Intent>, cursor: Position) {
    let (symbol, mut style) = match cell.mark() {
        None => (" ", Style::default().fg(Color::DarkGray)),
        Some(Player::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Player::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    if *cell.highlighted() {
        style = style.bg(Color::Red).fg(Color::White);
    }
    if *cell.position() == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
