//! Stateless UI rendering for tic-tac-toe.
//!
//! Every frame re-projects the game through [`tictactoe::GameState::view`];
//! nothing derived is carried between frames.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe::{Cell, GameView, Square, Symbol};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.game().view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(15),   // Players, board and log
            Constraint::Length(4), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    let game_column = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(11)])
        .split(body[0]);

    draw_players(frame, game_column[0], app, &view);
    draw_board(frame, game_column[1], &view, app.cursor());
    draw_log(frame, body[1], &view);
    draw_status(frame, chunks[2], app);

    if view.is_over() {
        draw_game_over(frame, area, &view);
    }
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let lines: Vec<Line> = Symbol::iter()
        .map(|symbol| {
            let active = !view.is_over() && *view.active_symbol() == symbol;
            let marker = if active { "▶ " } else { "  " };
            let name_style = if active {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let name = match app.editor() {
                Some(editor) if editor.symbol() == symbol => Span::styled(
                    format!("[{}_]", editor.buffer()),
                    Style::default().fg(Color::Black).bg(Color::White),
                ),
                _ => Span::styled(view.players().name(symbol).to_string(), name_style),
            };

            Line::from(vec![
                Span::raw(marker),
                name,
                Span::raw("  "),
                Span::styled(symbol.to_string(), symbol_style(symbol)),
            ])
        })
        .collect();

    let players = Paragraph::new(lines).block(Block::default().title("Players").borders(Borders::ALL));
    frame.render_widget(players, area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Square) {
    let board_area = center_rect(area, 41, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..Square::SIDE {
        draw_row(frame, rows[row * 2], view, cursor, row);
        if row < Square::SIDE - 1 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &GameView, cursor: Square, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for col in 0..Square::SIDE {
        let square = Square::ALL[row * Square::SIDE + col];
        draw_cell(frame, cols[col * 2], view, cursor, square);
        if col < Square::SIDE - 1 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, cursor: Square, square: Square) {
    let (text, base_style) = match view.board().get(square) {
        Cell::Empty => (
            (square.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(symbol) => (symbol.to_string(), symbol_style(symbol)),
    };

    let on_winning_line = view
        .winning_line()
        .is_some_and(|line| line.contains(square));

    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if square == cursor && !view.is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let cell = Paragraph::new(vec![
        Line::from(Span::styled("             ", style)),
        Line::from(Span::styled(format!("{:^13}", text), style)),
        Line::from(Span::styled("             ", style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_log(frame: &mut Frame, area: Rect, view: &GameView) {
    let items: Vec<ListItem> = view
        .log()
        .iter()
        .map(|mv| ListItem::new(Line::from(Span::styled(mv.to_string(), symbol_style(mv.player)))))
        .collect();

    let log = List::new(items).block(Block::default().title("Log").borders(Borders::ALL));
    frame.render_widget(log, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let help = if app.editor().is_some() {
        "type a name · Backspace delete · Enter save · Esc cancel"
    } else {
        "arrows move · Enter/Space or 1-9 place · x/o rename · r rematch · q quit"
    };

    let status = Paragraph::new(vec![
        Line::from(Span::styled(
            app.status_message().to_string(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_game_over(frame: &mut Frame, area: Rect, view: &GameView) {
    let popup = center_rect(area, 34, 7);

    let outcome = match view.winner() {
        Some(winner) => format!("{} won!", winner),
        None => "It's a draw!".to_string(),
    };

    let text = vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(outcome),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'r' for a rematch",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let overlay = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, popup);
    frame.render_widget(overlay, popup);
}

fn symbol_style(symbol: Symbol) -> Style {
    let color = match symbol {
        Symbol::X => Color::Blue,
        Symbol::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
