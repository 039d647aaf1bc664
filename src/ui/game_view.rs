use crate::game::{GameState, GameStatus, Player, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

/// Render the whole game screen. Returns the inner board area for mouse
/// hit-testing.
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: Position,
    message: &Option<String>,
    game_mode: &str,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(17),    // Board
            Constraint::Length(3),  // Message
            Constraint::Length(3),  // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, game_mode, chunks[0]);
    let cursor = (!game_state.is_terminal()).then_some(cursor);
    let board_area = board_widget::render_board(frame, game_state, cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
    board_area
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Black => Color::Gray,
        Player::White => Color::White,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, game_mode: &str, area: Rect) {
    let moves = game_state.move_history().len();
    let status = game_state.status();
    let (text, color) = match (status, status.winner()) {
        (GameStatus::InProgress, _) => {
            let player = game_state.current_player();
            (
                format!(
                    "Current Player: {}  |  Move {}  |  {}",
                    player.name(),
                    moves + 1,
                    game_mode
                ),
                player_color(player),
            )
        }
        (_, Some(winner)) => (
            format!(
                "Game Over: {} wins in {} moves  |  {}",
                winner.name(),
                moves,
                game_mode
            ),
            Color::LightRed,
        ),
        _ => (format!("Game Over: Draw  |  {}", game_mode), Color::Yellow),
    };

    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Gomoku"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "Arrows/hjkl: Move  |  Enter/Click: Place  |  U: Undo  |  R: Restart  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
