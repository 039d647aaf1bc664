use crate::ai::{MovePolicy, RandomPolicy};
use crate::config::{AppConfig, GameMode};
use crate::game::{GameState, MoveError, Player, Position, UndoError, BOARD_SIZE};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::board_widget;

pub struct App {
    game_state: GameState,
    mode: GameMode,
    ai_player: Player,
    policy: Box<dyn MovePolicy>,
    frame_interval: Duration,
    cursor: Position,
    /// Inner board area from the last frame, for mouse hit-testing.
    board_area: Rect,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let policy = match config.ai.seed {
            Some(seed) => RandomPolicy::with_seed(seed),
            None => RandomPolicy::new(),
        }
        .center_first(config.ai.center_first);
        Self::with_policy(config, Box::new(policy))
    }

    pub fn with_policy(config: &AppConfig, policy: Box<dyn MovePolicy>) -> Self {
        App {
            game_state: GameState::initial(),
            mode: config.game.mode,
            ai_player: config.game.ai_player,
            policy,
            frame_interval: Duration::from_millis(config.ui.frame_interval_ms),
            cursor: center(),
            board_area: Rect::default(),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        info!(mode = ?self.mode, policy = self.policy.name(), "game started");
        loop {
            self.advance_ai();

            terminal
                .draw(|f| self.render(f))
                .map_err(|e| -> io::Error { e.into() })?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        info!("quit");
        Ok(())
    }

    /// Handle terminal events; the poll timeout paces the frame loop
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_at(self.cursor);
            }
            KeyCode::Char('u') => self.undo(),
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.cursor = center();
                self.message = Some("New game started!".to_string());
                info!("game reset");
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        self.message = None;
        match board_widget::cell_at(self.board_area, mouse.column, mouse.row) {
            Some(pos) => self.place_at(pos),
            None => debug!(column = mouse.column, row = mouse.row, "click outside board"),
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let clamp = |v: usize, d: isize| v.saturating_add_signed(d).min(BOARD_SIZE - 1);
        self.cursor = Position::new(clamp(self.cursor.row, d_row), clamp(self.cursor.col, d_col));
    }

    fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::VsAi && self.game_state.current_player() == self.ai_player
    }

    /// Place the current player's stone for a human
    fn place_at(&mut self, pos: Position) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.is_ai_turn() {
            self.message = Some("Wait for the computer to move.".to_string());
            return;
        }

        let player = self.game_state.current_player();
        match self.game_state.place_checked(pos.row, pos.col, player) {
            Ok(()) => {
                info!(player = player.name(), row = pos.row, col = pos.col, "stone placed");
                self.cursor = pos;
                self.announce_outcome();
            }
            Err(err) => {
                debug!(?err, row = pos.row, col = pos.col, "move rejected");
                self.message = Some(
                    match err {
                        MoveError::OutOfBounds => "That point is off the board!",
                        MoveError::Occupied => "That point is taken!",
                        MoveError::GameOver => "Game is over!",
                        MoveError::WrongTurn => "Not your turn!",
                    }
                    .to_string(),
                );
            }
        }
    }

    /// Let the policy move when it is the automated side's turn
    fn advance_ai(&mut self) {
        if self.game_state.is_terminal() || !self.is_ai_turn() {
            return;
        }

        let player = self.ai_player;
        let Some(pos) = self.policy.select_move(self.game_state.board(), player) else {
            warn!(policy = self.policy.name(), "policy found no move");
            return;
        };
        match self.game_state.place_checked(pos.row, pos.col, player) {
            Ok(()) => {
                info!(
                    player = player.name(),
                    policy = self.policy.name(),
                    row = pos.row,
                    col = pos.col,
                    "policy placed stone"
                );
                self.announce_outcome();
            }
            Err(err) => warn!(?err, row = pos.row, col = pos.col, "policy chose illegal move"),
        }
    }

    /// Take back the last move. Against the computer, rewind until it is the
    /// human's turn again so the policy doesn't immediately replay.
    fn undo(&mut self) {
        let mut undone = 0;
        loop {
            match self.game_state.undo() {
                Ok(pos) => {
                    undone += 1;
                    debug!(row = pos.row, col = pos.col, "move undone");
                    if !self.is_ai_turn() {
                        break;
                    }
                }
                Err(err) => {
                    if undone == 0 {
                        self.message = Some(
                            match err {
                                UndoError::NothingToUndo => "Nothing to undo!",
                                UndoError::GameOver => "Game over! Press 'r' to restart.",
                            }
                            .to_string(),
                        );
                    }
                    break;
                }
            }
        }
        if undone > 0 {
            info!(undone, "undo");
            if let Some(last) = self.game_state.last_move() {
                self.cursor = last;
            }
        }
    }

    fn announce_outcome(&mut self) {
        let status = self.game_state.status();
        if !status.is_terminal() {
            return;
        }
        let moves = self.game_state.move_history().len();
        info!(?status, moves, "game over");
        self.message = Some(match status.winner() {
            Some(player) => format!("{} wins!", player.name()),
            None => "It's a draw!".to_string(),
        });
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let mode = match self.mode {
            GameMode::Pvp => "Two Players".to_string(),
            GameMode::VsAi => format!("vs {} ({})", self.policy.name(), self.ai_player.name()),
        };
        self.board_area =
            super::game_view::render(frame, &self.game_state, self.cursor, &self.message, &mode);
    }
}

fn center() -> Position {
    Position::new(BOARD_SIZE / 2, BOARD_SIZE / 2)
}
