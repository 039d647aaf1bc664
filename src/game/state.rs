use super::{Board, Cell, Player, Position, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    BlackWins,
    WhiteWins,
    Draw,
}

impl GameStatus {
    fn win_for(player: Player) -> Self {
        match player {
            Player::Black => GameStatus::BlackWins,
            Player::White => GameStatus::WhiteWins,
        }
    }

    /// Check if the game has ended
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// The winning player, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::BlackWins => Some(Player::Black),
            GameStatus::WhiteWins => Some(Player::White),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    Occupied,
    GameOver,
    WrongTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoError {
    NothingToUndo,
    GameOver,
}

/// The authoritative game: board, move history, turn and outcome.
///
/// Every mutation is all-or-nothing: a rejected call returns an error and
/// leaves the state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    history: Vec<Position>,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            history: Vec::with_capacity(BOARD_SIZE * BOARD_SIZE),
            current_player: Player::Black, // Black starts
            status: GameStatus::InProgress,
        }
    }

    /// Discard everything and start over from the initial state
    pub fn reset(&mut self) {
        *self = Self::initial();
    }

    /// Get current player. Frozen once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the cell at (row, col); `Cell::Empty` when out of range
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Placed positions, oldest first
    pub fn move_history(&self) -> &[Position] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Position> {
        self.history.last().copied()
    }

    /// Place a stone for `player` at (row, col).
    ///
    /// The player is taken as given and not compared against
    /// [`current_player`](Self::current_player); use
    /// [`place_checked`](Self::place_checked) to enforce turn order.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        let pos = Position::new(row, col);
        if !pos.in_bounds() {
            return Err(MoveError::OutOfBounds);
        }
        if self.board.get(row, col) != Cell::Empty {
            return Err(MoveError::Occupied);
        }
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.set(pos, player.to_cell());
        self.history.push(pos);
        debug_assert_eq!(self.history.len(), self.board.stone_count());

        if self.board.check_win(row, col) {
            self.status = GameStatus::win_for(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.other();
        }

        Ok(())
    }

    /// Like [`place`](Self::place), but rejects a `player` whose turn it is not.
    pub fn place_checked(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if player != self.current_player {
            return Err(MoveError::WrongTurn);
        }
        self.place(row, col, player)
    }

    /// Take back the most recent stone and hand the turn back.
    ///
    /// A finished game cannot be unwound.
    pub fn undo(&mut self) -> Result<Position, UndoError> {
        if self.is_terminal() {
            return Err(UndoError::GameOver);
        }
        let pos = self.history.pop().ok_or(UndoError::NothingToUndo)?;
        self.board.set(pos, Cell::Empty);
        debug_assert_eq!(self.history.len(), self.board.stone_count());
        self.current_player = self.current_player.other();
        Ok(pos)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
