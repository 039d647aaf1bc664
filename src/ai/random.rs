use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use crate::game::{Board, Cell, Player, Position, BOARD_SIZE};

use super::policy::MovePolicy;

/// Takes the center point when it is free, otherwise a uniformly random
/// empty cell.
pub struct RandomPolicy {
    rng: StdRng,
    center_first: bool,
}

impl RandomPolicy {
    pub fn new() -> Self {
        RandomPolicy {
            rng: StdRng::from_os_rng(),
            center_first: true,
        }
    }

    /// Deterministic policy for reproducible games
    pub fn with_seed(seed: u64) -> Self {
        RandomPolicy {
            rng: StdRng::seed_from_u64(seed),
            center_first: true,
        }
    }

    pub fn center_first(mut self, enabled: bool) -> Self {
        self.center_first = enabled;
        self
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for RandomPolicy {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        let center = Position::new(BOARD_SIZE / 2, BOARD_SIZE / 2);
        if self.center_first && board.get(center.row, center.col) == Cell::Empty {
            tracing::debug!(player = player.name(), "taking the center point");
            return Some(center);
        }

        let choice = board.empty_cells().choose(&mut self.rng);
        match choice {
            Some(pos) => tracing::debug!(
                player = player.name(),
                row = pos.row,
                col = pos.col,
                "picked random cell"
            ),
            None => tracing::debug!(player = player.name(), "no empty cell left"),
        }
        choice
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, GameStatus};

    #[test]
    fn test_random_policy_takes_center_first() {
        let mut policy = RandomPolicy::new();
        let state = GameState::initial();
        assert_eq!(
            policy.select_move(state.board(), Player::Black),
            Some(Position::new(7, 7))
        );
    }

    #[test]
    fn test_random_policy_selects_empty_cell() {
        let mut policy = RandomPolicy::with_seed(7).center_first(false);
        let mut state = GameState::initial();
        state.place(7, 7, Player::Black).unwrap();
        state.place(0, 0, Player::White).unwrap();

        for _ in 0..100 {
            let pos = policy.select_move(state.board(), Player::White).unwrap();
            assert!(pos.in_bounds());
            assert_eq!(state.cell(pos.row, pos.col), Cell::Empty, "{pos:?} is occupied");
        }
    }

    #[test]
    fn test_random_policy_skips_taken_center() {
        let mut policy = RandomPolicy::with_seed(1);
        let mut state = GameState::initial();
        state.place(7, 7, Player::Black).unwrap();
        let pos = policy.select_move(state.board(), Player::White).unwrap();
        assert_ne!(pos, Position::new(7, 7));
    }

    #[test]
    fn test_seeded_policy_is_reproducible() {
        let board = Board::new();
        let mut a = RandomPolicy::with_seed(42).center_first(false);
        let mut b = RandomPolicy::with_seed(42).center_first(false);
        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board, Player::Black),
                b.select_move(&board, Player::Black)
            );
        }
    }

    #[test]
    fn test_random_policy_no_move_on_full_board() {
        let mut state = GameState::initial();
        // Rows of "BBWW" shifted by two per row never line up five
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let player = if (col + 2 * row) % 4 < 2 {
                    Player::Black
                } else {
                    Player::White
                };
                state.place(row, col, player).unwrap();
            }
        }
        assert_eq!(state.status(), GameStatus::Draw);

        let mut policy = RandomPolicy::new();
        assert_eq!(policy.select_move(state.board(), Player::White), None);
    }

    #[test]
    fn test_random_policy_plays_full_game() {
        let mut black = RandomPolicy::with_seed(3);
        let mut white = RandomPolicy::with_seed(4);
        let mut state = GameState::initial();

        while !state.is_terminal() {
            let player = state.current_player();
            let policy = match player {
                Player::Black => &mut black,
                Player::White => &mut white,
            };
            let pos = policy.select_move(state.board(), player).unwrap();
            state.place_checked(pos.row, pos.col, player).unwrap();
        }

        assert!(state.is_terminal());
        assert_eq!(state.move_history().len(), state.board().stone_count());
    }

    #[test]
    fn test_random_policy_name() {
        let policy = RandomPolicy::new();
        assert_eq!(policy.name(), "Random");
    }
}
