use crate::game::{Board, Player, Position};

/// Chooses a cell for an automated player.
///
/// A policy only reads the board; the caller performs the placement.
pub trait MovePolicy {
    /// Pick a cell for `player`, or `None` when no empty cell is left.
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Position>;

    /// Return the policy's display name.
    fn name(&self) -> &str;
}
