use crate::game::Board;

/// Universal interface for computer opponents.
pub trait Opponent {
    /// Pick the column to play on `board`.
    ///
    /// Only called on boards where the game is still in progress, so at least
    /// one column is open. The returned column must not be full.
    fn choose_column(&mut self, board: &Board) -> usize;

    /// Return the opponent's display name.
    fn name(&self) -> &str;
}
