use crate::game::GameState;

/// Universal interface for move-selecting opponents.
///
/// `select_action` returns `None` only when the board has no playable
/// column; callers must check before applying the move.
pub trait Agent {
    /// Select a column for the current player of `state`.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
