//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when the human plays a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The human asked themselves.
    #[error("a player cannot ask themselves")]
    CannotAskSelf,
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
}
