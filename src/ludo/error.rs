use thiserror::Error;

/// Every reason a board operation can refuse to run. All of these are
/// ordinary outcomes of play, not faults: a caller driving a game loop
/// re-prompts the player instead of aborting.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("token index {0} out of range")]
    InvalidToken(u8),
    #[error("player index {0} out of range")]
    InvalidPlayer(u8),
    #[error("dice roll {0} out of range")]
    InvalidRoll(u8),
    #[error("position {0} past home")]
    InvalidPosition(u8),
    #[error("token cannot move with this roll")]
    NotMovable,
    #[error("token is already home")]
    AlreadyHome,
    #[error("token is not at base")]
    NotAtBase,
    #[error("path blocked by a blockade")]
    PathBlocked,
    #[error("move would overshoot home")]
    Overshoot,
}
