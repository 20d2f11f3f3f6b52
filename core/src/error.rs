use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid position ({0}, {1})")]
    InvalidPosition(u8, u8),
    #[error("Invalid tile value {0}")]
    InvalidTile(u8),
    #[error("Tile value {0} appears more than once")]
    DuplicateTile(u8),
    #[error("Unknown input token")]
    UnknownToken,
}

pub type Result<T> = core::result::Result<T, GameError>;
