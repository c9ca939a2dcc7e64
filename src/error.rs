use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown difficulty name")]
    UnknownDifficulty,
    #[error("Bombs and converters do not fit on the grid")]
    InfeasibleLayout,
    #[error("Grid must be square and non-empty")]
    InvalidGridShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
