use thiserror::Error;

use crate::config::game::GRID_SIZE;

/// Client input that cannot be turned into a game command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid", size = GRID_SIZE)]
    InvalidCell { row: usize, col: usize },
    #[error("malformed command: {0}")]
    Malformed(String),
}

impl CommandError {
    /// Stable code sent in error frames.
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::InvalidCell { .. } => "INVALID_CELL",
            CommandError::Malformed(_) => "INVALID_COMMAND",
        }
    }
}
