use thiserror::Error;

use crate::charset::CharsetMode;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShiftError {
    #[error("{message}")]
    InvalidInput {
        mode: CharsetMode,
        message: &'static str,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: shift rounds must be positive, found {found}")]
    MissingShiftRounds { found: i32 },

    #[error("invalid configuration: hash rounds must be positive, found {found}")]
    MissingHashRounds { found: i32 },
}

impl ShiftError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ShiftError::InvalidInput { .. })
    }

    pub fn config_error(&self) -> Option<ConfigError> {
        match self {
            ShiftError::Config(err) => Some(*err),
            ShiftError::InvalidInput { .. } => None,
        }
    }
}
