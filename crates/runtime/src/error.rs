//! Errors surfaced while building the runtime service.
//!
//! Interactions themselves never fail; see [`crate::InteractionOutcome`].
use thiserror::Error;
use wand_core::{ConfigError, ErrorSeverity, WandError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

impl WandError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Config(error) => error.severity(),
            RuntimeError::Content(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Config(error) => error.error_code(),
            RuntimeError::Content(_) => "RUNTIME_CONTENT",
        }
    }
}
