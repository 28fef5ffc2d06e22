use safe_random_types::ErrorCode;
use thiserror::Error;

/// Errors produced while sampling.
#[derive(Debug, Error)]
pub enum RandomError {
    #[error("entropy source failed: {0}")]
    Entropy(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no candidate accepted after {attempts} attempts")]
    ExhaustedRetries { attempts: u64 },
}

impl RandomError {
    /// Map to a platform error code.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            RandomError::Entropy(_) => ErrorCode::EntropyUnavailable,
            RandomError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            RandomError::ExhaustedRetries { .. } => ErrorCode::RetriesExhausted,
        }
    }
}

pub type RandomResult<T> = Result<T, RandomError>;
