use thiserror::Error;

/// Rejected engine configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Filter threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f32),

    #[error("Weight exponent must be positive, got {0}")]
    InvalidExponent(f32),

    #[error("History capacity must be between 4 and 6, got {0}")]
    InvalidCapacity(usize),

    #[error("Repetition window must be between 3 and 4 and no larger than the history, got {0}")]
    InvalidWindow(usize),

    #[error("Repetition penalties must be non-empty, non-increasing and within (0, 1]")]
    InvalidPenaltyCurve,

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
