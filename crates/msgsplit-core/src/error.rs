use thiserror::Error;

/// Top-level error type for msgsplit.
#[derive(Debug, Error)]
pub enum SplitError {
    /// A chunk limit of zero can never make progress.
    #[error("invalid limit: chunk limit must be greater than zero")]
    ZeroLimit,

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
