//! Bar error types

use thiserror::Error;

/// Errors raised while building or driving a convex bar
#[derive(Error, Debug)]
pub enum BarError {
    /// Construction-time invariant violation; the bar must be rebuilt
    #[error("invalid bar configuration: {0}")]
    Configuration(String),

    /// Tab index outside `[0, count)`
    #[error("tab index {index} out of range for {count} slots")]
    InvalidIndex { index: usize, count: usize },

    /// Malformed TOML configuration text
    #[error("failed to parse bar config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("failed to read bar config: {0}")]
    Io(#[from] std::io::Error),
}

impl BarError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        BarError::Configuration(message.into())
    }
}

/// Result type for bar operations
pub type Result<T> = std::result::Result<T, BarError>;
