//! Error types for the uisnap fixture runner.

use thiserror::Error;

/// Main error type for uisnap operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Iteration attempted before `initialize` was called
    #[error("Sequencer not initialized: call initialize() before iterating")]
    NotInitialized,

    /// Operation not valid in the sequencer's current state
    #[error("Invalid sequencer state: {0}")]
    InvalidState(String),

    /// `process_current` called while not positioned on an example
    #[error("No current example: call advance() first")]
    NoCurrentExample,

    /// Selector string could not be parsed
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Document node lookup failed
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bundler reported a build failure
    #[error("Bundler error: {0}")]
    Bundler(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input or parameters (generic)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
