//! Error types for hearth-tui
//!
//! Wraps domain-layer errors and terminal/IO errors for unified handling
//! in the event loop.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Domain layer error
    #[error("Hearth error: {0}")]
    Hearth(#[from] libhearth::HearthError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application state error
    #[error("Application error: {0}")]
    Application(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
