//! Error types for the markdown-longform library.
//!
//! Content anomalies (a marker with no definition, a duplicate definition
//! id) are not errors: they degrade gracefully and are logged where they
//! are absorbed. These types cover the failures that must stop a pipeline
//! stage outright.

use thiserror::Error;

/// Result type alias for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid front matter: {0}")]
    FrontMatter(String),

    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Parse error: {0}")]
    Other(String),
}

/// Errors that occur during rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Highlight error: {0}")]
    Highlight(String),

    #[error("Unsupported feature: {0}")]
    Unsupported(String),
}
