use thiserror::Error;

/// Domain blocklist error types
///
/// Key construction and index queries never fail; these errors come from
/// reading input and loading options.
#[derive(Error, Debug)]
pub enum BlocklistError {
    #[error("Invalid count at line {line}: {value:?}")]
    InvalidCount { line: usize, value: String },

    #[error("Unexpected end of input: expected {expected} lines, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlocklistError>;
