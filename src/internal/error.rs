// src/internal/error.rs

/// Errors raised by color conversion, type resolution and log output
#[derive(Debug, thiserror::Error)]
pub enum LoggyError {
    #[error("invalid color format: {0:?} (expected #RRGGBB or RRGGBB)")]
    InvalidColorFormat(String),
    #[error("malformed ANSI color sequence: {0:?}")]
    MalformedAnsiSequence(String),
    #[error("invalid log type: {0}")]
    UnknownLogType(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, LoggyError>;
