use thiserror::Error;

#[derive(Error, Debug)]
pub enum DivconError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Shape mismatch: left is {left_rows}x{left_cols}, right is {right_rows}x{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DivconResult<T> = Result<T, DivconError>;
