use thiserror::Error;

#[derive(Error, Debug)]
pub enum StallError {
    #[error("invalid input, only whole numbers are accepted")]
    NonNumeric,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input stream closed")]
    InputClosed,
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, StallError>;
