use thiserror::Error;

#[derive(Error, Debug)]
pub enum SniffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error at record {record}: {message}")]
    JsonParse { record: usize, message: String },

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized JSON value at record {record}")]
    Unrecognized { record: usize },

    #[error("Invalid value kind: {0}")]
    InvalidKind(String),
}

pub type Result<T> = std::result::Result<T, SniffError>;
