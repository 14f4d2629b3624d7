use crate::model::BookField;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: BookField, reason: String },

    #[error("Cannot encode {field}: {reason}")]
    Encode { field: BookField, reason: String },

    #[error("Malformed record on line {line}: {reason}")]
    Decode { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
