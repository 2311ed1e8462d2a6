use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Validation error in '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Tag service error: {message}")]
    TagError { message: String },
}

pub type Result<T> = std::result::Result<T, SurveyError>;
