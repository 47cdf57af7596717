use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("JSON serialization failed: {reason}")]
    Json { reason: String },

    #[error("Encoded body is not valid UTF-8: {reason}")]
    Utf8 { reason: String },
}

pub type Result<T> = std::result::Result<T, HandlerError>;

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::Serialization(SerializationError::Json {
            reason: err.to_string(),
        })
    }
}

impl From<std::string::FromUtf8Error> for HandlerError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        HandlerError::Serialization(SerializationError::Utf8 {
            reason: err.to_string(),
        })
    }
}
