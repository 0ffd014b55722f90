use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Backend error ({status}): {detail}")]
    BackendError { status: u16, detail: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ClientError {
    /// Message shown in the result area when a prediction attempt fails.
    /// Prefers the backend's `detail` string; anything else collapses to a
    /// generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::BackendError { detail, .. } if !detail.trim().is_empty() => {
                detail.clone()
            }
            _ => "Failed to get prediction".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
