//! Error type for calls to the marketplace backend.

use thiserror::Error;

use crate::validation::ValidationError;

/// Everything that can go wrong between a form submit and a decoded response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The bearer token is missing, expired or revoked.
    #[error("Your session has expired, please sign in again")]
    Unauthorized,
    /// The response body did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    /// Input was rejected before sending.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// Text suitable for an inline form error or a notice.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Network error, please check your connection and try again.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// HTTP status, when the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
