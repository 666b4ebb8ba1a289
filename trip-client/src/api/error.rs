//! Backend client error types.

/// Errors from talking to the attraction/itinerary backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request failed to complete (connection, timeout, etc.)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not in the expected shape
    #[error("decode error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    /// Requested entity does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Backend returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Base URL could not be used to build request URLs
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Build a decode error, keeping a short excerpt of the offending body.
    pub(crate) fn decode(err: &serde_json::Error, body: &str) -> Self {
        ApiError::Decode {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}
