//! Error types for the DSP client

use dsp_http_client::HttpError;
use thiserror::Error;

/// Result type for DSP client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when using the DSP client
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed, or the backend answered with an error status
    #[error(transparent)]
    Http(#[from] HttpError),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Request rejected before it was sent
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The backend returned a body of the wrong shape
    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),
}

impl Error {
    /// Status code of a failed backend response
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http(err) => err.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_error_is_transparent() {
        let err: Error = HttpError::Status {
            status: 401,
            message: "Invalid credentials".to_string(),
        }
        .into();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_validation_display() {
        let err = Error::Validation("password too short".to_string());
        assert_eq!(err.to_string(), "Invalid request: password too short");
        assert_eq!(err.status(), None);
    }
}
