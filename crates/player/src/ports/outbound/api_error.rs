//! Transport-level errors reported by HTTP adapters

use thiserror::Error;

/// Failure of a single REST call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::HttpError {
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display() {
        let err = ApiError::http(404, "not found");
        assert!(matches!(err, ApiError::HttpError { status: 404, .. }));
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }
}
