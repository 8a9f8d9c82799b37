//! Post service error types

use thiserror::Error;

/// Why a fetch produced no data
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Nothing answered at the endpoint
    #[error("Endpoint unavailable: {url}")]
    Unavailable { url: String },

    #[error("Request timeout: {url}")]
    Timeout { url: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The body was not the expected JSON shape
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Classify a transport error the way the logs should report it
    pub(crate) fn from_transport(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout { url: url.to_string() }
        } else if err.is_connect() {
            FetchError::Unavailable { url: url.to_string() }
        } else {
            FetchError::Request(err)
        }
    }
}

/// Result type alias for fetches
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            status: 503,
            url: "http://localhost/posts".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected status 503 from http://localhost/posts");

        let err = FetchError::Unavailable {
            url: "http://127.0.0.1:1/posts".to_string(),
        };
        assert_eq!(err.to_string(), "Endpoint unavailable: http://127.0.0.1:1/posts");
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = FetchError::Decode {
            url: "u".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Failed to decode response from u:"));
    }
}
