use control_client::ClientError;
use thiserror::Error;

/// High-level API errors for receiver operations
///
/// Transport failures and malformed responses are kept apart so callers can
/// tell an unreachable receiver from one that answered with something odd.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// The receiver could not be reached, refused the connection, timed out
    /// or answered with a non-success HTTP status.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Response parsing error
    ///
    /// The receiver answered but the body was not valid XML, or an expected
    /// document path such as `item.Power.value` was absent.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// Error for a status document path that is not present
    pub fn missing_path(path: &str) -> Self {
        Self::ParseError(format!("missing element at {}", path))
    }

    /// True when the receiver could not be reached at all
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Network(msg) => ApiError::ConnectionError(msg),
            ClientError::Parse(msg) => ApiError::ParseError(msg),
        }
    }
}
