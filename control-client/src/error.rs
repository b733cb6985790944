//! Error types for the control client

use thiserror::Error;

/// Errors that can occur while talking to a receiver over HTTP
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// XML parsing error
    #[error("XML parsing error: {0}")]
    Parse(String),
}
