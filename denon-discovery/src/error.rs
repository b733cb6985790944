//! Error types for descriptor probing.

use std::fmt;

/// Error type for probe and descriptor operations.
#[derive(Debug)]
pub enum DiscoveryError {
    /// The descriptor endpoint could not be reached
    NetworkError(String),
    /// The descriptor body is not a usable device description
    ParseError(String),
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            DiscoveryError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for DiscoveryError {}

/// Convenience Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
