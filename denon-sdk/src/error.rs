use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    ApiError(#[from] denon_api::ApiError),

    #[error("Unknown input identifier: {0}")]
    UnknownInput(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl SdkError {
    /// True when the receiver could not be reached
    pub fn is_connection_error(&self) -> bool {
        matches!(self, SdkError::ApiError(e) if e.is_connection())
    }

    /// True when the receiver answered with something unparseable
    pub fn is_parse_error(&self) -> bool {
        matches!(self, SdkError::ApiError(denon_api::ApiError::ParseError(_)))
    }
}
