//! Private HTTP client for Denon/Marantz receiver communication
//!
//! The receivers expose a small set of `goform` endpoints over plain HTTP.
//! Status documents come back as XML; command requests carry their payload in
//! the query string and return nothing worth parsing. This crate only knows
//! how to issue those `GET` requests and turn the body into an XML tree.

mod error;

pub use error::ClientError;

use std::time::Duration;
use xmltree::Element;

/// A minimal blocking HTTP client for receiver communication
#[derive(Debug, Clone)]
pub struct ControlClient {
    agent: ureq::Agent,
}

impl ControlClient {
    /// Create a new client with default timeouts
    pub fn new() -> Self {
        Self::with_timeouts(Duration::from_secs(5), Duration::from_secs(10))
    }

    /// Create a client with explicit connect and read timeouts
    pub fn with_timeouts(connect: Duration, read: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect)
                .timeout_read(read)
                .build(),
        }
    }

    /// Issue a GET request and return the response body as text
    pub fn get_text(&self, url: &str) -> Result<String, ClientError> {
        tracing::trace!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        response
            .into_string()
            .map_err(|e| ClientError::Network(e.to_string()))
    }

    /// Issue a GET request and parse the response body as XML
    pub fn get_xml(&self, url: &str) -> Result<Element, ClientError> {
        let body = self.get_text(url)?;
        parse_xml(&body)
    }

    /// Issue a GET request whose only interesting outcome is transport success
    pub fn get_discard(&self, url: &str) -> Result<(), ClientError> {
        self.get_text(url).map(|_| ())
    }
}

impl Default for ControlClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an XML document into its root element
pub fn parse_xml(body: &str) -> Result<Element, ClientError> {
    Element::parse(body.as_bytes()).map_err(|e| ClientError::Parse(e.to_string()))
}

/// Build `{base}{path}?{query}` without re-encoding the query token.
///
/// Receiver commands are raw tokens rather than key/value pairs, so the query
/// is appended as-is. Spaces are left for the URL layer to percent-encode.
pub fn command_url(base: &str, path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}{}?{}", base, path, query)
    }
}
