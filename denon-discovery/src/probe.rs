//! Reachability probe against the descriptor endpoint.

use std::time::Duration;

use crate::error::{DiscoveryError, Result};

/// Port the AIOS descriptor is served on
pub const DESCRIPTOR_PORT: u16 = 60006;

/// Path of the AIOS descriptor
pub const DESCRIPTOR_PATH: &str = "/upnp/desc/aios_device/aios_device.xml";

/// `http://{host}:{port}/upnp/desc/aios_device/aios_device.xml`
pub fn descriptor_url(host: &str, port: u16) -> String {
    format!("http://{}:{}{}", host, port, DESCRIPTOR_PATH)
}

/// Async prober for the descriptor endpoint
#[derive(Debug, Clone)]
pub struct DescriptorProbe {
    client: reqwest::Client,
}

impl DescriptorProbe {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(4))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    /// Fetch the descriptor body.
    ///
    /// Any HTTP response counts as reachable; only transport failures are
    /// errors. A non-descriptor body is left for the parser to reject.
    pub async fn fetch(&self, host: &str, port: u16) -> Result<String> {
        let url = descriptor_url(host, port);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::trace!("Descriptor request to {} failed: {}", url, e);
            DiscoveryError::NetworkError(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Descriptor at {} answered with HTTP {}", url, status);
        }

        response.text().await.map_err(|e| {
            tracing::debug!("Failed to read descriptor body from {}: {}", url, e);
            DiscoveryError::NetworkError(e.to_string())
        })
    }
}

impl Default for DescriptorProbe {
    fn default() -> Self {
        Self::new()
    }
}
