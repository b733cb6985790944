//! Device descriptor parsing.
//!
//! The AIOS descriptor is a UPnP device description whose root device carries
//! manufacturer, model and serial number, while the firmware revision sits on
//! one of the embedded devices in `deviceList`.

use crate::error::{DiscoveryError, Result};
use crate::DeviceInfo;
use serde::Deserialize;

/// Descriptor root element.
#[derive(Debug, Deserialize)]
pub struct Root {
    pub device: DeviceDescription,
}

/// Root device of the descriptor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDescription {
    pub friendly_name: Option<String>,
    pub manufacturer: Option<String>,
    pub model_name: Option<String>,
    pub serial_number: Option<String>,
    pub device_list: Option<DeviceList>,
}

/// Embedded devices of the root device.
#[derive(Debug, Deserialize)]
pub struct DeviceList {
    #[serde(rename = "device", default)]
    pub devices: Vec<EmbeddedDevice>,
}

/// An embedded device; only its firmware revision is of interest.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedDevice {
    pub device_type: Option<String>,
    pub firmware_revision: Option<String>,
}

impl DeviceDescription {
    /// Parse a descriptor body.
    ///
    /// All colons are removed first, so prefixed tags such as `dlna:X_DLNADOC`
    /// become plain element names and never trip the deserializer.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::ParseError` if the XML is malformed or has no
    /// root device.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let normalized = xml.replace(':', "");
        let root: Root = quick_xml::de::from_str(&normalized).map_err(|e| {
            tracing::debug!("Descriptor body rejected ({} bytes): {}", xml.len(), e);
            DiscoveryError::ParseError(format!("Failed to parse device XML: {}", e))
        })?;

        tracing::trace!(
            "Parsed descriptor for {:?} {:?}",
            root.device.manufacturer,
            root.device.model_name
        );
        Ok(root.device)
    }

    /// First firmware revision found among the embedded devices.
    pub fn firmware_revision(&self) -> Option<&str> {
        self.device_list
            .as_ref()?
            .devices
            .iter()
            .find_map(|device| device.firmware_revision.as_deref())
    }

    /// Overlay the descriptor's values on `defaults`.
    ///
    /// Fields the descriptor does not carry keep their default.
    pub fn to_device_info(&self, defaults: &DeviceInfo) -> DeviceInfo {
        let pick = |value: Option<&str>, fallback: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        DeviceInfo {
            manufacturer: pick(self.manufacturer.as_deref(), &defaults.manufacturer),
            model_name: pick(self.model_name.as_deref(), &defaults.model_name),
            serial_number: pick(self.serial_number.as_deref(), &defaults.serial_number),
            firmware_revision: pick(self.firmware_revision(), &defaults.firmware_revision),
        }
    }
}
