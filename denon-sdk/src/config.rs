//! Configuration types for the denon-sdk crate
//!
//! The host platform hands over a JSON document with one entry per receiver.
//! Keys are camelCase because that is how the platform writes them:
//!
//! ```json
//! {
//!   "devices": [
//!     {
//!       "name": "Living Room",
//!       "host": "192.168.1.20",
//!       "port": 8080,
//!       "switchInfoMenu": true,
//!       "inputs": ["NET", { "reference": "SAT/CBL", "name": "Cable" }]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use denon_api::{ReceiverEndpoint, DEFAULT_PORT};
use denon_discovery::{DeviceInfo, DESCRIPTOR_PORT};
use serde::{Deserialize, Deserializer, Serialize};

use crate::SdkError;

/// Name of the directory created under the storage root
pub const STORAGE_DIR_NAME: &str = "denonTv";

/// Platform-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    /// One entry per receiver
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,

    /// Root directory for persisted input names.
    /// Default: the platform's local data directory
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

impl PlatformConfig {
    /// Parse a platform configuration document
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        serde_json::from_str(json).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Read and parse a platform configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SdkError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| SdkError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Directory that holds the per-device input name files
    pub fn storage_dir(&self) -> PathBuf {
        match &self.storage_path {
            Some(root) => root.join(STORAGE_DIR_NAME),
            None => default_storage_root().join(STORAGE_DIR_NAME),
        }
    }

    pub fn with_device(mut self, device: DeviceConfig) -> Self {
        self.devices.push(device);
        self
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }
}

fn default_storage_root() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration of a single receiver
///
/// Immutable once a [`Receiver`](crate::Receiver) has been built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    /// Accessory name
    pub name: String,

    /// Receiver address
    pub host: String,

    /// goform API port.
    /// Default: 8080
    #[serde(default = "default_port")]
    pub port: u16,

    /// Open the info overlay instead of the setup menu from the power-mode
    /// toggle, and the other way round for the remote's info key.
    /// Default: false
    #[serde(default)]
    pub switch_info_menu: bool,

    /// Inputs in display order; a single object is accepted as a one-item list
    #[serde(default, deserialize_with = "one_or_many")]
    pub inputs: Vec<InputSpec>,

    /// Shown until the real value is read from the receiver
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub firmware_revision: Option<String>,

    /// Port of the device descriptor used for reachability checks.
    /// Default: 60006
    #[serde(default = "default_descriptor_port")]
    pub descriptor_port: u16,

    /// Seconds between reachability checks.
    /// Default: 5
    #[serde(default = "default_poll_interval")]
    pub poll_interval: u64,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_descriptor_port() -> u16 {
    DESCRIPTOR_PORT
}

fn default_poll_interval() -> u64 {
    5
}

impl DeviceConfig {
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port: default_port(),
            switch_info_menu: false,
            inputs: Vec::new(),
            manufacturer: None,
            model_name: None,
            serial_number: None,
            firmware_revision: None,
            descriptor_port: default_descriptor_port(),
            poll_interval: default_poll_interval(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_switch_info_menu(mut self, enabled: bool) -> Self {
        self.switch_info_menu = enabled;
        self
    }

    pub fn with_input(mut self, input: InputSpec) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn with_descriptor_port(mut self, port: u16) -> Self {
        self.descriptor_port = port;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.as_secs().max(1);
        self
    }

    /// Check the fields a receiver cannot work without
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.host.trim().is_empty() {
            return Err(SdkError::Config(format!("device '{}' has no host", self.name)));
        }
        if self.port == 0 {
            return Err(SdkError::Config(format!("device '{}' has port 0", self.name)));
        }
        if self.poll_interval == 0 {
            return Err(SdkError::Config(format!(
                "device '{}' has a zero poll interval",
                self.name
            )));
        }
        Ok(())
    }

    pub fn endpoint(&self) -> ReceiverEndpoint {
        ReceiverEndpoint::new(self.host.trim(), self.port)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval)
    }

    /// Metadata shown before the receiver has been queried
    pub fn initial_device_info(&self) -> DeviceInfo {
        let defaults = DeviceInfo::default();
        DeviceInfo {
            manufacturer: self.manufacturer.clone().unwrap_or(defaults.manufacturer),
            model_name: self.model_name.clone().unwrap_or(defaults.model_name),
            serial_number: self.serial_number.clone().unwrap_or(defaults.serial_number),
            firmware_revision: self
                .firmware_revision
                .clone()
                .unwrap_or(defaults.firmware_revision),
        }
    }
}

/// An input as written in the configuration
///
/// Either a bare reference such as `"NET"` or an object carrying a display
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputSpec {
    Reference(String),
    Named {
        #[serde(default)]
        reference: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl InputSpec {
    pub fn named(reference: impl Into<String>, name: impl Into<String>) -> Self {
        InputSpec::Named {
            reference: Some(reference.into()),
            name: Some(name.into()),
        }
    }

    /// Reference exactly as configured
    pub fn raw_reference(&self) -> Option<&str> {
        match self {
            InputSpec::Reference(reference) => Some(reference),
            InputSpec::Named { reference, .. } => reference.as_deref(),
        }
    }

    /// Display name from the configuration, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            InputSpec::Reference(_) => None,
            InputSpec::Named { name, .. } => name.as_deref().filter(|n| !n.is_empty()),
        }
    }
}

impl From<&str> for InputSpec {
    fn from(reference: &str) -> Self {
        InputSpec::Reference(reference.to_string())
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<InputSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<InputSpec>),
        One(InputSpec),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::Many(inputs)) => inputs,
        Some(OneOrMany::One(input)) => vec![input],
        None => Vec::new(),
    })
}
