//! Denon/Marantz receiver descriptor probing
//!
//! Receivers with HEOS built in serve a UPnP descriptor on port 60006. The
//! endpoint doubles as a cheap liveness check: if it answers, the receiver
//! is on the network. Its body identifies the hardware.
//!
//! # Quick Start
//!
//! ```no_run
//! use denon_discovery::{DescriptorProbe, DeviceDescription, DeviceInfo, DESCRIPTOR_PORT};
//!
//! # async fn run() -> Result<(), denon_discovery::DiscoveryError> {
//! let body = DescriptorProbe::new().fetch("192.168.1.20", DESCRIPTOR_PORT).await?;
//! let info = DeviceDescription::from_xml(&body)?.to_device_info(&DeviceInfo::default());
//! println!("{} {} ({})", info.manufacturer, info.model_name, info.firmware_revision);
//! # Ok(())
//! # }
//! ```

mod error;
mod probe;
pub mod device;

pub use device::DeviceDescription;
pub use error::{DiscoveryError, Result};
pub use probe::{descriptor_url, DescriptorProbe, DESCRIPTOR_PATH, DESCRIPTOR_PORT};

/// Identifying metadata of a receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub manufacturer: String,
    pub model_name: String,
    pub serial_number: String,
    pub firmware_revision: String,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            manufacturer: "Denon/Marantz".to_string(),
            model_name: "AV Receiver".to_string(),
            serial_number: "SN000002".to_string(),
            firmware_revision: "FW000002".to_string(),
        }
    }
}
