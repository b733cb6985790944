//! ReceiverPlatform - entry point for the host framework
//!
//! Builds one [`Receiver`] per configured device and owns their info pollers.

use crate::config::PlatformConfig;
use crate::poller::InfoPollerHandle;
use crate::{Receiver, SdkError};

/// All receivers of one platform configuration
///
/// # Example
///
/// ```rust,ignore
/// use denon_sdk::{PlatformConfig, ReceiverPlatform};
///
/// let config = PlatformConfig::from_file("config.json")?;
/// let mut platform = ReceiverPlatform::from_config(config)?;
/// platform.start_polling();
///
/// for receiver in platform.accessories() {
///     println!("{} -> {}", receiver.name(), receiver.host());
/// }
/// ```
pub struct ReceiverPlatform {
    receivers: Vec<Receiver>,
    pollers: Vec<InfoPollerHandle>,
}

impl ReceiverPlatform {
    /// Build a receiver for every configured device
    ///
    /// Devices with an invalid configuration are skipped with a log line so
    /// one bad entry does not take down the rest.
    pub fn from_config(config: PlatformConfig) -> Result<Self, SdkError> {
        let storage_dir = config.storage_dir();
        let mut receivers = Vec::with_capacity(config.devices.len());

        for device in &config.devices {
            match Receiver::new(device, &storage_dir) {
                Ok(receiver) => receivers.push(receiver),
                Err(e) => {
                    tracing::error!("Skipping device '{}': {}", device.name, e);
                }
            }
        }

        if receivers.is_empty() && !config.devices.is_empty() {
            return Err(SdkError::Config("no usable device configured".to_string()));
        }

        Ok(Self {
            receivers,
            pollers: Vec::new(),
        })
    }

    /// Start the info poller of every receiver that is not polling yet
    pub fn start_polling(&mut self) {
        for receiver in self.receivers.iter().skip(self.pollers.len()) {
            self.pollers.push(receiver.start_info_poller());
        }
    }

    /// Stop all info pollers
    pub fn stop_polling(&mut self) {
        for poller in self.pollers.drain(..) {
            poller.stop();
        }
    }

    pub fn is_polling(&self) -> bool {
        !self.pollers.is_empty()
    }

    /// One accessory per configured device, in configuration order
    pub fn accessories(&self) -> &[Receiver] {
        &self.receivers
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Receiver> {
        self.receivers.iter().find(|r| r.name() == name)
    }

    pub fn get_by_host(&self, host: &str) -> Option<&Receiver> {
        self.receivers.iter().find(|r| r.host() == host)
    }
}
