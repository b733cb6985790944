//! Television accessory contract
//!
//! The host framework drives a receiver through characteristic get/set
//! hooks. [`TelevisionAccessory`] is that fixed set of hooks; each one
//! resolves to a single response, an error included.

use denon_api::{PowerModeSelection, RemoteKey, VolumeSelector};
use denon_discovery::DeviceInfo;

use crate::{Receiver, SdkError};

/// A linked input source service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSource {
    /// Value of the `Identifier` characteristic; position in the input table
    pub identifier: usize,
    pub reference: String,
    pub configured_name: String,
}

/// Characteristic hooks of a television accessory
pub trait TelevisionAccessory {
    /// `Active` get
    fn active(&self) -> Result<bool, SdkError>;
    /// `Active` set
    fn set_active(&self, active: bool) -> Result<bool, SdkError>;

    /// `ActiveIdentifier` get
    fn active_identifier(&self) -> Result<usize, SdkError>;
    /// `ActiveIdentifier` set
    fn set_active_identifier(&self, identifier: usize) -> Result<usize, SdkError>;

    /// `RemoteKey` set
    fn remote_key(&self, key: RemoteKey) -> RemoteKey;
    /// `PowerModeSelection` set
    fn power_mode_selection(&self, selection: PowerModeSelection) -> PowerModeSelection;

    /// Speaker `Volume` get
    fn volume(&self) -> Result<i32, SdkError>;
    /// Speaker `Volume` set
    fn set_volume(&self, volume: i32) -> Result<i32, SdkError>;
    /// Speaker `VolumeSelector` set
    fn volume_selector(&self, selector: VolumeSelector) -> VolumeSelector;

    /// Speaker `Mute` get
    fn mute(&self) -> Result<bool, SdkError>;
    /// Speaker `Mute` set
    fn set_mute(&self, mute: bool) -> Result<bool, SdkError>;

    /// Input source `ConfiguredName` set
    fn set_configured_name(&self, identifier: usize, name: &str) -> Result<(), SdkError>;

    /// Accessory information service
    fn information(&self) -> DeviceInfo;
    /// Linked input source services in identifier order
    fn input_sources(&self) -> Vec<InputSource>;
}

impl TelevisionAccessory for Receiver {
    fn active(&self) -> Result<bool, SdkError> {
        self.get_power_state()
    }

    fn set_active(&self, active: bool) -> Result<bool, SdkError> {
        self.set_power_state(active)
    }

    fn active_identifier(&self) -> Result<usize, SdkError> {
        self.get_input()?;
        Ok(Receiver::active_identifier(self))
    }

    fn set_active_identifier(&self, identifier: usize) -> Result<usize, SdkError> {
        self.set_input_by_identifier(identifier)?;
        Ok(identifier)
    }

    fn remote_key(&self, key: RemoteKey) -> RemoteKey {
        self.remote_key_press(key)
    }

    fn power_mode_selection(&self, selection: PowerModeSelection) -> PowerModeSelection {
        self.set_power_mode_selection(selection)
    }

    fn volume(&self) -> Result<i32, SdkError> {
        self.get_volume()
    }

    fn set_volume(&self, volume: i32) -> Result<i32, SdkError> {
        Receiver::set_volume(self, volume)
    }

    fn volume_selector(&self, selector: VolumeSelector) -> VolumeSelector {
        self.volume_selector_press(selector)
    }

    fn mute(&self) -> Result<bool, SdkError> {
        self.get_mute()
    }

    fn set_mute(&self, mute: bool) -> Result<bool, SdkError> {
        Receiver::set_mute(self, mute)
    }

    fn set_configured_name(&self, identifier: usize, name: &str) -> Result<(), SdkError> {
        self.rename_input(identifier, name)
    }

    fn information(&self) -> DeviceInfo {
        Receiver::information(self)
    }

    fn input_sources(&self) -> Vec<InputSource> {
        self.inputs()
            .iter()
            .enumerate()
            .map(|(identifier, entry)| InputSource {
                identifier,
                reference: entry.reference.clone(),
                configured_name: entry.configured_name.clone(),
            })
            .collect()
    }
}
