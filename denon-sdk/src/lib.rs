//! # Denon SDK - television accessory facade for AV receivers
//!
//! Mirrors a Denon or Marantz receiver into the characteristics of a
//! television accessory: power, mute, volume, input selection, remote keys
//! and the info/menu overlay.
//!
//! ```rust,no_run
//! use denon_sdk::{PlatformConfig, ReceiverPlatform, TelevisionAccessory};
//!
//! fn main() -> Result<(), denon_sdk::SdkError> {
//!     let config = PlatformConfig::from_file("config.json")?;
//!     let mut platform = ReceiverPlatform::from_config(config)?;
//!     platform.start_polling();
//!
//!     let receiver = &platform.accessories()[0];
//!     receiver.set_active(true)?;
//!     receiver.set_active_identifier(1)?;
//!     println!("volume: {}", receiver.volume()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! denon-sdk (Receiver facade, info poller, input names)
//!     ↓
//! denon-api (status fields, command codes)      denon-discovery (descriptor probe)
//!     ↓
//! control-client (blocking HTTP/XML)
//! ```
//!
//! Get/set calls block on the receiver's HTTP API and return their result
//! directly. The info poller runs on its own thread and only touches the
//! connectivity flag and device metadata.

pub use accessory::{InputSource, TelevisionAccessory};
pub use config::{DeviceConfig, InputSpec, PlatformConfig};
pub use error::SdkError;
pub use inputs::{InputEntry, InputTable};
pub use platform::ReceiverPlatform;
pub use poller::{InfoPollerHandle, Transition};
pub use receiver::Receiver;
pub use state::DeviceState;
pub use store::InputNameStore;

// Re-export commonly used types from the lower layers
pub use denon_api::{PowerModeSelection, RemoteKey, VolumeSelector};
pub use denon_discovery::DeviceInfo;

pub mod config;
pub mod logging;

mod accessory;
mod error;
mod inputs;
mod platform;
mod poller;
mod receiver;
mod state;
mod store;
