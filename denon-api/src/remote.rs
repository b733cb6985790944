//! Remote-control key enums as delivered by the accessory framework
//!
//! The numeric values match the HomeKit `RemoteKey`, `VolumeSelector` and
//! `PowerModeSelection` characteristic values so raw characteristic writes convert directly.

use serde::{Deserialize, Serialize};

use crate::{ApiError, Command};

/// Keys of the on-screen remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemoteKey {
    Rewind,
    FastForward,
    NextTrack,
    PreviousTrack,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Select,
    Back,
    Exit,
    PlayPause,
    Information,
}

impl RemoteKey {
    /// Map the key to the receiver command.
    ///
    /// `Information` depends on the device's `switchInfoMenu` setting: the
    /// info overlay when set, the setup menu otherwise.
    pub fn command(self, switch_info_menu: bool) -> Command {
        match self {
            RemoteKey::Rewind => Command::Rewind,
            RemoteKey::FastForward => Command::FastForward,
            RemoteKey::NextTrack => Command::NextTrack,
            RemoteKey::PreviousTrack => Command::PreviousTrack,
            RemoteKey::ArrowUp => Command::CursorUp,
            RemoteKey::ArrowDown => Command::CursorDown,
            RemoteKey::ArrowLeft => Command::CursorLeft,
            RemoteKey::ArrowRight => Command::CursorRight,
            RemoteKey::Select => Command::Enter,
            RemoteKey::Back | RemoteKey::Exit => Command::Return,
            RemoteKey::PlayPause => Command::PlayPause,
            RemoteKey::Information => {
                if switch_info_menu {
                    Command::Info
                } else {
                    Command::MenuOn
                }
            }
        }
    }
}

impl TryFrom<u8> for RemoteKey {
    type Error = ApiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RemoteKey::Rewind),
            1 => Ok(RemoteKey::FastForward),
            2 => Ok(RemoteKey::NextTrack),
            3 => Ok(RemoteKey::PreviousTrack),
            4 => Ok(RemoteKey::ArrowUp),
            5 => Ok(RemoteKey::ArrowDown),
            6 => Ok(RemoteKey::ArrowLeft),
            7 => Ok(RemoteKey::ArrowRight),
            8 => Ok(RemoteKey::Select),
            9 => Ok(RemoteKey::Back),
            10 => Ok(RemoteKey::Exit),
            11 => Ok(RemoteKey::PlayPause),
            15 => Ok(RemoteKey::Information),
            other => Err(ApiError::InvalidParameter(format!(
                "unknown remote key {}",
                other
            ))),
        }
    }
}

/// Relative volume step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeSelector {
    Increment,
    Decrement,
}

impl VolumeSelector {
    pub fn command(self) -> Command {
        match self {
            VolumeSelector::Increment => Command::VolumeUp,
            VolumeSelector::Decrement => Command::VolumeDown,
        }
    }
}

impl TryFrom<u8> for VolumeSelector {
    type Error = ApiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(VolumeSelector::Increment),
            1 => Ok(VolumeSelector::Decrement),
            other => Err(ApiError::InvalidParameter(format!(
                "unknown volume selector {}",
                other
            ))),
        }
    }
}

/// Requested visibility of the on-screen info/menu overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerModeSelection {
    Show,
    Hide,
}

impl TryFrom<u8> for PowerModeSelection {
    type Error = ApiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PowerModeSelection::Show),
            1 => Ok(PowerModeSelection::Hide),
            other => Err(ApiError::InvalidParameter(format!(
                "unknown power mode selection {}",
                other
            ))),
        }
    }
}
