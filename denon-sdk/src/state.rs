//! Cached receiver state
//!
//! Every field is a plain last-write-wins value. Reads and writes from the
//! get/set paths and from the info poller may interleave; a stale value is
//! acceptable for everything stored here.

/// Last known state of a receiver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceState {
    /// Whether the descriptor endpoint answered on the last probe
    pub connection_status: bool,
    pub power: bool,
    pub mute: bool,
    /// Volume on the 0-100 scale
    pub volume: i32,
    pub input_reference: Option<String>,
    /// Whether the power-mode toggle last opened the overlay.
    /// Tracked locally, never read from the receiver.
    pub info_menu: bool,
    /// Set once metadata has been read from the descriptor; never reset
    pub device_info_captured: bool,
    /// Identifier of the active input on the accessory side; 0 when unknown
    pub active_identifier: usize,
}
