//! Main zone status document
//!
//! `formMainZone_MainZoneXmlStatusLite.xml` is a flat document of the shape
//!
//! ```xml
//! <item>
//!   <Power><value>ON</value></Power>
//!   <InputFuncSelect><value>NET</value></InputFuncSelect>
//!   <MasterVolume><value>-35.5</value></MasterVolume>
//!   <Mute><value>off</value></Mute>
//! </item>
//! ```
//!
//! Each field is extracted independently so a document missing one element
//! still serves reads of the others.

use xmltree::Element;

use crate::{ApiError, Result};

/// Offset between the receiver's dB-relative volume and the 0-100 scale
pub const VOLUME_OFFSET: i32 = 80;

/// Amount subtracted from a 0-100 volume before it is sent as `MV{n}`.
///
/// Reads add [`VOLUME_OFFSET`] but writes only subtract this; the receiver
/// has always been driven this way and existing setups depend on it.
pub const VOLUME_SET_ADJUST: i32 = 2;

/// Scalar fields extracted from the status document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFields {
    power: Option<String>,
    mute: Option<String>,
    master_volume: Option<String>,
    input_func_select: Option<String>,
}

impl StatusFields {
    /// Extract the fields from a parsed status document.
    ///
    /// Absent paths are recorded as missing and reported when read.
    pub fn from_element(xml: &Element) -> Self {
        Self {
            power: field_value(xml, "Power"),
            mute: field_value(xml, "Mute"),
            master_volume: field_value(xml, "MasterVolume"),
            input_func_select: field_value(xml, "InputFuncSelect"),
        }
    }

    /// Raw `item.Power.value`
    pub fn power(&self) -> Result<&str> {
        self.power
            .as_deref()
            .ok_or_else(|| ApiError::missing_path("item.Power.value"))
    }

    /// Raw `item.Mute.value`
    pub fn mute(&self) -> Result<&str> {
        self.mute
            .as_deref()
            .ok_or_else(|| ApiError::missing_path("item.Mute.value"))
    }

    /// Raw `item.MasterVolume.value`
    pub fn master_volume(&self) -> Result<&str> {
        self.master_volume
            .as_deref()
            .ok_or_else(|| ApiError::missing_path("item.MasterVolume.value"))
    }

    /// Raw `item.InputFuncSelect.value`, possibly empty
    pub fn input_func_select(&self) -> Result<&str> {
        self.input_func_select
            .as_deref()
            .ok_or_else(|| ApiError::missing_path("item.InputFuncSelect.value"))
    }

    /// Power is on only for the exact value `ON`
    pub fn power_on(&self) -> Result<bool> {
        Ok(self.power()? == "ON")
    }

    /// Muted only for the exact value `ON`
    pub fn muted(&self) -> Result<bool> {
        Ok(self.mute()? == "ON")
    }

    /// Master volume on the 0-100 scale
    pub fn volume(&self) -> Result<i32> {
        receiver_to_volume(self.master_volume()?)
    }
}

/// Text of `{name}.value`, `Some("")` when the value element is empty
fn field_value(xml: &Element, name: &str) -> Option<String> {
    let value = xml.get_child(name)?.get_child("value")?;
    Some(
        value
            .get_text()
            .map(|text| text.trim().to_string())
            .unwrap_or_default(),
    )
}

/// Convert a receiver volume reading to the 0-100 scale.
///
/// The receiver reports dB-relative values such as `-35.5`; the integer part
/// is kept and [`VOLUME_OFFSET`] added.
pub fn receiver_to_volume(raw: &str) -> Result<i32> {
    let level: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::ParseError(format!("invalid volume value '{}'", raw)))?;

    let level = level.trunc();
    if !level.is_finite() || level < f64::from(i32::MIN) || level > f64::from(i32::MAX) {
        return Err(ApiError::ParseError(format!("invalid volume value '{}'", raw)));
    }

    (level as i32)
        .checked_add(VOLUME_OFFSET)
        .ok_or_else(|| ApiError::ParseError(format!("volume value '{}' out of range", raw)))
}

/// Level sent in `MV{n}` for a 0-100 volume
pub fn volume_to_command_level(volume: i32) -> i32 {
    volume.saturating_sub(VOLUME_SET_ADJUST)
}
