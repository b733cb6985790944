//! Command codes for the `formiPhoneAppDirect.xml` control channel
//!
//! Every receiver action is a short token sent verbatim as the query string,
//! e.g. `PWON`, `MV45` or `SINET`. The receiver answers with an empty document
//! so the only observable outcome is whether the request got through.

use std::fmt;

/// A command understood by the receiver's control endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `PWON` / `PWSTANDBY`
    Power(bool),
    /// `MUON` / `MUOFF`
    Mute(bool),
    /// `MV{n}` with the raw receiver level
    MasterVolume(i32),
    /// `MVUP`
    VolumeUp,
    /// `MVDOWN`
    VolumeDown,
    /// `SI{reference}`
    SelectInput(String),
    /// `MNMEN ON`, opens the setup menu
    MenuOn,
    /// `MNINF`, shows the info overlay
    Info,
    /// `MNRTN`
    Return,
    /// `MN9E`
    Rewind,
    /// `MN9D`
    FastForward,
    /// `MN9F`
    NextTrack,
    /// `MN9G`
    PreviousTrack,
    /// `MNCUP`
    CursorUp,
    /// `MNCDN`
    CursorDown,
    /// `MNCLT`
    CursorLeft,
    /// `MNCRT`
    CursorRight,
    /// `MNENT`
    Enter,
    /// `NS94`
    PlayPause,
}

impl Command {
    /// The query token sent to the receiver
    pub fn code(&self) -> String {
        match self {
            Command::Power(true) => "PWON".to_string(),
            Command::Power(false) => "PWSTANDBY".to_string(),
            Command::Mute(true) => "MUON".to_string(),
            Command::Mute(false) => "MUOFF".to_string(),
            Command::MasterVolume(level) => format!("MV{}", level),
            Command::VolumeUp => "MVUP".to_string(),
            Command::VolumeDown => "MVDOWN".to_string(),
            Command::SelectInput(reference) => format!("SI{}", reference),
            Command::MenuOn => "MNMEN ON".to_string(),
            Command::Info => "MNINF".to_string(),
            Command::Return => "MNRTN".to_string(),
            Command::Rewind => "MN9E".to_string(),
            Command::FastForward => "MN9D".to_string(),
            Command::NextTrack => "MN9F".to_string(),
            Command::PreviousTrack => "MN9G".to_string(),
            Command::CursorUp => "MNCUP".to_string(),
            Command::CursorDown => "MNCDN".to_string(),
            Command::CursorLeft => "MNCLT".to_string(),
            Command::CursorRight => "MNCRT".to_string(),
            Command::Enter => "MNENT".to_string(),
            Command::PlayPause => "NS94".to_string(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}
