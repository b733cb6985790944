use control_client::{command_url, ControlClient};

use crate::{Command, Result, StatusFields};

/// Path of the main zone status document
pub const STATUS_PATH: &str = "/goform/formMainZone_MainZoneXmlStatusLite.xml";

/// Path of the command channel
pub const COMMAND_PATH: &str = "/goform/formiPhoneAppDirect.xml";

/// Default HTTP port of the goform API
pub const DEFAULT_PORT: u16 = 8080;

/// Host and port of a receiver's goform API
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiverEndpoint {
    pub host: String,
    pub port: u16,
}

impl ReceiverEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `http://{host}:{port}`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// A client for reading status from and sending commands to receivers
///
/// The client is stateless apart from the underlying HTTP agent, so one
/// instance can serve any number of receivers.
///
/// # Example
/// ```rust,no_run
/// use denon_api::{Command, DenonClient, ReceiverEndpoint};
///
/// let client = DenonClient::new();
/// let endpoint = ReceiverEndpoint::new("192.168.1.20", 8080);
///
/// let volume = client.fetch_status(&endpoint)?.volume()?;
/// client.send_command(&endpoint, &Command::MasterVolume(volume - 2))?;
/// # Ok::<(), denon_api::ApiError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DenonClient {
    control: ControlClient,
}

impl DenonClient {
    pub fn new() -> Self {
        Self {
            control: ControlClient::new(),
        }
    }

    /// Create a client on top of a custom control client (e.g. other timeouts)
    pub fn with_control_client(control: ControlClient) -> Self {
        Self { control }
    }

    /// Fetch and parse the main zone status document
    ///
    /// # Errors
    /// `ConnectionError` when the receiver cannot be reached, `ParseError`
    /// when the body is not XML. Missing fields surface later, when the
    /// corresponding accessor on [`StatusFields`] is called.
    pub fn fetch_status(&self, endpoint: &ReceiverEndpoint) -> Result<StatusFields> {
        let url = format!("{}{}", endpoint.base_url(), STATUS_PATH);
        let xml = self.control.get_xml(&url)?;
        Ok(StatusFields::from_element(&xml))
    }

    /// Send a command and report whether the request got through
    pub fn send_command(&self, endpoint: &ReceiverEndpoint, command: &Command) -> Result<()> {
        let url = command_url(&endpoint.base_url(), COMMAND_PATH, &command.code());
        self.control.get_discard(&url)?;
        Ok(())
    }

    /// Send a command whose failure is only worth a log line
    ///
    /// Returns `true` when the request got through.
    pub fn send_best_effort(&self, endpoint: &ReceiverEndpoint, command: &Command) -> bool {
        match self.send_command(endpoint, command) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(
                    "Device: {}, can not send command {}, error: {}",
                    endpoint.host,
                    command,
                    e
                );
                false
            }
        }
    }
}
