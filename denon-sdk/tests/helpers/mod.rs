//! Shared helpers for receiver integration tests

#![allow(dead_code)]

use denon_sdk::{DeviceConfig, InputSpec, Receiver};
use mockito::{Matcher, Mock, Server, ServerGuard};
use tempfile::TempDir;

pub const STATUS_PATH: &str = "/goform/formMainZone_MainZoneXmlStatusLite.xml";
pub const COMMAND_PATH: &str = "/goform/formiPhoneAppDirect.xml";

pub const DESCRIPTOR: &str = r#"<?xml version="1.0"?>
<root xmlns="urn:schemas-upnp-org:device-1-0">
  <device>
    <manufacturer>Denon</manufacturer>
    <modelName>AVR-X2700H</modelName>
    <serialNumber>AX27000001</serialNumber>
  </device>
</root>"#;

/// A receiver wired to a mock server, with its own storage directory
pub struct TestReceiver {
    pub server: ServerGuard,
    pub receiver: Receiver,
    pub storage: TempDir,
}

impl TestReceiver {
    pub fn new(inputs: &[&str]) -> Self {
        Self::with_config(inputs, |config| config)
    }

    pub fn with_config(inputs: &[&str], customize: impl FnOnce(DeviceConfig) -> DeviceConfig) -> Self {
        let server = Server::new();
        let storage = TempDir::new().unwrap();

        let host_with_port = server.host_with_port();
        let (host, port) = host_with_port.rsplit_once(':').unwrap();

        let mut config = DeviceConfig::new("Living Room", host).with_port(port.parse().unwrap());
        for input in inputs {
            config = config.with_input(InputSpec::from(*input));
        }
        let config = customize(config);

        let receiver = Receiver::new(&config, storage.path()).unwrap();

        Self {
            server,
            receiver,
            storage,
        }
    }

    /// Mark the receiver reachable, as the info poller would
    pub fn go_online(&self) {
        self.receiver.apply_probe(Ok(DESCRIPTOR.to_string()));
        assert!(self.receiver.connection_status());
    }

    pub fn mock_status(&mut self, power: &str, mute: &str, volume: &str, input: &str) -> Mock {
        self.server
            .mock("GET", STATUS_PATH)
            .with_status(200)
            .with_header("content-type", "text/xml")
            .with_body(status_xml(power, mute, volume, input))
            .create()
    }

    pub fn mock_command(&mut self, code: &str) -> Mock {
        self.server
            .mock("GET", COMMAND_PATH)
            .match_query(Matcher::Exact(code.to_string()))
            .with_status(200)
            .expect(1)
            .create()
    }

    pub fn mock_no_command(&mut self) -> Mock {
        self.server
            .mock("GET", COMMAND_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .expect(0)
            .create()
    }
}

pub fn status_xml(power: &str, mute: &str, volume: &str, input: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8" ?>
<item>
  <Power><value>{}</value></Power>
  <InputFuncSelect><value>{}</value></InputFuncSelect>
  <MasterVolume><value>{}</value></MasterVolume>
  <Mute><value>{}</value></Mute>
</item>"#,
        power, input, volume, mute
    )
}
