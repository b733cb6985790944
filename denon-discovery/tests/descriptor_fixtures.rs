//! Fixture-based descriptor tests
//!
//! Captured descriptor bodies are parsed the way the info poller parses
//! them, and served from a mock endpoint to exercise the probe.

use std::fs;
use std::path::PathBuf;

use denon_discovery::{DescriptorProbe, DeviceDescription, DeviceInfo, DESCRIPTOR_PATH};
use mockito::Server;
use rstest::rstest;

fn load_fixture(filename: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(filename);

    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e))
}

#[rstest]
#[case("avr_x3700h.xml", "Denon", "Denon AVR-X3700H", "BBW36190805001", "3.14.450")]
#[case("marantz_sr6015_no_firmware.xml", "Marantz", "Marantz SR6015", "MZ06201902117", "FW000002")]
fn test_parse_descriptor_fixture(
    #[case] fixture_file: &str,
    #[case] manufacturer: &str,
    #[case] model: &str,
    #[case] serial: &str,
    #[case] firmware: &str,
) {
    let xml = load_fixture(fixture_file);
    let info = DeviceDescription::from_xml(&xml)
        .expect("Failed to parse descriptor")
        .to_device_info(&DeviceInfo::default());

    assert_eq!(info.manufacturer, manufacturer);
    assert_eq!(info.model_name, model);
    assert_eq!(info.serial_number, serial);
    assert_eq!(info.firmware_revision, firmware);
}

#[tokio::test]
async fn test_probe_and_parse_from_mock_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", DESCRIPTOR_PATH)
        .with_status(200)
        .with_header("content-type", "text/xml")
        .with_body(load_fixture("avr_x3700h.xml"))
        .create_async()
        .await;

    let address = server.host_with_port();
    let (host, port) = address.rsplit_once(':').unwrap();

    let body = DescriptorProbe::new()
        .fetch(host, port.parse().unwrap())
        .await
        .expect("probe should reach the mock endpoint");
    let device = DeviceDescription::from_xml(&body).expect("Failed to parse XML");

    mock.assert_async().await;
    assert_eq!(device.friendly_name.as_deref(), Some("Living Room"));
    assert_eq!(device.firmware_revision(), Some("3.14.450"));
}
