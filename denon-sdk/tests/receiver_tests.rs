//! Receiver facade against a mock receiver
//!
//! Every test stands up a mockito server in place of the receiver's HTTP API
//! and drives the facade through its public operations.

mod helpers;

use std::fs;

use denon_sdk::{
    DeviceConfig, InputSpec, PowerModeSelection, Receiver, RemoteKey, TelevisionAccessory,
    VolumeSelector,
};
use helpers::{TestReceiver, COMMAND_PATH, STATUS_PATH};
use mockito::Matcher;
use rstest::rstest;
use tempfile::TempDir;

// ============================================================================
// Power and mute
// ============================================================================

#[rstest]
#[case("ON", true)]
#[case("STANDBY", false)]
#[case("OFF", false)]
fn test_get_power_state(#[case] reported: &str, #[case] expected: bool) {
    let mut t = TestReceiver::new(&["NET"]);
    let status = t.mock_status(reported, "OFF", "-40.0", "NET");

    assert_eq!(t.receiver.get_power_state().unwrap(), expected);
    assert_eq!(t.receiver.state().power, expected);
    status.assert();
}

#[test]
fn test_set_power_state_sends_nothing_when_already_on() {
    let mut t = TestReceiver::new(&["NET"]);
    let _status = t.mock_status("ON", "OFF", "-40.0", "NET");
    let commands = t.mock_no_command();

    assert!(t.receiver.set_power_state(true).unwrap());
    commands.assert();
}

#[rstest]
#[case("STANDBY", true, "PWON")]
#[case("ON", false, "PWSTANDBY")]
fn test_set_power_state_sends_command(
    #[case] reported: &str,
    #[case] requested: bool,
    #[case] code: &str,
) {
    let mut t = TestReceiver::new(&["NET"]);
    let _status = t.mock_status(reported, "OFF", "-40.0", "NET");
    let command = t.mock_command(code);

    assert_eq!(t.receiver.set_power_state(requested).unwrap(), requested);
    assert_eq!(t.receiver.state().power, requested);
    command.assert();
}

#[rstest]
#[case("OFF", true, "MUON")]
#[case("ON", false, "MUOFF")]
fn test_set_mute_sends_command(#[case] reported: &str, #[case] requested: bool, #[case] code: &str) {
    let mut t = TestReceiver::new(&["NET"]);
    let _status = t.mock_status("ON", reported, "-40.0", "NET");
    let command = t.mock_command(code);

    assert_eq!(t.receiver.set_mute(requested).unwrap(), requested);
    assert_eq!(t.receiver.state().mute, requested);
    command.assert();
}

#[test]
fn test_set_mute_sends_nothing_when_already_muted() {
    let mut t = TestReceiver::new(&["NET"]);
    let _status = t.mock_status("ON", "ON", "-40.0", "NET");
    let commands = t.mock_no_command();

    assert!(t.receiver.get_mute().unwrap());
    assert!(t.receiver.set_mute(true).unwrap());
    commands.assert();
}

// ============================================================================
// Volume
// ============================================================================

#[rstest]
#[case("-35.0", 45)]
#[case("-80.0", 0)]
#[case("-34.5", 45)]
#[case("0.0", 80)]
fn test_get_volume_adds_offset(#[case] reported: &str, #[case] expected: i32) {
    let mut t = TestReceiver::new(&["NET"]);
    let _status = t.mock_status("ON", "OFF", reported, "NET");

    assert_eq!(t.receiver.get_volume().unwrap(), expected);
    assert_eq!(t.receiver.state().volume, expected);
}

#[rstest]
#[case("1e10")]
#[case("3000000000")]
#[case("--")]
fn test_get_volume_rejects_out_of_range_reading(#[case] reported: &str) {
    let mut t = TestReceiver::new(&["NET"]);
    let _status = t.mock_status("ON", "OFF", reported, "NET");

    assert!(t.receiver.get_volume().unwrap_err().is_parse_error());
    assert_eq!(t.receiver.state().volume, 0);
}

#[rstest]
#[case(45, "MV43")]
#[case(2, "MV0")]
#[case(0, "MV-2")]
fn test_set_volume_sends_adjusted_level(#[case] volume: i32, #[case] code: &str) {
    let mut t = TestReceiver::new(&["NET"]);
    let command = t.mock_command(code);

    assert_eq!(t.receiver.set_volume(volume).unwrap(), volume);
    command.assert();
}

#[rstest]
#[case(VolumeSelector::Increment, "MVUP")]
#[case(VolumeSelector::Decrement, "MVDOWN")]
fn test_volume_selector(#[case] selector: VolumeSelector, #[case] code: &str) {
    let mut t = TestReceiver::new(&["NET"]);
    let command = t.mock_command(code);

    assert_eq!(t.receiver.volume_selector_press(selector), selector);
    command.assert();
}

// ============================================================================
// Inputs
// ============================================================================

#[test]
fn test_get_input_matches_configured_input_when_online() {
    let mut t = TestReceiver::new(&["NET", "TV"]);
    let _status = t.mock_status("ON", "OFF", "-40.0", "TV");
    t.go_online();

    assert_eq!(t.receiver.get_input().unwrap(), "TV");
    assert_eq!(t.receiver.active_identifier(), 1);
    assert_eq!(t.receiver.state().input_reference.as_deref(), Some("TV"));
}

#[test]
fn test_get_input_resets_identifier_while_offline() {
    let mut t = TestReceiver::new(&["NET", "TV"]);
    let _status = t.mock_status("ON", "OFF", "-40.0", "TV");

    assert_eq!(t.receiver.get_input().unwrap(), "TV");
    assert_eq!(t.receiver.active_identifier(), 0);
}

#[rstest]
#[case("")]
#[case("BD")]
fn test_get_input_resets_identifier_for_unknown_input(#[case] reported: &str) {
    let mut t = TestReceiver::new(&["NET", "TV"]);
    let status = t.mock_status("ON", "OFF", "-40.0", "TV");
    t.go_online();
    t.receiver.get_input().unwrap();
    assert_eq!(t.receiver.active_identifier(), 1);
    status.remove();

    let _other = t.mock_status("ON", "OFF", "-40.0", reported);

    assert_eq!(t.receiver.get_input().unwrap(), reported);
    assert_eq!(t.receiver.active_identifier(), 0);
}

#[test]
fn test_set_input_sends_nothing_for_current_input() {
    let mut t = TestReceiver::new(&["NET", "TV"]);
    let _status = t.mock_status("ON", "OFF", "-40.0", "NET");
    let commands = t.mock_no_command();

    assert_eq!(t.receiver.set_input("NET").unwrap(), "NET");
    commands.assert();
}

#[test]
fn test_set_input_by_identifier_uses_stripped_reference() {
    let mut t = TestReceiver::with_config(&[], |config| {
        config
            .with_input(InputSpec::from("NET"))
            .with_input(InputSpec::named("SAT / CBL", "Cable"))
    });
    let _status = t.mock_status("ON", "OFF", "-40.0", "NET");
    let command = t.mock_command("SISAT/CBL");

    assert_eq!(t.receiver.set_input_by_identifier(1).unwrap(), "SAT/CBL");
    assert_eq!(t.receiver.active_identifier(), 1);
    assert_eq!(t.receiver.state().input_reference.as_deref(), Some("SAT/CBL"));
    command.assert();
}

#[test]
fn test_set_input_by_unknown_identifier() {
    let t = TestReceiver::new(&["NET"]);

    let err = t.receiver.set_input_by_identifier(5).unwrap_err();
    assert!(matches!(err, denon_sdk::SdkError::UnknownInput(5)));
}

#[test]
fn test_rename_input_persists_whole_map() {
    let t = TestReceiver::new(&["NET", "TV"]);

    t.receiver.rename_input(0, "Streaming").unwrap();

    let path = t.storage.path().join(format!(
        "inputs_{}.json",
        t.receiver.host().replace('.', "")
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"NET":"Streaming"}"#);
    assert_eq!(t.receiver.inputs().get(0).unwrap().configured_name, "Streaming");

    t.receiver.rename_input(1, "Television").unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{"NET":"Streaming","TV":"Television"}"#
    );
}

#[test]
fn test_saved_names_survive_restart() {
    let storage = TempDir::new().unwrap();
    let config = DeviceConfig::new("Living Room", "10.0.0.5")
        .with_input(InputSpec::from("NET"))
        .with_input(InputSpec::named("TV", "Television"));

    let first = Receiver::new(&config, storage.path()).unwrap();
    first.rename_input(0, "Streaming").unwrap();

    let second = Receiver::new(&config, storage.path()).unwrap();
    let names: Vec<String> = second
        .input_sources()
        .into_iter()
        .map(|source| source.configured_name)
        .collect();
    assert_eq!(names, vec!["Streaming", "Television"]);
}

// ============================================================================
// Overlay and remote keys
// ============================================================================

#[test]
fn test_power_mode_selection_alternates_open_and_close() {
    let mut t = TestReceiver::new(&["NET"]);
    let info = t
        .server
        .mock("GET", COMMAND_PATH)
        .match_query(Matcher::Exact("MNINF".to_string()))
        .expect(2)
        .create();
    let close = t.mock_command("MNRTN");

    for _ in 0..3 {
        t.receiver.set_power_mode_selection(PowerModeSelection::Show);
    }

    assert!(t.receiver.state().info_menu);
    info.assert();
    close.assert();
}

#[test]
fn test_power_mode_selection_opens_menu_when_switched() {
    let mut t = TestReceiver::with_config(&["NET"], |config| config.with_switch_info_menu(true));
    let menu = t
        .server
        .mock("GET", COMMAND_PATH)
        .match_query(Matcher::Regex("^MNMEN(%20| )ON$".to_string()))
        .expect(1)
        .create();

    t.receiver.set_power_mode_selection(PowerModeSelection::Show);

    assert!(t.receiver.state().info_menu);
    menu.assert();
}

#[test]
fn test_power_mode_selection_toggles_even_when_unreachable() {
    let storage = TempDir::new().unwrap();
    let config = DeviceConfig::new("Offline", "127.0.0.1").with_port(1);
    let receiver = Receiver::new(&config, storage.path()).unwrap();

    assert_eq!(
        receiver.set_power_mode_selection(PowerModeSelection::Hide),
        PowerModeSelection::Hide
    );
    assert!(receiver.state().info_menu);
}

#[rstest]
#[case(RemoteKey::ArrowUp, false, "MNCUP")]
#[case(RemoteKey::Select, false, "MNENT")]
#[case(RemoteKey::Back, false, "MNRTN")]
#[case(RemoteKey::PlayPause, false, "NS94")]
#[case(RemoteKey::Information, true, "MNINF")]
fn test_remote_key_press(#[case] key: RemoteKey, #[case] switch: bool, #[case] code: &str) {
    let mut t = TestReceiver::with_config(&["NET"], |config| config.with_switch_info_menu(switch));
    let command = t.mock_command(code);

    assert_eq!(t.receiver.remote_key_press(key), key);
    assert!(!t.receiver.state().info_menu);
    command.assert();
}

#[test]
fn test_information_key_opens_menu_without_switch() {
    let mut t = TestReceiver::new(&["NET"]);
    let menu = t
        .server
        .mock("GET", COMMAND_PATH)
        .match_query(Matcher::Regex("^MNMEN(%20| )ON$".to_string()))
        .expect(1)
        .create();

    t.receiver.remote_key_press(RemoteKey::Information);
    menu.assert();
}

#[test]
fn test_remote_key_failure_is_swallowed() {
    let mut t = TestReceiver::new(&["NET"]);
    let _failing = t
        .server
        .mock("GET", COMMAND_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .create();

    assert_eq!(t.receiver.remote_key_press(RemoteKey::Rewind), RemoteKey::Rewind);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_unreachable_receiver_keeps_cached_state() {
    let storage = TempDir::new().unwrap();
    let config = DeviceConfig::new("Offline", "127.0.0.1").with_port(1);
    let receiver = Receiver::new(&config, storage.path()).unwrap();

    let err = receiver.set_power_state(true).unwrap_err();
    assert!(err.is_connection_error());
    assert!(!receiver.state().power);

    assert!(receiver.get_volume().unwrap_err().is_connection_error());
    assert_eq!(receiver.state().volume, 0);
}

#[test]
fn test_missing_status_field_is_parse_error() {
    let mut t = TestReceiver::new(&["NET"]);
    let _status = t
        .server
        .mock("GET", STATUS_PATH)
        .with_status(200)
        .with_body("<item><Power><value>ON</value></Power></item>")
        .create();

    assert!(t.receiver.get_power_state().unwrap());
    assert!(t.receiver.get_volume().unwrap_err().is_parse_error());
    assert!(t.receiver.get_input().unwrap_err().is_parse_error());
}

#[test]
fn test_failed_command_leaves_cache_unchanged() {
    let mut t = TestReceiver::new(&["NET"]);
    let _status = t.mock_status("STANDBY", "OFF", "-40.0", "NET");
    let _failing = t
        .server
        .mock("GET", COMMAND_PATH)
        .match_query(Matcher::Exact("PWON".to_string()))
        .with_status(500)
        .create();

    assert!(t.receiver.set_power_state(true).is_err());
    assert!(!t.receiver.state().power);
}

// ============================================================================
// Accessory surface
// ============================================================================

#[test]
fn test_accessory_active_identifier_reads_input() {
    let mut t = TestReceiver::new(&["NET", "TV", "BD"]);
    let _status = t.mock_status("ON", "OFF", "-40.0", "BD");
    t.go_online();

    assert_eq!(TelevisionAccessory::active_identifier(&t.receiver).unwrap(), 2);
    assert_eq!(t.receiver.information().model_name, "AVR-X2700H");
}
