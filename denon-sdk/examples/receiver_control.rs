//! Drive a receiver from the command line
//!
//! Loads a platform config, starts the info poller and walks through the
//! accessory operations on the first configured receiver.
//!
//! Run with: cargo run -p denon-sdk --example receiver_control -- config.json

use std::thread;
use std::time::Duration;

use denon_sdk::logging::{init_logging, LoggingMode};
use denon_sdk::{
    PlatformConfig, ReceiverPlatform, RemoteKey, SdkError, TelevisionAccessory, VolumeSelector,
};

fn main() -> Result<(), SdkError> {
    if let Err(e) = init_logging(LoggingMode::Development) {
        eprintln!("Logging disabled: {}", e);
    }

    let path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    println!("Loading platform config from {}", path);

    let config = PlatformConfig::from_file(&path)?;
    let mut platform = ReceiverPlatform::from_config(config)?;
    platform.start_polling();

    // Give the poller one probe to mark the receiver online
    thread::sleep(Duration::from_secs(2));

    let receiver = &platform.accessories()[0];
    let info = receiver.information();
    println!(
        "\n{} ({} {}, firmware {})",
        receiver.name(),
        info.manufacturer,
        info.model_name,
        info.firmware_revision
    );
    println!("Online: {}", receiver.connection_status());

    println!("\nInputs:");
    for source in receiver.input_sources() {
        println!("  [{}] {} ({})", source.identifier, source.configured_name, source.reference);
    }

    println!("\nPower: {}", if receiver.active()? { "ON" } else { "STANDBY" });
    println!("Mute: {}", receiver.mute()?);
    println!("Volume: {}", receiver.volume()?);

    match receiver.get_input() {
        Ok(reference) => println!(
            "Input: {} (identifier {})",
            reference,
            receiver.active_identifier()
        ),
        Err(e) => println!("Error reading input: {}", e),
    }

    receiver.volume_selector(VolumeSelector::Increment);
    receiver.volume_selector(VolumeSelector::Decrement);
    receiver.remote_key(RemoteKey::Information);
    receiver.remote_key(RemoteKey::Back);

    platform.stop_polling();
    Ok(())
}
