//! Receiver facade
//!
//! Composes the status client, the command channel, the input table and the
//! name store into the get/set operations the accessory side calls. All
//! operations block on one or two HTTP requests and return their outcome
//! directly; nothing is retried.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use denon_api::{
    status::volume_to_command_level, Command, DenonClient, PowerModeSelection, ReceiverEndpoint,
    RemoteKey, StatusFields, VolumeSelector,
};
use denon_discovery::{DescriptorProbe, DeviceInfo};
use parking_lot::{Mutex, RwLock};

use crate::config::DeviceConfig;
use crate::inputs::{InputEntry, InputTable};
use crate::state::DeviceState;
use crate::store::InputNameStore;
use crate::SdkError;

/// Shared data behind every clone of a [`Receiver`]
pub(crate) struct ReceiverContext {
    pub(crate) name: String,
    pub(crate) endpoint: ReceiverEndpoint,
    pub(crate) switch_info_menu: bool,
    pub(crate) descriptor_port: u16,
    pub(crate) poll_interval: Duration,
    pub(crate) client: DenonClient,
    pub(crate) probe: DescriptorProbe,
    pub(crate) store: InputNameStore,
    pub(crate) inputs: RwLock<InputTable>,
    pub(crate) names: Mutex<BTreeMap<String, String>>,
    pub(crate) state: RwLock<DeviceState>,
    pub(crate) info: RwLock<DeviceInfo>,
}

/// Handle to one configured receiver
///
/// Cheap to clone; clones share state. The background info poller holds a
/// clone as well.
///
/// # Example
///
/// ```rust,no_run
/// use denon_sdk::{DeviceConfig, InputSpec, Receiver};
///
/// let config = DeviceConfig::new("Living Room", "192.168.1.20")
///     .with_input(InputSpec::from("NET"))
///     .with_input(InputSpec::named("SAT/CBL", "Cable"));
/// let receiver = Receiver::new(&config, std::path::Path::new("/tmp/denonTv"))?;
///
/// if !receiver.get_power_state()? {
///     receiver.set_power_state(true)?;
/// }
/// receiver.set_input("SAT/CBL")?;
/// # Ok::<(), denon_sdk::SdkError>(())
/// ```
#[derive(Clone)]
pub struct Receiver {
    pub(crate) context: Arc<ReceiverContext>,
}

impl Receiver {
    /// Build a receiver, resolving its inputs against the names stored in
    /// `storage_dir`
    pub fn new(config: &DeviceConfig, storage_dir: &Path) -> Result<Self, SdkError> {
        Self::with_client(config, storage_dir, DenonClient::new())
    }

    /// Build a receiver on top of a custom API client
    pub fn with_client(
        config: &DeviceConfig,
        storage_dir: &Path,
        client: DenonClient,
    ) -> Result<Self, SdkError> {
        config.validate()?;

        let endpoint = config.endpoint();
        let store = InputNameStore::open(storage_dir, &endpoint.host);
        let names = store.load();
        let inputs = InputTable::resolve(&config.inputs, &names);

        tracing::debug!(
            "Device: {}, name: {}, {} inputs configured",
            endpoint.host,
            config.name,
            inputs.len()
        );

        Ok(Self {
            context: Arc::new(ReceiverContext {
                name: config.name.clone(),
                endpoint,
                switch_info_menu: config.switch_info_menu,
                descriptor_port: config.descriptor_port,
                poll_interval: config.poll_interval(),
                client,
                probe: DescriptorProbe::new(),
                store,
                inputs: RwLock::new(inputs),
                names: Mutex::new(names),
                state: RwLock::new(DeviceState::default()),
                info: RwLock::new(config.initial_device_info()),
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.context.name
    }

    pub fn host(&self) -> &str {
        &self.context.endpoint.host
    }

    pub fn endpoint(&self) -> &ReceiverEndpoint {
        &self.context.endpoint
    }

    /// Snapshot of the cached state
    pub fn state(&self) -> DeviceState {
        self.context.state.read().clone()
    }

    pub fn connection_status(&self) -> bool {
        self.context.state.read().connection_status
    }

    pub fn active_identifier(&self) -> usize {
        self.context.state.read().active_identifier
    }

    /// Manufacturer, model, serial and firmware as currently known
    pub fn information(&self) -> DeviceInfo {
        self.context.info.read().clone()
    }

    /// Snapshot of the input table
    pub fn inputs(&self) -> InputTable {
        self.context.inputs.read().clone()
    }

    // ========================================================================
    // Power
    // ========================================================================

    /// Read the power state from the receiver
    pub fn get_power_state(&self) -> Result<bool, SdkError> {
        let status = self.fetch_status("Power state")?;
        let state = self.read_field("Power state", status.power_on())?;

        tracing::info!(
            "Device: {}, get current Power state successful: {}",
            self.host(),
            if state { "ON" } else { "STANDBY" }
        );
        self.context.state.write().power = state;
        Ok(state)
    }

    /// Switch the receiver on or to standby
    ///
    /// Reads the current state first and sends nothing when it already
    /// matches.
    pub fn set_power_state(&self, state: bool) -> Result<bool, SdkError> {
        if self.get_power_state()? == state {
            return Ok(state);
        }

        self.send("Power state", &Command::Power(state))?;
        tracing::info!(
            "Device: {}, set new Power state successful: {}",
            self.host(),
            if state { "ON" } else { "STANDBY" }
        );
        self.context.state.write().power = state;
        Ok(state)
    }

    // ========================================================================
    // Mute
    // ========================================================================

    pub fn get_mute(&self) -> Result<bool, SdkError> {
        let status = self.fetch_status("Mute state")?;
        let state = self.read_field("Mute state", status.muted())?;

        tracing::info!(
            "Device: {}, get current Mute state successful: {}",
            self.host(),
            if state { "ON" } else { "OFF" }
        );
        self.context.state.write().mute = state;
        Ok(state)
    }

    /// Same read-before-write pattern as [`Receiver::set_power_state`]
    pub fn set_mute(&self, state: bool) -> Result<bool, SdkError> {
        if self.get_mute()? == state {
            return Ok(state);
        }

        self.send("Mute state", &Command::Mute(state))?;
        tracing::info!(
            "Device: {}, set new Mute state successful: {}",
            self.host(),
            if state { "ON" } else { "OFF" }
        );
        self.context.state.write().mute = state;
        Ok(state)
    }

    // ========================================================================
    // Volume
    // ========================================================================

    /// Master volume on the 0-100 scale
    pub fn get_volume(&self) -> Result<i32, SdkError> {
        let status = self.fetch_status("Volume level")?;
        let volume = self.read_field("Volume level", status.volume())?;

        tracing::info!(
            "Device: {}, get current Volume level successful: {}",
            self.host(),
            volume
        );
        self.context.state.write().volume = volume;
        Ok(volume)
    }

    /// Send `MV{volume - 2}` without reading first
    pub fn set_volume(&self, volume: i32) -> Result<i32, SdkError> {
        let level = volume_to_command_level(volume);

        self.send("Volume level", &Command::MasterVolume(level))?;
        tracing::info!(
            "Device: {}, set new Volume level successful: {}",
            self.host(),
            level
        );
        Ok(volume)
    }

    /// Step the volume up or down; failures are only logged
    pub fn volume_selector_press(&self, selector: VolumeSelector) -> VolumeSelector {
        let command = selector.command();
        if self.send_best_effort(&command) {
            tracing::info!(
                "Device: {}, volume key pressed: {:?}, command: {}",
                self.host(),
                selector,
                command
            );
        }
        selector
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Read the selected input and sync the active identifier
    ///
    /// The active identifier falls back to 0 while the receiver is offline,
    /// when no input is reported, or when the reported input is not in the
    /// table. In every case the reported reference is returned unchanged.
    pub fn get_input(&self) -> Result<String, SdkError> {
        let status = self.fetch_status("Input")?;
        let reference = self
            .read_field("Input", status.input_func_select())?
            .to_string();

        let connected = self.connection_status();
        if !connected || reference.is_empty() {
            self.context.state.write().active_identifier = 0;
            return Ok(reference);
        }

        let position = self.context.inputs.read().position(&reference);
        match position {
            Some(identifier) => {
                tracing::info!(
                    "Device: {}, get current Input successful: {}",
                    self.host(),
                    reference
                );
                let mut state = self.context.state.write();
                state.active_identifier = identifier;
                state.input_reference = Some(reference.clone());
            }
            None => {
                tracing::debug!(
                    "Device: {}, current Input {} is not a configured input",
                    self.host(),
                    reference
                );
                self.context.state.write().active_identifier = 0;
            }
        }

        Ok(reference)
    }

    /// Select an input by reference
    ///
    /// Sends nothing when the receiver already reports `reference`.
    pub fn set_input(&self, reference: &str) -> Result<String, SdkError> {
        let current = self.get_input()?;
        if current == reference {
            return Ok(current);
        }

        self.send("Input", &Command::SelectInput(reference.to_string()))?;
        tracing::info!(
            "Device: {}, set new Input successful: {}",
            self.host(),
            reference
        );

        let position = self.context.inputs.read().position(reference);
        let mut state = self.context.state.write();
        state.input_reference = Some(reference.to_string());
        if let Some(identifier) = position {
            state.active_identifier = identifier;
        }
        Ok(reference.to_string())
    }

    /// Select the input at `identifier` in the input table
    pub fn set_input_by_identifier(&self, identifier: usize) -> Result<String, SdkError> {
        let reference = self.input(identifier)?.reference;
        self.set_input(&reference)
    }

    /// Rename an input and persist the full name map
    ///
    /// The in-memory name changes even if the file cannot be written.
    pub fn rename_input(&self, identifier: usize, name: &str) -> Result<(), SdkError> {
        let raw_reference = {
            let mut inputs = self.context.inputs.write();
            let entry = inputs
                .get_mut(identifier)
                .ok_or(SdkError::UnknownInput(identifier))?;
            entry.configured_name = name.to_string();
            entry.raw_reference.clone()
        };

        let mut names = self.context.names.lock();
        names.insert(raw_reference.clone(), name.to_string());
        if self.context.store.save(&names) {
            tracing::info!(
                "Device: {}, saved new Input successful, name: {} reference: {}",
                self.host(),
                name,
                raw_reference
            );
        }
        Ok(())
    }

    fn input(&self, identifier: usize) -> Result<InputEntry, SdkError> {
        self.context
            .inputs
            .read()
            .get(identifier)
            .cloned()
            .ok_or(SdkError::UnknownInput(identifier))
    }

    // ========================================================================
    // Remote and menu
    // ========================================================================

    /// Toggle the on-screen overlay
    ///
    /// `MNRTN` closes it when it was last opened; otherwise `MNMEN ON` or
    /// `MNINF` opens it depending on `switchInfoMenu`. The local flag flips
    /// whether or not the command got through.
    pub fn set_power_mode_selection(&self, selection: PowerModeSelection) -> PowerModeSelection {
        let showing = self.context.state.read().info_menu;
        let command = if showing {
            Command::Return
        } else if self.context.switch_info_menu {
            Command::MenuOn
        } else {
            Command::Info
        };

        if self.send_best_effort(&command) {
            tracing::info!(
                "Device: {}, set power mode selection successful, state: {}, command: {}",
                self.host(),
                if showing { "HIDDEN" } else { "SHOW" },
                command
            );
        }
        self.context.state.write().info_menu = !showing;
        selection
    }

    /// Send a remote key; failures are only logged
    ///
    /// Unlike [`Receiver::set_power_mode_selection`] this never touches the
    /// overlay flag.
    pub fn remote_key_press(&self, key: RemoteKey) -> RemoteKey {
        let command = key.command(self.context.switch_info_menu);
        if self.send_best_effort(&command) {
            tracing::info!(
                "Device: {}, key pressed: {:?}, command: {}",
                self.host(),
                key,
                command
            );
        }
        key
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn fetch_status(&self, what: &str) -> Result<StatusFields, SdkError> {
        self.context
            .client
            .fetch_status(&self.context.endpoint)
            .map_err(|e| {
                tracing::debug!(
                    "Device: {}, can not get current {}. Might be due to a wrong settings in config, error: {}",
                    self.host(),
                    what,
                    e
                );
                SdkError::from(e)
            })
    }

    fn read_field<T>(&self, what: &str, field: denon_api::Result<T>) -> Result<T, SdkError> {
        field.map_err(|e| {
            tracing::debug!("Device: {}, can not read {}: {}", self.host(), what, e);
            SdkError::from(e)
        })
    }

    fn send(&self, what: &str, command: &Command) -> Result<(), SdkError> {
        self.context
            .client
            .send_command(&self.context.endpoint, command)
            .map_err(|e| {
                tracing::debug!(
                    "Device: {}, can not set new {}. Might be due to a wrong settings in config, error: {}",
                    self.host(),
                    what,
                    e
                );
                SdkError::from(e)
            })
    }

    fn send_best_effort(&self, command: &Command) -> bool {
        self.context
            .client
            .send_best_effort(&self.context.endpoint, command)
    }
}

impl std::fmt::Debug for Receiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Receiver")
            .field("name", &self.context.name)
            .field("endpoint", &self.context.endpoint)
            .finish()
    }
}
