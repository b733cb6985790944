//! Device info poller
//!
//! Probes the descriptor endpoint on a fixed interval to track whether the
//! receiver is reachable. The first time it comes online in this process the
//! descriptor body is parsed for manufacturer, model, serial and firmware.
//!
//! The loop runs on its own thread with a current-thread tokio runtime so
//! the blocking get/set paths never wait on it.

use std::thread::{self, JoinHandle};

use denon_discovery::{DeviceDescription, DiscoveryError};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::Receiver;

/// Connectivity change caused by one probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    WentOnline,
    WentOffline,
    Unchanged,
}

impl Receiver {
    /// Fold one probe outcome into the connectivity state
    ///
    /// Metadata capture is attempted only on an Offline→Online transition and
    /// only until it has succeeded once.
    pub fn apply_probe(&self, probe: Result<String, DiscoveryError>) -> Transition {
        match probe {
            Err(e) => {
                let was_online = {
                    let mut state = self.context.state.write();
                    std::mem::replace(&mut state.connection_status, false)
                };

                if was_online {
                    tracing::info!(
                        "Device: {}, name: {}, state: Offline",
                        self.host(),
                        self.name()
                    );
                    tracing::debug!("Device: {}, probe error: {}", self.host(), e);
                    Transition::WentOffline
                } else {
                    tracing::trace!("Device: {}, still offline: {}", self.host(), e);
                    Transition::Unchanged
                }
            }
            Ok(body) => {
                let captured = {
                    let mut state = self.context.state.write();
                    if state.connection_status {
                        return Transition::Unchanged;
                    }
                    state.connection_status = true;
                    state.device_info_captured
                };

                tracing::info!(
                    "Device: {}, name: {}, state: Online",
                    self.host(),
                    self.name()
                );

                if !captured {
                    self.capture_device_info(&body);
                }
                Transition::WentOnline
            }
        }
    }

    /// Probe the descriptor endpoint once and apply the outcome
    pub async fn poll_once(&self) -> Transition {
        let probe = self
            .context
            .probe
            .fetch(self.host(), self.context.descriptor_port)
            .await;
        self.apply_probe(probe)
    }

    /// Start probing in the background
    ///
    /// The first probe happens immediately. Polling stops when the returned
    /// handle is stopped or dropped.
    pub fn start_info_poller(&self) -> InfoPollerHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let receiver = self.clone();

        let thread = thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!("Failed to create tokio runtime for info poller: {}", e);
                    return;
                }
            };

            rt.block_on(run_poll_loop(receiver, shutdown_rx));
        });

        InfoPollerHandle {
            shutdown: shutdown_tx,
            thread: Some(thread),
        }
    }

    fn capture_device_info(&self, body: &str) {
        let description = match DeviceDescription::from_xml(body) {
            Ok(description) => description,
            Err(e) => {
                tracing::debug!(
                    "Device: {}, device info parse error: {}",
                    self.host(),
                    e
                );
                return;
            }
        };

        let info = {
            let mut info = self.context.info.write();
            *info = description.to_device_info(&info);
            info.clone()
        };
        self.context.state.write().device_info_captured = true;

        tracing::info!("-------- {} --------", self.name());
        tracing::info!("Manufacturer: {}", info.manufacturer);
        tracing::info!("Model: {}", info.model_name);
        tracing::info!("Serialnumber: {}", info.serial_number);
        tracing::info!("Firmware: {}", info.firmware_revision);
        tracing::info!("----------------------------------");
    }
}

async fn run_poll_loop(receiver: Receiver, mut shutdown: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(receiver.context.poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::debug!(
        "Starting info poller for {} (interval: {:?})",
        receiver.host(),
        receiver.context.poll_interval
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = shutdown_requested(&mut shutdown) => break,
        }

        // A probe can hang until its timeout; shutdown must not wait for it
        tokio::select! {
            _ = receiver.poll_once() => {}
            _ = shutdown_requested(&mut shutdown) => break,
        }
    }

    tracing::debug!("Info poller for {} stopped", receiver.host());
}

/// Resolves once shutdown is signalled or the handle is gone
async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    while !*shutdown.borrow_and_update() {
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}

/// Handle to a running info poller
///
/// Dropping the handle stops the poller and waits for its thread.
pub struct InfoPollerHandle {
    shutdown: watch::Sender<bool>,
    thread: Option<JoinHandle<()>>,
}

impl InfoPollerHandle {
    /// Stop polling and wait for the poller thread to exit
    pub fn stop(mut self) {
        self.shutdown_and_join();
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn shutdown_and_join(&mut self) {
        let _ = self.shutdown.send(true);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("Info poller thread panicked");
            }
        }
    }
}

impl Drop for InfoPollerHandle {
    fn drop(&mut self) {
        self.shutdown_and_join();
    }
}
