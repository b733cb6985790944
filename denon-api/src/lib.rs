//! Typed API for Denon and Marantz AV receivers
//!
//! The receivers speak a small HTTP/XML protocol on their `goform` endpoints:
//! a status document for reads and a command channel that takes short codes
//! in the query string for writes. This crate gives both a typed surface and
//! leaves transport details to the private `control-client` crate.
//!
//! ```rust,no_run
//! use denon_api::{DenonClient, ReceiverEndpoint, RemoteKey};
//!
//! let client = DenonClient::new();
//! let endpoint = ReceiverEndpoint::new("192.168.1.20", 8080);
//!
//! let status = client.fetch_status(&endpoint)?;
//! println!("power on: {}", status.power_on()?);
//!
//! // Fire-and-forget: failures are logged, not returned
//! client.send_best_effort(&endpoint, &RemoteKey::ArrowUp.command(false));
//! # Ok::<(), denon_api::ApiError>(())
//! ```

pub mod client;
pub mod command;
pub mod error;
pub mod remote;
pub mod status;

pub use client::{DenonClient, ReceiverEndpoint, DEFAULT_PORT};
pub use command::Command;
pub use error::{ApiError, Result};
pub use remote::{PowerModeSelection, RemoteKey, VolumeSelector};
pub use status::{StatusFields, VOLUME_OFFSET};
