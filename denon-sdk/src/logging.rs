//! Logging setup for applications embedding the SDK
//!
//! The library itself only emits `tracing` events. Connectivity changes and
//! successful reads/writes are logged at `info`, failures at `debug`. The
//! default filter only covers the receiver crates, so HTTP client internals
//! stay quiet unless a filter asks for them.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Targets of the workspace crates, in dependency order
const RECEIVER_TARGETS: [&str; 4] = ["denon_sdk", "denon_api", "denon_discovery", "control_client"];

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber is installed
    Silent,
    /// Compact stderr output of receiver events at `info`
    Development,
    /// Receiver events at `debug` with source locations
    Debug,
}

impl LoggingMode {
    /// Level applied to the receiver crates when no filter is configured
    fn default_level(self) -> Option<&'static str> {
        match self {
            LoggingMode::Silent => None,
            LoggingMode::Development => Some("info"),
            LoggingMode::Debug => Some("debug"),
        }
    }
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Initialize logging with the specified mode
///
/// # Environment Variables
///
/// - `DENON_LOG_LEVEL`: Override the filter (e.g. `denon_sdk=debug,reqwest=trace`)
/// - `RUST_LOG`: Used when `DENON_LOG_LEVEL` is not set
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let Some(level) = mode.default_level() else {
        return Ok(());
    };
    let filter = env_filter(level);

    let result = if mode == LoggingMode::Debug {
        Registry::default()
            .with(
                fmt::layer()
                    .with_thread_names(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init()
    } else {
        Registry::default()
            .with(fmt::layer().with_target(false).compact())
            .with(filter)
            .try_init()
    };

    result.map_err(|e| LoggingError::TracingInit(e.to_string()))
}

/// Initialize logging from `DENON_LOG_MODE`
///
/// - "development" -> LoggingMode::Development
/// - "debug" -> LoggingMode::Debug
/// - anything else -> LoggingMode::Silent
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    init_logging(mode_from_str(std::env::var("DENON_LOG_MODE").ok().as_deref()))
}

fn mode_from_str(value: Option<&str>) -> LoggingMode {
    match value.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("development") => LoggingMode::Development,
        Some(v) if v.eq_ignore_ascii_case("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    }
}

fn env_filter(level: &str) -> EnvFilter {
    let configured = std::env::var("DENON_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .filter(|directives| !directives.trim().is_empty());

    EnvFilter::new(configured.unwrap_or_else(|| default_directives(level)))
}

/// `warn` everywhere, `level` for the receiver crates
fn default_directives(level: &str) -> String {
    RECEIVER_TARGETS
        .iter()
        .fold(String::from("warn"), |mut directives, target| {
            directives.push_str(&format!(",{}={}", target, level));
            directives
        })
}

/// Check if a global subscriber has been installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}
