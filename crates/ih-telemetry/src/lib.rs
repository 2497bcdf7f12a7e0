//! # Interchain Hub Telemetry
//!
//! Structured logging for the hub's subsystems, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ih_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `IH_SERVICE_NAME` | `interchain-hub` | Service name in startup log |
//! | `IH_LOG_LEVEL` | `info` | Log filter (falls back to `RUST_LOG`) |
//! | `IH_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `IH_JSON_LOGS` | `false` | JSON log lines |

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}
