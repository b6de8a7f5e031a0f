//! # CU Telemetry
//!
//! Structured logging for the compute-unit data layer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cu_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CU_SERVICE_NAME` | `ao-cu` | Service name attached to the startup event |
//! | `CU_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter directive |
//! | `CU_JSON_LOGS` | `false` (`true` in containers) | JSON instead of pretty output |
//! | `CU_CONSOLE_OUTPUT` | `true` | Emit logs to stdout at all |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Telemetry already initialized: {0}")]
    AlreadyInitialized(String),

    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },
}

/// Install the global subscriber described by `config`.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_logging(config)
}
