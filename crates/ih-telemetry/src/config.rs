//! Telemetry configuration from environment variables.

use std::env;

/// Default service name attached to log output.
pub const DEFAULT_SERVICE_NAME: &str = "interchain-hub";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name reported at startup
    pub service_name: String,

    /// Log filter directives (e.g. `info`, `ih_01_rule_governance=debug`)
    pub log_level: String,

    /// Whether to write log lines to stdout
    pub console_output: bool,

    /// Whether to format log lines as JSON
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `IH_SERVICE_NAME`: Service name (default: interchain-hub)
    /// - `IH_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)
    /// - `IH_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `IH_JSON_LOGS`: Enable JSON logs (default: false outside containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("IH_SERVICE_NAME")
                .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),

            log_level: env::var("IH_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("IH_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),

            json_logs: env::var("IH_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(is_container),
        }
    }

    /// Configuration for one subsystem, e.g. `("01", "rule-governance")`.
    pub fn for_subsystem(subsystem_id: &str, subsystem_name: &str) -> Self {
        let mut config = Self::from_env();
        config.service_name = format!("ih-{}-{}", subsystem_id, subsystem_name);
        config
    }
}

/// `true`/`1`/`yes`/`on`, case-insensitive.
pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
