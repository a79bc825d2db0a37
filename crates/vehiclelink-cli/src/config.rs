//! CLI configuration.

use anyhow::{Context, Result};
use std::time::Duration;
use vehiclelink::VehiclelinkConfig;

/// Load client configuration from environment variables.
///
/// # Environment Variables
///
/// - `VEHICLELINK_HOST`: Base URL of the Vehiclelink server (required)
/// - `VEHICLELINK_TOKEN`: Bearer token (required)
/// - `VEHICLELINK_TIMEOUT_SECS`: Request timeout in seconds (optional)
///
/// # Errors
///
/// Returns error if a required variable is missing or the timeout does not
/// parse as an integer.
pub fn from_env() -> Result<VehiclelinkConfig> {
    let host = std::env::var("VEHICLELINK_HOST").context("VEHICLELINK_HOST is not set")?;
    let bearer_token = std::env::var("VEHICLELINK_TOKEN").context("VEHICLELINK_TOKEN is not set")?;

    let mut config = VehiclelinkConfig {
        host,
        bearer_token,
        ..VehiclelinkConfig::default()
    };

    if let Ok(secs) = std::env::var("VEHICLELINK_TIMEOUT_SECS") {
        let secs: u64 = secs.parse().context("Invalid VEHICLELINK_TIMEOUT_SECS")?;
        config.timeout = Duration::from_secs(secs);
    }

    Ok(config)
}
