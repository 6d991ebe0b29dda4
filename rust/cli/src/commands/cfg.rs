//! Configuration command handler.
//!
//! Displays the resolved `run` defaults with their sources (default,
//! environment, or configuration file) as pretty JSON:
//!
//! ```json
//! {
//!   "seed": { "value": null, "source": "default" },
//!   "mode": { "value": "luck", "source": "default" }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "mode": {
            "value": config.mode,
            "source": sources.mode,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
