//! CLI configuration – reads `armlink.toml`.
//!
//! The file carries the adapter's [`Config`] record (currently one field,
//! the arm resource name).  A missing file is not an error: the CLI falls
//! back to the built-in simulated arm.
//!
//! Supported environment variables:
//!
//! | Variable | Effect |
//! |---|---|
//! | `ARMLINK_CONFIG` | Path of the config file (default `armlink.toml`) |
//! | `ARMLINK_ARM` | Overrides the configured arm name |

use std::fs;
use std::path::PathBuf;

use armlink_service::Config;

/// Arm name used when no config file or override is present.
pub const DEFAULT_ARM: &str = "sim-arm";

/// Return the config file path, honouring `ARMLINK_CONFIG`.
pub fn config_path() -> PathBuf {
    std::env::var("ARMLINK_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("armlink.toml"))
}

/// Load the config, falling back to the simulated arm when the file does
/// not exist, then apply environment overrides.
pub fn load() -> Result<Config, String> {
    let mut cfg = match load_from(&config_path())? {
        Some(cfg) => cfg,
        None => Config {
            arm: DEFAULT_ARM.to_string(),
        },
    };
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

/// Load the config from a specific path.  Returns `None` if the file does
/// not exist.
pub(crate) fn load_from(path: &PathBuf) -> Result<Option<Config>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
    let cfg: Config =
        toml::from_str(&raw).map_err(|e| format!("Failed to parse config: {}", e))?;
    Ok(Some(cfg))
}

/// Apply `ARMLINK_*` environment variable overrides to `cfg`.
pub(crate) fn apply_env_overrides(cfg: &mut Config) {
    if let Ok(arm) = std::env::var("ARMLINK_ARM")
        && !arm.is_empty()
    {
        cfg.arm = arm;
    }
}
