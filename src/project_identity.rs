//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values:
//! binary name, config directory names and environment variable keys.

pub const DISPLAY_NAME: &str = "Ctlplane";
pub const BINARY_NAME: &str = "ctlplane";
pub const CONFIG_DIR_NAME: &str = ".ctlplane";
pub const CONFIG_FILE_BASENAME: &str = "config.json";
pub const PLUGIN_DIR_NAME: &str = "plugins";
pub const ENV_PREFIX: &str = "CTLPLANE";
pub const LEGACY_BINARY_NAME: &str = "ctlplane-legacy";
pub const USER_AGENT: &str = concat!("ctlplane/", env!("CARGO_PKG_VERSION"));

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

/// Render a command line for messages, e.g. `ctlplane help -a`.
pub fn cli_with(rest: &str) -> String {
    format!("{} {}", BINARY_NAME, rest)
}
