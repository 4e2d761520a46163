use crate::project_identity;
use std::path::PathBuf;

/// Process environment relevant to configuration, captured once at startup.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub home: Option<PathBuf>,
    pub plugin_home: Option<PathBuf>,
    pub trace: Option<String>,
    pub log_level: Option<String>,
    pub legacy_binary: Option<String>,
}

impl Environment {
    pub fn from_process() -> Self {
        let var = |suffix: &str| {
            std::env::var(project_identity::env_key(suffix))
                .ok()
                .filter(|value| !value.is_empty())
        };

        Self {
            home: var("HOME").map(PathBuf::from),
            plugin_home: var("PLUGIN_HOME").map(PathBuf::from),
            trace: var("TRACE"),
            log_level: var("LOG_LEVEL"),
            legacy_binary: var("LEGACY_BIN"),
        }
    }

    /// `CTLPLANE_TRACE=true` (or `1`) turns on verbose output.
    pub fn trace_enabled(&self) -> bool {
        matches!(
            self.trace.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("true") | Some("1")
        )
    }
}
