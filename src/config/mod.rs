//! Configuration store
//!
//! `Config` is a shared, single-threaded handle: the execution wrapper keeps
//! one copy to flush on exit and commands keep their own to read or mutate
//! settings while they run.

mod environment;
mod file;

pub use environment::Environment;
pub use file::{ConfigFile, TargetedEntity};

use crate::error::{CliError, Result};
use crate::logging;
use crate::utils::paths;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::filter::LevelFilter;

/// Values from global command-line flags that override the stored config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagOverride {
    pub verbose: bool,
}

#[derive(Clone)]
pub struct Config {
    inner: Rc<RefCell<ConfigState>>,
}

struct ConfigState {
    file: ConfigFile,
    config_path: PathBuf,
    plugin_home: PathBuf,
    env: Environment,
    flags: FlagOverride,
    dirty: bool,
}

impl Config {
    /// Load the config for `env`. A missing file yields defaults.
    pub fn load(env: &Environment, flags: FlagOverride) -> Result<Self> {
        let config_path = paths::config_file(env)?;
        let plugin_home = paths::plugin_home(env)?;
        let file = file::read_config_file(&config_path)?;

        Ok(Self {
            inner: Rc::new(RefCell::new(ConfigState {
                file,
                config_path,
                plugin_home,
                env: env.clone(),
                flags,
                dirty: false,
            })),
        })
    }

    pub fn target(&self) -> String {
        self.inner.borrow().file.target.clone()
    }

    pub fn api_version(&self) -> String {
        self.inner.borrow().file.api_version.clone()
    }

    pub fn access_token(&self) -> String {
        self.inner.borrow().file.access_token.clone()
    }

    pub fn skip_ssl_validation(&self) -> bool {
        self.inner.borrow().file.skip_ssl_validation
    }

    pub fn targeted_organization(&self) -> Option<TargetedEntity> {
        let state = self.inner.borrow();
        state
            .file
            .organization
            .is_set()
            .then(|| state.file.organization.clone())
    }

    pub fn targeted_space(&self) -> Option<TargetedEntity> {
        let state = self.inner.borrow();
        state.file.space.is_set().then(|| state.file.space.clone())
    }

    pub fn ssh_endpoint(&self) -> String {
        self.inner.borrow().file.ssh_endpoint.clone()
    }

    pub fn color_enabled(&self) -> Option<bool> {
        self.inner.borrow().file.color_enabled
    }

    pub fn config_path(&self) -> PathBuf {
        self.inner.borrow().config_path.clone()
    }

    pub fn verbose(&self) -> bool {
        let state = self.inner.borrow();
        state.flags.verbose || state.env.trace_enabled()
    }

    /// Level from `CTLPLANE_LOG_LEVEL`, raised to at least debug when verbose.
    pub fn log_level(&self) -> LevelFilter {
        let level = self
            .inner
            .borrow()
            .env
            .log_level
            .as_deref()
            .and_then(logging::parse_level)
            .unwrap_or(LevelFilter::OFF);

        if self.verbose() {
            level.max(LevelFilter::DEBUG)
        } else {
            level
        }
    }

    /// Point at a new API endpoint. Clears everything tied to the old one.
    pub fn set_target(&self, target: &str, api_version: &str, skip_ssl_validation: bool) {
        let mut state = self.inner.borrow_mut();
        state.file.target = target.to_string();
        state.file.api_version = api_version.to_string();
        state.file.skip_ssl_validation = skip_ssl_validation;
        state.file.access_token.clear();
        state.file.organization = TargetedEntity::default();
        state.file.space = TargetedEntity::default();
        state.dirty = true;
    }

    pub fn unset_target(&self) {
        self.set_target("", "", false);
        self.set_ssh_endpoint("");
    }

    pub fn set_ssh_endpoint(&self, endpoint: &str) {
        let mut state = self.inner.borrow_mut();
        state.file.ssh_endpoint = endpoint.to_string();
        state.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.inner.borrow().dirty
    }

    pub fn create_plugin_home(&self) -> Result<()> {
        let plugin_home = self.inner.borrow().plugin_home.clone();
        fs::create_dir_all(&plugin_home).map_err(|e| CliError::IoError {
            path: plugin_home,
            source: e,
        })
    }

    /// Persist mutations made since load. A clean config is not rewritten.
    pub fn write_config(&self) -> Result<()> {
        let mut state = self.inner.borrow_mut();
        if !state.dirty {
            return Ok(());
        }
        file::write_config_atomically(&state.config_path, &state.file)?;
        state.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
