//! On-disk configuration document and its atomic, locked writer.

use crate::error::{CliError, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

pub(crate) const CURRENT_CONFIG_VERSION: u32 = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetedEntity {
    pub guid: String,
    pub name: String,
}

impl TargetedEntity {
    pub fn is_set(&self) -> bool {
        !self.guid.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub config_version: u32,
    pub target: String,
    pub api_version: String,
    pub access_token: String,
    pub skip_ssl_validation: bool,
    pub organization: TargetedEntity,
    pub space: TargetedEntity,
    pub ssh_endpoint: String,
    pub color_enabled: Option<bool>,
}

pub(super) fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ConfigFile::default()),
        Err(e) => {
            return Err(CliError::IoError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_json::from_str(&content).map_err(|e| {
        CliError::ConfigError(format!("{} is not valid JSON: {}", path.display(), e))
    })
}

pub(super) fn write_config_atomically(path: &Path, config: &ConfigFile) -> Result<()> {
    let dir = path.parent().ok_or_else(|| {
        CliError::PathError(format!(
            "Invalid config path (no parent directory): {}",
            path.display()
        ))
    })?;

    fs::create_dir_all(dir).map_err(|e| CliError::IoError {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let lock_path = dir.join("config.lock");
    let lock_file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&lock_path)
        .map_err(|e| CliError::IoError {
            path: lock_path.clone(),
            source: e,
        })?;
    FileExt::lock_exclusive(&lock_file).map_err(|e| {
        CliError::LockError(format!("{}: {}", lock_path.display(), e))
    })?;

    let mut config = config.clone();
    config.config_version = CURRENT_CONFIG_VERSION;
    let content = serde_json::to_string_pretty(&config)?;

    let tmp_path = dir.join("config.json.tmp");
    let mut tmp_file = fs::File::create(&tmp_path).map_err(|e| CliError::IoError {
        path: tmp_path.clone(),
        source: e,
    })?;
    tmp_file.write_all(content.as_bytes())?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| CliError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
