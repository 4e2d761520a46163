use crate::config::Environment;
use crate::error::{CliError, Result};
use crate::project_identity;
use directories::UserDirs;
use std::path::PathBuf;

/// Home directory the config lives under: `$CTLPLANE_HOME` or the user home.
pub fn home_dir(env: &Environment) -> Result<PathBuf> {
    if let Some(home) = &env.home {
        return Ok(home.clone());
    }

    let user_dirs = UserDirs::new()
        .ok_or_else(|| CliError::PathError("Could not determine user home directory".to_string()))?;
    Ok(user_dirs.home_dir().to_path_buf())
}

pub fn config_dir(env: &Environment) -> Result<PathBuf> {
    Ok(home_dir(env)?.join(project_identity::CONFIG_DIR_NAME))
}

pub fn config_file(env: &Environment) -> Result<PathBuf> {
    Ok(config_dir(env)?.join(project_identity::CONFIG_FILE_BASENAME))
}

pub fn plugin_home(env: &Environment) -> Result<PathBuf> {
    if let Some(plugin_home) = &env.plugin_home {
        return Ok(plugin_home
            .join(project_identity::CONFIG_DIR_NAME)
            .join(project_identity::PLUGIN_DIR_NAME));
    }
    Ok(config_dir(env)?.join(project_identity::PLUGIN_DIR_NAME))
}
