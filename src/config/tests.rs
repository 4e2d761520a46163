use super::*;
use tempfile::TempDir;

fn env_in(dir: &TempDir) -> Environment {
    Environment {
        home: Some(dir.path().to_path_buf()),
        ..Environment::default()
    }
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&env_in(&dir), FlagOverride::default()).unwrap();

    assert_eq!(config.target(), "");
    assert!(config.targeted_space().is_none());
    assert!(!config.is_dirty());
}

#[test]
fn malformed_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let env = env_in(&dir);
    let path = paths::config_file(&env).unwrap();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();

    let result = Config::load(&env, FlagOverride::default());
    assert!(matches!(result, Err(CliError::ConfigError(_))));
}

#[test]
fn clean_config_is_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let env = env_in(&dir);
    let config = Config::load(&env, FlagOverride::default()).unwrap();

    config.write_config().unwrap();
    assert!(!paths::config_file(&env).unwrap().exists());
}

#[test]
fn mutations_survive_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let env = env_in(&dir);
    let config = Config::load(&env, FlagOverride::default()).unwrap();

    config.set_target("https://api.example.com", "3.120.0", true);
    assert!(config.is_dirty());
    config.write_config().unwrap();
    assert!(!config.is_dirty());

    let reloaded = Config::load(&env, FlagOverride::default()).unwrap();
    assert_eq!(reloaded.target(), "https://api.example.com");
    assert_eq!(reloaded.api_version(), "3.120.0");
    assert!(reloaded.skip_ssl_validation());
}

#[test]
fn clones_share_state() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&env_in(&dir), FlagOverride::default()).unwrap();
    let handle = config.clone();

    handle.set_target("https://api.example.com", "3.0.0", false);
    assert!(config.is_dirty());
    assert_eq!(config.target(), "https://api.example.com");
}

#[test]
fn create_plugin_home_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let env = env_in(&dir);
    let config = Config::load(&env, FlagOverride::default()).unwrap();

    config.create_plugin_home().unwrap();
    assert!(paths::plugin_home(&env).unwrap().is_dir());
}

#[test]
fn log_level_defaults_off_and_verbose_raises_it() {
    let dir = tempfile::tempdir().unwrap();
    let quiet = Config::load(&env_in(&dir), FlagOverride::default()).unwrap();
    assert_eq!(quiet.log_level(), LevelFilter::OFF);

    let verbose = Config::load(&env_in(&dir), FlagOverride { verbose: true }).unwrap();
    assert_eq!(verbose.log_level(), LevelFilter::DEBUG);

    let env = Environment {
        log_level: Some("trace".to_string()),
        ..env_in(&dir)
    };
    let traced = Config::load(&env, FlagOverride { verbose: true }).unwrap();
    assert_eq!(traced.log_level(), LevelFilter::TRACE);
}

#[test]
fn trace_env_enables_verbose() {
    let dir = tempfile::tempdir().unwrap();
    let env = Environment {
        trace: Some("TRUE".to_string()),
        ..env_in(&dir)
    };
    let config = Config::load(&env, FlagOverride::default()).unwrap();
    assert!(config.verbose());
}
