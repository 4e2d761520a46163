use std::path::PathBuf;
use thiserror::Error;

mod translation;

pub use translation::{TranslatedError, translate};

#[derive(Error, Debug)]
pub enum CliError {
    /// The current command generation cannot serve this request; the
    /// dispatcher retries it against the legacy table.
    #[error("command must be served by the legacy command generation")]
    SwitchGeneration,

    /// Hand the whole invocation to the legacy entry point.
    #[error("{message}")]
    LegacyHandoff { message: String },

    /// A remote process run by the command terminated abnormally.
    #[error("remote process exited with status {status}")]
    RemoteTermination {
        status: i32,
        signal: Option<String>,
    },

    #[error("unexpected argument '{argument}'")]
    TooManyArguments { argument: String },

    #[error("'{name}' is not a registered command")]
    CommandNotFound { name: String },

    #[error("Command '{name}' is registered more than once")]
    DuplicateCommand { name: String },

    #[error("command does not conform to the executable-command capability")]
    NonConformingCommand,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// Lock acquisition failed (e.g., another writer holds the config lock)
    #[error("Lock acquisition failed: {0}")]
    LockError(String),

    /// Path resolution or validation error
    #[error("Path error: {0}")]
    PathError(String),

    #[error("No API endpoint set")]
    NoApiTarget,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("No space targeted")]
    NoTargetedSpace,

    #[error("Invalid auth token")]
    InvalidAuthToken,

    #[error("Request to '{url}' failed: {reason}")]
    RequestFailed { url: String, reason: String },

    #[error("API error (status {status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("Organization quota with name '{name}' not found")]
    OrganizationQuotaNotFound { name: String },

    #[error("App '{name}' not found")]
    ApplicationNotFound { name: String },

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
