//! Conversion of crate errors into user-facing messages.
//!
//! A translated error is a template plus named values; the UI sink renders
//! it. Errors that should be followed by the command's usage text say so via
//! [`TranslatedError::displays_usage`].

use super::CliError;
use crate::project_identity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedError {
    template: String,
    values: Vec<(&'static str, String)>,
    usage: bool,
}

impl TranslatedError {
    fn plain(message: impl Into<String>) -> Self {
        Self {
            template: message.into(),
            values: Vec::new(),
            usage: false,
        }
    }

    fn templated(template: &str, values: Vec<(&'static str, String)>) -> Self {
        Self {
            template: template.to_string(),
            values,
            usage: false,
        }
    }

    fn with_usage(mut self) -> Self {
        self.usage = true;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn values(&self) -> &[(&'static str, String)] {
        &self.values
    }

    /// Whether the command's usage should be shown after the error.
    pub fn displays_usage(&self) -> bool {
        self.usage
    }
}

pub fn translate(err: &CliError) -> TranslatedError {
    match err {
        CliError::TooManyArguments { argument } => TranslatedError::templated(
            "Incorrect Usage: unexpected argument '{{Argument}}'",
            vec![("Argument", argument.clone())],
        )
        .with_usage(),
        CliError::CommandNotFound { name } => TranslatedError::templated(
            "'{{Name}}' is not a registered command. See '{{Help}}'",
            vec![
                ("Name", name.clone()),
                ("Help", project_identity::cli_with("help -a")),
            ],
        ),
        CliError::NoApiTarget => TranslatedError::templated(
            "No API endpoint set. Set \"target\" in {{ConfigFile}} or export {{EnvHome}} to point at a configured home.",
            vec![
                ("ConfigFile", project_identity::CONFIG_FILE_BASENAME.to_string()),
                ("EnvHome", project_identity::env_key("HOME")),
            ],
        ),
        CliError::NotLoggedIn => TranslatedError::plain("Not logged in. Obtain an access token first."),
        CliError::NoTargetedSpace => {
            TranslatedError::plain("No space targeted. Target an org and space first.")
        }
        CliError::InvalidAuthToken => {
            TranslatedError::plain("Invalid auth token. Log in again to refresh it.")
        }
        CliError::OrganizationQuotaNotFound { name } => TranslatedError::templated(
            "Organization quota with name '{{Name}}' not found.",
            vec![("Name", name.clone())],
        ),
        CliError::ApplicationNotFound { name } => TranslatedError::templated(
            "App '{{AppName}}' not found.",
            vec![("AppName", name.clone())],
        ),
        CliError::Api { status, detail } => TranslatedError::templated(
            "Unexpected Response\nResponse code: {{Code}}\nDescription: {{Description}}",
            vec![("Code", status.to_string()), ("Description", detail.clone())],
        ),
        other => TranslatedError::plain(other.to_string()),
    }
}
