//! Error router
//!
//! Turns the result of a command run into an [`ExecutionOutcome`]. Control
//! signals are matched before anything is displayed, so a generation switch
//! or legacy handoff never prints the error it travels in.

use crate::error::{CliError, Result, translate};
use crate::ui::Ui;

#[derive(Debug)]
pub enum ExecutionOutcome {
    Ok,
    /// Error already displayed.
    Failed,
    /// Error already displayed; the caller should show usage.
    UsageFailure,
    GenerationSwitch,
    LegacyHandoff,
    RemoteTermination {
        signal: Option<String>,
        status: i32,
    },
    /// Raised before the UI could take over.
    Unexpected(CliError),
}

pub fn route(result: Result<()>, ui: &dyn Ui) -> ExecutionOutcome {
    let err = match result {
        Ok(()) => return ExecutionOutcome::Ok,
        Err(err) => err,
    };

    match err {
        CliError::SwitchGeneration => {
            tracing::info!("switching to the legacy generation of the command");
            ExecutionOutcome::GenerationSwitch
        }
        CliError::LegacyHandoff { message } => {
            if !message.is_empty() {
                ui.display_warning("", &[]);
                ui.display_warning(&message, &[]);
            }
            ExecutionOutcome::LegacyHandoff
        }
        CliError::RemoteTermination { status, signal } => {
            if let Some(name) = signal.as_deref().filter(|name| !name.is_empty()) {
                ui.display_text(
                    "Process terminated by signal: {{Signal}}. Exited with {{ExitCode}}",
                    &[("Signal", name.to_string()), ("ExitCode", status.to_string())],
                );
            }
            ExecutionOutcome::RemoteTermination { signal, status }
        }
        other => {
            tracing::debug!(error = ?other, "command failed");
            let translated = translate(&other);
            ui.display_error(&translated);
            if translated.displays_usage() {
                ExecutionOutcome::UsageFailure
            } else {
                ExecutionOutcome::Failed
            }
        }
    }
}
