use crate::cli::lifecycle::{CommandHandler, Lifecycle, Session};
use crate::error::{CliError, Result};
use clap::Args;

/// A command only the legacy entry point implements. Every token after the
/// command name is accepted as-is; the whole invocation is handed over.
#[derive(Args, Default)]
pub struct LegacyPassthrough {
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    args: Vec<String>,
}

impl CommandHandler for LegacyPassthrough {
    fn lifecycle(&mut self) -> Option<&mut dyn Lifecycle> {
        Some(self)
    }
}

impl Lifecycle for LegacyPassthrough {
    fn setup(&mut self, _session: &Session<'_>) -> Result<()> {
        Ok(())
    }

    fn execute(&mut self, _args: &[String]) -> Result<()> {
        tracing::debug!(args = ?self.args, "handing off to the legacy entry point");
        Err(CliError::LegacyHandoff {
            message: String::new(),
        })
    }
}
