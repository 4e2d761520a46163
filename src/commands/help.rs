//! Help Command
//!
//! Lists the registered commands or shows one command's usage.

use super::{Wiring, wired};
use crate::cli::lifecycle::{CommandHandler, Lifecycle, Session};
use crate::cli::registry::{CommandRegistry, Generation};
use crate::error::{CliError, Result};
use crate::project_identity;
use clap::Args;

#[derive(Args, Default)]
pub struct HelpCommand {
    /// Command to show usage for
    #[arg(value_name = "COMMAND")]
    command: Option<String>,

    /// Include commands served by the legacy generation
    #[arg(short, long)]
    all: bool,

    #[arg(skip)]
    page: String,

    #[arg(skip)]
    wiring: Option<Wiring>,
}

impl CommandHandler for HelpCommand {
    fn lifecycle(&mut self) -> Option<&mut dyn Lifecycle> {
        Some(self)
    }
}

impl Lifecycle for HelpCommand {
    fn setup(&mut self, session: &Session<'_>) -> Result<()> {
        self.page = match &self.command {
            Some(name) => command_usage(session.commands, name)?,
            None => command_list(session.commands, self.all),
        };
        self.wiring = Some(Wiring::from_session(session));
        Ok(())
    }

    fn execute(&mut self, _args: &[String]) -> Result<()> {
        wired(&self.wiring)?.ui.display_text(&self.page, &[]);
        Ok(())
    }
}

/// Usage of one command. Names this generation does not serve are handed
/// to the legacy generation, which reports them if it cannot serve them
/// either.
fn command_usage(commands: &CommandRegistry, name: &str) -> Result<String> {
    let descriptor = match commands.find(name) {
        Some(descriptor) => descriptor,
        None if commands.generation() == Generation::Current => {
            return Err(CliError::SwitchGeneration);
        }
        None => {
            return Err(CliError::CommandNotFound {
                name: name.to_string(),
            });
        }
    };

    descriptor.render_help().ok_or(CliError::SwitchGeneration)
}

fn command_list(commands: &CommandRegistry, all: bool) -> String {
    let listed: Vec<_> = commands
        .descriptors()
        .iter()
        .filter(|descriptor| all || !descriptor.is_deferred())
        .map(|descriptor| {
            let mut names = vec![descriptor.name()];
            names.extend(descriptor.aliases());
            (names.join(", "), descriptor.summary())
        })
        .collect();

    let width = listed.iter().map(|(names, _)| names.len()).max().unwrap_or(0);

    let mut page = format!(
        "{} - command line for the control-plane API\n\nUsage:\n  {} [-v] COMMAND [ARGS]...\n\nCommands:\n",
        project_identity::DISPLAY_NAME,
        project_identity::BINARY_NAME
    );
    for (names, summary) in &listed {
        page.push_str(&format!("  {:<width$}   {}\n", names, summary, width = width));
    }

    page.push_str(&format!(
        "\nUse '{}' for more information on a command.",
        project_identity::cli_with("help COMMAND")
    ));
    if !all {
        page.push_str(&format!(
            "\nUse '{}' to list every command.",
            project_identity::cli_with("help -a")
        ));
    }
    page
}
