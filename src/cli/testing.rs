//! Scripted commands and registries shared by the dispatcher tests.

use crate::cli::lifecycle::{CommandHandler, Lifecycle, Session};
use crate::cli::registry::{CommandDescriptor, CommandRegistry, Generation};
use crate::cli::workaround;
use crate::commands::{help::HelpCommand, version::VersionCommand};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::ui::Ui;
use clap::Args;
use std::rc::Rc;

/// Prints what it was given, then fails the way `--outcome` asks.
#[derive(Args, Default)]
#[allow(dead_code)]
pub(crate) struct Probe {
    #[arg(value_name = "TARGET")]
    target: Option<String>,

    #[arg(long)]
    org: Option<String>,

    #[arg(long, value_parser = ["red", "blue"])]
    color: Option<String>,

    #[arg(long)]
    count: Option<u32>,

    /// ok, retarget, setup-fail, switch, handoff, quiet-handoff, kill, usage or fail
    #[arg(long, default_value = "ok")]
    outcome: String,

    #[arg(skip)]
    ui: Option<Rc<dyn Ui>>,

    #[arg(skip)]
    generation: Option<Generation>,

    #[arg(skip)]
    config: Option<Config>,
}

impl CommandHandler for Probe {
    fn lifecycle(&mut self) -> Option<&mut dyn Lifecycle> {
        Some(self)
    }
}

impl Lifecycle for Probe {
    fn setup(&mut self, session: &Session<'_>) -> Result<()> {
        self.ui = Some(Rc::clone(session.ui));
        self.generation = Some(session.commands.generation());
        self.config = Some(session.config.clone());
        match self.outcome.as_str() {
            "setup-fail" => Err(CliError::NotLoggedIn),
            _ => Ok(()),
        }
    }

    fn execute(&mut self, _args: &[String]) -> Result<()> {
        if let Some(ui) = &self.ui {
            ui.display_text(
                "{{Generation}} probe ran {{Target}}",
                &[
                    ("Generation", format!("{:?}", self.generation.unwrap_or(Generation::Current))),
                    ("Target", self.target.clone().unwrap_or_default()),
                ],
            );
        }

        match self.outcome.as_str() {
            "retarget" => {
                if let Some(config) = &self.config {
                    config.set_target("https://api.example.com", "3.0.0", false);
                }
                Ok(())
            }
            "switch" => Err(CliError::SwitchGeneration),
            "handoff" => Err(CliError::LegacyHandoff {
                message: "handing over".to_string(),
            }),
            "quiet-handoff" => Err(CliError::LegacyHandoff {
                message: String::new(),
            }),
            "kill" => Err(CliError::RemoteTermination {
                status: 137,
                signal: Some("KILL".to_string()),
            }),
            "usage" => Err(CliError::TooManyArguments {
                argument: "surplus".to_string(),
            }),
            "fail" => Err(CliError::Other("probe failed".to_string())),
            _ => Ok(()),
        }
    }
}

#[derive(Args)]
#[allow(dead_code)]
pub(crate) struct Strict {
    #[arg(long, required = true)]
    org: String,
}

impl CommandHandler for Strict {}

/// Stand-in for the env-setting commands.
#[derive(Args, Default)]
pub(crate) struct EnvProbe {
    #[arg(value_parser = workaround::unmarked)]
    app: String,

    #[arg(value_parser = workaround::unmarked)]
    name: String,

    #[arg(value_parser = workaround::unmarked)]
    value: String,

    #[arg(skip)]
    ui: Option<Rc<dyn Ui>>,
}

impl CommandHandler for EnvProbe {
    fn lifecycle(&mut self) -> Option<&mut dyn Lifecycle> {
        Some(self)
    }
}

impl Lifecycle for EnvProbe {
    fn setup(&mut self, session: &Session<'_>) -> Result<()> {
        self.ui = Some(Rc::clone(session.ui));
        Ok(())
    }

    fn execute(&mut self, _args: &[String]) -> Result<()> {
        if let Some(ui) = &self.ui {
            ui.display_text(
                "set {{Name}}={{Value}} on {{App}}",
                &[
                    ("Name", self.name.clone()),
                    ("Value", self.value.clone()),
                    ("App", self.app.clone()),
                ],
            );
        }
        Ok(())
    }
}

pub(crate) fn current_registry() -> CommandRegistry {
    CommandRegistry::new(
        Generation::Current,
        vec![
            CommandDescriptor::new::<HelpCommand>("help", &["h"], "Show help"),
            CommandDescriptor::new::<VersionCommand>("version", &[], "Print the version"),
            CommandDescriptor::new::<Probe>("probe", &["p"], "Run the probe"),
            CommandDescriptor::new::<Strict>("strict", &[], "Require an org"),
            CommandDescriptor::new::<EnvProbe>("set-env", &["se"], "Set an env variable"),
            CommandDescriptor::new::<EnvProbe>("rename", &[], "Same positionals, no workaround"),
            CommandDescriptor::deferred("market", &["mk"], "List offerings"),
        ],
    )
    .expect("current fixture registry is valid")
}

pub(crate) fn legacy_registry() -> CommandRegistry {
    CommandRegistry::new(
        Generation::Legacy,
        vec![
            CommandDescriptor::new::<HelpCommand>("help", &["h"], "Show help"),
            CommandDescriptor::new::<VersionCommand>("version", &[], "Print the version"),
            CommandDescriptor::new::<Probe>("market", &["mk"], "List offerings"),
            CommandDescriptor::new::<Probe>("old-probe", &[], "Legacy-only probe"),
        ],
    )
    .expect("legacy fixture registry is valid")
}

pub(crate) fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}
