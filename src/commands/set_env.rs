//! Set-env commands
//!
//! Both generations set one environment variable on an app in the targeted
//! space. The current generation only talks to v3 APIs and hands older
//! deployments to the legacy generation.

use super::{Wiring, display_warnings, wired};
use crate::actor::{Actor, EnvironmentVariable};
use crate::api::HttpClient;
use crate::cli::lifecycle::{CommandHandler, Lifecycle, Session};
use crate::cli::workaround;
use crate::error::{CliError, Result};
use crate::project_identity;
use crate::utils::version;
use clap::Args;

/// Oldest API version the current generation of `set-env` supports.
const MINIMUM_API_VERSION: &str = "3.0.0";

#[derive(Args, Debug, Default)]
pub struct SetEnvArgs {
    /// Name of the app
    #[arg(value_name = "APP_NAME", value_parser = workaround::unmarked)]
    app_name: String,

    /// Name of the environment variable
    #[arg(value_name = "ENV_VAR_NAME", value_parser = workaround::unmarked)]
    name: String,

    /// Value of the environment variable
    #[arg(value_name = "ENV_VAR_VALUE", value_parser = workaround::unmarked)]
    value: String,
}

impl SetEnvArgs {
    fn run(&self, wiring: &Wiring) -> Result<()> {
        let Wiring { config, ui } = wiring;
        let space = config.targeted_space().ok_or(CliError::NoTargetedSpace)?;
        let org = config.targeted_organization().unwrap_or_default();
        let client = HttpClient::new(config)?;

        ui.display_text(
            "Setting env variable {{Name}} for app {{App}} in org {{Org}} / space {{Space}}...",
            &[
                ("Name", self.name.clone()),
                ("App", self.app_name.clone()),
                ("Org", org.name),
                ("Space", space.name.clone()),
            ],
        );

        let variable = EnvironmentVariable {
            name: self.name.clone(),
            value: self.value.clone(),
        };
        let (result, warnings) = Actor::new(&client).set_environment_variable_by_application_name(
            &self.app_name,
            &space.guid,
            &variable,
        );
        display_warnings(ui.as_ref(), &warnings);
        result?;

        ui.display_text("OK", &[]);
        ui.display_newline();
        ui.display_text(
            "TIP: Use '{{Command}}' to ensure your env variable changes take effect",
            &[("Command", project_identity::cli_with(&format!("restage {}", self.app_name)))],
        );
        Ok(())
    }
}

#[derive(Args, Default)]
pub struct SetEnvCommand {
    #[command(flatten)]
    args: SetEnvArgs,

    #[arg(skip)]
    wiring: Option<Wiring>,
}

impl CommandHandler for SetEnvCommand {
    fn lifecycle(&mut self) -> Option<&mut dyn Lifecycle> {
        Some(self)
    }
}

impl Lifecycle for SetEnvCommand {
    fn setup(&mut self, session: &Session<'_>) -> Result<()> {
        let config = session.config;
        if config.target().is_empty() {
            return Err(CliError::NoApiTarget);
        }
        if !version::is_at_least(&config.api_version(), MINIMUM_API_VERSION) {
            tracing::info!(
                api_version = %config.api_version(),
                "api too old for the current set-env"
            );
            return Err(CliError::SwitchGeneration);
        }
        self.wiring = Some(Wiring::from_session(session));
        Ok(())
    }

    fn execute(&mut self, _args: &[String]) -> Result<()> {
        self.args.run(wired(&self.wiring)?)
    }
}

/// `set-env` and `v3-set-env` as served by the legacy generation.
#[derive(Args, Default)]
pub struct LegacySetEnvCommand {
    #[command(flatten)]
    args: SetEnvArgs,

    #[arg(skip)]
    wiring: Option<Wiring>,
}

impl CommandHandler for LegacySetEnvCommand {
    fn lifecycle(&mut self) -> Option<&mut dyn Lifecycle> {
        Some(self)
    }
}

impl Lifecycle for LegacySetEnvCommand {
    fn setup(&mut self, session: &Session<'_>) -> Result<()> {
        if session.config.target().is_empty() {
            return Err(CliError::NoApiTarget);
        }
        self.wiring = Some(Wiring::from_session(session));
        Ok(())
    }

    fn execute(&mut self, _args: &[String]) -> Result<()> {
        self.args.run(wired(&self.wiring)?)
    }
}
