//! Shipped commands and the two command tables.

pub mod api_target;
pub mod help;
pub mod legacy;
pub mod org_quota;
pub mod set_env;
pub mod ssh;
pub mod version;

use crate::cli::lifecycle::Session;
use crate::cli::registry::{CommandDescriptor, CommandRegistry, Generation};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::ui::Ui;
use std::rc::Rc;

/// Collaborators a command keeps from setup for execute.
pub(crate) struct Wiring {
    pub config: Config,
    pub ui: Rc<dyn Ui>,
}

impl Wiring {
    pub fn from_session(session: &Session<'_>) -> Self {
        Self {
            config: session.config.clone(),
            ui: Rc::clone(session.ui),
        }
    }
}

pub(crate) fn wired(wiring: &Option<Wiring>) -> Result<&Wiring> {
    wiring
        .as_ref()
        .ok_or_else(|| CliError::Other("command executed before setup".to_string()))
}

pub(crate) fn display_warnings(ui: &dyn Ui, warnings: &[String]) {
    for warning in warnings {
        ui.display_warning(warning, &[]);
    }
}

pub fn current_registry() -> Result<CommandRegistry> {
    CommandRegistry::new(
        Generation::Current,
        vec![
            CommandDescriptor::new::<help::HelpCommand>("help", &["h"], "Show help"),
            CommandDescriptor::new::<version::VersionCommand>("version", &[], "Print the version"),
            CommandDescriptor::new::<api_target::ApiCommand>("api", &[], "Set or view target api url"),
            CommandDescriptor::new::<org_quota::OrgQuotasCommand>(
                "org-quotas",
                &[],
                "List available organization quotas",
            ),
            CommandDescriptor::new::<org_quota::OrgQuotaCommand>(
                "org-quota",
                &[],
                "Show organization quota info",
            ),
            CommandDescriptor::new::<set_env::SetEnvCommand>("set-env", &["se"], "Set an env variable for an app"),
            CommandDescriptor::new::<ssh::SshCommand>("ssh", &[], "SSH to an application container instance"),
            CommandDescriptor::deferred("marketplace", &["m"], "List available offerings in the marketplace"),
            CommandDescriptor::deferred("create-service", &["cs"], "Create a service instance"),
        ],
    )
}

pub fn legacy_registry() -> Result<CommandRegistry> {
    CommandRegistry::new(
        Generation::Legacy,
        vec![
            CommandDescriptor::new::<help::HelpCommand>("help", &["h"], "Show help"),
            CommandDescriptor::new::<version::VersionCommand>("version", &[], "Print the version"),
            CommandDescriptor::new::<set_env::LegacySetEnvCommand>(
                "set-env",
                &["se"],
                "Set an env variable for an app",
            ),
            CommandDescriptor::new::<set_env::LegacySetEnvCommand>(
                "v3-set-env",
                &[],
                "Set an env variable for an app",
            ),
            CommandDescriptor::passthrough::<legacy::LegacyPassthrough>(
                "marketplace",
                &["m"],
                "List available offerings in the marketplace",
            ),
            CommandDescriptor::passthrough::<legacy::LegacyPassthrough>(
                "create-service",
                &["cs"],
                "Create a service instance",
            ),
        ],
    )
}
