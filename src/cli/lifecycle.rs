//! Capability contract between the dispatcher and command instances.

use crate::cli::registry::CommandRegistry;
use crate::config::Config;
use crate::error::Result;
use crate::ui::Ui;
use std::rc::Rc;

/// Shared context a command receives during setup.
pub struct Session<'a> {
    pub config: &'a Config,
    pub ui: &'a Rc<dyn Ui>,
    pub commands: &'a CommandRegistry,
}

/// A parsed command instance.
///
/// Only instances that expose a [`Lifecycle`] can be executed; anything else
/// is an internal wiring error.
pub trait CommandHandler {
    fn lifecycle(&mut self) -> Option<&mut dyn Lifecycle> {
        None
    }
}

/// Two-phase execution: `setup` wires collaborators, `execute` does the work.
pub trait Lifecycle {
    fn setup(&mut self, session: &Session<'_>) -> Result<()>;

    fn execute(&mut self, args: &[String]) -> Result<()>;
}
