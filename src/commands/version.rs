use super::{Wiring, wired};
use crate::cli::lifecycle::{CommandHandler, Lifecycle, Session};
use crate::error::Result;
use crate::project_identity;
use clap::Args;

#[derive(Args, Default)]
pub struct VersionCommand {
    #[arg(skip)]
    wiring: Option<Wiring>,
}

impl CommandHandler for VersionCommand {
    fn lifecycle(&mut self) -> Option<&mut dyn Lifecycle> {
        Some(self)
    }
}

impl Lifecycle for VersionCommand {
    fn setup(&mut self, session: &Session<'_>) -> Result<()> {
        self.wiring = Some(Wiring::from_session(session));
        Ok(())
    }

    fn execute(&mut self, _args: &[String]) -> Result<()> {
        wired(&self.wiring)?.ui.display_text(
            "{{Binary}} version {{Version}}",
            &[
                ("Binary", project_identity::BINARY_NAME.to_string()),
                ("Version", env!("CARGO_PKG_VERSION").to_string()),
            ],
        );
        Ok(())
    }
}
