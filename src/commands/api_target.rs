//! Api Command
//!
//! Shows or changes the targeted API endpoint.

use super::{Wiring, wired};
use crate::api;
use crate::cli::lifecycle::{CommandHandler, Lifecycle, Session};
use crate::error::Result;
use clap::Args;

#[derive(Args, Default)]
pub struct ApiCommand {
    /// API URL to target
    #[arg(value_name = "URL", conflicts_with = "unset")]
    url: Option<String>,

    /// Accept self-signed or otherwise invalid certificates
    #[arg(long)]
    skip_ssl_validation: bool,

    /// Remove all api endpoint targeting
    #[arg(long)]
    unset: bool,

    #[arg(skip)]
    wiring: Option<Wiring>,
}

impl CommandHandler for ApiCommand {
    fn lifecycle(&mut self) -> Option<&mut dyn Lifecycle> {
        Some(self)
    }
}

impl Lifecycle for ApiCommand {
    fn setup(&mut self, session: &Session<'_>) -> Result<()> {
        self.wiring = Some(Wiring::from_session(session));
        Ok(())
    }

    fn execute(&mut self, _args: &[String]) -> Result<()> {
        let Wiring { config, ui } = wired(&self.wiring)?;

        if self.unset {
            ui.display_text("Unsetting api endpoint...", &[]);
            config.unset_target();
            ui.display_text("OK", &[]);
            return Ok(());
        }

        let Some(url) = self.url.as_deref() else {
            let target = config.target();
            if target.is_empty() {
                ui.display_text(
                    "No api endpoint set. Use '{{Command}}' to set an endpoint",
                    &[("Command", crate::project_identity::cli_with("api URL"))],
                );
            } else {
                ui.display_text("API endpoint: {{Target}}", &[("Target", target)]);
                ui.display_text("API version:  {{Version}}", &[("Version", config.api_version())]);
            }
            return Ok(());
        };

        let endpoint = normalize_endpoint(url);
        ui.display_text("Setting api endpoint to {{Endpoint}}...", &[("Endpoint", endpoint.clone())]);

        let root = api::fetch_root_info(&endpoint, self.skip_ssl_validation)?;
        tracing::debug!(endpoint = %endpoint, version = %root.api_version, "api root fetched");

        config.set_target(&endpoint, &root.api_version, self.skip_ssl_validation);
        config.set_ssh_endpoint(&root.ssh_endpoint);

        ui.display_text("OK", &[]);
        ui.display_newline();
        ui.display_text("API endpoint: {{Target}}", &[("Target", endpoint)]);
        ui.display_text("API version:  {{Version}}", &[("Version", root.api_version)]);
        Ok(())
    }
}

/// Default to https and drop trailing slashes.
fn normalize_endpoint(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
