//! SSH Command
//!
//! Opens a session to an app instance through the deployment's SSH proxy
//! using the system `ssh` binary. A non-zero exit is reported as a remote
//! termination so the exit status reaches the shell unchanged.

use super::{Wiring, display_warnings, wired};
use crate::actor::Actor;
use crate::api::HttpClient;
use crate::cli::lifecycle::{CommandHandler, Lifecycle, Session};
use crate::error::{CliError, Result};
use crate::project_identity;
use clap::Args;
use std::process::{Command, ExitStatus};

const DEFAULT_SSH_PORT: &str = "22";

#[derive(Args, Default)]
pub struct SshCommand {
    /// Name of the app
    #[arg(value_name = "APP_NAME")]
    app_name: String,

    /// App process instance index
    #[arg(short = 'i', long = "app-instance-index", default_value_t = 0)]
    instance: u32,

    /// Command to run. May be given more than once
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    commands: Vec<String>,

    #[arg(skip)]
    wiring: Option<Wiring>,
}

impl CommandHandler for SshCommand {
    fn lifecycle(&mut self) -> Option<&mut dyn Lifecycle> {
        Some(self)
    }
}

impl Lifecycle for SshCommand {
    fn setup(&mut self, session: &Session<'_>) -> Result<()> {
        if session.config.target().is_empty() {
            return Err(CliError::NoApiTarget);
        }
        self.wiring = Some(Wiring::from_session(session));
        Ok(())
    }

    fn execute(&mut self, _args: &[String]) -> Result<()> {
        let Wiring { config, ui } = wired(&self.wiring)?;
        let space = config.targeted_space().ok_or(CliError::NoTargetedSpace)?;
        let endpoint = config.ssh_endpoint();
        if endpoint.is_empty() {
            return Err(CliError::Other(format!(
                "SSH endpoint is not configured. Run '{}' to refresh it.",
                project_identity::cli_with("api URL")
            )));
        }

        let client = HttpClient::new(config)?;
        let (app, warnings) = Actor::new(&client).get_application_by_name(&self.app_name, &space.guid);
        display_warnings(ui.as_ref(), &warnings);
        let app = app?;

        let argv = ssh_arguments(&endpoint, &app.guid, self.instance, &self.commands);
        let ssh = which::which("ssh").map_err(|e| CliError::SystemCommandFailed {
            command: "ssh".to_string(),
            reason: e.to_string(),
        })?;

        let rendered = render_command_line(&argv);
        tracing::debug!(command = %rendered, "starting ssh session");

        let status = Command::new(ssh)
            .args(&argv)
            .status()
            .map_err(|e| CliError::SystemCommandFailed {
                command: rendered,
                reason: e.to_string(),
            })?;

        exit_status_result(status)
    }
}

/// `HOST[:PORT]` of the SSH proxy.
fn split_endpoint(endpoint: &str) -> (&str, &str) {
    match endpoint.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => (host, port),
        _ => (endpoint, DEFAULT_SSH_PORT),
    }
}

fn ssh_arguments(endpoint: &str, app_guid: &str, instance: u32, commands: &[String]) -> Vec<String> {
    let (host, port) = split_endpoint(endpoint);
    let mut argv = vec![
        "-p".to_string(),
        port.to_string(),
        format!("cf:{}/{}@{}", app_guid, instance, host),
    ];
    if !commands.is_empty() {
        argv.push(commands.join("; "));
    }
    argv
}

fn render_command_line(argv: &[String]) -> String {
    shlex::try_join(std::iter::once("ssh").chain(argv.iter().map(String::as_str)))
        .unwrap_or_else(|_| format!("ssh {}", argv.join(" ")))
}

fn exit_status_result(status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Err(CliError::RemoteTermination {
                status: 128 + signal,
                signal: Some(signal_name(signal)),
            });
        }
    }

    Err(CliError::RemoteTermination {
        status: status.code().unwrap_or(1),
        signal: None,
    })
}

#[cfg_attr(not(unix), allow(dead_code))]
fn signal_name(signal: i32) -> String {
    match signal {
        1 => "HUP".to_string(),
        2 => "INT".to_string(),
        3 => "QUIT".to_string(),
        6 => "ABRT".to_string(),
        9 => "KILL".to_string(),
        13 => "PIPE".to_string(),
        14 => "ALRM".to_string(),
        15 => "TERM".to_string(),
        other => format!("SIG{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_port_defaults_to_22() {
        assert_eq!(split_endpoint("ssh.example.com:2222"), ("ssh.example.com", "2222"));
        assert_eq!(split_endpoint("ssh.example.com"), ("ssh.example.com", "22"));
    }

    #[test]
    fn arguments_address_the_app_instance() {
        let argv = ssh_arguments(
            "ssh.example.com:2222",
            "app-guid",
            1,
            &["ls".to_string(), "pwd".to_string()],
        );
        assert_eq!(argv, vec!["-p", "2222", "cf:app-guid/1@ssh.example.com", "ls; pwd"]);
        assert_eq!(ssh_arguments("host", "g", 0, &[]).len(), 3);
    }

    #[test]
    fn command_line_is_shell_quoted() {
        let rendered = render_command_line(&["-p".to_string(), "22".to_string(), "echo hi".to_string()]);
        assert!(
            rendered == "ssh -p 22 'echo hi'" || rendered == "ssh -p 22 \"echo hi\"",
            "{}",
            rendered
        );
    }

    #[cfg(unix)]
    #[test]
    fn signals_and_codes_become_remote_terminations() {
        use std::os::unix::process::ExitStatusExt;

        match exit_status_result(ExitStatus::from_raw(9)) {
            Err(CliError::RemoteTermination { status, signal }) => {
                assert_eq!(status, 137);
                assert_eq!(signal.as_deref(), Some("KILL"));
            }
            other => panic!("expected a remote termination, got {:?}", other),
        }

        match exit_status_result(ExitStatus::from_raw(3 << 8)) {
            Err(CliError::RemoteTermination { status, signal }) => {
                assert_eq!(status, 3);
                assert!(signal.is_none());
            }
            other => panic!("expected a remote termination, got {:?}", other),
        }

        assert!(exit_status_result(ExitStatus::from_raw(0)).is_ok());
    }
}
