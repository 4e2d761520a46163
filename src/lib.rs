pub mod actor;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod error_suggestions;
pub mod logging;
pub mod project_identity;
pub mod ui;
pub mod utils;

use cli::dispatcher::{DispatchResult, Dispatcher};
use cli::registry::CommandRegistry;
use config::{Config, Environment, FlagOverride};
use error::{CliError, Result};
use std::process::{Command, exit};
use std::rc::Rc;

/// Run ctlplane CLI entrypoint.
pub fn run_cli() {
    // 0. Diagnostics stay off until a command has loaded its config
    logging::init();

    let env = Environment::from_process();

    // 1. Color preference comes from the stored config when it is readable
    if let Ok(config) = Config::load(&env, FlagOverride::default()) {
        ui::init_colors(config.color_enabled());
    }

    // 2. Build both command tables
    let (current, legacy) = match commands::current_registry().and_then(|c| Ok((c, commands::legacy_registry()?))) {
        Ok(tables) => tables,
        Err(e) => {
            ui::error(&e.to_string());
            exit(1);
        }
    };
    let known_names = command_names(&[&current, &legacy]);

    // 3. Dispatch
    let args: Vec<String> = std::env::args().skip(1).collect();
    let sink: Rc<dyn ui::Ui> = Rc::new(ui::TerminalUi::new());
    let dispatcher = Dispatcher::new(current, legacy, sink, env.clone());

    match dispatcher.dispatch(&args) {
        DispatchResult::Exit(code) => exit(code),
        DispatchResult::UnknownCommand(name) => {
            let suggestion =
                error_suggestions::suggest_command_name(&name, known_names.iter().map(String::as_str));
            eprintln!("{}", error_suggestions::unknown_command_message(&name, suggestion));
            exit(1);
        }
        DispatchResult::LegacyHandoff => match hand_off(&env, &args) {
            Ok(code) => exit(code),
            Err(e) => {
                ui::error(&e.to_string());
                exit(1);
            }
        },
    }
}

fn command_names(registries: &[&CommandRegistry]) -> Vec<String> {
    let mut names: Vec<String> = registries
        .iter()
        .flat_map(|registry| registry.descriptors())
        .flat_map(|descriptor| std::iter::once(descriptor.name()).chain(descriptor.aliases().iter().copied()))
        .map(str::to_string)
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Re-run the original invocation with the legacy executable.
fn hand_off(env: &Environment, args: &[String]) -> Result<i32> {
    let binary = env
        .legacy_binary
        .clone()
        .unwrap_or_else(|| project_identity::LEGACY_BINARY_NAME.to_string());
    let path = which::which(&binary).map_err(|e| CliError::SystemCommandFailed {
        command: binary.clone(),
        reason: e.to_string(),
    })?;
    tracing::debug!(binary = %path.display(), "handing the invocation to the legacy executable");

    let mut command = Command::new(&path);
    command.args(args);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let err = command.exec();
        Err(CliError::SystemCommandFailed {
            command: binary,
            reason: err.to_string(),
        })
    }

    #[cfg(not(unix))]
    {
        let status = command.status().map_err(|e| CliError::SystemCommandFailed {
            command: binary,
            reason: e.to_string(),
        })?;
        Ok(status.code().unwrap_or(1))
    }
}
