//! Execution wrapper
//!
//! Runs one parsed command: loads the configuration, runs the pre-flight
//! guards, then setup and execute. The config write and the deferred UI flush
//! happen in a drop guard so every return path performs them exactly once.

use crate::cli::grammar::ParsedInvocation;
use crate::cli::lifecycle::Session;
use crate::cli::registry::CommandRegistry;
use crate::cli::router::{ExecutionOutcome, route};
use crate::config::{Config, Environment, FlagOverride};
use crate::error::{CliError, Result};
use crate::logging;
use crate::ui::Ui;
use std::rc::Rc;

pub struct ExecutionContext<'a> {
    pub env: &'a Environment,
    pub ui: &'a Rc<dyn Ui>,
    pub registry: &'a CommandRegistry,
}

struct FlushGuard<'a> {
    config: &'a Config,
    ui: &'a dyn Ui,
}

impl Drop for FlushGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.config.write_config() {
            tracing::error!(error = %e, "failed to write config");
            self.ui
                .display_warning("Error writing config: {{Error}}", &[("Error", e.to_string())]);
        }
        self.ui.flush_deferred();
    }
}

pub fn execute(invocation: ParsedInvocation<'_>, ctx: &ExecutionContext<'_>) -> ExecutionOutcome {
    let ParsedInvocation {
        descriptor,
        mut handler,
        extra_args,
        verbose_or_version,
    } = invocation;

    let config = match Config::load(
        ctx.env,
        FlagOverride {
            verbose: verbose_or_version,
        },
    ) {
        Ok(config) => config,
        Err(e) => return ExecutionOutcome::Unexpected(e),
    };

    logging::set_level(config.log_level());
    tracing::debug!(
        command = descriptor.name(),
        generation = ?ctx.registry.generation(),
        "executing command"
    );

    let _guard = FlushGuard {
        config: &config,
        ui: ctx.ui.as_ref(),
    };

    if let Err(e) = reject_extra_args(&extra_args) {
        return route(Err(e), ctx.ui.as_ref());
    }

    if let Err(e) = config.create_plugin_home() {
        return route(Err(e), ctx.ui.as_ref());
    }

    let Some(lifecycle) = handler.lifecycle() else {
        return ExecutionOutcome::Unexpected(CliError::NonConformingCommand);
    };

    let session = Session {
        config: &config,
        ui: ctx.ui,
        commands: ctx.registry,
    };

    if let Err(e) = lifecycle.setup(&session) {
        return route(Err(e), ctx.ui.as_ref());
    }

    route(lifecycle.execute(&extra_args), ctx.ui.as_ref())
}

fn reject_extra_args(extra_args: &[String]) -> Result<()> {
    match extra_args.first() {
        Some(argument) => Err(CliError::TooManyArguments {
            argument: argument.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests;
