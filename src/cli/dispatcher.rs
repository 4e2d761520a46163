//! Command dispatcher
//!
//! Runs an argument vector through grammar, execution and routing against
//! the current registry, and once more against the legacy registry when the
//! current one cannot serve the command.

mod help;

use crate::cli::execution::{self, ExecutionContext};
use crate::cli::grammar::{self, ParseOutcome};
use crate::cli::registry::CommandRegistry;
use crate::cli::router::ExecutionOutcome;
use crate::config::Environment;
use crate::ui::Ui;
use std::rc::Rc;

/// Final result of a dispatch. Only `Exit` carries a process exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    Exit(i32),
    /// Neither generation knows the command.
    UnknownCommand(String),
    /// The legacy entry point must take over the process.
    LegacyHandoff,
}

/// Result of one pass against a single registry.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PipelineResult {
    Exit(i32),
    UnknownCommand(String),
    SwitchGeneration,
    LegacyHandoff,
}

pub struct Dispatcher {
    current: CommandRegistry,
    legacy: CommandRegistry,
    ui: Rc<dyn Ui>,
    env: Environment,
}

impl Dispatcher {
    pub fn new(current: CommandRegistry, legacy: CommandRegistry, ui: Rc<dyn Ui>, env: Environment) -> Self {
        Self {
            current,
            legacy,
            ui,
            env,
        }
    }

    pub fn dispatch(&self, args: &[String]) -> DispatchResult {
        let first = self.pipeline(&self.current).run(args);
        match first {
            PipelineResult::SwitchGeneration | PipelineResult::UnknownCommand(_) => {
                tracing::debug!(result = ?first, "retrying with the legacy generation");
                self.finish_legacy(self.pipeline(&self.legacy).run(args))
            }
            PipelineResult::Exit(code) => DispatchResult::Exit(code),
            PipelineResult::LegacyHandoff => DispatchResult::LegacyHandoff,
        }
    }

    fn finish_legacy(&self, result: PipelineResult) -> DispatchResult {
        match result {
            PipelineResult::Exit(code) => DispatchResult::Exit(code),
            PipelineResult::UnknownCommand(name) => DispatchResult::UnknownCommand(name),
            PipelineResult::LegacyHandoff => DispatchResult::LegacyHandoff,
            PipelineResult::SwitchGeneration => {
                tracing::warn!("legacy generation requested another generation switch");
                DispatchResult::Exit(1)
            }
        }
    }

    fn pipeline<'a>(&'a self, registry: &'a CommandRegistry) -> Pipeline<'a> {
        Pipeline {
            registry,
            ui: &self.ui,
            env: &self.env,
        }
    }
}

struct Pipeline<'a> {
    registry: &'a CommandRegistry,
    ui: &'a Rc<dyn Ui>,
    env: &'a Environment,
}

impl Pipeline<'_> {
    fn run(&self, args: &[String]) -> PipelineResult {
        match grammar::parse(args, self.registry) {
            ParseOutcome::Success(invocation) => {
                let command = invocation.descriptor.name();
                let ctx = ExecutionContext {
                    env: self.env,
                    ui: self.ui,
                    registry: self.registry,
                };
                let outcome = execution::execute(invocation, &ctx);
                self.finish(command, outcome)
            }
            ParseOutcome::SwitchGeneration => PipelineResult::SwitchGeneration,
            ParseOutcome::Error(err) => help::resolve(self, err, args),
        }
    }

    fn finish(&self, command: &str, outcome: ExecutionOutcome) -> PipelineResult {
        match outcome {
            ExecutionOutcome::Ok => PipelineResult::Exit(0),
            ExecutionOutcome::Failed => PipelineResult::Exit(1),
            ExecutionOutcome::UsageFailure => {
                self.ui.display_newline();
                self.help(Some(command));
                PipelineResult::Exit(1)
            }
            ExecutionOutcome::GenerationSwitch => PipelineResult::SwitchGeneration,
            ExecutionOutcome::LegacyHandoff => PipelineResult::LegacyHandoff,
            ExecutionOutcome::RemoteTermination { status, .. } => PipelineResult::Exit(status),
            ExecutionOutcome::Unexpected(e) => {
                tracing::error!(error = ?e, "unexpected error");
                self.ui
                    .display_warning("Unexpected error: {{Error}}", &[("Error", e.to_string())]);
                PipelineResult::Exit(1)
            }
        }
    }

    /// Run `help`, or `help <topic>`, against the same registry.
    fn help(&self, topic: Option<&str>) -> PipelineResult {
        let mut args = vec!["help".to_string()];
        args.extend(topic.map(str::to_string));
        self.run(&args)
    }
}
