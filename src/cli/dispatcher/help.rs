//! Help and usage resolution for failed parses.

use super::{Pipeline, PipelineResult};
use crate::cli::grammar::{FlagError, FlagErrorKind, is_flag_shaped, is_help_request};
use crate::cli::workaround;

pub(super) fn resolve(pipeline: &Pipeline<'_>, err: FlagError<'_>, args: &[String]) -> PipelineResult {
    match &err.kind {
        FlagErrorKind::Help
        | FlagErrorKind::UnknownFlag
        | FlagErrorKind::ExpectedArgument
        | FlagErrorKind::InvalidChoice => resolve_help(pipeline, &err, args),

        FlagErrorKind::RequiredMissing | FlagErrorKind::Marshal => {
            incorrect_usage(pipeline, &err.message);
            let command = err
                .active
                .map(|descriptor| descriptor.name())
                .or_else(|| args.first().map(String::as_str));
            pipeline.help(command);
            PipelineResult::Exit(1)
        }

        FlagErrorKind::UnknownCommand(name) => {
            if is_help_request(args) {
                pipeline.help(Some(name.as_str()))
            } else {
                PipelineResult::UnknownCommand(name.clone())
            }
        }

        FlagErrorKind::CommandRequired { verbose_or_version } => {
            if *verbose_or_version {
                pipeline.run(&["version".to_string()]);
            } else {
                pipeline.help(None);
            }
            PipelineResult::Exit(0)
        }
    }
}

fn resolve_help(pipeline: &Pipeline<'_>, err: &FlagError<'_>, args: &[String]) -> PipelineResult {
    if err.kind == FlagErrorKind::UnknownFlag
        && let Some(active) = err.active
        && let Some(command_at) = err.command_at
        && workaround::applies_to(active.name())
        && args.iter().skip(command_at + 1).any(|arg| is_flag_shaped(arg))
    {
        tracing::debug!(command = active.name(), "retrying with dash-prefixed values marked");
        return pipeline.run(&workaround::rewrite(args, command_at));
    }

    if err.kind.is_usage_error() {
        incorrect_usage(pipeline, &err.message);
    }

    let nested = match (err.active, err.leftovers.as_slice()) {
        (Some(active), _) => pipeline.help(Some(active.name())),
        (None, []) => pipeline.help(None),
        (None, [only]) => {
            if !is_flag_shaped(only) || (args.len() > 1 && only == "-a") {
                pipeline.help(Some(only.as_str()))
            } else {
                pipeline.help(None)
            }
        }
        (None, [first, rest @ ..]) => {
            if pipeline.registry.contains(first) {
                pipeline.help(Some(first.as_str()))
            } else {
                pipeline.run(rest)
            }
        }
    };

    if err.kind.is_usage_error() {
        return PipelineResult::Exit(1);
    }

    match nested {
        PipelineResult::Exit(code) if code > 0 => PipelineResult::Exit(1),
        other => other,
    }
}

fn incorrect_usage(pipeline: &Pipeline<'_>, message: &str) {
    pipeline
        .ui
        .display_warning("Incorrect Usage: {{Message}}", &[("Message", message.to_string())]);
    pipeline.ui.display_warning("", &[]);
}
