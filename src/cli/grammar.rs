//! Flag grammar
//!
//! Matches the leading command token against a registry and parses the rest
//! with the command's clap schema. Failures are classified so the help
//! resolver can decide what to show. Parsing has no side effects.

use crate::cli::lifecycle::CommandHandler;
use crate::cli::registry::{CommandDescriptor, CommandRegistry, EXTRA_ARGS};
use clap::error::{ContextKind, ContextValue, ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagErrorKind {
    Help,
    UnknownFlag,
    ExpectedArgument,
    InvalidChoice,
    RequiredMissing,
    Marshal,
    UnknownCommand(String),
    CommandRequired { verbose_or_version: bool },
}

impl FlagErrorKind {
    /// Kinds that are reported to the user as "Incorrect Usage".
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownFlag | Self::ExpectedArgument | Self::InvalidChoice
        )
    }
}

pub struct FlagError<'r> {
    pub kind: FlagErrorKind,
    pub message: String,
    /// Command that was being parsed when the error occurred.
    pub active: Option<&'r CommandDescriptor>,
    /// Index in the argument vector of the token naming `active`.
    pub command_at: Option<usize>,
    /// Tokens not consumed when parsing stopped.
    pub leftovers: Vec<String>,
}

pub struct ParsedInvocation<'r> {
    pub descriptor: &'r CommandDescriptor,
    pub handler: Box<dyn CommandHandler>,
    pub extra_args: Vec<String>,
    pub verbose_or_version: bool,
}

pub enum ParseOutcome<'r> {
    Success(ParsedInvocation<'r>),
    /// The command is deferred to the legacy generation.
    SwitchGeneration,
    Error(FlagError<'r>),
}

/// An argument that starts with a dash, whether meant as a flag or not.
pub fn is_flag_shaped(token: &str) -> bool {
    token.starts_with('-')
}

/// True when any token asks for help.
pub fn is_help_request(args: &[String]) -> bool {
    args.iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help" | "--h"))
}

pub fn parse<'r>(args: &[String], registry: &'r CommandRegistry) -> ParseOutcome<'r> {
    let mut verbose_or_version = false;

    for (position, token) in args.iter().enumerate() {
        match token.as_str() {
            "-v" | "--version" => verbose_or_version = true,
            "-h" | "--help" | "--h" => {
                return failure(FlagErrorKind::Help, String::new(), None, &args[position + 1..]);
            }
            flag if is_flag_shaped(flag) => {
                return failure(
                    FlagErrorKind::UnknownFlag,
                    format!("unknown flag '{}'", flag),
                    None,
                    &args[position..],
                );
            }
            name => {
                return match registry.find(name) {
                    Some(descriptor) => {
                        parse_command(descriptor, position, &args[position + 1..], verbose_or_version)
                    }
                    None => failure(
                        FlagErrorKind::UnknownCommand(name.to_string()),
                        format!("unknown command '{}'", name),
                        None,
                        &args[position..],
                    ),
                };
            }
        }
    }

    failure(
        FlagErrorKind::CommandRequired { verbose_or_version },
        "a command is required".to_string(),
        None,
        &[],
    )
}

fn failure<'r>(
    kind: FlagErrorKind,
    message: String,
    active: Option<(&'r CommandDescriptor, usize)>,
    leftovers: &[String],
) -> ParseOutcome<'r> {
    ParseOutcome::Error(FlagError {
        kind,
        message,
        active: active.map(|(descriptor, _)| descriptor),
        command_at: active.map(|(_, position)| position),
        leftovers: leftovers.to_vec(),
    })
}

fn parse_command<'r>(
    descriptor: &'r CommandDescriptor,
    position: usize,
    rest: &[String],
    verbose_or_version: bool,
) -> ParseOutcome<'r> {
    let Some(command) = descriptor.clap_command() else {
        return ParseOutcome::SwitchGeneration;
    };

    let matches = match command.try_get_matches_from(rest.iter()) {
        Ok(matches) => matches,
        Err(err) => return classify(&err, descriptor, position, rest),
    };

    let extra_args = if descriptor.collects_extra_args() {
        matches
            .try_get_many::<String>(EXTRA_ARGS)
            .ok()
            .flatten()
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    match descriptor.build(&matches) {
        Some(Ok(handler)) => ParseOutcome::Success(ParsedInvocation {
            descriptor,
            handler,
            extra_args,
            verbose_or_version,
        }),
        Some(Err(err)) => classify(&err, descriptor, position, rest),
        None => ParseOutcome::SwitchGeneration,
    }
}

fn classify<'r>(
    err: &clap::Error,
    descriptor: &'r CommandDescriptor,
    position: usize,
    rest: &[String],
) -> ParseOutcome<'r> {
    let arg = context(err, ContextKind::InvalidArg).unwrap_or_default();
    let value = context(err, ContextKind::InvalidValue).unwrap_or_default();

    let (kind, message) = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            (FlagErrorKind::Help, String::new())
        }
        ErrorKind::UnknownArgument => (FlagErrorKind::UnknownFlag, format!("unknown flag '{}'", arg)),
        ErrorKind::InvalidValue if value.is_empty() => (
            FlagErrorKind::ExpectedArgument,
            format!("expected argument for flag '{}'", arg),
        ),
        ErrorKind::InvalidValue => {
            let allowed = context(err, ContextKind::ValidValue)
                .map(|valid| format!(", allowed values are: {}", valid))
                .unwrap_or_default();
            (
                FlagErrorKind::InvalidChoice,
                format!("invalid value '{}' for flag '{}'{}", value, arg, allowed),
            )
        }
        ErrorKind::MissingRequiredArgument => (
            FlagErrorKind::RequiredMissing,
            format!("the required argument {} was not provided", arg),
        ),
        ErrorKind::ValueValidation => {
            let reason = std::error::Error::source(err)
                .map(|source| source.to_string())
                .unwrap_or_else(|| first_line(err));
            (
                FlagErrorKind::Marshal,
                format!("invalid argument for flag '{}': {}", arg, reason),
            )
        }
        _ => (FlagErrorKind::Marshal, first_line(err)),
    };

    failure(kind, message, Some((descriptor, position)), rest)
}

fn context(err: &clap::Error, kind: ContextKind) -> Option<String> {
    match err.get(kind)? {
        ContextValue::String(value) => Some(value.clone()),
        ContextValue::Strings(values) => Some(values.join(", ")),
        other => Some(other.to_string()),
    }
}

fn first_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
