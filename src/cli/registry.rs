//! Command registry
//!
//! A registry is an immutable table of command descriptors for one command
//! generation, looked up by name or alias.

use crate::cli::lifecycle::CommandHandler;
use crate::error::{CliError, Result};
use crate::project_identity;
use clap::{Arg, ArgAction, ArgMatches, FromArgMatches};
use std::collections::HashMap;

/// Id of the hidden positional collecting unconsumed arguments.
pub(crate) const EXTRA_ARGS: &str = "__extra_args";

type ArgsBuilder = fn(clap::Command) -> clap::Command;
type HandlerFactory = fn(&ArgMatches) -> std::result::Result<Box<dyn CommandHandler>, clap::Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    Current,
    Legacy,
}

#[derive(Clone, Copy)]
enum Implementation {
    Parsed {
        args: ArgsBuilder,
        build: HandlerFactory,
        collect_extra: bool,
    },
    /// Known here but served by the legacy generation.
    Deferred,
}

#[derive(Clone)]
pub struct CommandDescriptor {
    name: &'static str,
    aliases: &'static [&'static str],
    summary: &'static str,
    implementation: Implementation,
}

fn build_handler<C>(matches: &ArgMatches) -> std::result::Result<Box<dyn CommandHandler>, clap::Error>
where
    C: FromArgMatches + CommandHandler + 'static,
{
    Ok(Box::new(C::from_arg_matches(matches)?))
}

impl CommandDescriptor {
    /// Descriptor for a command whose flags and positionals are declared by `C`.
    /// Positionals beyond the declared ones are collected as extra arguments.
    pub fn new<C>(name: &'static str, aliases: &'static [&'static str], summary: &'static str) -> Self
    where
        C: clap::Args + CommandHandler + 'static,
    {
        Self::parsed::<C>(name, aliases, summary, true)
    }

    /// Like [`CommandDescriptor::new`], for commands that capture every
    /// remaining token themselves.
    pub fn passthrough<C>(
        name: &'static str,
        aliases: &'static [&'static str],
        summary: &'static str,
    ) -> Self
    where
        C: clap::Args + CommandHandler + 'static,
    {
        Self::parsed::<C>(name, aliases, summary, false)
    }

    pub fn deferred(name: &'static str, aliases: &'static [&'static str], summary: &'static str) -> Self {
        Self {
            name,
            aliases,
            summary,
            implementation: Implementation::Deferred,
        }
    }

    fn parsed<C>(
        name: &'static str,
        aliases: &'static [&'static str],
        summary: &'static str,
        collect_extra: bool,
    ) -> Self
    where
        C: clap::Args + CommandHandler + 'static,
    {
        Self {
            name,
            aliases,
            summary,
            implementation: Implementation::Parsed {
                args: C::augment_args,
                build: build_handler::<C>,
                collect_extra,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    pub fn summary(&self) -> &'static str {
        self.summary
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self.implementation, Implementation::Deferred)
    }

    pub fn collects_extra_args(&self) -> bool {
        matches!(
            self.implementation,
            Implementation::Parsed {
                collect_extra: true,
                ..
            }
        )
    }

    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.aliases.contains(&token)
    }

    /// Flag schema for this command, or `None` when it is deferred.
    pub fn clap_command(&self) -> Option<clap::Command> {
        let Implementation::Parsed {
            args,
            collect_extra,
            ..
        } = self.implementation
        else {
            return None;
        };

        let mut command = args(clap::Command::new(self.name))
            .about(self.summary)
            .bin_name(project_identity::cli_with(self.name))
            .no_binary_name(true)
            .disable_version_flag(true)
            .term_width(help_width());

        if !self.aliases.is_empty() {
            command = command.visible_aliases(self.aliases.iter().copied());
        }

        if collect_extra {
            command = command.arg(
                Arg::new(EXTRA_ARGS)
                    .num_args(0..)
                    .action(ArgAction::Append)
                    .value_parser(clap::value_parser!(String))
                    .hide(true),
            );
        }

        Some(command)
    }

    pub(crate) fn build(
        &self,
        matches: &ArgMatches,
    ) -> Option<std::result::Result<Box<dyn CommandHandler>, clap::Error>> {
        match self.implementation {
            Implementation::Parsed { build, .. } => Some(build(matches)),
            Implementation::Deferred => None,
        }
    }

    /// Long help text as rendered by clap.
    pub fn render_help(&self) -> Option<String> {
        self.clap_command()
            .map(|mut command| command.render_long_help().to_string())
    }
}

fn help_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(width), _)| usize::from(width))
        .unwrap_or(80)
        .min(100)
}

pub struct CommandRegistry {
    generation: Generation,
    descriptors: Vec<CommandDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    /// Build a registry, rejecting any name or alias registered twice.
    pub fn new(generation: Generation, descriptors: Vec<CommandDescriptor>) -> Result<Self> {
        let mut index = HashMap::new();
        for (position, descriptor) in descriptors.iter().enumerate() {
            for key in std::iter::once(descriptor.name).chain(descriptor.aliases.iter().copied()) {
                if index.insert(key, position).is_some() {
                    return Err(CliError::DuplicateCommand {
                        name: key.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            generation,
            descriptors,
            index,
        })
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn find(&self, token: &str) -> Option<&CommandDescriptor> {
        self.index
            .get(token)
            .and_then(|position| self.descriptors.get(*position))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> &[CommandDescriptor] {
        &self.descriptors
    }
}
