//! Values that start with a dash.
//!
//! `set-env APP KEY -VALUE` cannot be parsed as written because `-VALUE`
//! looks like a flag. After such a parse fails, every flag-shaped token after
//! the command name is prefixed with [`MARKER`] and the invocation is parsed
//! again; the
//! positionals of the env-setting commands strip the marker back off.

use crate::cli::grammar::is_flag_shaped;
use std::convert::Infallible;

/// Word joiner: invisible, and never typed by hand.
pub const MARKER: &str = "\u{2060}";

/// Commands whose positionals accept marked values.
pub fn applies_to(command: &str) -> bool {
    matches!(command, "set-env" | "v3-set-env")
}

/// Mark the flag-shaped tokens that follow the command at `command_at`.
/// Global flags before the command are left alone.
pub fn rewrite(args: &[String], command_at: usize) -> Vec<String> {
    let split = (command_at + 1).min(args.len());
    let (head, tail) = args.split_at(split);
    head.iter()
        .cloned()
        .chain(tail.iter().map(|arg| {
            if is_flag_shaped(arg) {
                format!("{}{}", MARKER, arg)
            } else {
                arg.clone()
            }
        }))
        .collect()
}

/// clap value parser for positionals that may carry the marker.
pub fn unmarked(value: &str) -> Result<String, Infallible> {
    Ok(value.strip_prefix(MARKER).unwrap_or(value).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn rewrite_marks_only_flag_shaped_tokens() {
        let rewritten = rewrite(&strings(&["set-env", "app", "KEY", "-VALUE"]), 0);
        assert_eq!(rewritten[..3], strings(&["set-env", "app", "KEY"])[..]);
        assert_eq!(rewritten[3], format!("{}-VALUE", MARKER));
        assert!(!rewritten.iter().any(|arg| is_flag_shaped(arg)));
    }

    #[test]
    fn rewrite_leaves_global_flags_before_the_command() {
        let rewritten = rewrite(&strings(&["-v", "set-env", "app", "-KEY", "-VALUE"]), 1);
        assert_eq!(rewritten[..3], strings(&["-v", "set-env", "app"])[..]);
        assert_eq!(rewritten[3], format!("{}-KEY", MARKER));
        assert_eq!(rewritten[4], format!("{}-VALUE", MARKER));
    }

    #[test]
    fn unmarked_strips_a_single_marker() {
        assert_eq!(unmarked(&format!("{}-VALUE", MARKER)).unwrap(), "-VALUE");
        assert_eq!(unmarked("plain").unwrap(), "plain");
    }

    #[test]
    fn only_env_commands_take_the_workaround() {
        assert!(applies_to("set-env"));
        assert!(applies_to("v3-set-env"));
        assert!(!applies_to("se"));
        assert!(!applies_to("org-quota"));
    }
}
