//! Suggestions for mistyped command names

use crate::project_identity;
use colored::Colorize;

/// Closest known name to `input`, if it is a plausible typo.
pub fn suggest_command_name<'a>(input: &str, known: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut closest: Option<(&'a str, usize)> = None;

    for candidate in known {
        let dist = levenshtein_distance(input, candidate);
        if dist == 0 {
            return None;
        }
        if dist < closest.map(|(_, d)| d).unwrap_or(usize::MAX) {
            closest = Some((candidate, dist));
        }
    }

    closest.filter(|(_, dist)| *dist <= 3).map(|(name, _)| name)
}

/// Message printed when neither command generation knows `name`.
pub fn unknown_command_message(name: &str, suggestion: Option<&str>) -> String {
    let mut message = format!(
        "'{}' is not a registered command. See '{}'",
        name,
        project_identity::cli_with("help -a")
    );
    if let Some(suggestion) = suggestion {
        message.push_str(&format!("\n\nDid you mean?\n      {}", suggestion.cyan()));
    }
    message
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row = vec![0; b_len + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_char) in b.chars().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };

            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}
