//! Dotted version comparison for API versions such as `3.102.0`.

/// True when `actual` is at least `minimum`. Missing components count as 0;
/// an unparseable `actual` never satisfies a minimum.
pub fn is_at_least(actual: &str, minimum: &str) -> bool {
    match (parse(actual), parse(minimum)) {
        (Some(actual), Some(minimum)) => {
            let len = actual.len().max(minimum.len());
            let pad = |v: &[u64]| -> Vec<u64> {
                let mut v = v.to_vec();
                v.resize(len, 0);
                v
            };
            pad(&actual) >= pad(&minimum)
        }
        _ => false,
    }
}

fn parse(raw: &str) -> Option<Vec<u64>> {
    let raw = raw.trim().trim_start_matches('v');
    if raw.is_empty() {
        return None;
    }
    raw.split('.').map(|part| part.parse::<u64>().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::is_at_least;

    #[test]
    fn compares_numerically_not_lexically() {
        assert!(is_at_least("3.10.0", "3.9.0"));
        assert!(!is_at_least("2.150.0", "3.0.0"));
    }

    #[test]
    fn missing_components_are_zero() {
        assert!(is_at_least("3", "3.0.0"));
        assert!(is_at_least("3.0.0", "3"));
    }

    #[test]
    fn empty_or_garbage_never_satisfies() {
        assert!(!is_at_least("", "1.0.0"));
        assert!(!is_at_least("three", "1.0.0"));
    }
}
