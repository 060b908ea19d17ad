//! Scan for `{name}` substitution markers

use regex::Regex;
use std::sync::OnceLock;

/// Cached regex for `{lower_snake_case}` markers
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{[a-z_][a-z0-9_]*\}").unwrap()
    })
}

/// Every marker still present in `content`, in order of appearance
pub fn find_placeholders(content: &str) -> Vec<String> {
    get_placeholder_regex()
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::template;

    #[test]
    fn test_finds_markers_in_order() {
        let found = find_placeholders("a {test_status} b {generated} c");
        assert_eq!(found, vec!["{test_status}", "{generated}"]);
    }

    #[test]
    fn test_ignores_non_marker_braces() {
        assert!(find_placeholders("fn main() {}").is_empty());
        assert!(find_placeholders("{ spaced }").is_empty());
        assert!(find_placeholders("{Upper}").is_empty());
    }

    #[test]
    fn test_raw_template_has_exactly_two_markers() {
        let found = find_placeholders(template());
        assert_eq!(found, vec!["{generated}", "{test_status}"]);
    }
}
