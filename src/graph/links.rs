//! Wikilink extraction.
//!
//! A link is a `[[` … `]]` span whose inner text is the target identifier,
//! captured verbatim: no trimming, no case folding, aliases and all. The
//! span never crosses a line boundary.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(.*?)\]\]").expect("valid wikilink regex"));

/// Iterate raw link targets in document order, duplicates included.
pub fn link_targets(content: &str) -> impl Iterator<Item = &str> {
    LINK_PATTERN.captures_iter(content).filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Extract a note's outgoing links: first-appearance order, with repeated
/// targets collapsed to their first occurrence.
pub fn extract_links(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for target in link_targets(content) {
        if seen.insert(target) {
            links.push(target.to_string());
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order_duplicates_collapsed() {
        let content = "see [[B]], then [[A]], [[B]] again, finally [[C]]";
        assert_eq!(extract_links(content), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_targets_are_captured_verbatim() {
        assert_eq!(extract_links("[[ Spaced ]]"), vec![" Spaced "]);
        assert_eq!(extract_links("[[Note|label]]"), vec!["Note|label"]);
        assert_eq!(extract_links("[[CamelCase]] [[camelcase]]"), vec!["CamelCase", "camelcase"]);
    }

    #[test]
    fn test_scan_order_is_top_to_bottom() {
        let content = "first line [[one]]\nsecond [[two]] and [[three]]\n[[four]]";
        assert_eq!(extract_links(content), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_span_does_not_cross_lines() {
        assert_eq!(extract_links("[[a\nb]] and [[c]]"), vec!["c"]);
    }

    #[test]
    fn test_unclosed_and_empty_spans() {
        assert!(extract_links("[[never closed").is_empty());
        assert!(extract_links("no links at all").is_empty());
        assert_eq!(extract_links("[[]]"), vec![""]);
    }

    #[test]
    fn test_lazy_capture_stops_at_first_close() {
        assert_eq!(extract_links("[[[x]]]"), vec!["[x"]);
        assert_eq!(extract_links("[[a]][[b]]"), vec!["a", "b"]);
    }

    #[test]
    fn test_raw_targets_keep_duplicates() {
        let raw: Vec<&str> = link_targets("[[a]] [[b]] [[a]]").collect();
        assert_eq!(raw, vec!["a", "b", "a"]);
    }
}
