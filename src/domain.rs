//! Shared domain types: configuration, note metadata, and statistics.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Default note file extension.
pub const DEFAULT_NOTE_EXTENSION: &str = ".md";

/// Default heading placed above rendered outline documents.
pub const DEFAULT_HEADING: &str = "# Note tree";

/// Default indent unit per outline depth level.
pub const DEFAULT_INDENT: &str = "\t";

/// Sort orders for note listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Case-insensitive alphabetical by identifier.
    #[default]
    Name,
    /// Oldest first.
    CreatedAsc,
    /// Newest first.
    CreatedDesc,
}

/// One scanned note file.
#[derive(Debug, Clone, Serialize)]
pub struct NoteInfo {
    /// Identifier: the file name with the note extension stripped.
    pub name: String,
    /// Absolute path of the note file.
    pub path: PathBuf,
    /// Creation time, falling back to the modification time (then the
    /// epoch) on platforms or filesystems that cannot report it.
    pub created: DateTime<Local>,
}

/// Counters collected while listing a vault directory.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub entries_seen: usize,
    pub notes_found: usize,
    pub skipped_extension: usize,
    pub skipped_subdirs: usize,
}

/// Counters collected while building a link graph.
#[derive(Debug, Clone, Default)]
pub struct GraphStats {
    pub notes_scanned: usize,
    pub notes_with_links: usize,
    pub links_total: usize,
    pub read_failures: usize,
}

/// Tool configuration, merged from a config file and CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vault directory holding the note files.
    pub path: Option<PathBuf>,
    /// Note file extension, normalized to carry a leading dot.
    #[serde(deserialize_with = "deserialize_extension")]
    pub note_extension: String,
    /// Heading line placed above outline documents.
    pub heading: String,
    /// Indent unit per outline depth.
    pub indent: String,
    /// Default listing sort order.
    pub sort: SortOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            note_extension: DEFAULT_NOTE_EXTENSION.to_string(),
            heading: DEFAULT_HEADING.to_string(),
            indent: DEFAULT_INDENT.to_string(),
            sort: SortOrder::default(),
        }
    }
}

/// Normalize an extension so `"md"` and `".md"` mean the same thing.
pub fn normalize_extension(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{trimmed}")
    }
}

fn deserialize_extension<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_extension(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extension_adds_missing_dot() {
        assert_eq!(normalize_extension("md"), ".md");
        assert_eq!(normalize_extension(".md"), ".md");
        assert_eq!(normalize_extension("  txt  "), ".txt");
        assert_eq!(normalize_extension(""), "");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.note_extension, ".md");
        assert_eq!(config.heading, "# Note tree");
        assert_eq!(config.indent, "\t");
        assert_eq!(config.sort, SortOrder::Name);
    }

    #[test]
    fn test_sort_order_deserializes_kebab_case() {
        let sort: SortOrder = serde_json::from_str("\"created-desc\"").expect("sort");
        assert_eq!(sort, SortOrder::CreatedDesc);
    }
}
