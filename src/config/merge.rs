//! Merging CLI flags over file configuration.

use crate::domain::{normalize_extension, Config, SortOrder};
use std::path::PathBuf;

/// Settings a subcommand can override from the command line.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub path: Option<PathBuf>,
    pub note_extension: Option<String>,
    pub sort: Option<SortOrder>,
}

/// Merge CLI overrides over file configuration. CLI always wins.
pub fn merge_cli_with_config(file_config: Config, cli: CliOverrides) -> Config {
    Config {
        path: cli.path.or(file_config.path),
        note_extension: cli
            .note_extension
            .map(|ext| normalize_extension(&ext))
            .unwrap_or(file_config.note_extension),
        heading: file_config.heading,
        indent: file_config.indent,
        sort: cli.sort.unwrap_or(file_config.sort),
    }
}
