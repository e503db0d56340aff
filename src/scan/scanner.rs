//! Vault directory scanner.

use crate::domain::{NoteInfo, ScanStats, DEFAULT_NOTE_EXTENSION};
use crate::error::{Result, VaultError};
use chrono::{DateTime, Local};
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// Lists the note files of a vault directory.
///
/// Only direct children are considered; subdirectories are never descended
/// into. A file is a note when its name ends with the configured extension,
/// and its identifier is the name with that suffix stripped.
pub struct NoteScanner {
    root: PathBuf,
    extension: String,
    stats: ScanStats,
}

impl NoteScanner {
    /// Create a scanner for `root` with the default `.md` extension.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: DEFAULT_NOTE_EXTENSION.to_string(),
            stats: ScanStats::default(),
        }
    }

    /// Set the note file extension (leading dot included).
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// List the vault's notes, sorted case-insensitively by identifier.
    ///
    /// Fails only when the directory itself cannot be listed; individual
    /// entries that cannot be inspected are skipped.
    pub fn scan(&mut self) -> Result<Vec<NoteInfo>> {
        self.stats = ScanStats::default();

        let entries =
            fs::read_dir(&self.root).map_err(|err| VaultError::directory(&self.root, err))?;

        let mut notes = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(
                        "skipping unreadable entry in {}: {err}",
                        self.root.display()
                    );
                    continue;
                }
            };
            self.stats.entries_seen += 1;

            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                self.stats.skipped_subdirs += 1;
                continue;
            }

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                self.stats.skipped_extension += 1;
                continue;
            };
            let Some(identifier) = name.strip_suffix(self.extension.as_str()) else {
                self.stats.skipped_extension += 1;
                continue;
            };

            notes.push(NoteInfo {
                name: identifier.to_string(),
                created: creation_time(&entry),
                path: entry.path(),
            });
            self.stats.notes_found += 1;
        }

        notes.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });

        tracing::debug!(
            "scanned {}: {} entries, {} notes",
            self.root.display(),
            self.stats.entries_seen,
            self.stats.notes_found
        );

        Ok(notes)
    }

    /// Counters from the most recent scan.
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }
}

fn creation_time(entry: &fs::DirEntry) -> DateTime<Local> {
    let time = entry
        .metadata()
        .and_then(|meta| meta.created().or_else(|_| meta.modified()))
        .unwrap_or(SystemTime::UNIX_EPOCH);
    DateTime::<Local>::from(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scanner_finds_notes_and_strips_extension() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::write(root.join("Alpha.md"), "a").expect("write");
        fs::write(root.join("My Note.md"), "b").expect("write");
        fs::write(root.join("notes.txt"), "c").expect("write");

        let mut scanner = NoteScanner::new(root.to_path_buf());
        let notes = scanner.scan().expect("scan");

        let names: Vec<&str> = notes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "My Note"]);
        assert_eq!(scanner.stats().notes_found, 2);
        assert_eq!(scanner.stats().skipped_extension, 1);
    }

    #[test]
    fn test_scanner_is_not_recursive() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::write(root.join("top.md"), "top").expect("write");
        fs::create_dir(root.join("nested")).expect("mkdir");
        fs::write(root.join("nested/inner.md"), "inner").expect("write");

        let mut scanner = NoteScanner::new(root.to_path_buf());
        let notes = scanner.scan().expect("scan");

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].name, "top");
        assert_eq!(scanner.stats().skipped_subdirs, 1);
    }

    #[test]
    fn test_scanner_sorts_case_insensitively() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::write(root.join("beta.md"), "").expect("write");
        fs::write(root.join("Alpha.md"), "").expect("write");
        fs::write(root.join("gamma.md"), "").expect("write");

        let mut scanner = NoteScanner::new(root.to_path_buf());
        let notes = scanner.scan().expect("scan");

        let names: Vec<&str> = notes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_scanner_honors_custom_extension() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::write(root.join("one.txt"), "").expect("write");
        fs::write(root.join("two.md"), "").expect("write");

        let mut scanner = NoteScanner::new(root.to_path_buf()).extension(".txt");
        let notes = scanner.scan().expect("scan");

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].name, "one");
    }

    #[test]
    fn test_scanner_reports_missing_directory() {
        let tmp = TempDir::new().expect("tmp dir");
        let mut scanner = NoteScanner::new(tmp.path().join("absent"));
        let err = scanner.scan().expect_err("missing directory");
        assert!(matches!(err, VaultError::DirectoryRead { .. }));
    }

    #[test]
    fn test_identifier_keeps_inner_dots() {
        let tmp = TempDir::new().expect("tmp dir");
        let root = tmp.path();
        fs::write(root.join("v1.2 plan.md"), "").expect("write");

        let mut scanner = NoteScanner::new(root.to_path_buf());
        let notes = scanner.scan().expect("scan");

        assert_eq!(notes[0].name, "v1.2 plan");
    }
}
