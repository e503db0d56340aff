//! Zip export of a reachable note set.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Outcome of an archive run.
#[derive(Debug, Clone, Default)]
pub struct ArchiveSummary {
    /// Notes copied into the archive.
    pub archived: usize,
    /// Identifiers with no corresponding file in the vault.
    pub missing: usize,
    /// Bytes staged before compression.
    pub bytes_staged: u64,
}

/// Bundle the given notes into a deflate-compressed zip at `dest`.
///
/// Files are first copied into a temporary staging directory that is
/// removed when this function returns, whether archiving succeeded or not.
/// Identifiers without a matching file are silently skipped; identifiers
/// containing a path separator cannot name a direct child of the vault and
/// are treated the same way. Entries are written in identifier order.
pub fn write_note_archive(
    vault: &Path,
    notes: &BTreeSet<String>,
    extension: &str,
    dest: &Path,
) -> Result<ArchiveSummary> {
    let staging = tempfile::tempdir().context("Failed to create staging directory")?;
    let mut summary = ArchiveSummary::default();
    let mut staged: Vec<(String, PathBuf)> = Vec::new();

    for note in notes {
        if note.contains('/') || note.contains(std::path::MAIN_SEPARATOR) {
            tracing::debug!("ignoring non-local identifier {note:?}");
            summary.missing += 1;
            continue;
        }
        let file_name = format!("{note}{extension}");
        let source = vault.join(&file_name);
        if !source.is_file() {
            tracing::debug!("no file for reachable note {note:?}");
            summary.missing += 1;
            continue;
        }
        let target = staging.path().join(&file_name);
        summary.bytes_staged += fs::copy(&source, &target)
            .with_context(|| format!("Failed to stage note file {}", source.display()))?;
        staged.push((file_name, target));
    }

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }
    }

    let file = File::create(dest)
        .with_context(|| format!("Failed to create archive {}", dest.display()))?;
    let mut archive = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, path) in &staged {
        archive
            .start_file(name.as_str(), options)
            .with_context(|| format!("Failed to add archive entry {name}"))?;
        let mut source = File::open(path)
            .with_context(|| format!("Failed to reopen staged file {}", path.display()))?;
        io::copy(&mut source, &mut archive)
            .with_context(|| format!("Failed to write archive entry {name}"))?;
    }

    archive.finish().context("Failed to finalize archive")?;
    summary.archived = staged.len();

    Ok(summary)
}
