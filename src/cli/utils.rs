//! Shared helpers for CLI subcommands.

use crate::domain::Config;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Resolve the note directory from merged configuration.
///
/// Canonicalizes the path and verifies it is an existing directory so
/// subcommands get a clean error before any scanning starts.
pub fn resolve_vault(merged: &Config) -> Result<PathBuf> {
    let Some(path) = merged.path.as_ref() else {
        bail!("No note directory specified: pass --path or set `path` in note-tree.toml");
    };

    let vault = path
        .canonicalize()
        .with_context(|| format!("Note directory not found: {}", path.display()))?;

    if !vault.is_dir() {
        bail!("Path is not a directory: {}", vault.display());
    }

    Ok(vault)
}

/// Pick the directory config discovery is anchored at.
///
/// When --path points at an existing directory, discovery looks there,
/// so a vault can carry its own note-tree.toml. Otherwise the current
/// working directory is searched.
pub fn config_anchor(path: Option<&PathBuf>) -> PathBuf {
    if let Some(p) = path {
        if p.exists() {
            if let Ok(canonical) = p.canonicalize() {
                return canonical;
            }
        }
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
