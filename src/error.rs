//! Error types for vault scanning and graph building.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Convenience alias for fallible vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;

/// Errors raised while reading a note vault.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The vault directory itself cannot be listed. Fatal for the whole
    /// operation; no partial graph is produced.
    #[error("failed to list note directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single note file could not be read. Callers recover by treating
    /// the note as link-free and continuing with the remaining files.
    #[error("failed to read note '{path}': {source}")]
    NoteRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VaultError {
    pub fn directory(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::DirectoryRead { path: path.as_ref().to_path_buf(), source }
    }

    pub fn note(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::NoteRead { path: path.as_ref().to_path_buf(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_error_names_the_path() {
        let err = VaultError::directory(
            "/missing/vault",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let message = err.to_string();
        assert!(message.contains("/missing/vault"), "message was: {message}");
    }

    #[test]
    fn test_note_error_keeps_io_source() {
        use std::error::Error;

        let err = VaultError::note(
            "/vault/a.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
    }
}
