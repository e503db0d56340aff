//! Archive export for reachable note sets.

pub mod archive;

pub use archive::{write_note_archive, ArchiveSummary};
