//! Link graph construction from a vault directory.

use crate::domain::{GraphStats, DEFAULT_NOTE_EXTENSION};
use crate::error::{Result, VaultError};
use crate::graph::links::extract_links;
use crate::graph::LinkGraph;
use crate::scan::NoteScanner;
use crate::utils::read_note_text;
use std::path::PathBuf;

/// Builds a [`LinkGraph`] from the notes of a vault directory.
///
/// The graph is rebuilt from current disk state on every call; nothing is
/// cached between builds.
pub struct GraphBuilder {
    root: PathBuf,
    extension: String,
    stats: GraphStats,
}

impl GraphBuilder {
    /// Create a builder for `root` with the default `.md` extension.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: DEFAULT_NOTE_EXTENSION.to_string(),
            stats: GraphStats::default(),
        }
    }

    /// Set the note file extension (leading dot included).
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Scan the vault and assemble the adjacency mapping.
    ///
    /// An unreadable note is logged, counted, and treated as link-free;
    /// only a failure to list the directory itself aborts the build.
    pub fn build(&mut self) -> Result<LinkGraph> {
        self.stats = GraphStats::default();

        let mut scanner = NoteScanner::new(self.root.clone()).extension(self.extension.clone());
        let notes = scanner.scan()?;

        let mut graph = LinkGraph::new();
        for note in notes {
            self.stats.notes_scanned += 1;
            let content = match read_note_text(&note.path) {
                Ok(content) => content,
                Err(err) => {
                    let err = VaultError::note(&note.path, err);
                    tracing::warn!("{err}; treating note as link-free");
                    self.stats.read_failures += 1;
                    continue;
                }
            };
            let links = extract_links(&content);
            self.stats.links_total += links.len();
            graph.insert(note.name, links);
        }
        self.stats.notes_with_links = graph.len();

        tracing::debug!(
            "built graph for {}: {} notes, {} with links, {} edges",
            self.root.display(),
            self.stats.notes_scanned,
            self.stats.notes_with_links,
            self.stats.links_total
        );

        Ok(graph)
    }

    /// Counters from the most recent build.
    pub fn stats(&self) -> &GraphStats {
        &self.stats
    }
}
