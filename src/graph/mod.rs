//! The note link graph: ordered, deduplicated wikilink adjacency.

pub mod builder;
pub mod links;
pub mod reachable;

pub use builder::GraphBuilder;
pub use links::extract_links;
pub use reachable::collect_reachable;

use std::collections::BTreeMap;

/// Directed link graph over note identifiers.
///
/// Only notes with at least one outgoing link own an entry; looking up any
/// other identifier yields an empty child list. Target lists preserve
/// first-appearance order, and key iteration is lexicographic, so equal
/// vault contents always build equal graphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    edges: BTreeMap<String, Vec<String>>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a note's ordered outgoing links. Empty lists are not stored.
    pub fn insert(&mut self, source: impl Into<String>, targets: Vec<String>) {
        if !targets.is_empty() {
            self.edges.insert(source.into(), targets);
        }
    }

    /// Ordered outgoing links of `id`; empty for unknown identifiers.
    pub fn children(&self, id: &str) -> &[String] {
        self.edges.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `id` has at least one outgoing link.
    pub fn contains(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    /// Number of notes with outgoing links.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate sources and their ordered targets in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges.iter().map(|(source, targets)| (source.as_str(), targets.as_slice()))
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// How often each identifier appears as a link target.
    pub fn incoming_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for targets in self.edges.values() {
            for target in targets {
                *counts.entry(target.as_str()).or_insert(0) += 1;
            }
        }
        counts
    }
}
