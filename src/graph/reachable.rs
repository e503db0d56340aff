//! Transitive reachability over the link graph.

use crate::graph::LinkGraph;
use std::collections::BTreeSet;

/// Collect every identifier reachable from `root`, the root included.
///
/// Same walk as the outline renderer, minus numbering and text: an explicit
/// work stack plus a shared visited set make the traversal cycle-safe and
/// immune to call-stack overflow on long link chains. The returned set
/// iterates in lexicographic order, so downstream consumers are
/// deterministic.
pub fn collect_reachable<'a>(graph: &'a LinkGraph, root: &'a str) -> BTreeSet<String> {
    let mut reachable = BTreeSet::new();
    let mut stack = vec![root];

    while let Some(note) = stack.pop() {
        if reachable.contains(note) {
            continue;
        }
        reachable.insert(note.to_string());
        for target in graph.children(note).iter().rev() {
            stack.push(target);
        }
    }

    reachable
}
