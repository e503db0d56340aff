//! Numbered outline rendering.

use crate::graph::LinkGraph;
use std::collections::HashSet;

/// Render the outline rooted at `root` as an indented, numbered list.
///
/// Pre-order walk in stored link order. A single visited set spans the
/// whole walk, so a note appears at most once in the outline no matter how
/// many parents link to it, and cycles terminate.
///
/// Numbering is per depth, not per parent: the counter for depth `d`
/// advances on every line emitted at depth `d`, and emitting at depth `d`
/// discards all deeper counters, so each new deeper branch restarts at 1.
///
/// A root with no graph entry (or no note file at all) renders as a single
/// line; children of absent targets are simply the empty list.
pub fn render_outline<'a>(graph: &'a LinkGraph, root: &'a str, indent: &str) -> String {
    let mut out = String::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut counters: Vec<usize> = Vec::new();
    // Children go on the stack in reverse so the leftmost link pops first.
    let mut stack: Vec<(&str, usize)> = vec![(root, 0)];

    while let Some((note, depth)) = stack.pop() {
        if !visited.insert(note) {
            continue;
        }

        if counters.len() <= depth {
            counters.resize(depth + 1, 0);
        }
        counters[depth] += 1;
        counters.truncate(depth + 1);

        out.push_str(&indent.repeat(depth));
        out.push_str(&format!("{}. [[{}]]\n", counters[depth], note));

        for target in graph.children(note).iter().rev() {
            stack.push((target, depth + 1));
        }
    }

    out
}
