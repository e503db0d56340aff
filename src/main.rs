//! note-tree command-line entry point.

use anyhow::Result;

fn main() -> Result<()> {
    note_tree::cli::run()
}
