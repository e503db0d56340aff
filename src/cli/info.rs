//! Info command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{config_anchor, resolve_vault};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::graph::GraphBuilder;

#[derive(Args)]
pub struct InfoArgs {
    /// Directory containing the notes
    #[arg(value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Note file extension (e.g., '.md' or 'txt')
    #[arg(short = 'e', long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Path to config file (note-tree.toml or .note-tree.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let anchor = config_anchor(args.path.as_ref());
    let file_config = load_config(&anchor, args.config.as_deref())?;

    let cli_overrides = CliOverrides {
        path: args.path.clone(),
        note_extension: args.extension.clone(),
        sort: None,
    };
    let merged = merge_cli_with_config(file_config, cli_overrides);

    let vault = resolve_vault(&merged)?;

    let mut builder = GraphBuilder::new(vault.clone()).extension(merged.note_extension.clone());
    let graph = builder.build()?;
    let stats = builder.stats();

    println!("Vault: {}", vault.display());
    println!();
    println!("Statistics:");
    println!("  Notes:                     {}", stats.notes_scanned);
    println!("  Notes with outgoing links: {}", stats.notes_with_links);
    println!("  Link edges:                {}", stats.links_total);
    if stats.read_failures > 0 {
        println!("  Unreadable notes:          {}", stats.read_failures);
    }

    let mut referenced: Vec<(&str, usize)> = graph.incoming_counts().into_iter().collect();
    referenced.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    if !referenced.is_empty() {
        println!();
        println!("Most referenced notes:");
        for (name, count) in referenced.iter().take(10) {
            println!("  [[{name}]] ({count})");
        }
    }

    Ok(())
}
