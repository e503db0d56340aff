//! Related command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{config_anchor, resolve_vault};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::graph::{collect_reachable, GraphBuilder};

#[derive(Args)]
pub struct RelatedArgs {
    /// Note whose reachable set should be listed
    #[arg(value_name = "NOTE")]
    pub note: String,

    /// Directory containing the notes
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Note file extension (e.g., '.md' or 'txt')
    #[arg(short = 'e', long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Path to config file (note-tree.toml or .note-tree.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: RelatedArgs) -> Result<()> {
    let anchor = config_anchor(args.path.as_ref());
    let file_config = load_config(&anchor, args.config.as_deref())?;

    let cli_overrides = CliOverrides {
        path: args.path.clone(),
        note_extension: args.extension.clone(),
        sort: None,
    };
    let merged = merge_cli_with_config(file_config, cli_overrides);

    let vault = resolve_vault(&merged)?;

    let mut builder = GraphBuilder::new(vault).extension(merged.note_extension.clone());
    let graph = builder.build()?;

    for note in collect_reachable(&graph, &args.note) {
        println!("{note}");
    }

    Ok(())
}
