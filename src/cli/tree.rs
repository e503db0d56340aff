//! Tree command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use super::utils::{config_anchor, resolve_vault};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::graph::GraphBuilder;
use crate::render::render_outline;

#[derive(Args)]
pub struct TreeArgs {
    /// Note to use as the outline root (file name without extension)
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

    /// Write the outline to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: TreeArgs) -> Result<()> {
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

    let outline = render_outline(&graph, &args.note, &merged.indent);
    let document = format!("{}\n\n{}", merged.heading, outline);

    match args.output {
        Some(path) => {
            fs::write(&path, document)
                .with_context(|| format!("Failed writing outline to {}", path.display()))?;
            println!("Outline written to {}", path.display());
        }
        None => print!("{document}"),
    }

    Ok(())
}
