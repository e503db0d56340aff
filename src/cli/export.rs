//! Export command implementation

use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

use super::utils::{config_anchor, resolve_vault};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::export::write_note_archive;
use crate::graph::{collect_reachable, GraphBuilder};

#[derive(Args)]
pub struct ExportArgs {
    /// Note whose reachable set should be archived
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

    /// Archive file to write (default: <NOTE>_<timestamp>.zip)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<()> {
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

    let reachable = collect_reachable(&graph, &args.note);
    let dest = args.output.unwrap_or_else(|| default_archive_path(&args.note));
    let summary = write_note_archive(&vault, &reachable, &merged.note_extension, &dest)?;

    println!();
    println!("Export complete!");
    println!();
    println!("Statistics:");
    println!("  Vault:           {}", vault.display());
    println!("  Root note:       {}", args.note);
    println!("  Notes reachable: {}", reachable.len());
    println!("  Notes archived:  {}", summary.archived);
    if summary.missing > 0 {
        println!("  Notes missing:   {}", summary.missing);
    }
    println!("  Bytes staged:    {}", summary.bytes_staged);
    println!();
    println!("Archive: {}", dest.display());

    Ok(())
}

fn default_archive_path(note: &str) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("{note}_{stamp}.zip"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_archive_path_embeds_note_name() {
        let path = default_archive_path("Project Atlas");
        let name = path.file_name().and_then(|n| n.to_str()).expect("file name");
        assert!(name.starts_with("Project Atlas_"));
        assert!(name.ends_with(".zip"));
    }
}
