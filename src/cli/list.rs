//! List command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{config_anchor, resolve_vault};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::SortOrder;
use crate::scan::{sort_notes, NoteScanner};

#[derive(Args)]
pub struct ListArgs {
    /// Directory containing the notes
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Note file extension (e.g., '.md' or 'txt')
    #[arg(short = 'e', long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Path to config file (note-tree.toml or .note-tree.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only list notes whose name contains this substring (case-insensitive)
    #[arg(short = 'f', long, value_name = "SUBSTR")]
    pub filter: Option<String>,

    /// Sort order: name|created-asc|created-desc
    #[arg(short = 's', long, value_name = "ORDER")]
    pub sort: Option<String>,

    /// Output format: 'text' (one name per line) or 'json'
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Debug)]
enum ListFormat {
    Text,
    Json,
}

pub fn run(args: ListArgs) -> Result<()> {
    let anchor = config_anchor(args.path.as_ref());
    let file_config = load_config(&anchor, args.config.as_deref())?;

    let sort = if args.sort.is_some() { Some(parse_sort_order(args.sort.as_deref())?) } else { None };
    let format = parse_list_format(args.format.as_deref())?;

    let cli_overrides = CliOverrides {
        path: args.path.clone(),
        note_extension: args.extension.clone(),
        sort,
    };
    let merged = merge_cli_with_config(file_config, cli_overrides);

    let vault = resolve_vault(&merged)?;

    let mut scanner = NoteScanner::new(vault).extension(merged.note_extension.clone());
    let mut notes = scanner.scan()?;

    if let Some(filter) = args.filter.as_deref() {
        let needle = filter.to_lowercase();
        notes.retain(|note| note.name.to_lowercase().contains(&needle));
    }

    sort_notes(&mut notes, merged.sort);

    match format {
        ListFormat::Text => {
            for note in &notes {
                println!("{}", note.name);
            }
        }
        ListFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&notes)?);
        }
    }

    Ok(())
}

fn parse_sort_order(value: Option<&str>) -> Result<SortOrder> {
    match value.unwrap_or("name").to_lowercase().as_str() {
        "name" => Ok(SortOrder::Name),
        "created-asc" | "created_asc" | "oldest" => Ok(SortOrder::CreatedAsc),
        "created-desc" | "created_desc" | "newest" => Ok(SortOrder::CreatedDesc),
        invalid => {
            anyhow::bail!("Invalid sort order '{invalid}'. Use: name|created-asc|created-desc")
        }
    }
}

fn parse_list_format(value: Option<&str>) -> Result<ListFormat> {
    match value.unwrap_or("text").to_lowercase().as_str() {
        "text" => Ok(ListFormat::Text),
        "json" => Ok(ListFormat::Json),
        invalid => anyhow::bail!("Invalid format '{invalid}'. Use: text|json"),
    }
}
