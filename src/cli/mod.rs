//! Command-line interface for note-tree
//!
//! Provides `tree`, `list`, `related`, `export` and `info` subcommands.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod export;
mod info;
mod list;
mod related;
mod tree;
mod utils;

/// Render numbered outlines and zip bundles from a folder of wikilinked notes
#[derive(Parser)]
#[command(name = "note-tree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a numbered outline rooted at a note
    Tree(tree::TreeArgs),

    /// List the notes in a vault
    List(list::ListArgs),

    /// List every note reachable from a note, including itself
    Related(related::RelatedArgs),

    /// Bundle a note and everything it links to into a zip archive
    Export(export::ExportArgs),

    /// Display vault statistics without rendering an outline
    Info(info::InfoArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Tree(args) => tree::run(args),
        Commands::List(args) => list::run(args),
        Commands::Related(args) => related::run(args),
        Commands::Export(args) => export::run(args),
        Commands::Info(args) => info::run(args),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
