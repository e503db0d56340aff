//! note-tree: Render numbered outlines and zip bundles from a folder of wikilinked notes
//!
//! Notes are plain text files that reference each other with `[[wikilinks]]`.
//! This crate scans a flat directory of such files, builds the link graph and
//! renders numbered outline documents, reachability listings and zip bundles
//! from it.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod graph;
pub mod render;
pub mod scan;
pub mod utils;
