//! Small shared utilities.

pub mod encoding;

pub use encoding::read_note_text;
