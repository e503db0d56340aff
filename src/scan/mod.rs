//! Vault directory scanning.

pub mod scanner;

pub use scanner::NoteScanner;

use crate::domain::{NoteInfo, SortOrder};

/// Sort a note listing in place.
///
/// Date orders tie-break case-insensitively by identifier so notes written
/// in the same instant keep a stable position.
pub fn sort_notes(notes: &mut [NoteInfo], order: SortOrder) {
    match order {
        SortOrder::Name => notes.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
        SortOrder::CreatedAsc => {
            notes.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| name_key(a).cmp(&name_key(b))))
        }
        SortOrder::CreatedDesc => {
            notes.sort_by(|a, b| b.created.cmp(&a.created).then_with(|| name_key(a).cmp(&name_key(b))))
        }
    }
}

fn name_key(note: &NoteInfo) -> (String, &str) {
    (note.name.to_lowercase(), note.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::path::PathBuf;

    fn note(name: &str, created_secs: i64) -> NoteInfo {
        NoteInfo {
            name: name.to_string(),
            path: PathBuf::from(format!("/vault/{name}.md")),
            created: Local.timestamp_opt(created_secs, 0).unwrap(),
        }
    }

    fn names(notes: &[NoteInfo]) -> Vec<&str> {
        notes.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut notes = vec![note("beta", 3), note("Alpha", 2), note("gamma", 1)];
        sort_notes(&mut notes, SortOrder::Name);
        assert_eq!(names(&notes), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_sort_created_asc_oldest_first() {
        let mut notes = vec![note("new", 300), note("old", 100), note("mid", 200)];
        sort_notes(&mut notes, SortOrder::CreatedAsc);
        assert_eq!(names(&notes), vec!["old", "mid", "new"]);
    }

    #[test]
    fn test_sort_created_desc_newest_first() {
        let mut notes = vec![note("old", 100), note("new", 300), note("mid", 200)];
        sort_notes(&mut notes, SortOrder::CreatedDesc);
        assert_eq!(names(&notes), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_equal_timestamps_fall_back_to_name_order() {
        let mut notes = vec![note("zeta", 100), note("Alpha", 100), note("mu", 100)];
        sort_notes(&mut notes, SortOrder::CreatedDesc);
        assert_eq!(names(&notes), vec!["Alpha", "mu", "zeta"]);
    }
}
