//! A journal and its persistence, kept as two types.
//!
//! [`Journal`] only manages entries. Writing to disk lives in
//! [`Persistence`], so storage can change without touching the journal.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{JournalError, Result};

/// Numbered text entries.
///
/// ```
/// use specter_demos::Journal;
///
/// let mut journal = Journal::new();
/// assert_eq!(journal.add_entry("I cried"), 1);
/// assert_eq!(journal.add_entry("I know"), 2);
/// assert_eq!(journal.to_string(), "1: I cried\n2: I know");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` prefixed with the next entry number and returns that
    /// number.
    ///
    /// Numbers keep increasing after removals.
    pub fn add_entry(&mut self, text: impl AsRef<str>) -> usize {
        self.count += 1;
        self.entries.push(format!("{}: {}", self.count, text.as_ref()));
        self.count
    }

    /// Removes the entry at zero-based `index`.
    pub fn remove_entry(&mut self, index: usize) -> Result<String> {
        if index >= self.entries.len() {
            return Err(JournalError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
    }
}

/// Writes journals to files.
#[derive(Debug, Clone, Copy, Default)]
pub struct Persistence;

impl Persistence {
    pub fn new() -> Self {
        Persistence
    }

    /// Writes `journal` to `path` if `overwrite` is set or the file does not
    /// exist yet. Returns whether the file was written.
    ///
    /// Parent directories are not created.
    pub fn save_to_file(
        &self,
        journal: &Journal,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> Result<bool> {
        let path = path.as_ref();
        if !overwrite && path.exists() {
            debug!(path = %path.display(), "journal file exists, not overwriting");
            return Ok(false);
        }

        fs::write(path, journal.to_string()).map_err(|source| JournalError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), entries = journal.len(), "saved journal");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Journal {
        let mut journal = Journal::new();
        journal.add_entry("I cried");
        journal.add_entry("I know");
        journal
    }

    #[test]
    fn numbering_survives_removal() {
        let mut journal = sample();
        let removed = journal.remove_entry(0).unwrap();

        assert_eq!(removed, "1: I cried");
        assert_eq!(journal.add_entry("Again"), 3);
        assert_eq!(journal.to_string(), "2: I know\n3: Again");
    }

    #[test]
    fn remove_out_of_range() {
        let mut journal = sample();
        let err = journal.remove_entry(2).unwrap_err();

        assert!(matches!(
            err,
            JournalError::IndexOutOfRange { index: 2, len: 2 }
        ));
        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn empty_journal_displays_nothing() {
        let journal = Journal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.to_string(), "");
    }

    #[test]
    fn save_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("j1.txt");

        let written = Persistence::new()
            .save_to_file(&sample(), &path, false)
            .unwrap();

        assert!(written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "1: I cried\n2: I know");
    }

    #[test]
    fn save_respects_overwrite_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("j1.txt");
        fs::write(&path, "old").unwrap();

        let written = Persistence.save_to_file(&sample(), &path, false).unwrap();
        assert!(!written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");

        let written = Persistence.save_to_file(&sample(), &path, true).unwrap();
        assert!(written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "1: I cried\n2: I know");
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("j1.txt");

        let err = Persistence.save_to_file(&sample(), &path, true).unwrap_err();
        assert!(matches!(err, JournalError::Io { .. }));
    }
}
