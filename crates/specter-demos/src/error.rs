//! Error types for the demos.

use std::io;
use std::path::PathBuf;

/// Errors raised by [`Journal`](crate::Journal) and
/// [`Persistence`](crate::Persistence).
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// Removal index past the last entry.
    #[error("no journal entry at index {index} (journal has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Writing the journal failed.
    #[error("failed to write journal to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;
