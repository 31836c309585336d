//! Error types for reading composition.

use thiserror::Error;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can occur while composing a reading or handling the journal.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// No spread with this name exists for the domain.
    #[error("unknown spread: {0}")]
    UnknownSpread(String),

    /// No journal prompt carries this theme.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Unrecognised dream mood.
    #[error("unknown mood: {0}")]
    UnknownMood(String),

    /// A question was required but left blank.
    #[error("a question is required")]
    EmptyQuestion,

    /// A journal entry needs text to be recorded.
    #[error("journal entry is empty")]
    EmptyEntry,

    /// No journal entry has this id.
    #[error("no journal entry with id {0}")]
    EntryNotFound(uuid::Uuid),

    /// The journal blob could not be read or written.
    #[error("journal data: {0}")]
    Journal(#[from] serde_json::Error),

    /// Draw engine error.
    #[error("{0}")]
    Mechanics(#[from] oracle_mechanics::MechError),
}
