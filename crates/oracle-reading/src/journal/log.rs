//! Journal storage and export.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entry::JournalEntry;
use crate::error::{ReadingError, ReadingResult};

/// An append-only log of journal entries, oldest first.
///
/// The whole log travels as one JSON blob; where that blob is kept is up to
/// the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its id.
    pub fn append(&mut self, entry: JournalEntry) -> Uuid {
        let id = entry.id();
        self.entries.push(entry);
        id
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id.
    pub fn get(&self, id: Uuid) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Attach an interpretation to an entry.
    pub fn attach_insight(&mut self, id: Uuid, text: &str) -> ReadingResult<bool> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(ReadingError::EntryNotFound(id))?;
        Ok(entry.attach_insight(text))
    }

    /// Serialize the whole journal.
    pub fn to_json(&self) -> ReadingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a journal from its JSON blob. An empty blob is an empty journal.
    pub fn from_json(blob: &str) -> ReadingResult<Self> {
        if blob.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_json::from_str(blob)?)
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Inner Oracle Journal\n\n");
        for entry in &self.entries {
            out.push_str(&entry.to_markdown());
        }
        out
    }
}
