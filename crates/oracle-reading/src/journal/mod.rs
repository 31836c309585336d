//! Journaling: shadow-work entries, dreams, daily reflections and recorded
//! readings.

pub mod entry;
pub mod log;

pub use entry::{DreamMood, JournalEntry};
pub use log::Journal;
