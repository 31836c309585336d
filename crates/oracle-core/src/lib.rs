//! Core catalogs for the Inner Oracle divination tools.
//!
//! Provides the symbolic entities every reading draws from: the Major Arcana,
//! the Elder Futhark, the 64 hexagrams, the zodiac, numerology meanings,
//! spread layouts, journal prompts and spirit-board whispers. All data is
//! immutable and `'static`.

pub mod catalog;
pub mod entity;
pub mod prompts;
pub mod spread;
pub mod whispers;

pub use catalog::{catalog, find, number_meaning};
pub use entity::{Domain, EntityDetail, SymbolicEntity};
pub use prompts::{JournalPrompt, SHADOW_PROMPTS};
pub use spread::{RUNE_SPREADS, Spread, TAROT_SPREADS};
pub use whispers::SpiritAnswer;
