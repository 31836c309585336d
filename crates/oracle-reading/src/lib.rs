//! Readings for Inner Oracle.
//!
//! Composes the catalogs and draw engines into complete readings: tarot
//! spreads, rune casts, I Ching casts, birth charts, numerology profiles,
//! the daily oracle and the spirit board. Also holds the journal data model
//! and the hand-off types used to request a prose interpretation.

pub mod chart;
pub mod config;
pub mod daily;
pub mod error;
pub mod iching;
pub mod interpret;
pub mod journal;
pub mod oracle;
pub mod ouija;
pub mod profile;
pub mod spread;

pub use chart::BirthChart;
pub use config::ReadingConfig;
pub use daily::DailyOracle;
pub use error::{ReadingError, ReadingResult};
pub use iching::IChingReading;
pub use interpret::{CannedInterpreter, InterpretationRequest, Interpreter, interpret_or_fallback};
pub use journal::{Journal, JournalEntry};
pub use oracle::Oracle;
pub use ouija::SpiritReading;
pub use profile::NumerologyProfile;
pub use spread::SpreadReading;
