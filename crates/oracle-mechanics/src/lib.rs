//! Draw engines and numeric oracles for Inner Oracle.
//!
//! Provides numerology digit reduction, the date-seeded linear-congruential
//! draw used for repeatable "daily" picks, shuffled draws with reversal
//! flags for interactive spreads, three-coin I Ching casting with the
//! line-to-hexagram mapper, and an approximate moon phase.

pub mod draw;
pub mod error;
pub mod iching;
pub mod moon;
pub mod numerology;
pub mod seeded;

pub use draw::{Drawn, RUNE_REVERSAL_ODDS, TAROT_REVERSAL_ODDS, draw, flip, pick_one};
pub use error::{MechError, MechResult};
pub use iching::{Coin, HexagramCast, Line, LineType, cast_lines};
pub use moon::MoonPhase;
pub use numerology::NumerologyNumber;
pub use seeded::{Seed, seeded_pick};
