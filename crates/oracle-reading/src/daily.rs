//! The daily oracle: one card, one prompt and the moon, fixed per date.

use chrono::NaiveDate;
use oracle_core::catalog::MAJOR_ARCANA;
use oracle_core::{JournalPrompt, SHADOW_PROMPTS, SymbolicEntity};
use oracle_mechanics::{MoonPhase, Seed};
use serde::Serialize;
use tracing::debug;

const CARD_SLOT: u64 = 0;
const REVERSAL_SLOT: u64 = 1;
const PROMPT_SLOT: u64 = 2;

/// Everything shown for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyOracle {
    /// The day this oracle is for.
    pub date: NaiveDate,
    /// Seed derived from the date.
    pub seed: Seed,
    /// Card of the day.
    pub card: &'static SymbolicEntity,
    /// Whether the card is reversed.
    pub reversed: bool,
    /// Reflection prompt of the day.
    pub prompt: &'static JournalPrompt,
    /// Moon phase on that date.
    pub moon: MoonPhase,
}

impl DailyOracle {
    /// Compose the oracle for `date`. Every caller asking about the same
    /// date gets the same result.
    pub fn for_date(date: NaiveDate, reversal_odds: f64) -> Self {
        let seed = Seed::from_naive_date(date);
        let oracle = Self {
            date,
            seed,
            card: &MAJOR_ARCANA[seed.pick(CARD_SLOT, MAJOR_ARCANA.len())],
            reversed: seed.chance(REVERSAL_SLOT, reversal_odds),
            prompt: &SHADOW_PROMPTS[seed.pick(PROMPT_SLOT, SHADOW_PROMPTS.len())],
            moon: MoonPhase::for_date(date),
        };
        debug!(%date, card = oracle.card.name, "daily oracle drawn");
        oracle
    }

    /// Meaning of the card in its orientation.
    pub fn card_meaning(&self) -> &'static str {
        self.card.meaning(self.reversed)
    }
}
