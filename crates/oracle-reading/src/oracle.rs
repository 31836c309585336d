//! A reading session: one configuration, one RNG, many readings.

use chrono::NaiveDate;
use oracle_core::JournalPrompt;
use oracle_core::prompts::prompts_for;
use oracle_mechanics::pick_one;
use oracle_mechanics::seeded::parse_date;
use rand::rngs::StdRng;

use crate::config::ReadingConfig;
use crate::daily::DailyOracle;
use crate::error::{ReadingError, ReadingResult};
use crate::iching::{IChingReading, cast_iching};
use crate::ouija::{SpiritReading, consult};
use crate::spread::{SpreadReading, cast_runes, read_tarot};

/// Draws readings from a single RNG so a seeded session is reproducible
/// end to end.
#[derive(Debug)]
pub struct Oracle {
    config: ReadingConfig,
    rng: StdRng,
}

impl Oracle {
    /// Start a session.
    pub fn new(config: ReadingConfig) -> Self {
        let rng = config.rng();
        Self { config, rng }
    }

    /// The session's configuration.
    pub fn config(&self) -> &ReadingConfig {
        &self.config
    }

    /// Draw a tarot spread.
    pub fn tarot(&mut self, spread: &str, question: Option<&str>) -> ReadingResult<SpreadReading> {
        read_tarot(spread, question, self.config.tarot_reversal, &mut self.rng)
    }

    /// Cast a rune spread.
    pub fn runes(&mut self, spread: &str, question: Option<&str>) -> ReadingResult<SpreadReading> {
        cast_runes(spread, question, self.config.rune_reversal, &mut self.rng)
    }

    /// Cast a hexagram.
    pub fn iching(&mut self, question: Option<&str>) -> IChingReading {
        cast_iching(question, &mut self.rng)
    }

    /// Ask the spirit board.
    pub fn ouija(&mut self, question: &str) -> ReadingResult<SpiritReading> {
        consult(question, &mut self.rng)
    }

    /// A random shadow-work prompt, optionally limited to one theme.
    pub fn prompt(&mut self, theme: Option<&str>) -> ReadingResult<&'static JournalPrompt> {
        let pool = prompts_for(theme);
        pick_one(&pool, &mut self.rng)
            .copied()
            .ok_or_else(|| ReadingError::UnknownTheme(theme.unwrap_or_default().to_string()))
    }

    /// The daily oracle for a `YYYY-MM-DD` date.
    pub fn daily(&self, date: &str) -> ReadingResult<DailyOracle> {
        Ok(self.daily_on(parse_date(date)?))
    }

    /// The daily oracle for an already parsed date.
    pub fn daily_on(&self, date: NaiveDate) -> DailyOracle {
        DailyOracle::for_date(date, self.config.tarot_reversal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Oracle {
        Oracle::new(ReadingConfig::default().with_seed(42))
    }

    #[test]
    fn seeded_sessions_repeat() {
        let mut a = seeded();
        let mut b = seeded();
        assert_eq!(a.tarot("three", None).unwrap(), b.tarot("three", None).unwrap());
        assert_eq!(a.runes("five", None).unwrap(), b.runes("five", None).unwrap());
        assert_eq!(a.iching(None), b.iching(None));
        assert_eq!(a.ouija("Now?").unwrap(), b.ouija("Now?").unwrap());
    }

    #[test]
    fn reversal_odds_come_from_config() {
        let mut oracle = Oracle::new(
            ReadingConfig::default()
                .with_seed(1)
                .with_tarot_reversal(1.0)
                .with_rune_reversal(0.0),
        );
        assert_eq!(oracle.tarot("five", None).unwrap().reversed_count(), 5);
        assert_eq!(oracle.runes("five", None).unwrap().reversed_count(), 0);
    }

    #[test]
    fn prompt_by_theme() {
        let mut oracle = seeded();
        let prompt = oracle.prompt(Some("healing")).unwrap();
        assert_eq!(prompt.theme, "Healing");
        assert!(oracle.prompt(None).is_ok());
    }

    #[test]
    fn unknown_theme() {
        let mut oracle = seeded();
        assert!(matches!(
            oracle.prompt(Some("Nonsense")),
            Err(ReadingError::UnknownTheme(t)) if t == "Nonsense"
        ));
    }

    #[test]
    fn daily_ignores_session_rng() {
        let oracle = seeded();
        let other = Oracle::new(ReadingConfig::default().with_seed(7));
        assert_eq!(oracle.daily("2024-01-01").unwrap(), other.daily("2024-01-01").unwrap());
        assert!(oracle.daily("01/01/2024").is_err());
    }
}
