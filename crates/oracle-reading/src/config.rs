//! Configuration for interactive readings.

use oracle_mechanics::{RUNE_REVERSAL_ODDS, TAROT_REVERSAL_ODDS};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for an [`Oracle`](crate::Oracle).
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Probability that a tarot card is drawn reversed.
    pub tarot_reversal: f64,
    /// Probability that a rune is cast reversed.
    pub rune_reversal: f64,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tarot_reversal: TAROT_REVERSAL_ODDS,
            rune_reversal: RUNE_REVERSAL_ODDS,
        }
    }
}

impl ReadingConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the tarot reversal probability (clamped to 0-1, NaN ignored).
    pub fn with_tarot_reversal(mut self, p: f64) -> Self {
        if !p.is_nan() {
            self.tarot_reversal = p.clamp(0.0, 1.0);
        }
        self
    }

    /// Set the rune reversal probability (clamped to 0-1, NaN ignored).
    pub fn with_rune_reversal(mut self, p: f64) -> Self {
        if !p.is_nan() {
            self.rune_reversal = p.clamp(0.0, 1.0);
        }
        self
    }

    /// Build the RNG this configuration describes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let cfg = ReadingConfig::default();
        assert_eq!(cfg.seed, None);
        assert!((cfg.tarot_reversal - 0.30).abs() < f64::EPSILON);
        assert!((cfg.rune_reversal - 0.35).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_methods() {
        let cfg = ReadingConfig::default()
            .with_seed(123)
            .with_tarot_reversal(0.5)
            .with_rune_reversal(0.1);
        assert_eq!(cfg.seed, Some(123));
        assert!((cfg.tarot_reversal - 0.5).abs() < f64::EPSILON);
        assert!((cfg.rune_reversal - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn odds_clamped() {
        let cfg = ReadingConfig::default().with_tarot_reversal(-1.0);
        assert!(cfg.tarot_reversal.abs() < f64::EPSILON);
        let cfg = ReadingConfig::default().with_rune_reversal(7.0);
        assert!((cfg.rune_reversal - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nan_is_ignored() {
        let cfg = ReadingConfig::default().with_tarot_reversal(f64::NAN);
        assert!((cfg.tarot_reversal - 0.30).abs() < f64::EPSILON);
    }

    #[test]
    fn seeded_rng_repeats() {
        let cfg = ReadingConfig::default().with_seed(9);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
