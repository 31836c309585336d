//! The spirit board.

use oracle_core::SpiritAnswer;
use oracle_core::whispers::VEILED_WHISPER;
use oracle_mechanics::pick_one;
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ReadingError, ReadingResult};

/// Rolls below this answer YES.
pub const YES_BELOW: f64 = 0.4;
/// Rolls below this (and not YES) answer NO; the rest are UNCERTAIN.
pub const NO_BELOW: f64 = 0.8;

/// The board's reply to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiritReading {
    /// The question asked.
    pub question: String,
    /// YES, NO or UNCERTAIN.
    pub answer: SpiritAnswer,
    /// A one-line nudge to go with the answer.
    pub whisper: String,
}

/// Map a uniform roll in [0, 1) onto an answer.
pub fn answer_for_roll(roll: f64) -> SpiritAnswer {
    if roll < YES_BELOW {
        SpiritAnswer::Yes
    } else if roll < NO_BELOW {
        SpiritAnswer::No
    } else {
        SpiritAnswer::Uncertain
    }
}

/// Ask the board a question.
pub fn consult(question: &str, rng: &mut StdRng) -> ReadingResult<SpiritReading> {
    let question = question.trim();
    if question.is_empty() {
        return Err(ReadingError::EmptyQuestion);
    }
    let answer = answer_for_roll(rng.random::<f64>());
    let whisper = pick_one(answer.whispers(), rng)
        .copied()
        .unwrap_or(VEILED_WHISPER);
    debug!(%answer, "spirit board answered");
    Ok(SpiritReading {
        question: question.to_string(),
        answer,
        whisper: whisper.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn roll_bands() {
        assert_eq!(answer_for_roll(0.0), SpiritAnswer::Yes);
        assert_eq!(answer_for_roll(0.399), SpiritAnswer::Yes);
        assert_eq!(answer_for_roll(0.4), SpiritAnswer::No);
        assert_eq!(answer_for_roll(0.799), SpiritAnswer::No);
        assert_eq!(answer_for_roll(0.8), SpiritAnswer::Uncertain);
        assert_eq!(answer_for_roll(0.999), SpiritAnswer::Uncertain);
    }

    #[test]
    fn whisper_matches_answer() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..50 {
            let reading = consult("Will it rain?", &mut rng).unwrap();
            assert!(reading.answer.whispers().contains(&reading.whisper.as_str()));
        }
    }

    #[test]
    fn blank_question_is_refused() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            consult("  ", &mut rng),
            Err(ReadingError::EmptyQuestion)
        ));
    }

    #[test]
    fn answers_are_weighted() {
        let mut rng = StdRng::seed_from_u64(77);
        let trials = 3000;
        let uncertain = (0..trials)
            .filter(|_| consult("?", &mut rng).unwrap().answer == SpiritAnswer::Uncertain)
            .count();
        let rate = uncertain as f64 / f64::from(trials);
        assert!((0.15..0.25).contains(&rate), "rate {rate}");
    }
}
