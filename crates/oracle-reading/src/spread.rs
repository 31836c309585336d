//! Tarot spreads and rune casts.

use oracle_core::spread::find_spread;
use oracle_core::{Domain, RUNE_SPREADS, Spread, SymbolicEntity, TAROT_SPREADS, catalog};
use oracle_mechanics::draw;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use crate::error::{ReadingError, ReadingResult};

/// One drawn entity in its spread position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    /// Position label ("Past", "Card 4", ...).
    pub position: String,
    /// The drawn card or rune.
    pub entity: &'static SymbolicEntity,
    /// Whether it came up reversed.
    pub reversed: bool,
}

impl Placement {
    /// Meaning for the drawn orientation.
    pub fn meaning(&self) -> &'static str {
        self.entity.meaning(self.reversed)
    }

    /// "Upright" or "Reversed".
    pub fn orientation(&self) -> &'static str {
        if self.reversed { "Reversed" } else { "Upright" }
    }
}

/// A completed tarot spread or rune cast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadReading {
    /// Tarot or runes.
    pub domain: Domain,
    /// The layout used.
    pub spread: &'static Spread,
    /// The querent's question, if any.
    pub question: Option<String>,
    /// Drawn entities in position order.
    pub placements: Vec<Placement>,
}

impl SpreadReading {
    /// Number of reversed placements.
    pub fn reversed_count(&self) -> usize {
        self.placements.iter().filter(|p| p.reversed).count()
    }
}

/// Draw a spread from a domain's catalog.
pub fn read_spread(
    domain: Domain,
    spreads: &'static [Spread],
    spread_name: &str,
    question: Option<&str>,
    reversal_odds: f64,
    rng: &mut StdRng,
) -> ReadingResult<SpreadReading> {
    let spread = find_spread(spreads, spread_name)
        .ok_or_else(|| ReadingError::UnknownSpread(spread_name.to_string()))?;
    let drawn = draw(catalog(domain), spread.len(), reversal_odds, rng)?;
    debug!(%domain, spread = spread.name, count = drawn.len(), "spread drawn");

    let placements = drawn
        .into_iter()
        .enumerate()
        .map(|(i, d)| Placement {
            position: spread.position_label(i),
            entity: d.item,
            reversed: d.reversed,
        })
        .collect();

    Ok(SpreadReading {
        domain,
        spread,
        question: question
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(String::from),
        placements,
    })
}

/// Draw a tarot spread from the Major Arcana.
pub fn read_tarot(
    spread_name: &str,
    question: Option<&str>,
    reversal_odds: f64,
    rng: &mut StdRng,
) -> ReadingResult<SpreadReading> {
    read_spread(
        Domain::Tarot,
        &TAROT_SPREADS,
        spread_name,
        question,
        reversal_odds,
        rng,
    )
}

/// Cast runes from the Elder Futhark.
pub fn cast_runes(
    spread_name: &str,
    question: Option<&str>,
    reversal_odds: f64,
    rng: &mut StdRng,
) -> ReadingResult<SpreadReading> {
    read_spread(
        Domain::Runes,
        &RUNE_SPREADS,
        spread_name,
        question,
        reversal_odds,
        rng,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn three_card_spread_is_labelled() {
        let reading = read_tarot("three", Some("What now?"), 0.3, &mut rng()).unwrap();
        let labels: Vec<_> = reading.placements.iter().map(|p| p.position.as_str()).collect();
        assert_eq!(labels, vec!["Past", "Present", "Future"]);
        assert_eq!(reading.question.as_deref(), Some("What now?"));
        assert_eq!(reading.domain, Domain::Tarot);
    }

    #[test]
    fn celtic_cross_draws_ten_distinct_cards() {
        let reading = read_tarot("celtic", None, 0.3, &mut rng()).unwrap();
        let names: HashSet<_> = reading.placements.iter().map(|p| p.entity.name).collect();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn rune_cast_uses_the_futhark() {
        let reading = cast_runes("five", None, 0.35, &mut rng()).unwrap();
        assert_eq!(reading.placements.len(), 5);
        assert!(
            reading
                .placements
                .iter()
                .all(|p| p.entity.detail == oracle_core::EntityDetail::Rune)
        );
        assert_eq!(reading.placements[4].position, "Obstacle");
    }

    #[test]
    fn unknown_spread_is_an_error() {
        let err = cast_runes("celtic", None, 0.35, &mut rng()).unwrap_err();
        assert!(matches!(err, ReadingError::UnknownSpread(name) if name == "celtic"));
    }

    #[test]
    fn blank_question_is_dropped() {
        let reading = read_tarot("single", Some("   "), 0.3, &mut rng()).unwrap();
        assert!(reading.question.is_none());
    }

    #[test]
    fn reversed_placements_use_reversed_meaning() {
        let reading = read_tarot("five", None, 1.0, &mut rng()).unwrap();
        assert_eq!(reading.reversed_count(), 5);
        for p in &reading.placements {
            assert_eq!(p.orientation(), "Reversed");
            assert_eq!(Some(p.meaning()), p.entity.reversed);
        }
    }

    #[test]
    fn same_seed_same_spread() {
        let a = read_tarot("three", None, 0.3, &mut rng()).unwrap();
        let b = read_tarot("three", None, 0.3, &mut rng()).unwrap();
        assert_eq!(a, b);
    }
}
