//! Shuffled draws for interactive readings.
//!
//! A draw shuffles a working copy of references into the catalog, takes the
//! first `count`, and flips a biased coin per entity for its orientation.
//! The catalog itself is never touched.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::Serialize;

use crate::error::{MechError, MechResult};

/// Chance that a drawn tarot card comes up reversed.
pub const TAROT_REVERSAL_ODDS: f64 = 0.30;

/// Chance that a cast rune lands reversed (merkstave).
pub const RUNE_REVERSAL_ODDS: f64 = 0.35;

/// One entity pulled from a catalog, with its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Drawn<'a, T> {
    /// The drawn entity.
    pub item: &'a T,
    /// Whether it came up reversed.
    pub reversed: bool,
}

/// Check that `p` is a usable probability.
pub fn validate_odds(p: f64) -> MechResult<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(MechError::InvalidProbability(p))
    }
}

/// Flip a coin that lands `true` with probability `p`.
pub fn flip(rng: &mut StdRng, p: f64) -> MechResult<bool> {
    Ok(rng.random_bool(validate_odds(p)?))
}

/// Draw `count` distinct entities from `catalog` in random order.
///
/// Each entity is independently reversed with probability `reversal_odds`.
/// Asking for more than the catalog holds is an error, never a silent clamp.
pub fn draw<'a, T>(
    catalog: &'a [T],
    count: usize,
    reversal_odds: f64,
    rng: &mut StdRng,
) -> MechResult<Vec<Drawn<'a, T>>> {
    if count > catalog.len() {
        return Err(MechError::DrawTooLarge {
            requested: count,
            available: catalog.len(),
        });
    }
    let odds = validate_odds(reversal_odds)?;

    let mut deck: Vec<&T> = catalog.iter().collect();
    deck.shuffle(rng);
    deck.truncate(count);

    Ok(deck
        .into_iter()
        .map(|item| Drawn {
            item,
            reversed: rng.random_bool(odds),
        })
        .collect())
}

/// Pick one element uniformly, or `None` for an empty slice.
pub fn pick_one<'a, T>(items: &'a [T], rng: &mut StdRng) -> Option<&'a T> {
    items.choose(rng)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    const DECK: [u32; 22] = [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21,
    ];

    #[test]
    fn draw_returns_requested_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let hand = draw(&DECK, 5, TAROT_REVERSAL_ODDS, &mut rng).unwrap();
        assert_eq!(hand.len(), 5);
    }

    #[test]
    fn whole_catalog_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let hand = draw(&DECK, DECK.len(), 0.0, &mut rng).unwrap();
        let seen: HashSet<u32> = hand.iter().map(|d| *d.item).collect();
        assert_eq!(seen.len(), DECK.len());
    }

    #[test]
    fn oversized_draw_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = draw(&DECK, 23, 0.3, &mut rng).unwrap_err();
        assert_eq!(
            err,
            MechError::DrawTooLarge {
                requested: 23,
                available: 22
            }
        );
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(draw(&DECK, 0, 0.3, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn invalid_odds_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            draw(&DECK, 1, 1.5, &mut rng),
            Err(MechError::InvalidProbability(_))
        ));
        assert!(matches!(
            flip(&mut rng, -0.1),
            Err(MechError::InvalidProbability(_))
        ));
        assert!(validate_odds(f64::NAN).is_err());
    }

    #[test]
    fn odds_extremes() {
        let mut rng = StdRng::seed_from_u64(3);
        let never = draw(&DECK, 22, 0.0, &mut rng).unwrap();
        assert!(never.iter().all(|d| !d.reversed));
        let always = draw(&DECK, 22, 1.0, &mut rng).unwrap();
        assert!(always.iter().all(|d| d.reversed));
    }

    #[test]
    fn reversal_rate_is_roughly_the_odds() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut reversed = 0;
        let trials = 2000;
        for _ in 0..trials {
            let hand = draw(&DECK, 1, TAROT_REVERSAL_ODDS, &mut rng).unwrap();
            if hand[0].reversed {
                reversed += 1;
            }
        }
        let rate = f64::from(reversed) / f64::from(trials);
        assert!((0.25..0.35).contains(&rate), "rate {rate}");
    }

    #[test]
    fn draw_is_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(5);
        let mut rng2 = StdRng::seed_from_u64(5);
        let a = draw(&DECK, 3, 0.3, &mut rng1).unwrap();
        let b = draw(&DECK, 3, 0.3, &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn catalog_is_untouched() {
        let catalog = DECK;
        let mut rng = StdRng::seed_from_u64(11);
        let _ = draw(&catalog, 22, 0.5, &mut rng).unwrap();
        assert_eq!(catalog, DECK);
    }

    #[test]
    fn pick_one_handles_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u32; 0] = [];
        assert!(pick_one(&empty, &mut rng).is_none());
        assert!(pick_one(&DECK, &mut rng).is_some());
    }

    proptest! {
        #[test]
        fn draws_are_distinct(seed in any::<u64>(), count in 0usize..=22) {
            let mut rng = StdRng::seed_from_u64(seed);
            let hand = draw(&DECK, count, 0.3, &mut rng).unwrap();
            let seen: HashSet<u32> = hand.iter().map(|d| *d.item).collect();
            prop_assert_eq!(hand.len(), count);
            prop_assert_eq!(seen.len(), count);
        }
    }
}
