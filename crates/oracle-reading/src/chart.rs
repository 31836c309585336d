//! Birth charts derived from a date-seeded draw.
//!
//! The chart is symbolic, not astronomical: every placement is a seeded pick
//! so the same birth data always yields the same chart.

use chrono::{NaiveDate, NaiveTime};
use oracle_core::catalog::{Element, HOUSES, PLANETS, ZODIAC_SIGNS};
use oracle_core::{EntityDetail, SymbolicEntity};
use oracle_mechanics::Seed;
use oracle_mechanics::seeded::{parse_date, parse_time};
use serde::Serialize;
use tracing::debug;

use crate::error::ReadingResult;

const SUN_SLOT: u64 = 0;
const MOON_SLOT: u64 = 1;
const RISING_SLOT: u64 = 2;
const SIGN_SLOT_BASE: u64 = 3;
const HOUSE_SLOT_BASE: u64 = 13;
const DEGREE_SLOT_BASE: u64 = 23;

/// Degrees in one sign.
pub const DEGREES_PER_SIGN: usize = 30;

/// Where one planet falls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetPlacement {
    /// Planet name.
    pub planet: &'static str,
    /// Sign the planet sits in.
    pub sign: &'static SymbolicEntity,
    /// Life area of the house it occupies.
    pub house: &'static str,
    /// 1-based house number.
    pub house_number: usize,
    /// Degree within the sign, 0-29.
    pub degree: usize,
}

/// A complete birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthChart {
    /// Birth date.
    pub date: NaiveDate,
    /// Birth time, when known.
    pub time: Option<NaiveTime>,
    /// Seed the chart was drawn from.
    pub seed: Seed,
    /// Sun sign.
    pub sun: &'static SymbolicEntity,
    /// Moon sign.
    pub moon: &'static SymbolicEntity,
    /// Rising sign; only drawn when the birth time is known.
    pub rising: Option<&'static SymbolicEntity>,
    /// One placement per planet, in [`PLANETS`] order.
    pub planets: Vec<PlanetPlacement>,
}

impl BirthChart {
    /// Draw the chart for a `YYYY-MM-DD` date and optional `HH:MM` time.
    pub fn cast(date: &str, time: Option<&str>) -> ReadingResult<Self> {
        let time = time.map(str::trim).filter(|t| !t.is_empty());
        let parsed_date = parse_date(date)?;
        let parsed_time = time.map(parse_time).transpose()?;
        let seed = Seed::from_birth(date, time)?;

        let sign = |slot| &ZODIAC_SIGNS[seed.pick(slot, ZODIAC_SIGNS.len())];
        let planets = (0u64..)
            .zip(PLANETS.iter())
            .map(|(i, &planet)| {
                let house_index = seed.pick(HOUSE_SLOT_BASE + i, HOUSES.len());
                PlanetPlacement {
                    planet,
                    sign: sign(SIGN_SLOT_BASE + i),
                    house: HOUSES[house_index],
                    house_number: house_index + 1,
                    degree: seed.pick(DEGREE_SLOT_BASE + i, DEGREES_PER_SIGN),
                }
            })
            .collect();

        let chart = Self {
            date: parsed_date,
            time: parsed_time,
            seed,
            sun: sign(SUN_SLOT),
            moon: sign(MOON_SLOT),
            rising: parsed_time.map(|_| sign(RISING_SLOT)),
            planets,
        };
        debug!(seed = seed.0, sun = chart.sun.name, "birth chart drawn");
        Ok(chart)
    }

    /// Count of placements (sun, moon, rising and planets) per element.
    pub fn element_balance(&self) -> Vec<(Element, usize)> {
        let signs = [Some(self.sun), Some(self.moon), self.rising]
            .into_iter()
            .flatten()
            .chain(self.planets.iter().map(|p| p.sign));
        let mut counts = [
            (Element::Fire, 0),
            (Element::Earth, 0),
            (Element::Air, 0),
            (Element::Water, 0),
        ];
        for sign in signs {
            let EntityDetail::Sign { element, .. } = sign.detail else {
                continue;
            };
            if let Some(slot) = counts.iter_mut().find(|(e, _)| *e == element) {
                slot.1 += 1;
            }
        }
        counts.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_mechanics::MechError;
    use proptest::prelude::*;

    use crate::error::ReadingError;

    #[test]
    fn chart_without_time() {
        let chart = BirthChart::cast("1990-05-15", None).unwrap();
        assert_eq!(chart.seed, Seed(2052));
        assert_eq!(chart.sun.name, "Aries");
        assert_eq!(chart.moon.name, "Aries");
        assert!(chart.rising.is_none());
        assert_eq!(chart.planets.len(), 10);

        let sun = &chart.planets[0];
        assert_eq!(sun.planet, "Sun");
        assert_eq!(sun.sign.name, "Taurus");
        assert_eq!(sun.house, "Health");
        assert_eq!(sun.house_number, 6);
        assert_eq!(sun.degree, 24);

        let pluto = &chart.planets[9];
        assert_eq!(pluto.planet, "Pluto");
        assert_eq!(pluto.sign.name, "Virgo");
        assert_eq!(pluto.house, "Career");
        assert_eq!(pluto.degree, 3);
    }

    #[test]
    fn chart_with_time_has_rising() {
        let chart = BirthChart::cast("1990-05-15", Some("14:30")).unwrap();
        assert_eq!(chart.seed, Seed(2054));
        assert_eq!(chart.sun.name, "Taurus");
        assert_eq!(chart.rising.map(|r| r.name), Some("Gemini"));
    }

    #[test]
    fn blank_time_counts_as_unknown() {
        let chart = BirthChart::cast("1990-05-15", Some("  ")).unwrap();
        assert_eq!(chart.seed, Seed(2052));
        assert!(chart.time.is_none());
    }

    #[test]
    fn degrees_and_houses_in_range() {
        let chart = BirthChart::cast("2001-12-31", Some("23:59")).unwrap();
        for p in &chart.planets {
            assert!(p.degree < 30);
            assert!((1..=12).contains(&p.house_number));
        }
    }

    #[test]
    fn element_balance_counts_every_placement() {
        let chart = BirthChart::cast("1990-05-15", None).unwrap();
        let total: usize = chart.element_balance().iter().map(|(_, n)| n).sum();
        assert_eq!(total, 12);
        let fire = chart
            .element_balance()
            .into_iter()
            .find(|(e, _)| *e == Element::Fire)
            .map(|(_, n)| n);
        // Sun and moon in Aries, Leo twice among the planets.
        assert_eq!(fire, Some(4));
    }

    #[test]
    fn bad_date_is_rejected() {
        let err = BirthChart::cast("15/05/1990", None).unwrap_err();
        assert!(matches!(
            err,
            ReadingError::Mechanics(MechError::MalformedDate(_))
        ));
    }

    proptest! {
        #[test]
        fn any_birth_moment_casts_a_full_chart(
            y in 1900i32..2100,
            m in 1u32..=12,
            d in 1u32..=28,
            h in 0u32..24,
            min in 0u32..60,
        ) {
            let date = format!("{y:04}-{m:02}-{d:02}");
            let time = format!("{h:02}:{min:02}");
            let chart = BirthChart::cast(&date, Some(&time)).unwrap();
            prop_assert!(chart.rising.is_some());
            prop_assert_eq!(chart.planets.len(), 10);
            for p in &chart.planets {
                prop_assert!(p.degree < DEGREES_PER_SIGN);
                prop_assert!((1..=12).contains(&p.house_number));
            }
        }
    }
}
