//! Approximate lunar phase from a calendar date.
//!
//! This is the simple synodic-month approximation: good to about a day,
//! which is all the daily oracle needs.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_2;

/// Day-count offset that lines the approximation up with a known new moon.
const EPOCH_OFFSET: f64 = 694_039.09;

/// The eight named phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    /// Age under 1.85 days, or 27.75 and over.
    NewMoon,
    /// Age 1.85 to 5.55.
    WaxingCrescent,
    /// Age 5.55 to 9.25.
    FirstQuarter,
    /// Age 9.25 to 12.95.
    WaxingGibbous,
    /// Age 12.95 to 16.65.
    FullMoon,
    /// Age 16.65 to 20.35.
    WaningGibbous,
    /// Age 20.35 to 24.05.
    LastQuarter,
    /// Age 24.05 to 27.75.
    WaningCrescent,
}

/// Days since the last new moon, in `[0, SYNODIC_MONTH)`.
pub fn lunar_age(date: NaiveDate) -> f64 {
    let c = (365.25 * f64::from(date.year())).floor();
    let e = (30.6 * f64::from(date.month())).floor();
    let days = c + e + f64::from(date.day()) - EPOCH_OFFSET;
    let cycles = days / SYNODIC_MONTH;
    cycles.fract().rem_euclid(1.0) * SYNODIC_MONTH
}

impl MoonPhase {
    /// Classify a lunar age in days.
    pub fn from_age(age: f64) -> Self {
        match age {
            a if a < 1.85 => Self::NewMoon,
            a if a < 5.55 => Self::WaxingCrescent,
            a if a < 9.25 => Self::FirstQuarter,
            a if a < 12.95 => Self::WaxingGibbous,
            a if a < 16.65 => Self::FullMoon,
            a if a < 20.35 => Self::WaningGibbous,
            a if a < 24.05 => Self::LastQuarter,
            a if a < 27.75 => Self::WaningCrescent,
            _ => Self::NewMoon,
        }
    }

    /// Phase on a given date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_age(lunar_age(date))
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Moon emoji for the phase.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::NewMoon => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::FullMoon => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }

    /// A line of guidance for working with this phase.
    pub fn guidance(self) -> &'static str {
        match self {
            Self::NewMoon => "Set intentions. Plant seeds in the dark. What do you want to call in?",
            Self::WaxingCrescent => {
                "The seed cracks open. Take the first small action toward your intention."
            }
            Self::FirstQuarter => {
                "Resistance appears. Push through. This is where commitment is tested."
            }
            Self::WaxingGibbous => {
                "Refine. Adjust. The vision is becoming clearer. Trust what's emerging."
            }
            Self::FullMoon => {
                "Illumination. Everything is visible. Release what no longer serves you."
            }
            Self::WaningGibbous => {
                "Gratitude and sharing. Distribute what you've harvested. Teach what you've learned."
            }
            Self::LastQuarter => "Let go. Forgive. Clear space for what comes next.",
            Self::WaningCrescent => {
                "Rest. Surrender. Be still. The next cycle is preparing itself in the dark."
            }
        }
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn known_ages() {
        assert!((lunar_age(date(2024, 1, 11)) - 27.0489).abs() < 1e-3);
        assert!((lunar_age(date(2024, 1, 25)) - 11.5183).abs() < 1e-3);
        assert!((lunar_age(date(2025, 3, 14)) - 13.0901).abs() < 1e-3);
    }

    #[test]
    fn phases_through_a_month() {
        assert_eq!(MoonPhase::for_date(date(2024, 5, 9)), MoonPhase::NewMoon);
        assert_eq!(
            MoonPhase::for_date(date(2024, 5, 12)),
            MoonPhase::WaxingCrescent
        );
        assert_eq!(
            MoonPhase::for_date(date(2024, 5, 16)),
            MoonPhase::FirstQuarter
        );
        assert_eq!(
            MoonPhase::for_date(date(2024, 5, 20)),
            MoonPhase::WaxingGibbous
        );
        assert_eq!(MoonPhase::for_date(date(2024, 5, 23)), MoonPhase::FullMoon);
        assert_eq!(
            MoonPhase::for_date(date(2024, 5, 27)),
            MoonPhase::WaningGibbous
        );
        assert_eq!(MoonPhase::for_date(date(2024, 5, 3)), MoonPhase::LastQuarter);
        assert_eq!(
            MoonPhase::for_date(date(2024, 5, 5)),
            MoonPhase::WaningCrescent
        );
        assert_eq!(MoonPhase::for_date(date(2024, 5, 7)), MoonPhase::NewMoon);
    }

    #[test]
    fn thresholds() {
        assert_eq!(MoonPhase::from_age(0.0), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_age(1.85), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_age(16.649), MoonPhase::FullMoon);
        assert_eq!(MoonPhase::from_age(27.75), MoonPhase::NewMoon);
    }

    #[test]
    fn display_has_glyph_and_name() {
        assert_eq!(MoonPhase::FullMoon.to_string(), "🌕 Full Moon");
    }

    proptest! {
        #[test]
        fn age_in_range(y in 1900i32..2200, m in 1u32..=12, d in 1u32..=28) {
            let age = lunar_age(date(y, m, d));
            prop_assert!((0.0..SYNODIC_MONTH).contains(&age));
        }
    }
}
