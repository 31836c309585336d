//! Numerology profiles.

use oracle_mechanics::NumerologyNumber;
use oracle_mechanics::numerology::{expression, life_path, personality, soul_urge};
use oracle_mechanics::seeded::parse_date;
use serde::Serialize;

use crate::error::ReadingResult;

/// Shown in place of a Soul Urge for a name without vowels.
pub const NO_VOWELS: &str = "no vowels";
/// Shown in place of a Personality for a name without consonants.
pub const NO_CONSONANTS: &str = "no consonants";

/// The four core numbers for a name and birth date.
///
/// Soul Urge and Personality read only part of the name, so either may be
/// absent while the other numbers stand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyProfile {
    /// Full name as given.
    pub name: String,
    /// Birth date as given.
    pub birth_date: String,
    /// From the birth date.
    pub life_path: NumerologyNumber,
    /// From every letter of the name.
    pub expression: NumerologyNumber,
    /// From the vowels, if the name has any.
    pub soul_urge: Option<NumerologyNumber>,
    /// From the consonants, if the name has any.
    pub personality: Option<NumerologyNumber>,
}

impl NumerologyProfile {
    /// Compute the profile. The date must be `YYYY-MM-DD` and the name must
    /// contain at least one letter.
    pub fn compute(name: &str, birth_date: &str) -> ReadingResult<Self> {
        parse_date(birth_date)?;
        Ok(Self {
            name: name.trim().to_string(),
            birth_date: birth_date.trim().to_string(),
            life_path: life_path(birth_date)?,
            expression: expression(name)?,
            soul_urge: soul_urge(name).ok(),
            personality: personality(name).ok(),
        })
    }

    /// The numbers with their titles, in presentation order. A missing
    /// number carries the reason it is missing.
    pub fn numbers(&self) -> [(&'static str, Result<NumerologyNumber, &'static str>); 4] {
        [
            ("Life Path", Ok(self.life_path)),
            ("Expression", Ok(self.expression)),
            ("Soul Urge", self.soul_urge.ok_or(NO_VOWELS)),
            ("Personality", self.personality.ok_or(NO_CONSONANTS)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_mechanics::MechError;

    use crate::error::ReadingError;

    #[test]
    fn full_profile() {
        let profile = NumerologyProfile::compute("John Smith", "1990-05-15").unwrap();
        assert_eq!(profile.life_path.value(), 3);
        assert_eq!(profile.expression.value(), 8);
        assert_eq!(profile.soul_urge.map(|n| n.value()), Some(6));
        assert_eq!(profile.personality.map(|n| n.value()), Some(11));
        assert!(profile.personality.is_some_and(|n| n.is_master()));
    }

    #[test]
    fn numbers_are_ordered() {
        let profile = NumerologyProfile::compute("John Smith", "1990-05-15").unwrap();
        let titles: Vec<_> = profile.numbers().iter().map(|(t, _)| *t).collect();
        assert_eq!(titles, vec!["Life Path", "Expression", "Soul Urge", "Personality"]);
    }

    #[test]
    fn name_without_vowels_keeps_other_numbers() {
        // L3 Y7 N5 N5 = 20 -> 2
        let profile = NumerologyProfile::compute("Lynn", "1990-05-15").unwrap();
        assert_eq!(profile.life_path.value(), 3);
        assert_eq!(profile.expression.value(), 2);
        assert_eq!(profile.personality.map(|n| n.value()), Some(2));
        assert_eq!(profile.soul_urge, None);
        assert_eq!(profile.numbers()[2], ("Soul Urge", Err(NO_VOWELS)));
    }

    #[test]
    fn name_without_consonants_keeps_other_numbers() {
        // A1 I9 O6 = 16 -> 7
        let profile = NumerologyProfile::compute("Aio", "1990-05-15").unwrap();
        assert_eq!(profile.expression.value(), 7);
        assert_eq!(profile.soul_urge.map(|n| n.value()), Some(7));
        assert_eq!(profile.personality, None);
        assert_eq!(profile.numbers()[3], ("Personality", Err(NO_CONSONANTS)));
    }

    #[test]
    fn name_without_letters_fails() {
        let err = NumerologyProfile::compute("1234", "1990-05-15").unwrap_err();
        assert!(matches!(
            err,
            ReadingError::Mechanics(MechError::EmptyInput(_))
        ));
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for date in ["banana7", "1990-13-45", "15/05/1990"] {
            let err = NumerologyProfile::compute("John Smith", date).unwrap_err();
            assert!(
                matches!(err, ReadingError::Mechanics(MechError::MalformedDate(_))),
                "{date}"
            );
        }
    }

    #[test]
    fn serializes_camel_case() {
        let profile = NumerologyProfile::compute("Ada", "1815-12-10").unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("lifePath").is_some());
        assert!(json.get("soulUrge").is_some());
    }

    #[test]
    fn missing_numbers_serialize_as_null() {
        let profile = NumerologyProfile::compute("Lynn", "1990-05-15").unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json["soulUrge"].is_null());
        assert_eq!(json["personality"], 2);
    }
}
