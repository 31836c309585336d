//! Numerology digit reduction.
//!
//! Letters map to 1-9 by alphabet position modulo 9 (a/j/s = 1, b/k/t = 2,
//! ... i/r = 9). A sum is repeatedly replaced by the sum of its decimal
//! digits until it is a single digit or one of the master numbers 11, 22, 33.

use serde::{Deserialize, Serialize};

use oracle_core::SymbolicEntity;
use oracle_core::catalog::number_meaning;

use crate::error::{MechError, MechResult};

/// Numbers that are never reduced further.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// A reduced numerology number: always in 1..=9, 11, 22 or 33.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NumerologyNumber(u32);

impl NumerologyNumber {
    /// Wrap an already reduced value. Returns `None` for anything outside
    /// 1..=9, 11, 22, 33.
    pub fn new(value: u32) -> Option<Self> {
        if (1..=9).contains(&value) || MASTER_NUMBERS.contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The numeric value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether this is 11, 22 or 33.
    pub fn is_master(self) -> bool {
        MASTER_NUMBERS.contains(&self.0)
    }

    /// The catalog meaning for this number.
    pub fn meaning(self) -> &'static SymbolicEntity {
        number_meaning(self.0)
    }
}

impl TryFrom<u32> for NumerologyNumber {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{value} is not a numerology number"))
    }
}

impl From<NumerologyNumber> for u32 {
    fn from(n: NumerologyNumber) -> Self {
        n.0
    }
}

impl std::fmt::Display for NumerologyNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which letters of a name contribute to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterSet {
    /// Every letter (Expression).
    All,
    /// a, e, i, o, u (Soul Urge).
    Vowels,
    /// Every other letter (Personality).
    Consonants,
}

impl LetterSet {
    fn admits(self, c: char) -> bool {
        match self {
            Self::All => true,
            Self::Vowels => VOWELS.contains(&c),
            Self::Consonants => !VOWELS.contains(&c),
        }
    }
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce a sum to a numerology number. Zero has no meaning and yields `None`.
pub fn reduce(mut n: u32) -> Option<NumerologyNumber> {
    while n > 9 && !MASTER_NUMBERS.contains(&n) {
        n = digit_sum(n);
    }
    NumerologyNumber::new(n)
}

/// Value of a single letter (case-insensitive, ASCII only).
pub fn letter_value(c: char) -> Option<u32> {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
        Some((c as u32 - 'a' as u32) % 9 + 1)
    } else {
        None
    }
}

/// Life Path: reduce the sum of every digit in a birth date.
///
/// Separators are ignored, so "1990-05-15" and "19900515" agree.
pub fn life_path(date: &str) -> MechResult<NumerologyNumber> {
    let sum: u32 = date.chars().filter_map(|c| c.to_digit(10)).sum();
    reduce(sum).ok_or_else(|| MechError::EmptyInput(format!("no usable digits in date '{date}'")))
}

/// Reduce the letters of `name` selected by `set`. Non-letters are stripped.
pub fn name_number(name: &str, set: LetterSet) -> MechResult<NumerologyNumber> {
    let sum: u32 = name
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| set.admits(*c))
        .filter_map(letter_value)
        .sum();
    reduce(sum).ok_or_else(|| {
        let what = match set {
            LetterSet::All => "letters",
            LetterSet::Vowels => "vowels",
            LetterSet::Consonants => "consonants",
        };
        MechError::EmptyInput(format!("no {what} in name '{name}'"))
    })
}

/// Expression: every letter of the full name.
pub fn expression(name: &str) -> MechResult<NumerologyNumber> {
    name_number(name, LetterSet::All)
}

/// Soul Urge: the vowels of the full name.
pub fn soul_urge(name: &str) -> MechResult<NumerologyNumber> {
    name_number(name, LetterSet::Vowels)
}

/// Personality: the consonants of the full name.
pub fn personality(name: &str) -> MechResult<NumerologyNumber> {
    name_number(name, LetterSet::Consonants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid(n: NumerologyNumber) -> bool {
        (1..=9).contains(&n.value()) || MASTER_NUMBERS.contains(&n.value())
    }

    #[test]
    fn letter_table() {
        assert_eq!(letter_value('a'), Some(1));
        assert_eq!(letter_value('J'), Some(1));
        assert_eq!(letter_value('s'), Some(1));
        assert_eq!(letter_value('i'), Some(9));
        assert_eq!(letter_value('r'), Some(9));
        assert_eq!(letter_value('z'), Some(8));
        assert_eq!(letter_value('-'), None);
        assert_eq!(letter_value('é'), None);
    }

    #[test]
    fn reduce_keeps_master_numbers() {
        assert_eq!(reduce(11).map(NumerologyNumber::value), Some(11));
        assert_eq!(reduce(22).map(NumerologyNumber::value), Some(22));
        assert_eq!(reduce(33).map(NumerologyNumber::value), Some(33));
        // 29 -> 11 stops at the master number
        assert_eq!(reduce(29).map(NumerologyNumber::value), Some(11));
        // 44 -> 8
        assert_eq!(reduce(44).map(NumerologyNumber::value), Some(8));
    }

    #[test]
    fn reduce_zero_is_none() {
        assert_eq!(reduce(0), None);
    }

    #[test]
    fn life_path_example() {
        // 1+9+9+0+0+5+1+5 = 30 -> 3
        assert_eq!(life_path("1990-05-15").unwrap().value(), 3);
    }

    #[test]
    fn life_path_ignores_separators() {
        assert_eq!(life_path("1990-05-15"), life_path("19900515"));
        assert_eq!(life_path("1990/05/15"), life_path("1990-05-15"));
    }

    #[test]
    fn life_path_rejects_empty() {
        assert!(matches!(life_path(""), Err(MechError::EmptyInput(_))));
        assert!(matches!(life_path("--"), Err(MechError::EmptyInput(_))));
        assert!(matches!(life_path("0000-00-00"), Err(MechError::EmptyInput(_))));
    }

    #[test]
    fn expression_example() {
        assert_eq!(expression("ABC").unwrap().value(), 6);
    }

    #[test]
    fn vowels_and_consonants_split_the_name() {
        // a=1, e=5 -> 6 ; b=2, c=3, d=4 -> 9
        assert_eq!(soul_urge("abcde").unwrap().value(), 6);
        assert_eq!(personality("abcde").unwrap().value(), 9);
        assert_eq!(expression("abcde").unwrap().value(), 6);
    }

    #[test]
    fn non_letters_are_stripped() {
        assert_eq!(expression("A.B-C 42"), expression("abc"));
    }

    #[test]
    fn names_without_letters_are_rejected() {
        assert!(matches!(expression(""), Err(MechError::EmptyInput(_))));
        assert!(matches!(expression("1234 !"), Err(MechError::EmptyInput(_))));
        assert!(matches!(soul_urge("Glynn"), Err(MechError::EmptyInput(_))));
        assert!(matches!(personality("Aeio"), Err(MechError::EmptyInput(_))));
    }

    #[test]
    fn meaning_lookup() {
        let n = NumerologyNumber::new(22).unwrap();
        assert!(n.is_master());
        assert_eq!(n.meaning().name, "The Master Builder");
    }

    #[test]
    fn serde_rejects_invalid_numbers() {
        let n: NumerologyNumber = serde_json::from_str("7").unwrap();
        assert_eq!(n.value(), 7);
        assert!(serde_json::from_str::<NumerologyNumber>("10").is_err());
        assert_eq!(serde_json::to_string(&n).unwrap(), "7");
    }

    proptest! {
        #[test]
        fn life_path_always_valid(y in 1u32..=9999, m in 1u32..=12, d in 1u32..=28) {
            let date = format!("{y:04}-{m:02}-{d:02}");
            prop_assert!(valid(life_path(&date).unwrap()));
        }

        #[test]
        fn reduce_always_valid(n in 1u32..=u32::MAX) {
            prop_assert!(valid(reduce(n).unwrap()));
        }

        #[test]
        fn expression_is_case_insensitive(name in "[a-zA-Z ]{0,12}[a-zA-Z][a-zA-Z ]{0,12}") {
            prop_assert_eq!(expression(&name), expression(&name.to_uppercase()));
            prop_assert_eq!(expression(&name), expression(&name.to_lowercase()));
        }
    }
}
