//! Numerology number meanings.

use crate::entity::{EntityDetail, SymbolicEntity};

const fn number(
    value: u32,
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
) -> SymbolicEntity {
    SymbolicEntity {
        name: title,
        ordinal: value,
        glyph,
        upright: description,
        reversed: None,
        keywords,
        detail: EntityDetail::Number,
    }
}

/// Meanings for 1..=9 and the master numbers 11, 22 and 33.
///
/// `ordinal` holds the number itself, not the table position.
pub static NUMBER_MEANINGS: [SymbolicEntity; 12] = [
    number(
        1,
        "1",
        "The Leader",
        "Independent, pioneering, driven. You forge your own path and inspire others to follow.",
        &["independent", "pioneering", "driven"],
    ),
    number(
        2,
        "2",
        "The Peacemaker",
        "Diplomatic, intuitive, cooperative. You bring harmony and understanding to all around you.",
        &["diplomatic", "intuitive", "cooperative"],
    ),
    number(
        3,
        "3",
        "The Creator",
        "Expressive, artistic, joyful. You are a vessel for creative energy and inspire wonder.",
        &["expressive", "artistic", "joyful"],
    ),
    number(
        4,
        "4",
        "The Builder",
        "Practical, disciplined, loyal. You create lasting foundations and structures of meaning.",
        &["practical", "disciplined", "loyal"],
    ),
    number(
        5,
        "5",
        "The Adventurer",
        "Free-spirited, adaptable, curious. You embrace change and thrive in new experiences.",
        &["free-spirited", "adaptable", "curious"],
    ),
    number(
        6,
        "6",
        "The Nurturer",
        "Responsible, loving, protective. You carry the weight of care for those you love.",
        &["responsible", "loving", "protective"],
    ),
    number(
        7,
        "7",
        "The Seeker",
        "Analytical, spiritual, introspective. You seek truth beneath the surface of all things.",
        &["analytical", "spiritual", "introspective"],
    ),
    number(
        8,
        "8",
        "The Powerhouse",
        "Ambitious, authoritative, material. You command resources and manifest abundance.",
        &["ambitious", "authoritative", "material"],
    ),
    number(
        9,
        "9",
        "The Humanitarian",
        "Compassionate, wise, selfless. You serve the greater good with grace and wisdom.",
        &["compassionate", "wise", "selfless"],
    ),
    number(
        11,
        "11",
        "The Master Intuitive",
        "Visionary, enlightened, inspiring. A master number: you channel higher wisdom.",
        &["visionary", "enlightened", "inspiring"],
    ),
    number(
        22,
        "22",
        "The Master Builder",
        "Architect of dreams, powerful, practical visionary. You build empires from nothing.",
        &["architect", "powerful", "practical visionary"],
    ),
    number(
        33,
        "33",
        "The Master Teacher",
        "Altruistic, spiritual teacher, healer. The rarest vibration: pure compassion.",
        &["altruistic", "teacher", "healer"],
    ),
];

/// Returned by [`number_meaning`] for values outside the table.
pub static UNKNOWN_NUMBER: SymbolicEntity = number(
    0,
    "?",
    "The Unwritten",
    "This number has no traditional meaning. Sit with what it stirs in you.",
    &[],
);

/// Look up the meaning of a numerology number.
///
/// Total over `u32`: anything that is not 1..=9, 11, 22 or 33 yields
/// [`UNKNOWN_NUMBER`].
pub fn number_meaning(value: u32) -> &'static SymbolicEntity {
    NUMBER_MEANINGS
        .iter()
        .find(|m| m.ordinal == value)
        .unwrap_or(&UNKNOWN_NUMBER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_numbers_have_meanings() {
        assert_eq!(number_meaning(11).name, "The Master Intuitive");
        assert_eq!(number_meaning(22).name, "The Master Builder");
        assert_eq!(number_meaning(33).name, "The Master Teacher");
    }

    #[test]
    fn unknown_numbers_fall_back() {
        assert_eq!(number_meaning(0), &UNKNOWN_NUMBER);
        assert_eq!(number_meaning(10), &UNKNOWN_NUMBER);
        assert_eq!(number_meaning(44), &UNKNOWN_NUMBER);
    }

    #[test]
    fn every_single_digit_is_covered() {
        for n in 1..=9 {
            assert_eq!(number_meaning(n).ordinal, n);
        }
    }
}
