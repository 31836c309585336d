//! The twelve signs of the tropical zodiac, plus the planet and house lists
//! used for birth-chart placements.

use serde::Serialize;

use crate::entity::{EntityDetail, SymbolicEntity};

/// Classical element of a zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    /// Aries, Leo, Sagittarius.
    Fire,
    /// Taurus, Virgo, Capricorn.
    Earth,
    /// Gemini, Libra, Aquarius.
    Air,
    /// Cancer, Scorpio, Pisces.
    Water,
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fire => write!(f, "Fire"),
            Self::Earth => write!(f, "Earth"),
            Self::Air => write!(f, "Air"),
            Self::Water => write!(f, "Water"),
        }
    }
}

const fn sign(
    ordinal: u32,
    name: &'static str,
    glyph: &'static str,
    element: Element,
    dates: &'static str,
    ruler: &'static str,
    keywords: &'static [&'static str],
) -> SymbolicEntity {
    SymbolicEntity {
        name,
        ordinal,
        glyph,
        upright: "",
        reversed: None,
        keywords,
        detail: EntityDetail::Sign {
            element,
            dates,
            ruler,
        },
    }
}

/// The zodiac from Aries (0) to Pisces (11).
///
/// Signs carry no prose meaning of their own; `upright` is empty and the
/// keywords hold the sign's traits.
pub static ZODIAC_SIGNS: [SymbolicEntity; 12] = [
    sign(
        0,
        "Aries",
        "♈",
        Element::Fire,
        "Mar 21 – Apr 19",
        "Mars",
        &["bold", "ambitious", "pioneering"],
    ),
    sign(
        1,
        "Taurus",
        "♉",
        Element::Earth,
        "Apr 20 – May 20",
        "Venus",
        &["reliable", "patient", "devoted"],
    ),
    sign(
        2,
        "Gemini",
        "♊",
        Element::Air,
        "May 21 – Jun 20",
        "Mercury",
        &["curious", "adaptable", "communicative"],
    ),
    sign(
        3,
        "Cancer",
        "♋",
        Element::Water,
        "Jun 21 – Jul 22",
        "Moon",
        &["intuitive", "sentimental", "protective"],
    ),
    sign(
        4,
        "Leo",
        "♌",
        Element::Fire,
        "Jul 23 – Aug 22",
        "Sun",
        &["creative", "passionate", "generous"],
    ),
    sign(
        5,
        "Virgo",
        "♍",
        Element::Earth,
        "Aug 23 – Sep 22",
        "Mercury",
        &["analytical", "practical", "diligent"],
    ),
    sign(
        6,
        "Libra",
        "♎",
        Element::Air,
        "Sep 23 – Oct 22",
        "Venus",
        &["diplomatic", "gracious", "fair-minded"],
    ),
    sign(
        7,
        "Scorpio",
        "♏",
        Element::Water,
        "Oct 23 – Nov 21",
        "Pluto",
        &["resourceful", "passionate", "determined"],
    ),
    sign(
        8,
        "Sagittarius",
        "♐",
        Element::Fire,
        "Nov 22 – Dec 21",
        "Jupiter",
        &["optimistic", "adventurous", "philosophical"],
    ),
    sign(
        9,
        "Capricorn",
        "♑",
        Element::Earth,
        "Dec 22 – Jan 19",
        "Saturn",
        &["disciplined", "responsible", "ambitious"],
    ),
    sign(
        10,
        "Aquarius",
        "♒",
        Element::Air,
        "Jan 20 – Feb 18",
        "Uranus",
        &["progressive", "original", "humanitarian"],
    ),
    sign(
        11,
        "Pisces",
        "♓",
        Element::Water,
        "Feb 19 – Mar 20",
        "Neptune",
        &["compassionate", "intuitive", "artistic"],
    ),
];

/// Bodies placed in a birth chart, in chart slot order.
pub static PLANETS: [&str; 10] = [
    "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

/// Life areas of the twelve houses, first house first.
pub static HOUSES: [&str; 12] = [
    "Identity",
    "Possessions",
    "Communication",
    "Home",
    "Pleasure",
    "Health",
    "Partnerships",
    "Transformation",
    "Philosophy",
    "Career",
    "Community",
    "Subconscious",
];
