//! Symbolic entities: the items every catalog is made of.

use serde::Serialize;

use crate::catalog::hexagrams::Trigram;
use crate::catalog::zodiac::Element;

/// Which catalog an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// The 22 Major Arcana.
    Tarot,
    /// The 24 Elder Futhark runes.
    Runes,
    /// The 64 I Ching hexagrams.
    Hexagrams,
    /// The 12 zodiac signs.
    Zodiac,
    /// Numerology number meanings.
    Numerology,
}

impl Domain {
    /// Parse a domain name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tarot" | "cards" => Some(Self::Tarot),
            "runes" | "rune" | "futhark" => Some(Self::Runes),
            "hexagrams" | "hexagram" | "iching" | "i ching" => Some(Self::Hexagrams),
            "zodiac" | "signs" => Some(Self::Zodiac),
            "numerology" | "numbers" => Some(Self::Numerology),
            _ => None,
        }
    }

    /// All domains.
    pub fn all() -> &'static [Self] {
        &[
            Self::Tarot,
            Self::Runes,
            Self::Hexagrams,
            Self::Zodiac,
            Self::Numerology,
        ]
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tarot => write!(f, "tarot"),
            Self::Runes => write!(f, "runes"),
            Self::Hexagrams => write!(f, "hexagrams"),
            Self::Zodiac => write!(f, "zodiac"),
            Self::Numerology => write!(f, "numerology"),
        }
    }
}

/// Domain-specific attributes of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityDetail {
    /// A tarot card.
    Card {
        /// Roman numeral ("0" for The Fool).
        numeral: &'static str,
    },
    /// A rune stone.
    Rune,
    /// An I Ching hexagram.
    Hexagram {
        /// Chinese name.
        chinese: &'static str,
        /// Lower (inner) trigram.
        lower: Trigram,
        /// Upper (outer) trigram.
        upper: Trigram,
    },
    /// A zodiac sign.
    Sign {
        /// Classical element.
        element: Element,
        /// Approximate sun-sign date range.
        dates: &'static str,
        /// Ruling planet.
        ruler: &'static str,
    },
    /// A numerology number.
    Number,
}

/// One item of a catalog: a card, rune, hexagram, sign or number.
///
/// Entities live in `static` tables and are handed out by reference; nothing
/// ever mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymbolicEntity {
    /// Display name, unique within its catalog.
    pub name: &'static str,
    /// Position in the catalog: 0-based for tarot, runes and zodiac; the King
    /// Wen number (1-based) for hexagrams; the number itself for numerology.
    pub ordinal: u32,
    /// Display glyph.
    pub glyph: &'static str,
    /// Upright meaning (judgment text for hexagrams).
    pub upright: &'static str,
    /// Reversed meaning; `None` for hexagrams, signs and numbers.
    pub reversed: Option<&'static str>,
    /// Short keyword set.
    pub keywords: &'static [&'static str],
    /// Domain-specific attributes.
    pub detail: EntityDetail,
}

impl SymbolicEntity {
    /// Whether this entity has a distinct reversed reading.
    pub fn is_reversible(&self) -> bool {
        self.reversed.is_some()
    }

    /// The meaning for the given orientation. Falls back to the upright text
    /// when the entity has no reversed meaning.
    pub fn meaning(&self, reversed: bool) -> &'static str {
        match (reversed, self.reversed) {
            (true, Some(text)) => text,
            _ => self.upright,
        }
    }

    /// The tarot numeral, if this is a card.
    pub fn numeral(&self) -> Option<&'static str> {
        match self.detail {
            EntityDetail::Card { numeral } => Some(numeral),
            _ => None,
        }
    }
}

impl std::fmt::Display for SymbolicEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.numeral() {
            Some(numeral) => write!(f, "{} {numeral} {}", self.glyph, self.name),
            None => write!(f, "{} {}", self.glyph, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ELDER_FUTHARK, HEXAGRAMS, MAJOR_ARCANA};

    #[test]
    fn domain_parse_variants() {
        assert_eq!(Domain::parse("Tarot"), Some(Domain::Tarot));
        assert_eq!(Domain::parse("iching"), Some(Domain::Hexagrams));
        assert_eq!(Domain::parse(" runes "), Some(Domain::Runes));
        assert_eq!(Domain::parse("astrology"), None);
    }

    #[test]
    fn domain_display_roundtrips_through_parse() {
        for d in Domain::all() {
            assert_eq!(Domain::parse(&d.to_string()), Some(*d));
        }
    }

    #[test]
    fn reversed_meaning_falls_back_to_upright() {
        let hex = &HEXAGRAMS[0];
        assert!(!hex.is_reversible());
        assert_eq!(hex.meaning(true), hex.upright);

        let fool = &MAJOR_ARCANA[0];
        assert!(fool.is_reversible());
        assert_ne!(fool.meaning(true), fool.upright);
    }

    #[test]
    fn display_includes_numeral_for_cards() {
        assert_eq!(MAJOR_ARCANA[1].to_string(), "✧ I The Magician");
        assert_eq!(ELDER_FUTHARK[0].to_string(), "ᚠ Fehu");
    }

    #[test]
    fn entity_serializes_detail_with_kind_tag() {
        let json = serde_json::to_value(MAJOR_ARCANA[0]).unwrap();
        assert_eq!(json["name"], "The Fool");
        assert_eq!(json["detail"]["kind"], "card");
        assert_eq!(json["detail"]["numeral"], "0");
    }
}
