//! Static, order-stable catalogs of symbolic entities.
//!
//! Every catalog is a `static` array built at compile time. Lookups hand out
//! `&'static` references and never fail.

pub mod hexagrams;
pub mod numbers;
pub mod runes;
pub mod tarot;
pub mod zodiac;

pub use hexagrams::{HEXAGRAMS, Trigram};
pub use numbers::{NUMBER_MEANINGS, UNKNOWN_NUMBER, number_meaning};
pub use runes::ELDER_FUTHARK;
pub use tarot::MAJOR_ARCANA;
pub use zodiac::{Element, HOUSES, PLANETS, ZODIAC_SIGNS};

use crate::entity::{Domain, SymbolicEntity};

/// The full, ordered catalog for a domain.
pub fn catalog(domain: Domain) -> &'static [SymbolicEntity] {
    match domain {
        Domain::Tarot => &MAJOR_ARCANA,
        Domain::Runes => &ELDER_FUTHARK,
        Domain::Hexagrams => &HEXAGRAMS,
        Domain::Zodiac => &ZODIAC_SIGNS,
        Domain::Numerology => &NUMBER_MEANINGS,
    }
}

/// Find an entity by name (case-insensitive) within a domain.
pub fn find(domain: Domain, name: &str) -> Option<&'static SymbolicEntity> {
    catalog(domain)
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::entity::EntityDetail;

    #[test]
    fn catalog_sizes() {
        assert_eq!(catalog(Domain::Tarot).len(), 22);
        assert_eq!(catalog(Domain::Runes).len(), 24);
        assert_eq!(catalog(Domain::Hexagrams).len(), 64);
        assert_eq!(catalog(Domain::Zodiac).len(), 12);
        assert_eq!(catalog(Domain::Numerology).len(), 12);
    }

    #[test]
    fn zero_based_ordinals_match_position() {
        for domain in [Domain::Tarot, Domain::Runes, Domain::Zodiac] {
            for (i, e) in catalog(domain).iter().enumerate() {
                assert_eq!(e.ordinal as usize, i, "{domain}: {}", e.name);
            }
        }
    }

    #[test]
    fn hexagrams_are_numbered_from_one() {
        for (i, h) in HEXAGRAMS.iter().enumerate() {
            assert_eq!(h.ordinal as usize, i + 1, "{}", h.name);
        }
        assert_eq!(HEXAGRAMS[0].name, "The Creative");
        assert_eq!(HEXAGRAMS[63].name, "Before Completion");
    }

    #[test]
    fn hexagram_trigrams_follow_king_wen() {
        let EntityDetail::Hexagram { lower, upper, .. } = HEXAGRAMS[10].detail else {
            panic!("not a hexagram");
        };
        // 11, Peace: heaven below, earth above
        assert_eq!(lower, Trigram::Heaven);
        assert_eq!(upper, Trigram::Earth);
    }

    #[test]
    fn every_trigram_pair_appears_once() {
        let pairs: HashSet<_> = HEXAGRAMS
            .iter()
            .filter_map(|h| match h.detail {
                EntityDetail::Hexagram { lower, upper, .. } => Some((lower, upper)),
                _ => None,
            })
            .collect();
        assert_eq!(pairs.len(), 64);
    }

    #[test]
    fn names_are_unique_per_catalog() {
        for domain in Domain::all() {
            let names: HashSet<_> = catalog(*domain).iter().map(|e| e.name).collect();
            assert_eq!(names.len(), catalog(*domain).len(), "{domain}");
        }
    }

    #[test]
    fn reversed_meanings_only_where_expected() {
        assert!(MAJOR_ARCANA.iter().all(|c| c.is_reversible()));
        assert!(ELDER_FUTHARK.iter().all(|r| r.is_reversible()));
        assert!(HEXAGRAMS.iter().all(|h| !h.is_reversible()));
        assert!(ZODIAC_SIGNS.iter().all(|s| !s.is_reversible()));
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find(Domain::Tarot, "the tower").map(|e| e.ordinal), Some(16));
        assert_eq!(find(Domain::Runes, "ODIN"), None);
        assert_eq!(find(Domain::Zodiac, "pisces").map(|e| e.glyph), Some("♓"));
    }
}
