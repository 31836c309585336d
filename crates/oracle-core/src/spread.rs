//! Spread layouts: how many entities a reading draws and what each position
//! means.

use serde::Serialize;

/// A named layout of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spread {
    /// Short identifier ("single", "three", ...).
    pub name: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Position labels, in draw order.
    pub positions: &'static [&'static str],
    /// Noun used for unlabelled positions ("Card", "Rune").
    pub unit: &'static str,
}

impl Spread {
    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the spread has no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Label for a 0-based position, e.g. "Past". Positions beyond the
    /// labelled ones are named "`unit` n" (1-based).
    pub fn position_label(&self, index: usize) -> String {
        match self.positions.get(index) {
            Some(label) => (*label).to_string(),
            None => format!("{} {}", self.unit, index + 1),
        }
    }
}

/// Tarot spreads.
pub static TAROT_SPREADS: [Spread; 4] = [
    Spread {
        name: "single",
        title: "Single Card",
        positions: &["The Answer"],
        unit: "Card",
    },
    Spread {
        name: "three",
        title: "Past · Present · Future",
        positions: &["Past", "Present", "Future"],
        unit: "Card",
    },
    Spread {
        name: "five",
        title: "Five Cards",
        positions: &[
            "Situation",
            "Challenge",
            "Foundation",
            "Recent Past",
            "Potential",
        ],
        unit: "Card",
    },
    Spread {
        name: "celtic",
        title: "Celtic Cross",
        positions: &[
            "Present",
            "Challenge",
            "Foundation",
            "Recent Past",
            "Higher Purpose",
            "Near Future",
            "Your Attitude",
            "External Influences",
            "Hopes & Fears",
            "Outcome",
        ],
        unit: "Card",
    },
];

/// Rune casts.
pub static RUNE_SPREADS: [Spread; 3] = [
    Spread {
        name: "single",
        title: "Single Rune",
        positions: &["Guidance"],
        unit: "Rune",
    },
    Spread {
        name: "three",
        title: "Three Runes",
        positions: &["Situation", "Action", "Outcome"],
        unit: "Rune",
    },
    Spread {
        name: "five",
        title: "Five Runes",
        positions: &["Past", "Present", "Future", "Help", "Obstacle"],
        unit: "Rune",
    },
];

/// Find a spread by name (case-insensitive).
pub fn find_spread(spreads: &'static [Spread], name: &str) -> Option<&'static Spread> {
    spreads
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tarot_spread_sizes() {
        let sizes: Vec<_> = TAROT_SPREADS.iter().map(Spread::len).collect();
        assert_eq!(sizes, vec![1, 3, 5, 10]);
    }

    #[test]
    fn find_spread_by_name() {
        assert_eq!(find_spread(&TAROT_SPREADS, "Celtic").map(Spread::len), Some(10));
        assert_eq!(find_spread(&RUNE_SPREADS, "three").map(Spread::len), Some(3));
        assert!(find_spread(&RUNE_SPREADS, "celtic").is_none());
    }

    #[test]
    fn labels_fall_back_past_the_end() {
        let three = &RUNE_SPREADS[1];
        assert_eq!(three.position_label(0), "Situation");
        assert_eq!(three.position_label(3), "Rune 4");
    }
}
