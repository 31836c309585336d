//! Coins, lines, and line types.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

use super::LINE_COUNT;

/// One face of a casting coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    /// Counts as 3.
    Heads,
    /// Counts as 2.
    Tails,
}

impl Coin {
    /// Numeric value of this face.
    pub fn value(self) -> u8 {
        match self {
            Self::Heads => 3,
            Self::Tails => 2,
        }
    }

    /// Toss a fair coin.
    pub fn toss(rng: &mut StdRng) -> Self {
        if rng.random_bool(0.5) {
            Self::Heads
        } else {
            Self::Tails
        }
    }
}

/// The four kinds of I Ching line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineType {
    /// Sum 6: yin, changing into yang.
    OldYin,
    /// Sum 7: stable yang.
    Yang,
    /// Sum 8: stable yin.
    Yin,
    /// Sum 9: yang, changing into yin.
    OldYang,
}

impl LineType {
    /// Classify a three-coin sum.
    pub fn from_sum(sum: u8) -> MechResult<Self> {
        match sum {
            6 => Ok(Self::OldYin),
            7 => Ok(Self::Yang),
            8 => Ok(Self::Yin),
            9 => Ok(Self::OldYang),
            other => Err(MechError::InvalidLineSum(other)),
        }
    }

    /// The coin sum this line type comes from.
    pub fn sum(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::Yang => 7,
            Self::Yin => 8,
            Self::OldYang => 9,
        }
    }

    /// Whether the line is solid.
    pub fn is_yang(self) -> bool {
        matches!(self, Self::Yang | Self::OldYang)
    }

    /// Whether the line is changing.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// The stable line this one becomes in the relating hexagram.
    pub fn changed(self) -> Self {
        match self {
            Self::OldYin => Self::Yang,
            Self::OldYang => Self::Yin,
            stable => stable,
        }
    }

    /// Bit value used by the hexagram mapper.
    pub fn bit(self) -> usize {
        usize::from(self.is_yang())
    }

    /// Textual line drawing, broken for yin and solid for yang.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::OldYin => "━━ ━━ ×",
            Self::Yang => "━━━━━",
            Self::Yin => "━━ ━━",
            Self::OldYang => "━━━━━ ○",
        }
    }
}

impl std::fmt::Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OldYin => write!(f, "old yin"),
            Self::Yang => write!(f, "yang"),
            Self::Yin => write!(f, "yin"),
            Self::OldYang => write!(f, "old yang"),
        }
    }
}

/// One cast line: its three coins and the resulting type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// The three coins as they fell.
    pub coins: [Coin; 3],
    /// Line type derived from the coin sum.
    pub kind: LineType,
}

impl Line {
    /// Build a line from three coins.
    pub fn from_coins(coins: [Coin; 3]) -> Self {
        let sum: u8 = coins.iter().map(|c| c.value()).sum();
        // Three coins of 2 or 3 always sum to 6..=9.
        let kind = match sum {
            6 => LineType::OldYin,
            7 => LineType::Yang,
            8 => LineType::Yin,
            _ => LineType::OldYang,
        };
        Self { coins, kind }
    }

    /// Sum of the three coins.
    pub fn sum(&self) -> u8 {
        self.kind.sum()
    }
}

/// Toss three coins for a single line.
pub fn toss_line(rng: &mut StdRng) -> Line {
    Line::from_coins([Coin::toss(rng), Coin::toss(rng), Coin::toss(rng)])
}

/// Cast a full hexagram, bottom line first.
pub fn cast_lines(rng: &mut StdRng) -> [Line; LINE_COUNT] {
    std::array::from_fn(|_| toss_line(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn coin_values() {
        assert_eq!(Coin::Heads.value(), 3);
        assert_eq!(Coin::Tails.value(), 2);
    }

    #[test]
    fn sums_classify() {
        assert_eq!(LineType::from_sum(6).unwrap(), LineType::OldYin);
        assert_eq!(LineType::from_sum(7).unwrap(), LineType::Yang);
        assert_eq!(LineType::from_sum(8).unwrap(), LineType::Yin);
        assert_eq!(LineType::from_sum(9).unwrap(), LineType::OldYang);
        assert_eq!(LineType::from_sum(5), Err(MechError::InvalidLineSum(5)));
        assert_eq!(LineType::from_sum(10), Err(MechError::InvalidLineSum(10)));
    }

    #[test]
    fn yang_and_changing() {
        assert!(LineType::Yang.is_yang());
        assert!(LineType::OldYang.is_yang());
        assert!(!LineType::Yin.is_yang());
        assert!(!LineType::OldYin.is_yang());
        assert!(LineType::OldYin.is_changing());
        assert!(LineType::OldYang.is_changing());
        assert!(!LineType::Yang.is_changing());
    }

    #[test]
    fn changing_lines_flip() {
        assert_eq!(LineType::OldYin.changed(), LineType::Yang);
        assert_eq!(LineType::OldYang.changed(), LineType::Yin);
        assert_eq!(LineType::Yin.changed(), LineType::Yin);
        assert_eq!(LineType::Yang.changed(), LineType::Yang);
    }

    #[test]
    fn line_from_coins() {
        let line = Line::from_coins([Coin::Heads, Coin::Heads, Coin::Heads]);
        assert_eq!(line.kind, LineType::OldYang);
        assert_eq!(line.sum(), 9);
        let line = Line::from_coins([Coin::Tails, Coin::Tails, Coin::Tails]);
        assert_eq!(line.kind, LineType::OldYin);
        let line = Line::from_coins([Coin::Heads, Coin::Tails, Coin::Tails]);
        assert_eq!(line.kind, LineType::Yang);
        let line = Line::from_coins([Coin::Heads, Coin::Heads, Coin::Tails]);
        assert_eq!(line.kind, LineType::Yin);
    }

    #[test]
    fn cast_is_six_lines_and_seeded() {
        let mut a = StdRng::seed_from_u64(8);
        let mut b = StdRng::seed_from_u64(8);
        let first = cast_lines(&mut a);
        assert_eq!(first.len(), 6);
        assert_eq!(first, cast_lines(&mut b));
    }

    #[test]
    fn line_type_serde_is_kebab() {
        let json = serde_json::to_string(&LineType::OldYang).unwrap();
        assert_eq!(json, "\"old-yang\"");
    }
}
