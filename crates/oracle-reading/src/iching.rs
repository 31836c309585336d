//! I Ching readings cast with three coins.

use oracle_core::SymbolicEntity;
use oracle_mechanics::iching::LINE_COUNT;
use oracle_mechanics::{HexagramCast, Line, cast_lines};
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

/// A cast hexagram with the coins that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IChingReading {
    /// The querent's question, if any.
    pub question: Option<String>,
    /// Lines as tossed, bottom first.
    pub lines: [Line; LINE_COUNT],
    /// Resolved hexagram indices and changing lines.
    pub cast: HexagramCast,
}

impl IChingReading {
    /// Resolve already tossed lines.
    pub fn from_lines(lines: [Line; LINE_COUNT], question: Option<&str>) -> Self {
        Self {
            question: question
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(String::from),
            cast: HexagramCast::from_cast(&lines),
            lines,
        }
    }

    /// The primary hexagram.
    pub fn hexagram(&self) -> &'static SymbolicEntity {
        self.cast.hexagram()
    }

    /// The hexagram the changing lines move toward.
    pub fn relating(&self) -> Option<&'static SymbolicEntity> {
        self.cast.relating_hexagram()
    }

    /// Changing lines described as "Line 3: old-yang".
    pub fn changing_descriptions(&self) -> Vec<String> {
        self.cast
            .changing
            .iter()
            .map(|&pos| {
                let kind = self.cast.lines[usize::from(pos) - 1];
                let label = if kind.is_yang() { "old-yang" } else { "old-yin" };
                format!("Line {pos}: {label}")
            })
            .collect()
    }
}

/// Toss six lines and resolve them.
pub fn cast_iching(question: Option<&str>, rng: &mut StdRng) -> IChingReading {
    let reading = IChingReading::from_lines(cast_lines(rng), question);
    debug!(
        index = reading.cast.index,
        changing = reading.cast.changing.len(),
        "hexagram cast"
    );
    reading
}

#[cfg(test)]
mod tests {
    use super::*;
    use oracle_mechanics::{Coin, LineType};
    use rand::SeedableRng;

    fn line(sum: u8) -> Line {
        let coins = match sum {
            6 => [Coin::Tails, Coin::Tails, Coin::Tails],
            7 => [Coin::Heads, Coin::Tails, Coin::Tails],
            8 => [Coin::Heads, Coin::Heads, Coin::Tails],
            _ => [Coin::Heads, Coin::Heads, Coin::Heads],
        };
        Line::from_coins(coins)
    }

    #[test]
    fn resolves_known_lines() {
        let lines = [line(7), line(8), line(9), line(6), line(7), line(8)];
        let reading = IChingReading::from_lines(lines, Some("Which way?"));
        assert_eq!(reading.cast.index, 21);
        assert_eq!(reading.hexagram().ordinal, 22);
        assert_eq!(reading.relating().map(|h| h.ordinal), Some(26));
        assert_eq!(
            reading.changing_descriptions(),
            vec!["Line 3: old-yang", "Line 4: old-yin"]
        );
        assert_eq!(reading.cast.lines[0], LineType::Yang);
    }

    #[test]
    fn stable_cast_has_no_relating() {
        let reading = IChingReading::from_lines([line(7); 6], None);
        assert!(reading.relating().is_none());
        assert!(reading.changing_descriptions().is_empty());
    }

    #[test]
    fn cast_is_reproducible() {
        let a = cast_iching(None, &mut StdRng::seed_from_u64(4));
        let b = cast_iching(None, &mut StdRng::seed_from_u64(4));
        assert_eq!(a, b);
        assert!(a.cast.index < 64);
    }
}
