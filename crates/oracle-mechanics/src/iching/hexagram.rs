//! Mapping six lines to a hexagram.

use oracle_core::SymbolicEntity;
use oracle_core::catalog::HEXAGRAMS;
use serde::{Deserialize, Serialize};

use crate::error::MechResult;

use super::LINE_COUNT;
use super::line::{Line, LineType};

/// Read six lines (bottom first) as a 6-bit number in `0..64`.
pub fn hexagram_index(lines: &[LineType; LINE_COUNT]) -> usize {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| line.bit() << i)
        .sum()
}

/// A resolved casting: primary hexagram, changing lines, relating hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramCast {
    /// Line types, bottom to top.
    pub lines: [LineType; LINE_COUNT],
    /// Zero-based catalog index of the primary hexagram.
    pub index: usize,
    /// Changing line positions, 1-based, bottom to top.
    pub changing: Vec<u8>,
    /// Catalog index after all changing lines flip, if any changed.
    pub relating: Option<usize>,
}

impl HexagramCast {
    /// Resolve six line types.
    pub fn from_lines(lines: [LineType; LINE_COUNT]) -> Self {
        let index = hexagram_index(&lines);
        let changing: Vec<u8> = (1u8..)
            .zip(lines.iter())
            .filter(|(_, line)| line.is_changing())
            .map(|(pos, _)| pos)
            .collect();
        let relating = if changing.is_empty() {
            None
        } else {
            Some(hexagram_index(&lines.map(LineType::changed)))
        };
        Self {
            lines,
            index,
            changing,
            relating,
        }
    }

    /// Resolve a full coin casting.
    pub fn from_cast(lines: &[Line; LINE_COUNT]) -> Self {
        Self::from_lines(lines.map(|line| line.kind))
    }

    /// Resolve six raw coin sums, bottom first.
    pub fn from_sums(sums: [u8; LINE_COUNT]) -> MechResult<Self> {
        let mut lines = [LineType::Yin; LINE_COUNT];
        for (slot, sum) in lines.iter_mut().zip(sums) {
            *slot = LineType::from_sum(sum)?;
        }
        Ok(Self::from_lines(lines))
    }

    /// The primary hexagram.
    pub fn hexagram(&self) -> &'static SymbolicEntity {
        &HEXAGRAMS[self.index % HEXAGRAMS.len()]
    }

    /// The relating hexagram, present only when some line changes.
    pub fn relating_hexagram(&self) -> Option<&'static SymbolicEntity> {
        self.relating.map(|i| &HEXAGRAMS[i % HEXAGRAMS.len()])
    }

    /// Whether any line is changing.
    pub fn has_changing(&self) -> bool {
        !self.changing.is_empty()
    }
}
