//! Three-coin I Ching casting and the line-to-hexagram mapper.
//!
//! Lines are cast bottom to top. Each line is the sum of three coins
//! (heads 3, tails 2); the sum decides whether the line is yin or yang and
//! whether it is changing. The six lines then read as a 6-bit number that
//! indexes the hexagram catalog directly.

pub mod hexagram;
pub mod line;

pub use hexagram::{HexagramCast, hexagram_index};
pub use line::{Coin, Line, LineType, cast_lines, toss_line};

/// Number of lines in a hexagram.
pub const LINE_COUNT: usize = 6;
