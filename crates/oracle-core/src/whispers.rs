//! Spirit-board answers and the whispers that accompany them.

use serde::{Deserialize, Serialize};

/// The planchette's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpiritAnswer {
    /// Affirmative.
    Yes,
    /// Negative.
    No,
    /// The board will not commit.
    Uncertain,
}

impl SpiritAnswer {
    /// The whisper pool for this answer.
    pub fn whispers(self) -> &'static [&'static str] {
        match self {
            Self::Yes => &YES_WHISPERS,
            Self::No => &NO_WHISPERS,
            Self::Uncertain => &UNCERTAIN_WHISPERS,
        }
    }
}

impl std::fmt::Display for SpiritAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "YES"),
            Self::No => write!(f, "NO"),
            Self::Uncertain => write!(f, "UNCERTAIN"),
        }
    }
}

/// Whispers for a YES.
pub static YES_WHISPERS: [&str; 8] = [
    "The path is clear.",
    "Trust what you already feel.",
    "The answer was always within you.",
    "Move forward with quiet confidence.",
    "Something is aligning in your favor.",
    "Your intuition is correct.",
    "The door is open. Walk through.",
    "You have permission to believe this.",
];

/// Whispers for a NO.
pub static NO_WHISPERS: [&str; 8] = [
    "Not this. Something better awaits.",
    "Listen to the resistance. It protects you.",
    "This is not your path right now.",
    "Release what you are holding too tightly.",
    "Look at what you are avoiding.",
    "The timing is wrong, not you.",
    "There is a lesson in this no.",
    "What you truly need lies elsewhere.",
];

/// Whispers for an UNCERTAIN.
pub static UNCERTAIN_WHISPERS: [&str; 6] = [
    "The answer lives in a question you haven't asked yet.",
    "Sit with the not-knowing a little longer.",
    "You are asking with your mind. Ask with your body.",
    "Come back when the moon changes.",
    "The spirits see fog where you see a road.",
    "Ask again, but ask what you really mean.",
];

/// Fallback when an interpretation of the board cannot be produced.
pub const VEILED_WHISPER: &str = "The veil is thick. Ask again with your real question.";
