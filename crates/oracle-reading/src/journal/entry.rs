//! Journal entry types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ReadingError, ReadingResult};

/// How a dream felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DreamMood {
    /// Calm.
    Peaceful,
    /// Uneasy.
    Anxious,
    /// Unusually sharp.
    Vivid,
    /// Heavy or frightening.
    Dark,
    /// Surreal.
    Strange,
    /// Happy.
    Joyful,
    /// Felt like a message.
    Prophetic,
    /// Seen before.
    Recurring,
}

impl DreamMood {
    /// Parse a mood name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|m| m.to_string().eq_ignore_ascii_case(s))
    }

    /// Every mood, in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Peaceful,
            Self::Anxious,
            Self::Vivid,
            Self::Dark,
            Self::Strange,
            Self::Joyful,
            Self::Prophetic,
            Self::Recurring,
        ]
    }
}

impl std::fmt::Display for DreamMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Peaceful => write!(f, "Peaceful"),
            Self::Anxious => write!(f, "Anxious"),
            Self::Vivid => write!(f, "Vivid"),
            Self::Dark => write!(f, "Dark"),
            Self::Strange => write!(f, "Strange"),
            Self::Joyful => write!(f, "Joyful"),
            Self::Prophetic => write!(f, "Prophetic"),
            Self::Recurring => write!(f, "Recurring"),
        }
    }
}

impl std::str::FromStr for DreamMood {
    type Err = ReadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ReadingError::UnknownMood(s.to_string()))
    }
}

/// A single entry in the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A response to a shadow-work prompt.
    Shadow {
        /// Entry id.
        id: Uuid,
        /// The prompt answered.
        prompt: String,
        /// Theme of the prompt.
        theme: String,
        /// What was written.
        text: String,
        /// Interpretation attached later, if any.
        insight: Option<String>,
        /// When written.
        timestamp: DateTime<Utc>,
    },
    /// A recorded dream.
    Dream {
        /// Entry id.
        id: Uuid,
        /// Short title.
        title: String,
        /// The dream itself.
        content: String,
        /// How it felt.
        mood: DreamMood,
        /// Symbols noticed, as written.
        symbols: String,
        /// Interpretation attached later, if any.
        interpretation: Option<String>,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
    /// A reflection written against the daily oracle.
    Reflection {
        /// Entry id.
        id: Uuid,
        /// The oracle's date.
        date: NaiveDate,
        /// What was written.
        text: String,
        /// When written.
        timestamp: DateTime<Utc>,
    },
    /// A reading kept for later.
    Reading {
        /// Entry id.
        id: Uuid,
        /// Kind of reading ("tarot", "iching", ...).
        kind: String,
        /// One-line summary of what was drawn.
        summary: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}

fn required(text: &str) -> ReadingResult<String> {
    let text = text.trim();
    if text.is_empty() {
        Err(ReadingError::EmptyEntry)
    } else {
        Ok(text.to_string())
    }
}

impl JournalEntry {
    /// A new shadow-work entry.
    pub fn shadow(prompt: &str, theme: &str, text: &str) -> ReadingResult<Self> {
        Ok(Self::Shadow {
            id: Uuid::new_v4(),
            prompt: prompt.to_string(),
            theme: theme.to_string(),
            text: required(text)?,
            insight: None,
            timestamp: Utc::now(),
        })
    }

    /// A new dream entry. An empty title becomes "Untitled Dream".
    pub fn dream(title: &str, content: &str, mood: DreamMood, symbols: &str) -> ReadingResult<Self> {
        let title = title.trim();
        Ok(Self::Dream {
            id: Uuid::new_v4(),
            title: if title.is_empty() {
                "Untitled Dream".to_string()
            } else {
                title.to_string()
            },
            content: required(content)?,
            mood,
            symbols: symbols.trim().to_string(),
            interpretation: None,
            timestamp: Utc::now(),
        })
    }

    /// A new daily reflection.
    pub fn reflection(date: NaiveDate, text: &str) -> ReadingResult<Self> {
        Ok(Self::Reflection {
            id: Uuid::new_v4(),
            date,
            text: required(text)?,
            timestamp: Utc::now(),
        })
    }

    /// A new recorded reading.
    pub fn reading(kind: &str, summary: &str) -> Self {
        Self::Reading {
            id: Uuid::new_v4(),
            kind: kind.to_string(),
            summary: summary.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// The entry's id.
    pub fn id(&self) -> Uuid {
        match self {
            Self::Shadow { id, .. }
            | Self::Dream { id, .. }
            | Self::Reflection { id, .. }
            | Self::Reading { id, .. } => *id,
        }
    }

    /// When the entry was written.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Shadow { timestamp, .. }
            | Self::Dream { timestamp, .. }
            | Self::Reflection { timestamp, .. }
            | Self::Reading { timestamp, .. } => *timestamp,
        }
    }

    /// Render the entry as a markdown section.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let when = self.timestamp().format("%Y-%m-%d %H:%M");
        match self {
            Self::Shadow {
                prompt,
                theme,
                text,
                insight,
                ..
            } => {
                out.push_str(&format!("## {theme} ({when})\n\n"));
                out.push_str(&format!("*{prompt}*\n\n"));
                out.push_str(&format!("{text}\n\n"));
                if let Some(insight) = insight {
                    out.push_str(&format!("> **Insight**: {insight}\n\n"));
                }
            }
            Self::Dream {
                title,
                content,
                mood,
                symbols,
                interpretation,
                ..
            } => {
                out.push_str(&format!("## Dream: {title} ({when})\n\n"));
                out.push_str(&format!("**Mood**: {mood}\n"));
                if !symbols.is_empty() {
                    out.push_str(&format!("**Symbols**: {symbols}\n"));
                }
                out.push_str(&format!("\n{content}\n\n"));
                if let Some(interpretation) = interpretation {
                    out.push_str(&format!("> **Interpretation**: {interpretation}\n\n"));
                }
            }
            Self::Reflection { date, text, .. } => {
                out.push_str(&format!("## Daily reflection for {date}\n\n"));
                out.push_str(&format!("{text}\n\n"));
            }
            Self::Reading { kind, summary, .. } => {
                out.push_str(&format!("**Reading** ({kind}, {when}): {summary}\n\n"));
            }
        }
        out
    }

    /// Attach an interpretation to a shadow or dream entry. Returns `false`
    /// for entry kinds that carry none.
    pub fn attach_insight(&mut self, text: &str) -> bool {
        match self {
            Self::Shadow { insight, .. } => {
                *insight = Some(text.to_string());
                true
            }
            Self::Dream { interpretation, .. } => {
                *interpretation = Some(text.to_string());
                true
            }
            Self::Reflection { .. } | Self::Reading { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_parse_roundtrip() {
        for mood in DreamMood::all() {
            assert_eq!(DreamMood::parse(&mood.to_string()), Some(*mood));
        }
        assert_eq!(DreamMood::parse("vivid"), Some(DreamMood::Vivid));
        assert_eq!(DreamMood::parse("sleepy"), None);
        assert!("sleepy".parse::<DreamMood>().is_err());
    }

    #[test]
    fn entries_get_distinct_ids() {
        let a = JournalEntry::reading("tarot", "The Fool");
        let b = JournalEntry::reading("tarot", "The Fool");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn empty_text_is_refused() {
        assert!(matches!(
            JournalEntry::shadow("p", "Shadow", "   "),
            Err(ReadingError::EmptyEntry)
        ));
        assert!(JournalEntry::dream("t", "", DreamMood::Dark, "").is_err());
    }

    #[test]
    fn untitled_dream() {
        let entry = JournalEntry::dream(" ", "A river of glass", DreamMood::Vivid, "river").unwrap();
        let JournalEntry::Dream { title, .. } = entry else {
            panic!("expected dream");
        };
        assert_eq!(title, "Untitled Dream");
    }

    #[test]
    fn insight_only_on_written_entries() {
        let mut shadow = JournalEntry::shadow("p", "Shadow", "text").unwrap();
        assert!(shadow.attach_insight("seen"));
        let mut reading = JournalEntry::reading("runes", "Fehu");
        assert!(!reading.attach_insight("seen"));
    }

    #[test]
    fn markdown_section_per_kind() {
        let mut shadow = JournalEntry::shadow("What do I hide?", "Shadow", "Envy.").unwrap();
        shadow.attach_insight("Envy points at a wish.");
        let md = shadow.to_markdown();
        assert!(md.starts_with("## Shadow ("));
        assert!(md.contains("*What do I hide?*"));
        assert!(md.contains("> **Insight**: Envy points at a wish."));

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let reflection = JournalEntry::reflection(date, "Quiet.").unwrap();
        assert!(reflection.to_markdown().contains("## Daily reflection for 2024-01-01"));

        let reading = JournalEntry::reading("tarot", "Past: The Fool");
        assert!(reading.to_markdown().contains("**Reading** (tarot, "));
    }
}
