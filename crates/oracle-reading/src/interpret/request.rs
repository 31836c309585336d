//! Plain-data summaries of completed readings, ready for an interpreter.

use oracle_core::{Domain, EntityDetail};
use serde::{Deserialize, Serialize};

use crate::iching::IChingReading;
use crate::journal::JournalEntry;
use crate::profile::{NO_CONSONANTS, NO_VOWELS, NumerologyProfile};
use crate::spread::SpreadReading;

/// Question used when the querent did not ask one.
pub const DEFAULT_QUESTION: &str = "What does the universe want me to see right now?";

/// System prompt shared by every prose interpretation.
pub const ORACLE_SYSTEM: &str = "You are Inner Oracle, a wise, poetic and psychologically grounded guide \
for inner transformation. Speak warmly and directly, like a mentor who has done deep inner work. \
Draw on Jungian psychology, esoteric traditions and embodied wisdom. Favour clarity over cliché. \
Use Markdown with clear headers. Be specific and honest.";

/// System prompt for the spirit board, which must answer in JSON.
pub const SPIRIT_SYSTEM: &str =
    "You are a spirit board oracle. Respond only with valid JSON. No markdown, no backticks, just JSON.";

/// A drawn card as sent for interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    /// Card name.
    pub name: String,
    /// Roman numeral.
    pub numeral: String,
    /// Whether it was reversed.
    pub is_reversed: bool,
    /// Position label.
    pub position: String,
}

/// A cast rune as sent for interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuneSummary {
    /// Rune name.
    pub name: String,
    /// Runic character.
    pub symbol: String,
    /// Whether it landed reversed.
    pub is_reversed: bool,
    /// Position label.
    pub position: String,
}

/// A hexagram as sent for interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagramSummary {
    /// King Wen number.
    pub number: u32,
    /// English name.
    pub name: String,
    /// Chinese name.
    pub chinese: String,
    /// Lower and upper trigram names.
    pub trigrams: [String; 2],
    /// Judgment text.
    pub judgment: String,
}

/// The four numerology numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyResults {
    /// Life Path number.
    pub life_path: u32,
    /// Expression number.
    pub expression: u32,
    /// Soul Urge number; absent for a name without vowels.
    pub soul_urge: Option<u32>,
    /// Personality number; absent for a name without consonants.
    pub personality: Option<u32>,
}

/// Birth details for a chart interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthData {
    /// Name of the person.
    pub name: String,
    /// Birth date, `YYYY-MM-DD`.
    pub date: String,
    /// Birth time, `HH:MM`, when known.
    pub time: Option<String>,
    /// Birth place, when given.
    pub location: Option<String>,
}

/// A completed reading summarised for an interpreter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum InterpretationRequest {
    /// A tarot spread.
    Tarot {
        /// Cards in position order.
        cards: Vec<CardSummary>,
        /// The question, possibly empty.
        question: String,
        /// Spread name.
        spread_type: String,
    },
    /// A rune cast.
    Runes {
        /// Runes in position order.
        runes: Vec<RuneSummary>,
        /// The question, possibly empty.
        question: String,
        /// Spread name.
        spread_type: String,
    },
    /// An I Ching cast.
    Iching {
        /// The primary hexagram.
        hexagram: HexagramSummary,
        /// The question, possibly empty.
        question: String,
        /// Changing lines as "Line n: old-yang".
        changing_lines: Vec<String>,
    },
    /// A numerology profile.
    Numerology {
        /// Full name.
        name: String,
        /// Birth date.
        birth_date: String,
        /// The computed numbers.
        results: NumerologyResults,
    },
    /// A birth chart.
    Birthchart {
        /// Birth details.
        data: BirthData,
    },
    /// A shadow-work journal entry.
    Journal {
        /// What was written.
        entry: String,
        /// The prompt it answers.
        prompt: String,
    },
    /// A dream.
    Dream {
        /// The dream itself.
        content: String,
        /// How it felt.
        mood: String,
        /// Symbols noticed.
        symbols: String,
        /// Short title.
        title: String,
    },
    /// A spirit-board question.
    Ouija {
        /// The yes-or-no question.
        question: String,
    },
}

impl From<&SpreadReading> for InterpretationRequest {
    fn from(reading: &SpreadReading) -> Self {
        let question = reading.question.clone().unwrap_or_default();
        let spread_type = reading.spread.name.to_string();
        match reading.domain {
            Domain::Runes => Self::Runes {
                runes: reading
                    .placements
                    .iter()
                    .map(|p| RuneSummary {
                        name: p.entity.name.to_string(),
                        symbol: p.entity.glyph.to_string(),
                        is_reversed: p.reversed,
                        position: p.position.clone(),
                    })
                    .collect(),
                question,
                spread_type,
            },
            _ => Self::Tarot {
                cards: reading
                    .placements
                    .iter()
                    .map(|p| CardSummary {
                        name: p.entity.name.to_string(),
                        numeral: p.entity.numeral().unwrap_or_default().to_string(),
                        is_reversed: p.reversed,
                        position: p.position.clone(),
                    })
                    .collect(),
                question,
                spread_type,
            },
        }
    }
}

impl From<&IChingReading> for InterpretationRequest {
    fn from(reading: &IChingReading) -> Self {
        let hex = reading.hexagram();
        let trigrams = match hex.detail {
            EntityDetail::Hexagram { lower, upper, .. } => [lower.to_string(), upper.to_string()],
            _ => [String::new(), String::new()],
        };
        let chinese = match hex.detail {
            EntityDetail::Hexagram { chinese, .. } => chinese.to_string(),
            _ => String::new(),
        };
        Self::Iching {
            hexagram: HexagramSummary {
                number: hex.ordinal,
                name: hex.name.to_string(),
                chinese,
                trigrams,
                judgment: hex.upright.to_string(),
            },
            question: reading.question.clone().unwrap_or_default(),
            changing_lines: reading.changing_descriptions(),
        }
    }
}

impl From<&NumerologyProfile> for InterpretationRequest {
    fn from(profile: &NumerologyProfile) -> Self {
        Self::Numerology {
            name: profile.name.clone(),
            birth_date: profile.birth_date.clone(),
            results: NumerologyResults {
                life_path: profile.life_path.value(),
                expression: profile.expression.value(),
                soul_urge: profile.soul_urge.map(|n| n.value()),
                personality: profile.personality.map(|n| n.value()),
            },
        }
    }
}

impl InterpretationRequest {
    /// Request a birth chart reading.
    pub fn birth_chart(name: &str, date: &str, time: Option<&str>, location: Option<&str>) -> Self {
        let owned = |s: Option<&str>| s.map(str::trim).filter(|s| !s.is_empty()).map(String::from);
        Self::Birthchart {
            data: BirthData {
                name: name.trim().to_string(),
                date: date.trim().to_string(),
                time: owned(time),
                location: owned(location),
            },
        }
    }

    /// Request a spirit-board answer.
    pub fn ouija(question: &str) -> Self {
        Self::Ouija {
            question: question.trim().to_string(),
        }
    }

    /// Request an insight for a shadow entry or a dream. Other entry kinds
    /// have nothing to interpret.
    pub fn from_entry(entry: &JournalEntry) -> Option<Self> {
        match entry {
            JournalEntry::Shadow { prompt, text, .. } => Some(Self::Journal {
                entry: text.clone(),
                prompt: prompt.clone(),
            }),
            JournalEntry::Dream {
                title,
                content,
                mood,
                symbols,
                ..
            } => Some(Self::Dream {
                content: content.clone(),
                mood: mood.to_string(),
                symbols: symbols.clone(),
                title: title.clone(),
            }),
            JournalEntry::Reflection { .. } | JournalEntry::Reading { .. } => None,
        }
    }

    /// The `type` tag of this request.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tarot { .. } => "tarot",
            Self::Runes { .. } => "runes",
            Self::Iching { .. } => "iching",
            Self::Numerology { .. } => "numerology",
            Self::Birthchart { .. } => "birthchart",
            Self::Journal { .. } => "journal",
            Self::Dream { .. } => "dream",
            Self::Ouija { .. } => "ouija",
        }
    }

    /// The system prompt to pair with [`prompt`](Self::prompt).
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Self::Ouija { .. } => SPIRIT_SYSTEM,
            _ => ORACLE_SYSTEM,
        }
    }

    /// The user message describing this reading to a text model.
    pub fn prompt(&self) -> String {
        match self {
            Self::Tarot {
                cards,
                question,
                spread_type,
            } => {
                let lines: Vec<String> = cards
                    .iter()
                    .map(|c| {
                        format!(
                            "{}: {} {} ({})",
                            c.position,
                            c.numeral,
                            c.name,
                            orientation(c.is_reversed)
                        )
                    })
                    .collect();
                format!(
                    "The querent asks: \"{}\"\n\nSpread type: {spread_type}\nCards drawn:\n{}\n\n\
                     Interpret each card in its position with psychological depth, weave the cards \
                     into one narrative, and end with a direct question for the querent to sit with.",
                    or_default(question),
                    lines.join("\n")
                )
            }
            Self::Runes {
                runes,
                question,
                spread_type,
            } => {
                let lines: Vec<String> = runes
                    .iter()
                    .map(|r| {
                        format!(
                            "{}: {} {} ({})",
                            r.position,
                            r.symbol,
                            r.name,
                            if r.is_reversed { "Merkstave" } else { "Upright" }
                        )
                    })
                    .collect();
                format!(
                    "The querent asks: \"{}\"\n\nRune spread: {spread_type}\nRunes cast:\n{}\n\n\
                     Read each rune in its position, show how they speak to one another, and close \
                     with practical guidance.",
                    or_default(question),
                    lines.join("\n")
                )
            }
            Self::Iching {
                hexagram,
                question,
                changing_lines,
            } => {
                let changing = if changing_lines.is_empty() {
                    "None".to_string()
                } else {
                    changing_lines.join(", ")
                };
                format!(
                    "The querent asks: \"{}\"\n\nHexagram {}: {} ({})\nTrigrams: {} below, {} above\n\
                     Judgment: {}\nChanging lines: {changing}\n\n\
                     Interpret the hexagram for this question. If lines are changing, describe the \
                     movement they point to.",
                    or_default(question),
                    hexagram.number,
                    hexagram.name,
                    hexagram.chinese,
                    hexagram.trigrams[0],
                    hexagram.trigrams[1],
                    hexagram.judgment
                )
            }
            Self::Numerology {
                name,
                birth_date,
                results,
            } => format!(
                "Provide a numerology reading for:\nName: {name}\nBirth Date: {birth_date}\n\n\
                 Life Path: {}\nExpression: {}\nSoul Urge: {}\nPersonality: {}\n\n\
                 Cover each number, then how the four interact: the gifts and the shadows.",
                results.life_path,
                results.expression,
                or_missing(results.soul_urge, NO_VOWELS),
                or_missing(results.personality, NO_CONSONANTS)
            ),
            Self::Birthchart { data } => format!(
                "Generate a birth chart reading for:\nName: {}\nBirth Date: {}\nBirth Time: {}\n\
                 Location: {}\n\nCover the Sun, Moon and Rising (if the time is known), the personal \
                 planets, Saturn's lessons, and a synthesis of the whole chart.",
                data.name,
                data.date,
                data.time.as_deref().unwrap_or("Unknown"),
                data.location.as_deref().unwrap_or("Not provided")
            ),
            Self::Journal { entry, prompt } => format!(
                "A person doing shadow work wrote this entry.\n\n**Prompt:** \"{prompt}\"\n\n\
                 **Their entry:**\n\"{entry}\"\n\nMirror back what you see, name what they might not \
                 be seeing, point to the growth edge, and end with one deeper follow-up question. \
                 Keep it under 400 words."
            ),
            Self::Dream {
                content,
                mood,
                symbols,
                title,
            } => format!(
                "Interpret this dream.\n\nTitle: {title}\nMood: {mood}\nSymbols: {}\n\n{content}\n\n\
                 Explore the symbols through a Jungian lens, connect the mood to waking life, and \
                 end with a question for reflection.",
                if symbols.is_empty() { "None noted" } else { symbols }
            ),
            Self::Ouija { question } => format!(
                "A person asked a spirit board this yes-or-no question:\n\"{question}\"\n\n\
                 Respond with a JSON object with \"answer\" (YES, NO or UNCERTAIN) and \"whisper\" \
                 (one cryptic sentence that speaks to what they are really asking). Respond only \
                 with the JSON object."
            ),
        }
    }
}

fn orientation(reversed: bool) -> &'static str {
    if reversed { "Reversed" } else { "Upright" }
}

/// A number, or why it is missing.
fn or_missing(value: Option<u32>, note: &str) -> String {
    value.map_or_else(|| format!("none ({note})"), |v| v.to_string())
}

fn or_default(question: &str) -> &str {
    if question.trim().is_empty() {
        DEFAULT_QUESTION
    } else {
        question
    }
}
