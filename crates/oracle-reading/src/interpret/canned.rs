//! An offline interpreter assembled from catalog meanings.

use oracle_core::catalog::number_meaning;
use oracle_core::whispers::VEILED_WHISPER;
use oracle_core::{Domain, SHADOW_PROMPTS, SpiritAnswer, find};

use super::request::{DEFAULT_QUESTION, InterpretationRequest};
use super::{InterpretResult, Interpreter};
use crate::chart::BirthChart;
use crate::profile::{NO_CONSONANTS, NO_VOWELS};

/// Builds a reading from the static tables alone. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedInterpreter;

impl CannedInterpreter {
    /// Compose the canned response for a request.
    pub fn compose(&self, request: &InterpretationRequest) -> String {
        match request {
            InterpretationRequest::Tarot {
                cards, question, ..
            } => {
                let mut out = heading(question);
                for card in cards {
                    let meaning = find(Domain::Tarot, &card.name)
                        .map(|e| e.meaning(card.is_reversed))
                        .unwrap_or_default();
                    let turn = if card.is_reversed { ", reversed" } else { "" };
                    out.push_str(&format!(
                        "**{}: {}{turn}**\n{meaning}\n\n",
                        card.position, card.name
                    ));
                }
                out
            }
            InterpretationRequest::Runes {
                runes, question, ..
            } => {
                let mut out = heading(question);
                for rune in runes {
                    let meaning = find(Domain::Runes, &rune.name)
                        .map(|e| e.meaning(rune.is_reversed))
                        .unwrap_or_default();
                    let turn = if rune.is_reversed { ", merkstave" } else { "" };
                    out.push_str(&format!(
                        "**{}: {} {}{turn}**\n{meaning}\n\n",
                        rune.position, rune.symbol, rune.name
                    ));
                }
                out
            }
            InterpretationRequest::Iching {
                hexagram,
                question,
                changing_lines,
            } => {
                let mut out = heading(question);
                out.push_str(&format!(
                    "**{} {}**\n{}\n\n",
                    hexagram.number, hexagram.name, hexagram.judgment
                ));
                if changing_lines.is_empty() {
                    out.push_str("No lines are changing. The situation is settled for now.\n");
                } else {
                    out.push_str(&format!(
                        "Changing: {}. The situation is in motion.\n",
                        changing_lines.join(", ")
                    ));
                }
                out
            }
            InterpretationRequest::Numerology { name, results, .. } => {
                let mut out = format!("## Numerology for {name}\n\n");
                for (title, value, note) in [
                    ("Life Path", Some(results.life_path), ""),
                    ("Expression", Some(results.expression), ""),
                    ("Soul Urge", results.soul_urge, NO_VOWELS),
                    ("Personality", results.personality, NO_CONSONANTS),
                ] {
                    match value {
                        Some(value) => {
                            let meaning = number_meaning(value);
                            out.push_str(&format!(
                                "**{title} {value}: {}**\n{}\n\n",
                                meaning.name, meaning.upright
                            ));
                        }
                        None => out.push_str(&format!(
                            "**{title}**\nThe name has {note}, so this number stays silent.\n\n"
                        )),
                    }
                }
                out
            }
            InterpretationRequest::Birthchart { data } => {
                match BirthChart::cast(&data.date, data.time.as_deref()) {
                    Ok(chart) => {
                        let mut out = format!("## The sky of {}\n\n", display_name(&data.name));
                        out.push_str(&format!(
                            "**Sun in {}**: {}\n",
                            chart.sun.name,
                            chart.sun.keywords.join(", ")
                        ));
                        out.push_str(&format!(
                            "**Moon in {}**: {}\n",
                            chart.moon.name,
                            chart.moon.keywords.join(", ")
                        ));
                        match chart.rising {
                            Some(rising) => out.push_str(&format!(
                                "**{} Rising**: {}\n",
                                rising.name,
                                rising.keywords.join(", ")
                            )),
                            None => out.push_str("Rising sign unknown without a birth time.\n"),
                        }
                        out
                    }
                    Err(e) => format!("The chart could not be drawn: {e}\n"),
                }
            }
            InterpretationRequest::Journal { prompt, .. } => {
                let follow_up = SHADOW_PROMPTS
                    .iter()
                    .find(|p| p.text == prompt.as_str())
                    .and_then(|p| p.follow_up)
                    .unwrap_or("Read it back tomorrow. What would you tell a friend who wrote it?");
                format!("You showed up for the question. That is the work.\n\n> {follow_up}\n")
            }
            InterpretationRequest::Dream {
                mood, symbols, title, ..
            } => {
                let mut out = format!("## {title}\n\n{}\n", mood_reflection(mood));
                if !symbols.is_empty() {
                    out.push_str(&format!(
                        "\nSit with each symbol ({symbols}) and ask what it stands for in waking life.\n"
                    ));
                }
                out
            }
            InterpretationRequest::Ouija { .. } => {
                format!(
                    "{{\"answer\": \"{}\", \"whisper\": \"{VEILED_WHISPER}\"}}",
                    SpiritAnswer::Uncertain
                )
            }
        }
    }
}

impl Interpreter for CannedInterpreter {
    fn interpret(&self, request: &InterpretationRequest) -> InterpretResult<String> {
        Ok(self.compose(request))
    }
}

fn heading(question: &str) -> String {
    let question = if question.trim().is_empty() {
        DEFAULT_QUESTION
    } else {
        question
    };
    format!("## {question}\n\n")
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() { "you" } else { name }
}

fn mood_reflection(mood: &str) -> &'static str {
    match mood.to_ascii_lowercase().as_str() {
        "peaceful" => "A calm dream often marks something settling into place.",
        "anxious" => "Anxious dreams rehearse a worry the waking mind keeps at arm's length.",
        "vivid" => "Vivid dreams ask to be remembered. Write down the details that still glow.",
        "dark" => "Dark dreams bring the shadow close enough to be seen.",
        "strange" => "Strangeness is the unconscious speaking its own language.",
        "joyful" => "Joy in a dream shows what the psyche is reaching toward.",
        "prophetic" => "A dream that feels like a message is worth watching over the coming days.",
        "recurring" => "A recurring dream returns until its question is answered.",
        _ => "Every dream is a letter from the unconscious.",
    }
}
