pub mod chart;
pub mod daily;
pub mod iching;
pub mod journal;
pub mod lookup;
pub mod numerology;
pub mod ouija;
pub mod prompt;
pub mod runes;
pub mod tarot;

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use oracle_reading::spread::SpreadReading;
use oracle_reading::{
    CannedInterpreter, InterpretationRequest, Journal, JournalEntry, Oracle, ReadingConfig,
    interpret_or_fallback,
};

/// Global output options shared by every reading command.
pub struct Output {
    pub seed: Option<u64>,
    pub json: bool,
    pub interpret: bool,
    pub record: Option<PathBuf>,
}

impl Output {
    /// A session configured from the global flags.
    fn oracle(&self) -> Oracle {
        let mut config = ReadingConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Oracle::new(config)
    }

    /// Print JSON, or run `text` to print the human-readable form; then
    /// the interpretation and journal record if asked for.
    fn finish<T: Serialize>(
        &self,
        reading: &T,
        request: Option<&InterpretationRequest>,
        kind: &str,
        summary: &str,
        text: impl FnOnce(),
    ) -> Result<(), String> {
        if self.json {
            let value = serde_json::json!({
                "reading": reading,
                "request": request,
            });
            let rendered = serde_json::to_string_pretty(&value)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{rendered}");
        } else {
            text();
            if let Some(request) = request.filter(|_| self.interpret) {
                print_interpretation(request);
            }
        }

        if let Some(path) = &self.record {
            let mut journal = load_journal(path)?;
            journal.append(JournalEntry::reading(kind, summary));
            save_journal(path, &journal)?;
            debug!(kind, path = %path.display(), "reading recorded");
            if !self.json {
                println!("  Recorded in {}", path.display());
            }
        }
        Ok(())
    }
}

fn print_interpretation(request: &InterpretationRequest) {
    let text = interpret_or_fallback(&CannedInterpreter, request);
    println!("  {}", "Interpretation".bold());
    println!();
    for line in text.lines() {
        println!("  {line}");
    }
}

/// Print a tarot or rune spread.
fn print_spread(reading: &SpreadReading) {
    println!("  {}", reading.spread.title.bold());
    if let Some(question) = &reading.question {
        println!("  {}", format!("\"{question}\"").italic());
    }
    println!();
    for p in &reading.placements {
        let name = match p.entity.numeral() {
            Some(numeral) => format!("{} {numeral} {}", p.entity.glyph, p.entity.name),
            None => format!("{} {}", p.entity.glyph, p.entity.name),
        };
        let orientation = if p.reversed {
            p.orientation().red().to_string()
        } else {
            p.orientation().green().to_string()
        };
        println!("  {} {} ({orientation})", format!("{}:", p.position).dimmed(), name.bold());
        println!("    {}", p.meaning());
        println!();
    }
}

/// One-line summary of a spread for the journal.
fn spread_summary(reading: &SpreadReading) -> String {
    let cards: Vec<String> = reading
        .placements
        .iter()
        .map(|p| {
            if p.reversed {
                format!("{}: {} (reversed)", p.position, p.entity.name)
            } else {
                format!("{}: {}", p.position, p.entity.name)
            }
        })
        .collect();
    cards.join("; ")
}

/// Load a journal file; a missing file is an empty journal.
fn load_journal(path: &Path) -> Result<Journal, String> {
    if !path.exists() {
        return Ok(Journal::new());
    }
    let blob = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Journal::from_json(&blob).map_err(|e| format!("cannot load {}: {e}", path.display()))
}

fn save_journal(path: &Path, journal: &Journal) -> Result<(), String> {
    let blob = journal.to_json().map_err(|e| e.to_string())?;
    std::fs::write(path, blob).map_err(|e| format!("cannot write to {}: {e}", path.display()))
}
