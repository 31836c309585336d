use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use uuid::Uuid;

use oracle_core::SHADOW_PROMPTS;
use oracle_reading::journal::DreamMood;
use oracle_reading::{
    CannedInterpreter, InterpretationRequest, Journal, JournalEntry, interpret_or_fallback,
};

use super::{Output, load_journal, save_journal};

/// Append `entry`, attaching an offline insight first when asked to.
fn save_entry(out: &Output, path: &Path, mut entry: JournalEntry) -> Result<(), String> {
    if let Some(request) = InterpretationRequest::from_entry(&entry).filter(|_| out.interpret) {
        let insight = interpret_or_fallback(&CannedInterpreter, &request);
        entry.attach_insight(&insight);
        for line in insight.lines() {
            println!("  {line}");
        }
        println!();
    }
    let mut journal = load_journal(path)?;
    let id = journal.append(entry);
    save_journal(path, &journal)?;
    println!("  Saved entry {} to {}", id.to_string().dimmed(), path.display());
    Ok(())
}

pub fn add(
    out: &Output,
    path: &Path,
    text: &str,
    prompt: Option<&str>,
    theme: Option<&str>,
) -> Result<(), String> {
    let (prompt, theme) = match prompt {
        Some(p) => {
            let theme = theme
                .map(str::to_string)
                .or_else(|| {
                    SHADOW_PROMPTS
                        .iter()
                        .find(|known| known.text == p)
                        .map(|known| known.theme.to_string())
                })
                .unwrap_or_else(|| "Freeform".to_string());
            (p.to_string(), theme)
        }
        None => {
            let picked = out.oracle().prompt(theme).map_err(|e| e.to_string())?;
            println!("  {}", picked.text.italic());
            (picked.text.to_string(), picked.theme.to_string())
        }
    };
    let entry = JournalEntry::shadow(&prompt, &theme, text).map_err(|e| e.to_string())?;
    save_entry(out, path, entry)
}

pub fn dream(
    out: &Output,
    path: &Path,
    title: &str,
    content: &str,
    mood: &str,
    symbols: &str,
) -> Result<(), String> {
    let mood: DreamMood = mood.parse().map_err(|e| {
        let moods: Vec<String> = DreamMood::all().iter().map(ToString::to_string).collect();
        format!("{e}. Use: {}", moods.join(", "))
    })?;
    let entry = JournalEntry::dream(title, content, mood, symbols).map_err(|e| e.to_string())?;
    save_entry(out, path, entry)
}

pub fn reflect(path: &Path, text: &str, date: Option<&str>) -> Result<(), String> {
    let date = super::daily::resolve_date(date)?;
    let entry = JournalEntry::reflection(date, text).map_err(|e| e.to_string())?;
    let mut journal = load_journal(path)?;
    let id = journal.append(entry);
    save_journal(path, &journal)?;
    println!("  Saved reflection {} for {date}", id.to_string().dimmed());
    Ok(())
}

/// Interpret a saved shadow or dream entry and store the insight with it.
pub fn interpret(path: &Path, id: Uuid) -> Result<(), String> {
    let mut journal = open_journal(path)?;
    let entry = journal
        .get(id)
        .ok_or_else(|| format!("no journal entry with id {id}"))?;
    let request = InterpretationRequest::from_entry(entry)
        .ok_or_else(|| format!("entry {id} has nothing to interpret"))?;
    let insight = interpret_or_fallback(&CannedInterpreter, &request);
    journal
        .attach_insight(id, &insight)
        .map_err(|e| e.to_string())?;
    save_journal(path, &journal)?;
    for line in insight.lines() {
        println!("  {line}");
    }
    println!();
    println!("  Insight saved to {}", id.to_string().dimmed());
    Ok(())
}

fn open_journal(path: &Path) -> Result<Journal, String> {
    if !path.exists() {
        return Err(format!("no journal at {}", path.display()));
    }
    load_journal(path)
}

pub fn show(path: &Path, id: Option<Uuid>, markdown: bool) -> Result<(), String> {
    let journal = open_journal(path)?;

    if let Some(id) = id {
        let entry = journal
            .get(id)
            .ok_or_else(|| format!("no journal entry with id {id}"))?;
        print!("{}", entry.to_markdown());
        return Ok(());
    }

    if markdown {
        print!("{}", journal.export_markdown());
        return Ok(());
    }

    if journal.is_empty() {
        println!("  The journal is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "When", "Kind", "Entry"]);
    for entry in journal.entries() {
        let (kind, text) = match entry {
            JournalEntry::Shadow { theme, text, .. } => (theme.clone(), text.clone()),
            JournalEntry::Dream { title, mood, .. } => ("Dream".to_string(), format!("{title} ({mood})")),
            JournalEntry::Reflection { date, text, .. } => {
                ("Reflection".to_string(), format!("{date}: {text}"))
            }
            JournalEntry::Reading { kind, summary, .. } => (kind.clone(), summary.clone()),
        };
        let text = if text.chars().count() > 60 {
            format!("{}...", text.chars().take(57).collect::<String>())
        } else {
            text
        };
        table.add_row(vec![
            entry.id().to_string(),
            entry.timestamp().format("%Y-%m-%d %H:%M").to_string(),
            kind,
            text,
        ]);
    }
    println!("{table}");
    println!();
    println!("  {} entries", journal.len());
    Ok(())
}
