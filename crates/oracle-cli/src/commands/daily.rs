use chrono::{Local, NaiveDate};
use colored::Colorize;

use oracle_mechanics::seeded::parse_date;

use super::Output;

/// Today's date, or the given `YYYY-MM-DD` date.
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate, String> {
    match date {
        Some(d) => parse_date(d).map_err(|e| e.to_string()),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn run(out: &Output, date: Option<&str>) -> Result<(), String> {
    let date = resolve_date(date)?;
    let daily = out.oracle().daily_on(date);
    let orientation = if daily.reversed { " (reversed)" } else { "" };
    let summary = format!("{date}: {}{orientation}", daily.card.name);

    out.finish(&daily, None, "daily", &summary, || {
        println!("  {}", format!("Daily Oracle for {}", date.format("%A, %B %-d, %Y")).bold());
        println!();
        println!("  {} {}", daily.moon.glyph(), daily.moon.name().bold());
        println!("    {}", daily.moon.guidance());
        println!();
        let numeral = daily.card.numeral().unwrap_or_default();
        let turn = if daily.reversed {
            "Reversed".red().to_string()
        } else {
            "Upright".green().to_string()
        };
        println!(
            "  {} {} ({turn})",
            daily.card.glyph,
            format!("{numeral} {}", daily.card.name).bold()
        );
        println!("    {}", daily.card_meaning());
        println!();
        println!("  {} {}", "Reflect:".dimmed(), daily.prompt.text.italic());
        if let Some(follow_up) = daily.prompt.follow_up {
            println!("    {}", follow_up.dimmed());
        }
    })
}
