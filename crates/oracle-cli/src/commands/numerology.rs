use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use oracle_reading::{InterpretationRequest, NumerologyProfile};

use super::Output;

pub fn run(out: &Output, name: &str, date: &str) -> Result<(), String> {
    let profile = NumerologyProfile::compute(name, date).map_err(|e| e.to_string())?;
    let request = InterpretationRequest::from(&profile);
    let summary = profile
        .numbers()
        .iter()
        .map(|(title, n)| match n {
            Ok(n) => format!("{title} {}", n.value()),
            Err(note) => format!("{title} none ({note})"),
        })
        .collect::<Vec<_>>()
        .join(", ");

    out.finish(&profile, Some(&request), "numerology", &summary, || {
        println!("  {} ({})", profile.name.bold(), profile.birth_date.dimmed());
        println!();

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Number", "Value", "Meaning"]);
        for (title, number) in profile.numbers() {
            let number = match number {
                Ok(number) => number,
                Err(note) => {
                    table.add_row(vec![title.to_string(), "-".to_string(), note.to_string()]);
                    continue;
                }
            };
            let meaning = number.meaning();
            let value = if number.is_master() {
                format!("{} (master)", number.value())
            } else {
                number.value().to_string()
            };
            table.add_row(vec![
                title.to_string(),
                value,
                format!("{}: {}", meaning.name, meaning.upright),
            ]);
        }
        println!("{table}");
    })
}
