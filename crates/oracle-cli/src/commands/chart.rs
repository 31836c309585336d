use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use oracle_reading::{BirthChart, InterpretationRequest};

use super::Output;

pub fn run(
    out: &Output,
    name: &str,
    date: &str,
    time: Option<&str>,
    location: Option<&str>,
) -> Result<(), String> {
    let chart = BirthChart::cast(date, time).map_err(|e| e.to_string())?;
    let request = InterpretationRequest::birth_chart(name, date, time, location);
    let rising = chart.rising.map_or("unknown", |r| r.name);
    let summary = format!(
        "Sun {}, Moon {}, Rising {rising}",
        chart.sun.name, chart.moon.name
    );

    out.finish(&chart, Some(&request), "birthchart", &summary, || {
        println!("  {}   {} {}", "Sun".bold(), chart.sun.glyph, chart.sun.name);
        println!("  {}  {} {}", "Moon".bold(), chart.moon.glyph, chart.moon.name);
        match chart.rising {
            Some(r) => println!("  {} {} {}", "Rising".bold(), r.glyph, r.name),
            None => println!("  {} {}", "Rising".bold(), "unknown without a birth time".dimmed()),
        }
        println!();

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Planet", "Sign", "Degree", "House"]);
        for p in &chart.planets {
            table.add_row(vec![
                p.planet.to_string(),
                format!("{} {}", p.sign.glyph, p.sign.name),
                format!("{}°", p.degree),
                format!("{} ({})", p.house_number, p.house),
            ]);
        }
        println!("{table}");
        println!();

        let balance: Vec<String> = chart
            .element_balance()
            .iter()
            .map(|(element, count)| format!("{element} {count}"))
            .collect();
        println!("  {} {}", "Elements".bold(), balance.join(" | "));
    })
}
