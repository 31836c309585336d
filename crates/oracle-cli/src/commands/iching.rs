use colored::Colorize;

use oracle_core::EntityDetail;
use oracle_reading::InterpretationRequest;

use super::Output;

pub fn run(out: &Output, question: Option<&str>) -> Result<(), String> {
    let reading = out.oracle().iching(question);
    let request = InterpretationRequest::from(&reading);
    let hex = reading.hexagram();
    let mut summary = format!("{} {}", hex.ordinal, hex.name);
    if let Some(relating) = reading.relating() {
        summary.push_str(&format!(" moving to {} {}", relating.ordinal, relating.name));
    }

    out.finish(&reading, Some(&request), "iching", &summary, || {
        if let Some(q) = &reading.question {
            println!("  {}", format!("\"{q}\"").italic());
            println!();
        }
        // Top line first, the way a hexagram is drawn.
        for (i, line) in reading.lines.iter().enumerate().rev() {
            let coins: Vec<String> = line.coins.iter().map(|c| c.value().to_string()).collect();
            let glyph = if line.kind.is_changing() {
                line.kind.glyph().yellow().to_string()
            } else {
                line.kind.glyph().to_string()
            };
            println!(
                "  {} {glyph:<10} {}",
                format!("{}", i + 1).dimmed(),
                format!("[{}] {}", coins.join("+"), line.kind).dimmed()
            );
        }
        println!();
        let chinese = match hex.detail {
            EntityDetail::Hexagram { chinese, .. } => chinese,
            _ => "",
        };
        println!(
            "  {} {}",
            hex.glyph,
            format!("{}. {} ({chinese})", hex.ordinal, hex.name).bold()
        );
        println!("    {}", hex.upright);
        if let Some(relating) = reading.relating() {
            println!();
            println!(
                "  Changing lines {} move toward {} {}",
                reading
                    .cast
                    .changing
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
                relating.glyph,
                format!("{}. {}", relating.ordinal, relating.name).bold()
            );
            println!("    {}", relating.upright);
        }
        println!();
    })
}
