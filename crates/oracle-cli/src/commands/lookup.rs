use colored::Colorize;

use oracle_core::{Domain, EntityDetail, SymbolicEntity, catalog, find, number_meaning};

use super::Output;

/// Find an entity by name, or by number (the card, rune or sign position,
/// the hexagram number, or the numerology value itself).
fn resolve(domain: Domain, name: &str) -> Option<&'static SymbolicEntity> {
    match (domain, name.trim().parse::<u32>()) {
        (Domain::Numerology, Ok(n)) => Some(number_meaning(n)),
        (_, Ok(n)) => catalog(domain).iter().find(|e| e.ordinal == n),
        (_, Err(_)) => find(domain, name),
    }
}

pub fn run(out: &Output, domain: &str, name: &str) -> Result<(), String> {
    let domain = Domain::parse(domain).ok_or_else(|| {
        let known: Vec<String> = Domain::all().iter().map(ToString::to_string).collect();
        format!("unknown catalog: {domain}. Use: {}", known.join(", "))
    })?;
    let entity = resolve(domain, name).ok_or_else(|| format!("nothing in {domain} named {name}"))?;
    let summary = format!("{domain}: {}", entity.name);

    out.finish(entity, None, "lookup", &summary, || {
        println!("  {}", entity.to_string().bold());
        match entity.detail {
            EntityDetail::Hexagram {
                chinese,
                lower,
                upper,
            } => println!("  {}", format!("{chinese}, {lower} below {upper}").dimmed()),
            EntityDetail::Sign {
                element,
                dates,
                ruler,
            } => println!("  {}", format!("{element}, {dates}, ruled by {ruler}").dimmed()),
            _ => {}
        }
        if !entity.keywords.is_empty() {
            println!("  {}", entity.keywords.join(", ").italic());
        }
        if !entity.upright.is_empty() {
            println!();
            println!("  {} {}", "Upright:".bold(), entity.upright);
        }
        if let Some(reversed) = entity.reversed {
            println!("  {} {reversed}", "Reversed:".bold());
        }
    })
}
