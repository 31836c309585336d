use colored::Colorize;

use oracle_reading::interpret::parse_spirit_reply;
use oracle_reading::{CannedInterpreter, InterpretationRequest, interpret_or_fallback};

use super::Output;

pub fn run(out: &Output, question: &str) -> Result<(), String> {
    let reading = out.oracle().ouija(question).map_err(|e| e.to_string())?;
    let summary = format!("{} {}", reading.question, reading.answer);

    out.finish(&reading, None, "ouija", &summary, || {
        println!("  {}", format!("\"{}\"", reading.question).italic());
        println!();
        println!("  The planchette moves to {}", reading.answer.to_string().bold());
        println!("  {}", reading.whisper.dimmed());

        if out.interpret {
            let request = InterpretationRequest::ouija(&reading.question);
            let reply = interpret_or_fallback(&CannedInterpreter, &request);
            let second = parse_spirit_reply(&reading.question, &reply);
            println!();
            println!("  {}", "Interpretation".bold());
            println!("  A second voice answers {}", second.answer.to_string().bold());
            println!("  {}", second.whisper.dimmed());
        }
    })
}
