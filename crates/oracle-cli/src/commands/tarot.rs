use oracle_reading::InterpretationRequest;

use super::Output;

pub fn run(out: &Output, spread: &str, question: Option<&str>) -> Result<(), String> {
    let reading = out
        .oracle()
        .tarot(spread, question)
        .map_err(|e| e.to_string())?;
    let request = InterpretationRequest::from(&reading);
    let summary = super::spread_summary(&reading);
    out.finish(&reading, Some(&request), "tarot", &summary, || {
        super::print_spread(&reading)
    })
}
