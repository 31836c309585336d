use oracle_reading::InterpretationRequest;

use super::Output;

pub fn run(out: &Output, spread: &str, question: Option<&str>) -> Result<(), String> {
    let reading = out
        .oracle()
        .runes(spread, question)
        .map_err(|e| e.to_string())?;
    let request = InterpretationRequest::from(&reading);
    let summary = super::spread_summary(&reading);
    out.finish(&reading, Some(&request), "runes", &summary, || {
        super::print_spread(&reading)
    })
}
