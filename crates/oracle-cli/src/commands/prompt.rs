use colored::Colorize;

use oracle_core::prompts::themes;

use super::Output;

pub fn run(out: &Output, theme: Option<&str>, list_themes: bool) -> Result<(), String> {
    if list_themes {
        for theme in themes() {
            println!("  {theme}");
        }
        return Ok(());
    }

    let prompt = out.oracle().prompt(theme).map_err(|e| e.to_string())?;
    out.finish(prompt, None, "prompt", prompt.text, || {
        println!("  {}", prompt.theme.dimmed());
        println!("  {}", prompt.text.bold());
        if let Some(follow_up) = prompt.follow_up {
            println!("    {}", follow_up.italic());
        }
    })
}
