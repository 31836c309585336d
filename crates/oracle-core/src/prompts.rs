//! Shadow-work journal prompts.

use serde::Serialize;

/// A reflective writing prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JournalPrompt {
    /// The question put to the writer.
    pub text: &'static str,
    /// Theme the prompt belongs to (e.g. "Shadow", "Healing").
    pub theme: &'static str,
    /// Optional nudge shown after the prompt.
    pub follow_up: Option<&'static str>,
}

const fn prompt(theme: &'static str, text: &'static str) -> JournalPrompt {
    JournalPrompt {
        text,
        theme,
        follow_up: None,
    }
}

const fn prompt_with(
    theme: &'static str,
    text: &'static str,
    follow_up: &'static str,
) -> JournalPrompt {
    JournalPrompt {
        text,
        theme,
        follow_up: Some(follow_up),
    }
}

/// Every prompt, grouped by theme.
pub static SHADOW_PROMPTS: [JournalPrompt; 36] = [
    prompt_with(
        "Identity",
        "What version of yourself are you performing today? Who would you be if no one was watching?",
        "Write without editing. Let the truth be messy.",
    ),
    prompt_with(
        "Identity",
        "What story do you keep telling about yourself that might not be true anymore?",
        "Notice where the story protects you from something.",
    ),
    prompt(
        "Identity",
        "If you could introduce yourself honestly, with no titles and no roles, what would you say?",
    ),
    prompt(
        "Identity",
        "What part of your identity would terrify you to lose? Why does it hold such power?",
    ),
    prompt("Identity", "Who were you before the world told you who to be?"),
    prompt_with(
        "Shadow",
        "What quality do you judge most harshly in others? Where does it live in you?",
        "The things we cannot accept in others are often the things we cannot accept in ourselves.",
    ),
    prompt("Shadow", "What are you pretending not to know?"),
    prompt_with(
        "Shadow",
        "What do you do when no one is looking that you would never admit?",
        "Shame loses its power when it is witnessed.",
    ),
    prompt("Shadow", "What emotion are you most afraid of feeling fully?"),
    prompt_with(
        "Shadow",
        "If your shadow self wrote you a letter, what would it say?",
        "Try writing it. Let the shadow speak in first person.",
    ),
    prompt("Shadow", "What is the worst thing someone could say about you? Is any of it true?"),
    prompt("Shadow", "Where in your life are you choosing comfort over truth?"),
    prompt_with(
        "Healing",
        "What wound are you still carrying that you thought you had healed?",
        "Healing is not linear. Some wounds teach us in layers.",
    ),
    prompt_with(
        "Healing",
        "What did you need to hear as a child that no one ever said?",
        "Can you say it to yourself now? Write it down.",
    ),
    prompt("Healing", "Who hurt you in a way you have never fully acknowledged?"),
    prompt(
        "Healing",
        "What are you grieving that you haven't given yourself permission to grieve?",
    ),
    prompt("Healing", "Where in your body do you store your pain? What does it want to tell you?"),
    prompt("Fear", "What are you avoiding right now? What happens if you stop avoiding it?"),
    prompt_with(
        "Fear",
        "What would you do if you knew you couldn't fail? Now, what if you knew you *would* fail?",
        "The second answer reveals what you actually love.",
    ),
    prompt("Fear", "What truth are you afraid to speak out loud?"),
    prompt("Fear", "What are you protecting yourself from that may no longer be a threat?"),
    prompt("Power", "Where have you given your power away? To whom?"),
    prompt("Power", "What boundary do you need to set that you keep avoiding?"),
    prompt_with(
        "Power",
        "What would your most sovereign self do differently today?",
        "Not the 'ideal' self. The real, integrated, powerful one.",
    ),
    prompt("Power", "Where are you seeking permission when you already have the authority?"),
    prompt("Desire", "What do you actually want, not what you think you should want?"),
    prompt("Desire", "What desire have you been ashamed of? What if it was wise?"),
    prompt(
        "Desire",
        "If your life was a story, what chapter are you in? What chapter do you want to be in?",
    ),
    prompt("Desire", "What keeps calling to you that you keep ignoring?"),
    prompt_with(
        "Mirrors",
        "Who triggers you most? What are they showing you about yourself?",
        "Others are often mirrors reflecting parts of us we haven't integrated.",
    ),
    prompt("Mirrors", "What do you need from others that you are not giving yourself?"),
    prompt("Mirrors", "In your most important relationship, where are you not being honest?"),
    prompt(
        "Transformation",
        "What part of you needs to die for the next version of you to be born?",
    ),
    prompt("Transformation", "If this was your last day, what would you regret not saying?"),
    prompt("Transformation", "What are you holding onto that is already gone?"),
    prompt_with(
        "Transformation",
        "What is ending in your life right now? Can you let it end?",
        "Endings are doorways. Walk through.",
    ),
];

/// Distinct themes in the order they first appear in [`SHADOW_PROMPTS`].
pub fn themes() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for p in &SHADOW_PROMPTS {
        if !seen.contains(&p.theme) {
            seen.push(p.theme);
        }
    }
    seen
}

/// Prompts for a theme (case-insensitive), or every prompt when `theme` is `None`.
///
/// An unknown theme yields an empty list.
pub fn prompts_for(theme: Option<&str>) -> Vec<&'static JournalPrompt> {
    SHADOW_PROMPTS
        .iter()
        .filter(|p| theme.is_none_or(|t| p.theme.eq_ignore_ascii_case(t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_are_distinct_and_ordered() {
        let t = themes();
        assert_eq!(t.first(), Some(&"Identity"));
        assert_eq!(t.last(), Some(&"Transformation"));
        assert_eq!(t.len(), 8);
    }

    #[test]
    fn filter_by_theme_is_case_insensitive() {
        let shadow = prompts_for(Some("shadow"));
        assert!(!shadow.is_empty());
        assert!(shadow.iter().all(|p| p.theme == "Shadow"));
    }

    #[test]
    fn unknown_theme_is_empty() {
        assert!(prompts_for(Some("Nonsense")).is_empty());
    }

    #[test]
    fn no_filter_returns_everything() {
        assert_eq!(prompts_for(None).len(), SHADOW_PROMPTS.len());
    }
}
