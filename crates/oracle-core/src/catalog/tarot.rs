//! The 22-card Major Arcana.

use crate::entity::{EntityDetail, SymbolicEntity};

const fn card(
    ordinal: u32,
    numeral: &'static str,
    name: &'static str,
    glyph: &'static str,
    upright: &'static str,
    reversed: &'static str,
    keywords: &'static [&'static str],
) -> SymbolicEntity {
    SymbolicEntity {
        name,
        ordinal,
        glyph,
        upright,
        reversed: Some(reversed),
        keywords,
        detail: EntityDetail::Card { numeral },
    }
}

/// The Major Arcana in traditional order, The Fool (0) through The World (XXI).
pub static MAJOR_ARCANA: [SymbolicEntity; 22] = [
    card(
        0,
        "0",
        "The Fool",
        "🃏",
        "New beginnings, innocence, spontaneity, free spirit. A leap of faith into the unknown.",
        "Recklessness, risk-taking, holding back, foolishness.",
        &["new beginnings", "innocence", "spontaneity"],
    ),
    card(
        1,
        "I",
        "The Magician",
        "✧",
        "Manifestation, resourcefulness, power, inspired action. You have everything you need.",
        "Manipulation, poor planning, untapped talents.",
        &["manifestation", "resourcefulness", "power"],
    ),
    card(
        2,
        "II",
        "The High Priestess",
        "☽",
        "Intuition, sacred knowledge, divine feminine, the subconscious mind.",
        "Secrets, withdrawal, silence, repressed intuition.",
        &["intuition", "sacred knowledge", "divine feminine"],
    ),
    card(
        3,
        "III",
        "The Empress",
        "♀",
        "Femininity, beauty, nature, nurturing, abundance. Creation flows through you.",
        "Creative block, dependence, emptiness, smothering.",
        &["femininity", "beauty", "nature"],
    ),
    card(
        4,
        "IV",
        "The Emperor",
        "♂",
        "Authority, structure, control, fatherhood. A solid foundation built on discipline.",
        "Tyranny, rigidity, coldness, excessive control.",
        &["authority", "structure", "control"],
    ),
    card(
        5,
        "V",
        "The Hierophant",
        "⛪",
        "Spiritual wisdom, tradition, conformity, morality, ethics.",
        "Personal beliefs, freedom, challenging the status quo.",
        &["spiritual wisdom", "tradition", "conformity"],
    ),
    card(
        6,
        "VI",
        "The Lovers",
        "❦",
        "Love, harmony, relationships, values alignment, choices of the heart.",
        "Self-love, disharmony, imbalance, misalignment of values.",
        &["love", "harmony", "relationships"],
    ),
    card(
        7,
        "VII",
        "The Chariot",
        "⚔",
        "Control, willpower, success, determination. Victory through inner strength.",
        "Self-discipline, opposition, lack of direction.",
        &["control", "willpower", "success"],
    ),
    card(
        8,
        "VIII",
        "Strength",
        "∞",
        "Inner strength, bravery, compassion, focus. The quiet power within.",
        "Self-doubt, weakness, insecurity, raw emotion.",
        &["inner strength", "bravery", "compassion"],
    ),
    card(
        9,
        "IX",
        "The Hermit",
        "🏔",
        "Soul-searching, introspection, being alone, inner guidance. Seek and you shall find.",
        "Isolation, loneliness, withdrawal, lost your way.",
        &["soul-searching", "introspection", "being alone"],
    ),
    card(
        10,
        "X",
        "Wheel of Fortune",
        "☸",
        "Good luck, karma, life cycles, destiny, a turning point in your journey.",
        "Bad luck, resistance to change, breaking cycles.",
        &["good luck", "karma", "life cycles"],
    ),
    card(
        11,
        "XI",
        "Justice",
        "⚖",
        "Fairness, truth, cause and effect, law. The scales must balance.",
        "Unfairness, lack of accountability, dishonesty.",
        &["fairness", "truth", "cause and effect"],
    ),
    card(
        12,
        "XII",
        "The Hanged Man",
        "⊥",
        "Pause, surrender, letting go, new perspectives. See the world differently.",
        "Delays, resistance, stalling, indecision.",
        &["pause", "surrender", "letting go"],
    ),
    card(
        13,
        "XIII",
        "Death",
        "☠",
        "Endings, change, transformation, transition. What must end so something new may begin.",
        "Resistance to change, personal transformation, inner purging.",
        &["endings", "change", "transformation"],
    ),
    card(
        14,
        "XIV",
        "Temperance",
        "△",
        "Balance, moderation, patience, purpose. Find your middle path.",
        "Imbalance, excess, self-healing, re-alignment.",
        &["balance", "moderation", "patience"],
    ),
    card(
        15,
        "XV",
        "The Devil",
        "⛧",
        "Shadow self, attachment, addiction, restriction, sexuality.",
        "Releasing limiting beliefs, exploring dark thoughts, detachment.",
        &["shadow self", "attachment", "addiction"],
    ),
    card(
        16,
        "XVI",
        "The Tower",
        "⚡",
        "Sudden change, upheaval, chaos, revelation, awakening. What was built on lies must fall.",
        "Personal transformation, fear of change, averting disaster.",
        &["sudden change", "upheaval", "chaos"],
    ),
    card(
        17,
        "XVII",
        "The Star",
        "✦",
        "Hope, faith, purpose, renewal, spirituality. A guiding light in the darkness.",
        "Lack of faith, despair, self-trust, disconnection.",
        &["hope", "faith", "purpose"],
    ),
    card(
        18,
        "XVIII",
        "The Moon",
        "☾",
        "Illusion, fear, anxiety, subconscious, intuition. Not all is as it seems.",
        "Release of fear, repressed emotion, inner confusion.",
        &["illusion", "fear", "anxiety"],
    ),
    card(
        19,
        "XIX",
        "The Sun",
        "☀",
        "Positivity, fun, warmth, success, vitality. Pure joy and radiance.",
        "Inner child, feeling down, overly optimistic.",
        &["positivity", "fun", "warmth"],
    ),
    card(
        20,
        "XX",
        "Judgement",
        "♱",
        "Judgement, rebirth, inner calling, absolution. Rise up and answer your calling.",
        "Self-doubt, inner critic, ignoring the call.",
        &["judgement", "rebirth", "inner calling"],
    ),
    card(
        21,
        "XXI",
        "The World",
        "◉",
        "Completion, integration, accomplishment, travel. The end of one cycle, the beginning of another.",
        "Incompletion, shortcuts, seeking personal closure.",
        &["completion", "integration", "accomplishment"],
    ),
];
