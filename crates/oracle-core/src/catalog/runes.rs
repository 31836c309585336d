//! The 24 runes of the Elder Futhark, in futhark order.

use crate::entity::{EntityDetail, SymbolicEntity};

const fn rune(
    ordinal: u32,
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
        detail: EntityDetail::Rune,
    }
}

/// Fehu (0) through Othala (23).
pub static ELDER_FUTHARK: [SymbolicEntity; 24] = [
    rune(
        0,
        "Fehu",
        "ᚠ",
        "Wealth, abundance, earned success. Energy that flows when it is shared.",
        "Loss, greed, stagnation, squandered resources.",
        &["wealth", "abundance", "prosperity"],
    ),
    rune(
        1,
        "Uruz",
        "ᚢ",
        "Raw strength, vitality, endurance. The untamed power of the aurochs.",
        "Weakness, missed opportunity, misdirected force.",
        &["strength", "vitality", "health"],
    ),
    rune(
        2,
        "Thurisaz",
        "ᚦ",
        "Protection, reactive force, a threshold. The thorn that guards the rose.",
        "Danger, compulsion, defenselessness, spite.",
        &["protection", "conflict", "catalyst"],
    ),
    rune(
        3,
        "Ansuz",
        "ᚨ",
        "Divine message, wisdom, communication. Listen for what is being spoken through you.",
        "Misunderstanding, manipulation, a message ignored.",
        &["wisdom", "communication", "insight"],
    ),
    rune(
        4,
        "Raidho",
        "ᚱ",
        "Journey, rhythm, right action. The road opens when you move in step with it.",
        "Disruption, delay, a journey taken for the wrong reasons.",
        &["journey", "movement", "rhythm"],
    ),
    rune(
        5,
        "Kenaz",
        "ᚲ",
        "Illumination, creativity, knowledge. The torch carried into the dark.",
        "Blocked creativity, false hope, a light gone out.",
        &["illumination", "creativity", "knowledge"],
    ),
    rune(
        6,
        "Gebo",
        "ᚷ",
        "Gift, partnership, balanced exchange. What is given returns.",
        "Imbalance, obligation, a gift with strings attached.",
        &["gift", "partnership", "generosity"],
    ),
    rune(
        7,
        "Wunjo",
        "ᚹ",
        "Joy, harmony, belonging. Comfort that comes from being in the right place.",
        "Sorrow, alienation, strife within the group.",
        &["joy", "harmony", "fellowship"],
    ),
    rune(
        8,
        "Hagalaz",
        "ᚺ",
        "Disruption, hail, uncontrolled forces. Destruction that clears ground for renewal.",
        "Stagnation, avoided crisis, suffering prolonged.",
        &["disruption", "upheaval", "cleansing"],
    ),
    rune(
        9,
        "Nauthiz",
        "ᚾ",
        "Need, constraint, necessity. Friction that teaches endurance.",
        "Deprivation, desperation, refusing the lesson.",
        &["need", "constraint", "endurance"],
    ),
    rune(
        10,
        "Isa",
        "ᛁ",
        "Ice, stillness, pause. Everything freezes so it can be seen clearly.",
        "Blockage, isolation, plans frozen in place.",
        &["stillness", "pause", "clarity"],
    ),
    rune(
        11,
        "Jera",
        "ᛃ",
        "Harvest, cycles, reward for patience. What was planted now bears fruit.",
        "Poor timing, impatience, a cycle interrupted.",
        &["harvest", "cycles", "reward"],
    ),
    rune(
        12,
        "Eihwaz",
        "ᛇ",
        "Endurance, the yew tree, the axis between worlds. Steadfast through change.",
        "Confusion, weakness, dissatisfaction.",
        &["endurance", "defense", "transformation"],
    ),
    rune(
        13,
        "Perthro",
        "ᛈ",
        "Mystery, fate, the hidden. The lot cup holds what cannot yet be known.",
        "Stagnation, secrets kept too long, loneliness.",
        &["mystery", "fate", "chance"],
    ),
    rune(
        14,
        "Algiz",
        "ᛉ",
        "Protection, higher self, sanctuary. The elk's antlers raised in defense.",
        "Vulnerability, hidden danger, lowered guard.",
        &["protection", "sanctuary", "awakening"],
    ),
    rune(
        15,
        "Sowilo",
        "ᛊ",
        "Sun, success, wholeness. Life force breaking through the clouds.",
        "False success, overreach, burning out.",
        &["success", "vitality", "wholeness"],
    ),
    rune(
        16,
        "Tiwaz",
        "ᛏ",
        "Justice, honor, sacrifice. The warrior who acts for what is right.",
        "Injustice, cowardice, an imbalance of power.",
        &["justice", "honor", "courage"],
    ),
    rune(
        17,
        "Berkano",
        "ᛒ",
        "Birth, growth, nurture. The birch greening in spring.",
        "Stagnation, family troubles, growth blocked.",
        &["birth", "growth", "fertility"],
    ),
    rune(
        18,
        "Ehwaz",
        "ᛖ",
        "Movement, trust, partnership. Horse and rider moving as one.",
        "Restlessness, mistrust, a partnership pulling apart.",
        &["movement", "trust", "teamwork"],
    ),
    rune(
        19,
        "Mannaz",
        "ᛗ",
        "Humanity, self, community. Know yourself as one among many.",
        "Self-delusion, isolation, manipulation.",
        &["self", "humanity", "community"],
    ),
    rune(
        20,
        "Laguz",
        "ᛚ",
        "Water, flow, intuition. Follow the current beneath the surface.",
        "Confusion, fear, poor judgment, being swept away.",
        &["flow", "intuition", "emotion"],
    ),
    rune(
        21,
        "Ingwaz",
        "ᛜ",
        "Fertility, completion, inner growth. A seed resting before it sprouts.",
        "Impotence, movement without change, unfinished work.",
        &["fertility", "completion", "potential"],
    ),
    rune(
        22,
        "Dagaz",
        "ᛞ",
        "Breakthrough, dawn, awakening. The light arrives all at once.",
        "Endings without beginnings, blindness to change.",
        &["breakthrough", "dawn", "awakening"],
    ),
    rune(
        23,
        "Othala",
        "ᛟ",
        "Heritage, home, inheritance. What your ancestors built for you.",
        "Prejudice, lost roots, clinging to the past.",
        &["heritage", "home", "legacy"],
    ),
];
