//! The 64 hexagrams of the I Ching, in King Wen order.
//!
//! Index `i` in [`HEXAGRAMS`] is hexagram number `i + 1`. The line mapper in
//! `oracle-mechanics` resolves six cast lines to an index into this table, so
//! the ordering here is load-bearing.

use serde::Serialize;

use crate::entity::{EntityDetail, SymbolicEntity};

use self::Trigram::{Earth, Fire, Heaven, Lake, Mountain, Thunder, Water, Wind};

/// One of the eight three-line figures a hexagram is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trigram {
    /// Qian ☰
    Heaven,
    /// Kun ☷
    Earth,
    /// Zhen ☳
    Thunder,
    /// Kan ☵
    Water,
    /// Gen ☶
    Mountain,
    /// Xun ☴
    Wind,
    /// Li ☲
    Fire,
    /// Dui ☱
    Lake,
}

impl Trigram {
    /// The Unicode trigram glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Heaven => "☰",
            Self::Earth => "☷",
            Self::Thunder => "☳",
            Self::Water => "☵",
            Self::Mountain => "☶",
            Self::Wind => "☴",
            Self::Fire => "☲",
            Self::Lake => "☱",
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heaven => write!(f, "Heaven"),
            Self::Earth => write!(f, "Earth"),
            Self::Thunder => write!(f, "Thunder"),
            Self::Water => write!(f, "Water"),
            Self::Mountain => write!(f, "Mountain"),
            Self::Wind => write!(f, "Wind"),
            Self::Fire => write!(f, "Fire"),
            Self::Lake => write!(f, "Lake"),
        }
    }
}

const fn hexagram(
    number: u32,
    name: &'static str,
    chinese: &'static str,
    lower: Trigram,
    upper: Trigram,
    judgment: &'static str,
    keywords: &'static [&'static str],
) -> SymbolicEntity {
    SymbolicEntity {
        name,
        ordinal: number,
        glyph: HEXAGRAM_GLYPHS[(number - 1) as usize],
        upright: judgment,
        reversed: None,
        keywords,
        detail: EntityDetail::Hexagram {
            chinese,
            lower,
            upper,
        },
    }
}

/// Unicode hexagram symbols U+4DC0..U+4DFF, in King Wen order.
const HEXAGRAM_GLYPHS: [&str; 64] = [
    "䷀", "䷁", "䷂", "䷃", "䷄", "䷅", "䷆", "䷇",
    "䷈", "䷉", "䷊", "䷋", "䷌", "䷍", "䷎", "䷏",
    "䷐", "䷑", "䷒", "䷓", "䷔", "䷕", "䷖", "䷗",
    "䷘", "䷙", "䷚", "䷛", "䷜", "䷝", "䷞", "䷟",
    "䷠", "䷡", "䷢", "䷣", "䷤", "䷥", "䷦", "䷧",
    "䷨", "䷩", "䷪", "䷫", "䷬", "䷭", "䷮", "䷯",
    "䷰", "䷱", "䷲", "䷳", "䷴", "䷵", "䷶", "䷷",
    "䷸", "䷹", "䷺", "䷻", "䷼", "䷽", "䷾", "䷿",
];

/// All 64 hexagrams. Entry `i` has ordinal (King Wen number) `i + 1`.
pub static HEXAGRAMS: [SymbolicEntity; 64] = [
    hexagram(
        1,
        "The Creative",
        "乾",
        Heaven,
        Heaven,
        "Sublime success. The dragon flies. Pure creative force flows without obstruction. This is the moment to act with total conviction.",
        &["strength", "initiative"],
    ),
    hexagram(
        2,
        "The Receptive",
        "坤",
        Earth,
        Earth,
        "Devotion brings sublime success. The mare walks the earth. Yield, follow, receive. Your power is in your openness, not your force.",
        &["devotion", "receptivity"],
    ),
    hexagram(
        3,
        "Difficulty at the Beginning",
        "屯",
        Thunder,
        Water,
        "The seed pushes through frozen ground. Beginnings are chaotic. Don't try to impose order yet: gather allies and wait for clarity.",
        &["struggle", "beginnings"],
    ),
    hexagram(
        4,
        "Youthful Folly",
        "蒙",
        Water,
        Mountain,
        "The student seeks the teacher, not the other way around. You don't know what you don't know. Be humble enough to learn.",
        &["learning", "inexperience"],
    ),
    hexagram(
        5,
        "Waiting",
        "需",
        Heaven,
        Water,
        "Clouds gather but the rain has not yet fallen. Nourish yourself while you wait. Patience is not passive: it is preparation.",
        &["patience", "nourishment"],
    ),
    hexagram(
        6,
        "Conflict",
        "訟",
        Water,
        Heaven,
        "Two forces meet and neither yields. Seek a mediator. Half-measures bring good fortune. Pushing to the end brings misfortune.",
        &["dispute", "mediation"],
    ),
    hexagram(
        7,
        "The Army",
        "師",
        Water,
        Earth,
        "Discipline and leadership are required. Organize your inner forces. The general who knows themselves cannot be defeated.",
        &["discipline", "leadership"],
    ),
    hexagram(
        8,
        "Holding Together",
        "比",
        Earth,
        Water,
        "Union brings good fortune. But examine your alliances: are they based on genuine connection or mutual convenience?",
        &["union", "alliance"],
    ),
    hexagram(
        9,
        "Small Taming",
        "小畜",
        Heaven,
        Wind,
        "Dense clouds but no rain. Small restraint succeeds where force would fail. Gentle persistence. Soft power.",
        &["restraint", "gentleness"],
    ),
    hexagram(
        10,
        "Treading",
        "履",
        Lake,
        Heaven,
        "You step on the tiger's tail: and it does not bite. Walk with care and genuine courtesy. Even danger respects sincerity.",
        &["conduct", "caution"],
    ),
    hexagram(
        11,
        "Peace",
        "泰",
        Heaven,
        Earth,
        "Heaven and earth commune. The small departs, the great approaches. A time of harmony, prosperity, and natural flow.",
        &["harmony", "prosperity"],
    ),
    hexagram(
        12,
        "Standstill",
        "否",
        Earth,
        Heaven,
        "Heaven and earth do not commune. Stagnation. The great departs, the small approaches. Withdraw and preserve your integrity.",
        &["stagnation", "withdrawal"],
    ),
    hexagram(
        13,
        "Fellowship",
        "同人",
        Fire,
        Heaven,
        "People gather under an open sky. True fellowship is based on shared purpose, not blood or convenience. Cross the great water together.",
        &["community", "shared purpose"],
    ),
    hexagram(
        14,
        "Great Possession",
        "大有",
        Heaven,
        Fire,
        "Fire above heaven: supreme success. You have been given much. Use it with wisdom and generosity. Abundance demands responsibility.",
        &["abundance", "responsibility"],
    ),
    hexagram(
        15,
        "Modesty",
        "謙",
        Mountain,
        Earth,
        "The mountain hides beneath the earth. True power does not announce itself. Modesty creates success in all undertakings.",
        &["humility", "balance"],
    ),
    hexagram(
        16,
        "Enthusiasm",
        "豫",
        Earth,
        Thunder,
        "Thunder rises from the earth. Devotion expressed through movement. Appoint helpers. Set things in motion. The time is ripe.",
        &["enthusiasm", "momentum"],
    ),
    hexagram(
        17,
        "Following",
        "隨",
        Thunder,
        Lake,
        "Adapt to the times. True leadership begins with knowing when to follow. Rest when the world rests. Move when it moves.",
        &["adaptation", "following"],
    ),
    hexagram(
        18,
        "Work on the Decayed",
        "蠱",
        Wind,
        Mountain,
        "What has been spoiled can be restored. The corruption you inherited is yours to heal. Three days before, three days after: careful timing.",
        &["repair", "inheritance"],
    ),
    hexagram(
        19,
        "Approach",
        "臨",
        Lake,
        Earth,
        "The great approaches with goodwill. Spring comes. But remember: by the eighth month there will be misfortune. Joy has seasons.",
        &["approach", "growth"],
    ),
    hexagram(
        20,
        "Contemplation",
        "觀",
        Earth,
        Wind,
        "The tower of observation. The wind blows over the earth. See clearly before you act. What you contemplate, you become.",
        &["observation", "perspective"],
    ),
    hexagram(
        21,
        "Biting Through",
        "噬嗑",
        Thunder,
        Fire,
        "An obstacle must be forcefully removed. Like biting through gristle to nourish yourself. Justice requires decisive action.",
        &["decisiveness", "justice"],
    ),
    hexagram(
        22,
        "Grace",
        "賁",
        Fire,
        Mountain,
        "Fire at the foot of the mountain: illumination of form. Beauty matters, but substance matters more. Adorn, but don't deceive.",
        &["beauty", "form"],
    ),
    hexagram(
        23,
        "Splitting Apart",
        "剝",
        Earth,
        Mountain,
        "The bed crumbles from the bottom up. What seemed solid is decaying. Don't fight it: observe, learn, and wait for the cycle to turn.",
        &["decay", "endurance"],
    ),
    hexagram(
        24,
        "Return",
        "復",
        Thunder,
        Earth,
        "After the darkest point, the light returns. The solstice. One strong line pushes back from below. The turning is natural: don't force it.",
        &["renewal", "turning point"],
    ),
    hexagram(
        25,
        "Innocence",
        "無妄",
        Thunder,
        Heaven,
        "Act from your true nature without ulterior motive. When movement comes from innocence, the universe supports it. Calculation fails here.",
        &["sincerity", "spontaneity"],
    ),
    hexagram(
        26,
        "Great Taming",
        "大畜",
        Heaven,
        Mountain,
        "Immense creative power held in check by stillness. Study the past. Nourish your character. The power you accumulate now will be needed later.",
        &["accumulation", "study"],
    ),
    hexagram(
        27,
        "Nourishment",
        "頤",
        Thunder,
        Mountain,
        "Watch what you feed: your body, your mind, your soul. What goes in determines what comes out. Be careful with your words and your diet.",
        &["nourishment", "care"],
    ),
    hexagram(
        28,
        "Great Excess",
        "大過",
        Wind,
        Lake,
        "The ridgepole buckles under weight. Something is about to break. Extraordinary times call for extraordinary measures. Act now.",
        &["pressure", "crisis"],
    ),
    hexagram(
        29,
        "The Abysmal",
        "坎",
        Water,
        Water,
        "Water upon water: danger doubled. You are in the abyss. Don't panic. Flow like water. Sincerity of heart will carry you through.",
        &["danger", "flow"],
    ),
    hexagram(
        30,
        "The Clinging",
        "離",
        Fire,
        Fire,
        "Fire clings to fuel to live. Brightness depends on what it attaches to. Clarity comes from tending the right flame.",
        &["clarity", "dependence"],
    ),
    hexagram(
        31,
        "Influence",
        "咸",
        Mountain,
        Lake,
        "The mountain stands still, the lake rises to meet it. Attraction. Mutual influence without force. Courtship. Be receptive.",
        &["attraction", "receptivity"],
    ),
    hexagram(
        32,
        "Duration",
        "恆",
        Wind,
        Thunder,
        "Thunder and wind reinforce each other endlessly. What endures is not rigid: it is consistent. Stay the course through changing conditions.",
        &["endurance", "consistency"],
    ),
    hexagram(
        33,
        "Retreat",
        "遯",
        Mountain,
        Heaven,
        "Strategic withdrawal is not defeat. The mountain stands while heaven recedes. Know when to step back with dignity intact.",
        &["retreat", "dignity"],
    ),
    hexagram(
        34,
        "Great Power",
        "大壯",
        Heaven,
        Thunder,
        "Thunder above heaven: enormous power. But power without propriety leads to entanglement. Be strong AND righteous.",
        &["power", "propriety"],
    ),
    hexagram(
        35,
        "Progress",
        "晉",
        Earth,
        Fire,
        "The sun rises above the earth. Rapid, visible progress. Your light is being seen. Accept recognition without arrogance.",
        &["progress", "recognition"],
    ),
    hexagram(
        36,
        "Darkening of the Light",
        "明夷",
        Fire,
        Earth,
        "The sun sinks into the earth. Brilliance must hide itself. Conceal your light to survive. Be correct within while yielding without.",
        &["concealment", "perseverance"],
    ),
    hexagram(
        37,
        "The Family",
        "家人",
        Fire,
        Wind,
        "Wind from fire: warmth that spreads outward. Begin with your inner household. If the family is in order, all of society benefits.",
        &["family", "roles"],
    ),
    hexagram(
        38,
        "Opposition",
        "睽",
        Lake,
        Fire,
        "Fire rises, water falls: they move apart. In small matters, good fortune. Opposites can complement if you don't force unity.",
        &["opposition", "contrast"],
    ),
    hexagram(
        39,
        "Obstruction",
        "蹇",
        Mountain,
        Water,
        "Water on the mountain: the way is blocked. Don't push forward. Turn inward. The obstruction is the teaching.",
        &["obstruction", "reflection"],
    ),
    hexagram(
        40,
        "Deliverance",
        "解",
        Water,
        Thunder,
        "Thunder and rain arrive: tension breaks. The knot loosens. Forgive. Release. Return to the ordinary with gratitude.",
        &["release", "forgiveness"],
    ),
    hexagram(
        41,
        "Decrease",
        "損",
        Lake,
        Mountain,
        "The lake diminishes to nourish the mountain. Decrease at the bottom, increase at the top. Simplify. Give up what is excessive.",
        &["decrease", "simplicity"],
    ),
    hexagram(
        42,
        "Increase",
        "益",
        Thunder,
        Wind,
        "Wind and thunder: mutual increase. What benefits others benefits you. This is the time for great undertakings and crossings.",
        &["increase", "benefit"],
    ),
    hexagram(
        43,
        "Breakthrough",
        "夬",
        Heaven,
        Lake,
        "The waters break through. Truth must be spoken in the king's court. Resolve requires both determination and caution.",
        &["resolution", "truth"],
    ),
    hexagram(
        44,
        "Coming to Meet",
        "姤",
        Wind,
        Heaven,
        "The wind blows beneath heaven: influence spreads unseen. Something approaches unexpectedly. Be discerning about what you allow in.",
        &["encounter", "discernment"],
    ),
    hexagram(
        45,
        "Gathering",
        "萃",
        Earth,
        Lake,
        "The lake gathers above the earth. People assemble. Bring offerings to the temple. Be prepared for the unexpected when many gather.",
        &["gathering", "assembly"],
    ),
    hexagram(
        46,
        "Pushing Upward",
        "升",
        Wind,
        Earth,
        "A tree grows within the earth: steady, invisible growth. Push upward. See the great person. Do not worry. Journey south.",
        &["ascent", "steady growth"],
    ),
    hexagram(
        47,
        "Oppression",
        "困",
        Water,
        Lake,
        "The lake dries up. Exhaustion. Words cannot be trusted now. Remain cheerful within even when oppressed without. Actions speak.",
        &["exhaustion", "adversity"],
    ),
    hexagram(
        48,
        "The Well",
        "井",
        Wind,
        Water,
        "The town may change but the well does not. It neither decreases nor increases. Draw from the deep source. But if the rope is too short...",
        &["source", "depth"],
    ),
    hexagram(
        49,
        "Revolution",
        "革",
        Fire,
        Lake,
        "Fire in the lake: transformation. Revolution succeeds only when the time is right and the cause is just. Change the old, establish the new.",
        &["revolution", "change"],
    ),
    hexagram(
        50,
        "The Cauldron",
        "鼎",
        Wind,
        Fire,
        "The sacred vessel. Wood feeds fire to cook the offering. Transformation of the raw into the refined. Nourish the wise. Supreme good fortune.",
        &["refinement", "transformation"],
    ),
    hexagram(
        51,
        "The Arousing",
        "震",
        Thunder,
        Thunder,
        "Thunder upon thunder: shock. It comes and you tremble. Then you laugh. The shock reaches for a hundred miles but you don't drop the spoon.",
        &["shock", "awakening"],
    ),
    hexagram(
        52,
        "Keeping Still",
        "艮",
        Mountain,
        Mountain,
        "Mountain upon mountain: absolute stillness. Still the body. Still the mind. When rest is total, movement will be right.",
        &["stillness", "meditation"],
    ),
    hexagram(
        53,
        "Development",
        "漸",
        Mountain,
        Wind,
        "The tree grows slowly on the mountain. Gradual progress. Marriage. Things develop in their proper order and cannot be rushed.",
        &["gradual progress", "development"],
    ),
    hexagram(
        54,
        "The Marrying Maiden",
        "歸妹",
        Lake,
        Thunder,
        "Thunder over the lake: impulsive movement. Undertakings bring misfortune. Wait. Acting from desire alone leads nowhere good.",
        &["impulse", "subordination"],
    ),
    hexagram(
        55,
        "Abundance",
        "豐",
        Fire,
        Thunder,
        "Thunder and lightning: fullness. The zenith. Be like the sun at midday. But know: what is full must wane. Don't grieve: enjoy it now.",
        &["fullness", "zenith"],
    ),
    hexagram(
        56,
        "The Wanderer",
        "旅",
        Mountain,
        Fire,
        "Fire on the mountain: it burns and moves on. The traveler. Be cautious, upright, and gentle with strangers. Small things succeed.",
        &["travel", "transience"],
    ),
    hexagram(
        57,
        "The Gentle",
        "巽",
        Wind,
        Wind,
        "Wind upon wind: penetration. Gentle, persistent influence achieves what force cannot. Have a direction. See the great person. Small offerings.",
        &["penetration", "influence"],
    ),
    hexagram(
        58,
        "The Joyous",
        "兌",
        Lake,
        Lake,
        "Lake upon lake: joy overflowing. True joy is infectious. Practice and discuss with friends. Joy comes from inner truth, not from stimulation.",
        &["joy", "openness"],
    ),
    hexagram(
        59,
        "Dispersion",
        "渙",
        Water,
        Wind,
        "Wind over water: dissolving. What has hardened must be scattered. Cross the great water. Use sacred rituals. Break up the rigid.",
        &["dissolution", "dispersal"],
    ),
    hexagram(
        60,
        "Limitation",
        "節",
        Lake,
        Water,
        "Water above the lake: boundaries. Limits create form. But galling limitation should not be persevered in. Know your measure.",
        &["limits", "measure"],
    ),
    hexagram(
        61,
        "Inner Truth",
        "中孚",
        Lake,
        Wind,
        "Wind over the lake: inner truth reaches outward. Even pigs and fishes are moved. Sincerity from the center transforms everything it touches.",
        &["inner truth", "sincerity"],
    ),
    hexagram(
        62,
        "Small Exceeding",
        "小過",
        Mountain,
        Thunder,
        "Thunder on the mountain: a bird in flight. Exceed in small things, not great ones. Descend, don't ascend. Humility brings exceptional fortune.",
        &["small matters", "humility"],
    ),
    hexagram(
        63,
        "After Completion",
        "既濟",
        Fire,
        Water,
        "Water over fire: everything in its place. Success. But in the beginning good fortune, in the end disorder. Don't rest: disorder is already approaching.",
        &["completion", "vigilance"],
    ),
    hexagram(
        64,
        "Before Completion",
        "未濟",
        Water,
        Fire,
        "Fire over water: nearly there, but not yet. The fox nearly crosses the stream but wets its tail at the last moment. Persevere carefully.",
        &["transition", "perseverance"],
    ),
];
