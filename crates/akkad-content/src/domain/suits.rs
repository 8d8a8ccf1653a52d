//! The six suits of the deck.

use serde::{Deserialize, Serialize};

/// Descriptive text attached to a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuitInfo {
    /// Display name.
    pub name: &'static str,
    /// Who the suit stands for in the fiction.
    pub interpretation: &'static str,
    /// Symbol shown on upright cards.
    pub up_symbol: &'static str,
    /// What the upright symbol stands for.
    pub up_symbol_meaning: &'static str,
    /// Symbol shown on reversed cards.
    pub reversed_symbol: &'static str,
    /// What the reversed symbol stands for.
    pub reversed_symbol_meaning: &'static str,
}

/// Suit identifier, as used for keys in catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitKey {
    Red,
    Purple,
    Pink,
    Blue,
    Gold,
    Black,
}

const RED: SuitInfo = SuitInfo {
    name: "Red: The Dreamers",
    interpretation: "Those who want to change the world or escape it. Journalists, addicts, authors, scientists, philosophers, rebels, priests, ... Also, perhaps, a tendency to live in a world that isn't quite the same as everybody else.",
    up_symbol: "The Broken Icon",
    up_symbol_meaning: "Broken dreams, shattered promises.",
    reversed_symbol: "The Smoke",
    reversed_symbol_meaning: "Illusions, dreams, imagination.",
};

const PURPLE: SuitInfo = SuitInfo {
    name: "Purple: The Underbelly",
    interpretation: "Those who survive in the gutter, or have risen from the gutter, usually to prey upon people. Gangsters, brothel and cabaret owners, but also corrupt police officers, homeless people, ethnic minorities, drug dealers, informants, forgers, the shadow office, ... Also, perhaps, a will to survive, and to have something to call their own, even if it currently belongs to someone else.",
    up_symbol: "The Gangster",
    up_symbol_meaning: "Upsetting the rules, breaking the limits, violence.",
    reversed_symbol: "The Spirit Bottle",
    reversed_symbol_meaning: "Excess, vice, self-harm.",
};

const PINK: SuitInfo = SuitInfo {
    name: "Pink: The Adventurers",
    interpretation: "Those who have escaped the boundaries of society, or who pretend that they have, or those who help them along the way. Athletes, pilots, race drivers, but also spies, burglars. Also, perhaps, contempt for those who live normal lives.",
    up_symbol: "The Eye/Tree",
    up_symbol_meaning: "Growth, learning, discovery.",
    reversed_symbol: "The Sleeper",
    reversed_symbol_meaning: "Rest, death, the future yet to be born.",
};

const BLUE: SuitInfo = SuitInfo {
    name: "Blue: The People",
    interpretation: "Most of the population, both lower and middle classes, looking up to the power. Workers, soldiers and police officers, but also lynching and book-burning mobs, school students and their teachers, civil servants, believers and farmers. Also, perhaps, jealousy towards elites, real or imaginary.",
    up_symbol: "The Imperial Owl",
    up_symbol_meaning: "Authority, conformity, order, safety.",
    reversed_symbol: "The Broken Man",
    reversed_symbol_meaning: "Exploitation, discontent, accidents, disregard.",
};

const GOLD: SuitInfo = SuitInfo {
    name: "Gold: The Elites",
    interpretation: "Those who are envied, with or without justification, usually for their wealth, their lineage or their knowledge. Scholars and investors, aristocrats and tradespeople. Also, perhaps, the fear of the People.",
    up_symbol: "The Scroll",
    up_symbol_meaning: "Knowledge, law, tradition, birthright.",
    reversed_symbol: "The Golden Apple",
    reversed_symbol_meaning: "Lies, discord, politics, temptation.",
};

const BLACK: SuitInfo = SuitInfo {
    name: "Black: The Divider",
    interpretation: "Everything and everyone that enables the Restoration to maintain its regime. The army and the theoreticians of the Restoration, the police forces and the propagandists. Also, perhaps, the hole, deep within our souls and society, that let them grab and hold to power.",
    up_symbol: "The Hourglass",
    up_symbol_meaning: "Something old and corrupted, the slow decay of something beautiful, failing to let go.",
    reversed_symbol: "The Wind",
    reversed_symbol_meaning: "Something new and evil, the sudden destruction of something beautiful, giving up too early.",
};

impl SuitKey {
    /// Suits in catalog order.
    pub const ALL: [SuitKey; 6] = [
        SuitKey::Red,
        SuitKey::Purple,
        SuitKey::Pink,
        SuitKey::Blue,
        SuitKey::Gold,
        SuitKey::Black,
    ];

    /// Number of cards per suit.
    pub const CARDS_PER_SUIT: usize = 15;

    /// Descriptive text for this suit.
    #[must_use]
    pub fn info(self) -> &'static SuitInfo {
        match self {
            SuitKey::Red => &RED,
            SuitKey::Purple => &PURPLE,
            SuitKey::Pink => &PINK,
            SuitKey::Blue => &BLUE,
            SuitKey::Gold => &GOLD,
            SuitKey::Black => &BLACK,
        }
    }

    /// Lowercase key, as found in catalog files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SuitKey::Red => "red",
            SuitKey::Purple => "purple",
            SuitKey::Pink => "pink",
            SuitKey::Blue => "blue",
            SuitKey::Gold => "gold",
            SuitKey::Black => "black",
        }
    }
}
