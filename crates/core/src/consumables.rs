use crate::{Enhancement, HandKind, Seal};
use serde::{Deserialize, Serialize};

/// One-shot purchasables, consumed at the moment of purchase. Each is a
/// single mutation of the hand, deck, held pile, or discard budget; tarots
/// that touch one card pick it through the injected RNG since the purchase
/// intent carries no card selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TarotKind {
    TheEmpress,
    TheHierophant,
    TheChariot,
    TheTower,
    TheLovers,
    Justice,
    TheDevil,
    TheMagician,
    TheSun,
    TheStar,
    TheMoon,
    TheWorld,
    TheHermit,
    Temperance,
}

/// What a tarot does, in data form so the purchase path stays one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TarotEffect {
    /// Attach an enhancement to a random hand card.
    Enhance(Enhancement),
    /// Attach a seal to a random hand card.
    AttachSeal(Seal),
    /// Move a random hand card to the held pile and refill the hand.
    HoldRandomCard,
    /// One extra discard for the current blind.
    ExtraDiscard,
}

impl TarotKind {
    pub const ALL: [TarotKind; 14] = [
        TarotKind::TheEmpress,
        TarotKind::TheHierophant,
        TarotKind::TheChariot,
        TarotKind::TheTower,
        TarotKind::TheLovers,
        TarotKind::Justice,
        TarotKind::TheDevil,
        TarotKind::TheMagician,
        TarotKind::TheSun,
        TarotKind::TheStar,
        TarotKind::TheMoon,
        TarotKind::TheWorld,
        TarotKind::TheHermit,
        TarotKind::Temperance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TarotKind::TheEmpress => "The Empress",
            TarotKind::TheHierophant => "The Hierophant",
            TarotKind::TheChariot => "The Chariot",
            TarotKind::TheTower => "The Tower",
            TarotKind::TheLovers => "The Lovers",
            TarotKind::Justice => "Justice",
            TarotKind::TheDevil => "The Devil",
            TarotKind::TheMagician => "The Magician",
            TarotKind::TheSun => "The Sun",
            TarotKind::TheStar => "The Star",
            TarotKind::TheMoon => "The Moon",
            TarotKind::TheWorld => "The World",
            TarotKind::TheHermit => "The Hermit",
            TarotKind::Temperance => "Temperance",
        }
    }

    pub fn cost(self) -> i64 {
        match self {
            TarotKind::TheHermit | TarotKind::Temperance => 4,
            _ => 3,
        }
    }

    pub fn effect(self) -> TarotEffect {
        match self {
            TarotKind::TheEmpress => TarotEffect::Enhance(Enhancement::Mult),
            TarotKind::TheHierophant => TarotEffect::Enhance(Enhancement::Bonus),
            TarotKind::TheChariot => TarotEffect::Enhance(Enhancement::Steel),
            TarotKind::TheTower => TarotEffect::Enhance(Enhancement::Chips),
            TarotKind::TheLovers => TarotEffect::Enhance(Enhancement::Wild),
            TarotKind::Justice => TarotEffect::Enhance(Enhancement::Glass),
            TarotKind::TheDevil => TarotEffect::Enhance(Enhancement::RedMult),
            TarotKind::TheMagician => TarotEffect::Enhance(Enhancement::BlueChip),
            TarotKind::TheSun => TarotEffect::AttachSeal(Seal::Red),
            TarotKind::TheStar => TarotEffect::AttachSeal(Seal::Blue),
            TarotKind::TheMoon => TarotEffect::AttachSeal(Seal::Purple),
            TarotKind::TheWorld => TarotEffect::AttachSeal(Seal::Gold),
            TarotKind::TheHermit => TarotEffect::HoldRandomCard,
            TarotKind::Temperance => TarotEffect::ExtraDiscard,
        }
    }
}

/// Permanent upgrades, one per upgradable hand class. Neptune covers both
/// straight and royal flushes through the shared table entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlanetKind {
    Pluto,
    Mercury,
    Uranus,
    Venus,
    Saturn,
    Jupiter,
    Earth,
    Mars,
    Neptune,
}

impl PlanetKind {
    pub const ALL: [PlanetKind; 9] = [
        PlanetKind::Pluto,
        PlanetKind::Mercury,
        PlanetKind::Uranus,
        PlanetKind::Venus,
        PlanetKind::Saturn,
        PlanetKind::Jupiter,
        PlanetKind::Earth,
        PlanetKind::Mars,
        PlanetKind::Neptune,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PlanetKind::Pluto => "Pluto",
            PlanetKind::Mercury => "Mercury",
            PlanetKind::Uranus => "Uranus",
            PlanetKind::Venus => "Venus",
            PlanetKind::Saturn => "Saturn",
            PlanetKind::Jupiter => "Jupiter",
            PlanetKind::Earth => "Earth",
            PlanetKind::Mars => "Mars",
            PlanetKind::Neptune => "Neptune",
        }
    }

    pub fn hand(self) -> HandKind {
        match self {
            PlanetKind::Pluto => HandKind::HighCard,
            PlanetKind::Mercury => HandKind::Pair,
            PlanetKind::Uranus => HandKind::TwoPair,
            PlanetKind::Venus => HandKind::ThreeKind,
            PlanetKind::Saturn => HandKind::Straight,
            PlanetKind::Jupiter => HandKind::Flush,
            PlanetKind::Earth => HandKind::FullHouse,
            PlanetKind::Mars => HandKind::FourKind,
            PlanetKind::Neptune => HandKind::StraightFlush,
        }
    }

    pub fn bonus(self) -> (i64, f64) {
        match self {
            PlanetKind::Pluto => (10, 1.0),
            PlanetKind::Mercury => (15, 1.0),
            PlanetKind::Uranus => (20, 1.0),
            PlanetKind::Venus => (20, 2.0),
            PlanetKind::Saturn => (30, 3.0),
            PlanetKind::Jupiter => (15, 2.0),
            PlanetKind::Earth => (25, 2.0),
            PlanetKind::Mars => (30, 3.0),
            PlanetKind::Neptune => (40, 4.0),
        }
    }

    pub fn cost(self) -> i64 {
        3
    }
}
