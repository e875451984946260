use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal used by straight detection. Ace counts low.
    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }

    /// Chip contribution of the bare rank: Ace 11, faces 10, pips face value.
    pub fn chips(self) -> i64 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            other => other.value() as i64,
        }
    }

    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }
}

/// One enhancement slot per card, attached by tarot effects after the deal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Enhancement {
    Mult,
    Chips,
    Glass,
    Steel,
    Bonus,
    Wild,
    RedMult,
    BlueChip,
}

/// Separate slot from the enhancement; also tarot-attached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seal {
    Red,
    Blue,
    Gold,
    Purple,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    #[serde(default)]
    pub enhancement: Option<Enhancement>,
    #[serde(default)]
    pub seal: Option<Seal>,
}

impl Card {
    pub fn standard(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            enhancement: None,
            seal: None,
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self.enhancement, Some(Enhancement::Wild))
    }

    /// Chip contribution when this card is part of a played selection.
    /// Everything here is additive into the chips column.
    pub fn chip_value(&self) -> i64 {
        let mut chips = self.rank.chips();
        chips += match self.enhancement {
            Some(Enhancement::Chips) | Some(Enhancement::Steel) => 10,
            Some(Enhancement::Bonus) => 5,
            Some(Enhancement::BlueChip) => 20,
            _ => 0,
        };
        chips += match self.seal {
            Some(Seal::Blue) => 25,
            Some(Seal::Gold) => 50,
            _ => 0,
        };
        chips
    }

    /// Additive mult contribution when this card is part of a played
    /// selection. The glass doubling is applied separately, after all
    /// additive bonuses.
    pub fn mult_bonus(&self) -> f64 {
        let mut mult = match self.enhancement {
            Some(Enhancement::Mult) | Some(Enhancement::Glass) => 4.0,
            Some(Enhancement::RedMult) => 8.0,
            _ => 0.0,
        };
        mult += match self.seal {
            Some(Seal::Red) => 15.0,
            Some(Seal::Purple) => 20.0,
            _ => 0.0,
        };
        mult
    }
}
