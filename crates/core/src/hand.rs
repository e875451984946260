use crate::{Card, Suit};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Poker hand classes, weakest to strongest. The derived `Ord` follows
/// declaration order, so `RoyalFlush` compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    ThreeKind,
    Straight,
    Flush,
    FullHouse,
    FourKind,
    StraightFlush,
    RoyalFlush,
}

impl HandKind {
    pub const ALL: [HandKind; 10] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::ThreeKind,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::FourKind,
        HandKind::StraightFlush,
        HandKind::RoyalFlush,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::HighCard => "high_card",
            HandKind::Pair => "pair",
            HandKind::TwoPair => "two_pair",
            HandKind::ThreeKind => "three_kind",
            HandKind::Straight => "straight",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::FourKind => "four_kind",
            HandKind::StraightFlush => "straight_flush",
            HandKind::RoyalFlush => "royal_flush",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::ThreeKind => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::FourKind => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::RoyalFlush => "Royal Flush",
        }
    }

    /// Contains at least one pair. Used by pair-gated joker effects.
    pub fn contains_pair(self) -> bool {
        matches!(
            self,
            HandKind::Pair
                | HandKind::TwoPair
                | HandKind::ThreeKind
                | HandKind::FullHouse
                | HandKind::FourKind
        )
    }
}

/// Folds `RoyalFlush` into `StraightFlush` for planet upgrades: both share
/// one table entry.
pub fn upgrade_kind(kind: HandKind) -> HandKind {
    match kind {
        HandKind::RoyalFlush => HandKind::StraightFlush,
        other => other,
    }
}

/// Classify a played selection. Pure and order-insensitive: any permutation
/// of the same multiset of cards yields the same result.
pub fn evaluate_hand(cards: &[Card]) -> HandKind {
    if cards.is_empty() {
        return HandKind::HighCard;
    }

    let mut rank_counts: HashMap<u8, usize> = HashMap::new();
    for card in cards {
        *rank_counts.entry(card.rank.value()).or_insert(0) += 1;
    }
    let mut counts: Vec<usize> = rank_counts.values().copied().collect();
    counts.sort_by(|a, b| b.cmp(a));

    let is_flush = is_flush(cards);
    let distinct: BTreeSet<u8> = rank_counts.keys().copied().collect();
    let royal_run = [1u8, 10, 11, 12, 13].iter().all(|v| distinct.contains(v));
    let is_straight = royal_run || has_straight_window(&distinct);

    // First match wins, strongest first.
    if is_flush && is_straight && royal_run {
        return HandKind::RoyalFlush;
    }
    if is_flush && is_straight {
        return HandKind::StraightFlush;
    }
    if counts[0] >= 4 {
        return HandKind::FourKind;
    }
    if counts.len() >= 2 && counts[0] == 3 && counts[1] == 2 {
        return HandKind::FullHouse;
    }
    if is_flush {
        return HandKind::Flush;
    }
    if is_straight {
        return HandKind::Straight;
    }
    if counts[0] == 3 {
        return HandKind::ThreeKind;
    }
    if counts.len() >= 2 && counts[0] == 2 && counts[1] == 2 {
        return HandKind::TwoPair;
    }
    if counts[0] == 2 {
        return HandKind::Pair;
    }
    HandKind::HighCard
}

/// At least five cards sharing one suit. Wild cards count toward any suit.
fn is_flush(cards: &[Card]) -> bool {
    let wilds = cards.iter().filter(|card| card.is_wild()).count();
    if wilds >= 5 {
        return true;
    }
    Suit::ALL.iter().any(|&suit| {
        let suited = cards
            .iter()
            .filter(|card| !card.is_wild() && card.suit == suit)
            .count();
        suited + wilds >= 5
    })
}

/// Any length-5 window of consecutive values in the distinct rank set. With
/// Ace valued 1 the wheel (A-2-3-4-5) falls out of the window scan; the
/// ace-high run is handled by the caller's royal check.
fn has_straight_window(distinct: &BTreeSet<u8>) -> bool {
    let values: Vec<u8> = distinct.iter().copied().collect();
    values
        .windows(5)
        .any(|w| w.windows(2).all(|pair| pair[1] == pair[0] + 1))
}
