use crate::{Card, HandKind, Score, ScoreEffect, Suit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JokerRarity {
    Common,
    Uncommon,
    Rare,
}

/// Read-only slice of run state a joker may consult while scoring. This is
/// the only place the pipeline sees anything beyond the cards themselves.
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext {
    pub hand: HandKind,
    pub discards_left: u8,
    pub joker_count: usize,
}

/// Jokers are data, not closures: one exhaustive dispatch in `apply` keeps
/// the whole effect table reviewable in one place and the run state
/// serializable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JokerKind {
    Joker,
    GreedyJoker,
    LustyJoker,
    WrathfulJoker,
    GluttonousJoker,
    SlyJoker,
    ScaryFace,
    EvenSteven,
    Banner,
    MysticSummit,
    AbstractJoker,
    TheDuo,
    Cavendish,
}

impl JokerKind {
    pub const ALL: [JokerKind; 13] = [
        JokerKind::Joker,
        JokerKind::GreedyJoker,
        JokerKind::LustyJoker,
        JokerKind::WrathfulJoker,
        JokerKind::GluttonousJoker,
        JokerKind::SlyJoker,
        JokerKind::ScaryFace,
        JokerKind::EvenSteven,
        JokerKind::Banner,
        JokerKind::MysticSummit,
        JokerKind::AbstractJoker,
        JokerKind::TheDuo,
        JokerKind::Cavendish,
    ];

    pub fn name(self) -> &'static str {
        match self {
            JokerKind::Joker => "Joker",
            JokerKind::GreedyJoker => "Greedy Joker",
            JokerKind::LustyJoker => "Lusty Joker",
            JokerKind::WrathfulJoker => "Wrathful Joker",
            JokerKind::GluttonousJoker => "Gluttonous Joker",
            JokerKind::SlyJoker => "Sly Joker",
            JokerKind::ScaryFace => "Scary Face",
            JokerKind::EvenSteven => "Even Steven",
            JokerKind::Banner => "Banner",
            JokerKind::MysticSummit => "Mystic Summit",
            JokerKind::AbstractJoker => "Abstract Joker",
            JokerKind::TheDuo => "The Duo",
            JokerKind::Cavendish => "Cavendish",
        }
    }

    pub fn cost(self) -> i64 {
        match self {
            JokerKind::Joker => 3,
            JokerKind::GreedyJoker
            | JokerKind::LustyJoker
            | JokerKind::WrathfulJoker
            | JokerKind::GluttonousJoker
            | JokerKind::SlyJoker
            | JokerKind::ScaryFace
            | JokerKind::EvenSteven => 4,
            JokerKind::Banner | JokerKind::MysticSummit => 5,
            JokerKind::AbstractJoker => 6,
            JokerKind::Cavendish => 7,
            JokerKind::TheDuo => 8,
        }
    }

    pub fn rarity(self) -> JokerRarity {
        match self {
            JokerKind::Joker
            | JokerKind::GreedyJoker
            | JokerKind::LustyJoker
            | JokerKind::WrathfulJoker
            | JokerKind::GluttonousJoker
            | JokerKind::SlyJoker
            | JokerKind::ScaryFace
            | JokerKind::EvenSteven
            | JokerKind::Banner => JokerRarity::Common,
            JokerKind::MysticSummit | JokerKind::AbstractJoker => JokerRarity::Uncommon,
            JokerKind::TheDuo | JokerKind::Cavendish => JokerRarity::Rare,
        }
    }

    /// Apply this joker's effect to the running score. Callers iterate the
    /// owned list left to right (purchase order); later jokers see the
    /// output of earlier ones.
    pub fn apply(self, selected: &[Card], score: &mut Score, ctx: &ScoreContext) {
        match self {
            JokerKind::Joker => score.apply(&ScoreEffect::AddMult(4.0)),
            JokerKind::GreedyJoker => per_suit_mult(selected, Suit::Diamonds, score),
            JokerKind::LustyJoker => per_suit_mult(selected, Suit::Hearts, score),
            JokerKind::WrathfulJoker => per_suit_mult(selected, Suit::Spades, score),
            JokerKind::GluttonousJoker => per_suit_mult(selected, Suit::Clubs, score),
            JokerKind::SlyJoker => {
                if ctx.hand.contains_pair() {
                    score.apply(&ScoreEffect::AddChips(50));
                }
            }
            JokerKind::ScaryFace => {
                let faces = selected.iter().filter(|card| card.rank.is_face()).count();
                if faces > 0 {
                    score.apply(&ScoreEffect::AddChips(30 * faces as i64));
                }
            }
            JokerKind::EvenSteven => {
                let evens = selected
                    .iter()
                    .filter(|card| card.rank.value() % 2 == 0)
                    .count();
                if evens > 0 {
                    score.apply(&ScoreEffect::AddMult(4.0 * evens as f64));
                }
            }
            JokerKind::Banner => {
                score.apply(&ScoreEffect::AddChips(30 * ctx.discards_left as i64));
            }
            JokerKind::MysticSummit => {
                if ctx.discards_left == 0 {
                    score.apply(&ScoreEffect::AddMult(15.0));
                }
            }
            JokerKind::AbstractJoker => {
                score.apply(&ScoreEffect::AddMult(3.0 * ctx.joker_count as f64));
            }
            JokerKind::TheDuo => {
                if ctx.hand.contains_pair() {
                    score.apply(&ScoreEffect::MultiplyMult(2.0));
                }
            }
            JokerKind::Cavendish => score.apply(&ScoreEffect::MultiplyMult(3.0)),
        }
    }
}

fn per_suit_mult(selected: &[Card], suit: Suit, score: &mut Score) {
    let count = selected.iter().filter(|card| card.suit == suit).count();
    if count > 0 {
        score.apply(&ScoreEffect::AddMult(3.0 * count as f64));
    }
}
