use crate::{evaluate_hand, upgrade_kind, Card, HandKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Score {
    pub chips: i64,
    pub mult: f64,
}

impl Score {
    /// Final score for a played hand. Both columns are rounded before the
    /// product and the result is clamped non-negative.
    pub fn total(&self) -> i64 {
        let chips = self.chips.max(0);
        let mult = self.mult.round().max(0.0) as i64;
        chips * mult
    }

    pub fn apply(&mut self, effect: &ScoreEffect) {
        match effect {
            ScoreEffect::AddChips(value) => self.chips += value,
            ScoreEffect::AddMult(value) => self.mult += value,
            ScoreEffect::MultiplyMult(value) => self.mult *= value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ScoreEffect {
    AddChips(i64),
    AddMult(f64),
    MultiplyMult(f64),
}

/// Base chips/mult per hand class, plus the permanent planet bonuses bought
/// during the run. Royal flush shares the straight-flush bonus entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreTables {
    bonuses: HashMap<HandKind, (i64, f64)>,
}

impl ScoreTables {
    pub fn new() -> Self {
        Self {
            bonuses: HashMap::new(),
        }
    }

    pub fn hand_base(&self, kind: HandKind) -> (i64, f64) {
        let (base_chips, base_mult) = default_hand_base(kind);
        let (bonus_chips, bonus_mult) = self
            .bonuses
            .get(&upgrade_kind(kind))
            .copied()
            .unwrap_or((0, 0.0));
        (base_chips + bonus_chips, base_mult + bonus_mult)
    }

    /// Permanent upgrade from a planet card; lasts the rest of the run.
    pub fn apply_planet(&mut self, kind: HandKind, bonus_chips: i64, bonus_mult: f64) {
        let entry = self.bonuses.entry(upgrade_kind(kind)).or_insert((0, 0.0));
        entry.0 += bonus_chips;
        entry.1 += bonus_mult;
    }
}

impl Default for ScoreTables {
    fn default() -> Self {
        Self::new()
    }
}

/// The evaluated result of a played hand: classification, table base, and
/// the score after the full modifier pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub hand: HandKind,
    pub base: Score,
    pub card_chips: i64,
    pub score: Score,
}

impl ScoreBreakdown {
    pub fn hand_name(&self) -> &'static str {
        self.hand.name()
    }

    pub fn total(&self) -> i64 {
        self.score.total()
    }
}

/// Stage one of the pipeline: classify, look up the (planet-upgraded) base,
/// and fold in the per-card chip values.
pub fn base_evaluation(cards: &[Card], tables: &ScoreTables) -> ScoreBreakdown {
    let hand = evaluate_hand(cards);
    let (base_chips, base_mult) = tables.hand_base(hand);
    let base = Score {
        chips: base_chips,
        mult: base_mult,
    };
    let card_chips: i64 = cards.iter().map(Card::chip_value).sum();
    let score = Score {
        chips: base.chips + card_chips,
        mult: base.mult,
    };
    ScoreBreakdown {
        hand,
        base,
        card_chips,
        score,
    }
}

fn default_hand_base(kind: HandKind) -> (i64, f64) {
    match kind {
        HandKind::HighCard => (5, 1.0),
        HandKind::Pair => (10, 2.0),
        HandKind::TwoPair => (20, 2.0),
        HandKind::ThreeKind => (30, 3.0),
        HandKind::Straight => (30, 4.0),
        HandKind::Flush => (35, 4.0),
        HandKind::FullHouse => (40, 4.0),
        HandKind::FourKind => (60, 7.0),
        HandKind::StraightFlush => (80, 8.0),
        HandKind::RoyalFlush => (100, 8.0),
    }
}
