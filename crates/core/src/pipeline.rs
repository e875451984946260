use crate::{
    base_evaluation, Card, Enhancement, JokerKind, Rank, ScoreBreakdown, ScoreContext,
    ScoreEffect, ScoreTables,
};

/// Score a played selection through the full modifier chain. Pure: same
/// inputs, same breakdown. The composition order is fixed and part of the
/// contract:
///
/// 1. base table entry (planet-upgraded) plus per-card chip values
/// 2. per-card additive mult (enhancements, red/purple seals)
/// 3. held-card passives, evaluated against `held` regardless of the play
/// 4. glass doubling, once per glass card, after all additive mult
/// 5. jokers left to right in purchase order
pub fn score_play(
    selected: &[Card],
    held: &[Card],
    jokers: &[JokerKind],
    tables: &ScoreTables,
    discards_left: u8,
) -> ScoreBreakdown {
    let mut breakdown = base_evaluation(selected, tables);
    let score = &mut breakdown.score;

    let card_mult: f64 = selected.iter().map(Card::mult_bonus).sum();
    if card_mult > 0.0 {
        score.apply(&ScoreEffect::AddMult(card_mult));
    }

    let held_mult: f64 = held.iter().map(held_card_mult).sum();
    if held_mult > 0.0 {
        score.apply(&ScoreEffect::AddMult(held_mult));
    }

    let glass = selected
        .iter()
        .filter(|card| card.enhancement == Some(Enhancement::Glass))
        .count();
    for _ in 0..glass {
        score.apply(&ScoreEffect::MultiplyMult(2.0));
    }

    let ctx = ScoreContext {
        hand: breakdown.hand,
        discards_left,
        joker_count: jokers.len(),
    };
    for joker in jokers {
        joker.apply(selected, score, &ctx);
    }

    breakdown
}

/// Passive mult from a card sitting in the held pile. Kings carry the big
/// bonus; aces a small one.
fn held_card_mult(card: &Card) -> f64 {
    match card.rank {
        Rank::King => 2.0,
        Rank::Ace => 1.0,
        _ => 0.0,
    }
}
