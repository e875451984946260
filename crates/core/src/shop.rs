use crate::{JokerKind, PlanetKind, RngState, ShopRule, TarotKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Current shop offers. Each section is drawn without replacement from its
/// pool; jokers already owned by the player never appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopState {
    pub jokers: Vec<JokerKind>,
    pub tarots: Vec<TarotKind>,
    pub planets: Vec<PlanetKind>,
    pub reroll_cost: i64,
}

impl ShopState {
    pub fn generate(
        rule: &ShopRule,
        reroll_cost: i64,
        rng: &mut RngState,
        owned_jokers: &HashSet<JokerKind>,
    ) -> Self {
        let joker_pool: Vec<JokerKind> = JokerKind::ALL
            .iter()
            .copied()
            .filter(|kind| !owned_jokers.contains(kind))
            .collect();
        Self {
            jokers: draw_offers(&joker_pool, rule.joker_slots, rng),
            tarots: draw_offers(&TarotKind::ALL, rule.tarot_slots, rng),
            planets: draw_offers(&PlanetKind::ALL, rule.planet_slots, rng),
            reroll_cost,
        }
    }

    /// Regenerate every section. Reroll cost is fixed; it neither escalates
    /// nor consumes a shop turn.
    pub fn reroll(&mut self, rule: &ShopRule, rng: &mut RngState, owned_jokers: &HashSet<JokerKind>) {
        let fresh = Self::generate(rule, self.reroll_cost, rng, owned_jokers);
        self.jokers = fresh.jokers;
        self.tarots = fresh.tarots;
        self.planets = fresh.planets;
    }

    pub fn take_joker(&mut self, kind: JokerKind) -> Option<JokerKind> {
        take(&mut self.jokers, kind)
    }

    pub fn take_tarot(&mut self, kind: TarotKind) -> Option<TarotKind> {
        take(&mut self.tarots, kind)
    }

    pub fn take_planet(&mut self, kind: PlanetKind) -> Option<PlanetKind> {
        take(&mut self.planets, kind)
    }
}

/// Sample `count` distinct items from `pool` uniformly. Short pools just
/// yield fewer offers.
fn draw_offers<T: Copy>(pool: &[T], count: usize, rng: &mut RngState) -> Vec<T> {
    let mut remaining: Vec<T> = pool.to_vec();
    let mut offers = Vec::with_capacity(count.min(remaining.len()));
    while offers.len() < count {
        let Some(idx) = rng.pick(remaining.len()) else {
            break;
        };
        offers.push(remaining.swap_remove(idx));
    }
    offers
}

fn take<T: Copy + PartialEq>(offers: &mut Vec<T>, wanted: T) -> Option<T> {
    let idx = offers.iter().position(|&offer| offer == wanted)?;
    Some(offers.remove(idx))
}
