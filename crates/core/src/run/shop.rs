use super::*;
use crate::{Event, EventBus, PlanetKind, TarotEffect, TarotKind};

impl RunState {
    /// Buy a joker offer. The new joker is appended, so it applies last in
    /// the scoring pipeline.
    pub fn buy_joker(&mut self, kind: JokerKind, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != Phase::Shop {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        if self.jokers.contains(&kind) {
            return Err(RunError::AlreadyOwned);
        }
        if self.jokers.len() >= self.config.joker_capacity {
            return Err(RunError::JokerCapReached);
        }
        let shop = self.shop.as_ref().ok_or(RunError::OfferNotAvailable)?;
        if !shop.jokers.contains(&kind) {
            return Err(RunError::OfferNotAvailable);
        }
        let cost = kind.cost();
        self.spend(cost)?;
        self.shop
            .as_mut()
            .and_then(|shop| shop.take_joker(kind))
            .ok_or(RunError::OfferNotAvailable)?;
        self.jokers.push(kind);
        events.push(Event::JokerBought {
            kind,
            cost,
            money: self.state.money,
        });
        Ok(())
    }

    /// Buy a tarot and apply its one-shot effect immediately.
    pub fn buy_tarot(&mut self, kind: TarotKind, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != Phase::Shop {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let shop = self.shop.as_ref().ok_or(RunError::OfferNotAvailable)?;
        if !shop.tarots.contains(&kind) {
            return Err(RunError::OfferNotAvailable);
        }
        let effect = kind.effect();
        let needs_card = !matches!(effect, TarotEffect::ExtraDiscard);
        if needs_card && self.hand.is_empty() {
            return Err(RunError::InvalidSelection);
        }
        let cost = kind.cost();
        self.spend(cost)?;
        self.shop
            .as_mut()
            .and_then(|shop| shop.take_tarot(kind))
            .ok_or(RunError::OfferNotAvailable)?;

        match effect {
            TarotEffect::Enhance(enhancement) => {
                if let Some(idx) = self.rng.pick(self.hand.len()) {
                    self.hand[idx].enhancement = Some(enhancement);
                }
            }
            TarotEffect::AttachSeal(seal) => {
                if let Some(idx) = self.rng.pick(self.hand.len()) {
                    self.hand[idx].seal = Some(seal);
                }
            }
            TarotEffect::HoldRandomCard => {
                if let Some(idx) = self.rng.pick(self.hand.len()) {
                    let card = self.hand.remove(idx);
                    self.held.push(card);
                    self.draw_to_hand(events);
                }
            }
            TarotEffect::ExtraDiscard => {
                // Bought between blinds, so the discard lands on the next
                // blind's budget, not the spent one.
                self.pending_discards = self.pending_discards.saturating_add(1);
            }
        }

        events.push(Event::TarotUsed {
            kind,
            cost,
            money: self.state.money,
        });
        self.check_conservation()?;
        Ok(())
    }

    /// Buy a planet: a permanent upgrade to one hand class's base entry.
    pub fn buy_planet(&mut self, kind: PlanetKind, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != Phase::Shop {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let shop = self.shop.as_ref().ok_or(RunError::OfferNotAvailable)?;
        if !shop.planets.contains(&kind) {
            return Err(RunError::OfferNotAvailable);
        }
        let cost = kind.cost();
        self.spend(cost)?;
        self.shop
            .as_mut()
            .and_then(|shop| shop.take_planet(kind))
            .ok_or(RunError::OfferNotAvailable)?;
        let (bonus_chips, bonus_mult) = kind.bonus();
        self.tables.apply_planet(kind.hand(), bonus_chips, bonus_mult);
        events.push(Event::PlanetUsed {
            kind,
            cost,
            money: self.state.money,
        });
        Ok(())
    }

    /// Regenerate all three offer sections at the fixed reroll cost.
    pub fn reroll_shop(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != Phase::Shop {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let cost = self
            .shop
            .as_ref()
            .ok_or(RunError::OfferNotAvailable)?
            .reroll_cost;
        self.spend(cost)?;
        let owned = self.owned_jokers();
        let shop = self.shop.as_mut().ok_or(RunError::OfferNotAvailable)?;
        shop.reroll(&self.config.shop, &mut self.rng, &owned);
        events.push(Event::ShopRerolled {
            cost,
            money: self.state.money,
        });
        Ok(())
    }

    /// Deduct money, refusing any purchase that would go negative.
    fn spend(&mut self, cost: i64) -> Result<(), RunError> {
        if self.state.money < cost {
            return Err(RunError::InsufficientFunds {
                cost,
                money: self.state.money,
            });
        }
        self.state.money -= cost;
        Ok(())
    }
}
