use super::*;
use crate::{Event, EventBus, ShopState};

impl RunState {
    /// Resolve the blind after a played hand. Reaching the target exactly
    /// clears the blind; the final blind routes straight to `Won`.
    pub(super) fn settle_outcome(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        let blind = self.current_blind();
        let target = blind.target_chips;
        let reward = blind.money_reward;

        if self.state.round_score >= target {
            if self.config.is_final_blind(self.state.blind_index) {
                self.state.phase = Phase::Won;
                events.push(Event::RunWon {
                    money: self.state.money,
                });
                return Ok(());
            }
            // Interest is computed on the money held before the reward.
            let interest = self.state.money / self.config.economy.interest_step;
            self.state.money += reward + interest;
            self.state.phase = Phase::Shop;
            let owned = self.owned_jokers();
            let shop = ShopState::generate(
                &self.config.shop,
                self.config.economy.reroll_cost,
                &mut self.rng,
                &owned,
            );
            let reroll_cost = shop.reroll_cost;
            self.shop = Some(shop);
            events.push(Event::BlindCleared {
                score: self.state.round_score,
                reward,
                interest,
                money: self.state.money,
            });
            events.push(Event::ShopEntered { reroll_cost });
            return Ok(());
        }

        if self.state.hands_left == 0 {
            self.state.phase = Phase::Lost;
            events.push(Event::RunLost {
                score: self.state.round_score,
                target,
            });
        }
        Ok(())
    }

    /// Leave the shop for the next blind: fresh budgets and a shuffled deck
    /// dealt from the standard set minus the held cards, which stay out of
    /// circulation for the rest of the run. Jokers, money, planet upgrades,
    /// and any bought extra discards carry over.
    pub fn continue_to_next_blind(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != Phase::Shop {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        self.state.blind_index += 1;
        self.state.round_score = 0;
        self.state.hands_left = self.config.hands_per_blind;
        self.state.discards_left = self
            .config
            .discards_per_blind
            .saturating_add(self.pending_discards);
        self.pending_discards = 0;
        self.state.hand_size = self.config.hand_size;
        self.state.phase = Phase::Playing;
        self.shop = None;

        self.deck = Deck::standard52_without(&self.held);
        self.deck.shuffle(&mut self.rng);
        self.hand.clear();
        self.announce_blind(events);
        self.draw_to_hand(events);
        self.check_conservation()?;
        Ok(())
    }
}
