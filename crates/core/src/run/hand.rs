use super::*;
use crate::{score_play, Event, EventBus, ScoreBreakdown};

impl RunState {
    /// Play a selection of 1..=5 hand cards: run the modifier pipeline, add
    /// the result to the round score, consume one hand, and settle the
    /// blind outcome.
    pub fn play_hand(
        &mut self,
        indices: &[usize],
        events: &mut EventBus,
    ) -> Result<ScoreBreakdown, RunError> {
        if self.state.phase != Phase::Playing {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let selected = self.selected_cards(indices)?;
        if self.state.hands_left == 0 {
            return Err(RunError::HandBudgetExhausted);
        }

        let breakdown = score_play(
            &selected,
            &self.held,
            &self.jokers,
            &self.tables,
            self.state.discards_left,
        );
        let total = breakdown.total();

        let played = self.take_cards(indices);
        self.deck.discard(played);
        self.state.round_score += total;
        self.state.hands_left -= 1;
        self.draw_to_hand(events);

        events.push(Event::HandScored {
            hand: breakdown.hand,
            chips: breakdown.score.chips,
            mult: breakdown.score.mult,
            total,
            round_score: self.state.round_score,
        });

        self.settle_outcome(events)?;
        self.check_conservation()?;
        Ok(breakdown)
    }

    /// Trade a selection for fresh cards. Consumes one discard, never a
    /// hand, and never touches the round score.
    pub fn discard_hand(&mut self, indices: &[usize], events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != Phase::Playing {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        self.selected_cards(indices)?;
        if self.state.discards_left == 0 {
            return Err(RunError::DiscardBudgetExhausted);
        }

        let discarded = self.take_cards(indices);
        let count = discarded.len();
        self.deck.discard(discarded);
        self.state.discards_left -= 1;
        self.draw_to_hand(events);

        events.push(Event::Discarded {
            count,
            discards_left: self.state.discards_left,
        });
        self.check_conservation()?;
        Ok(())
    }
}
