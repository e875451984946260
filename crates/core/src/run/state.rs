use super::*;
use crate::{score_play, BlindRule, Event, EventBus, ScoreBreakdown, DECK_SIZE};
use std::collections::HashSet;

impl RunState {
    /// Start a fresh run: full budgets, seed money, no jokers, a shuffled
    /// deck and a dealt hand, positioned at the first blind.
    pub fn new(config: GameConfig, seed: u64, events: &mut EventBus) -> Self {
        let mut rng = RngState::from_seed(seed);
        let mut deck = Deck::standard52();
        deck.shuffle(&mut rng);
        let state = GameState::new(
            config.starting_money,
            config.hands_per_blind,
            config.discards_per_blind,
            config.hand_size,
        );
        let mut run = Self {
            config,
            tables: ScoreTables::new(),
            rng,
            deck,
            hand: Vec::new(),
            held: Vec::new(),
            jokers: Vec::new(),
            shop: None,
            pending_discards: 0,
            state,
        };
        run.announce_blind(events);
        run.draw_to_hand(events);
        run
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// The blind currently being played. `blind_index` never runs past the
    /// configured list: the final clear routes to `Won` instead.
    pub fn current_blind(&self) -> &BlindRule {
        &self.config.blinds[self.state.blind_index]
    }

    /// Read-only dry run of the modifier pipeline for UI feedback. Does not
    /// touch the run state.
    pub fn preview_score(&self, indices: &[usize]) -> Result<ScoreBreakdown, RunError> {
        if self.state.phase != Phase::Playing {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let selected = self.selected_cards(indices)?;
        Ok(score_play(
            &selected,
            &self.held,
            &self.jokers,
            &self.tables,
            self.state.discards_left,
        ))
    }

    pub(super) fn owned_jokers(&self) -> HashSet<JokerKind> {
        self.jokers.iter().copied().collect()
    }

    /// Validate a hand selection and copy the chosen cards out, leaving the
    /// hand itself untouched.
    pub(super) fn selected_cards(&self, indices: &[usize]) -> Result<Vec<Card>, RunError> {
        if indices.is_empty() {
            return Err(RunError::NoCardsSelected);
        }
        if indices.len() > 5 {
            return Err(RunError::TooManyCards);
        }
        let mut seen = HashSet::new();
        for &idx in indices {
            if idx >= self.hand.len() || !seen.insert(idx) {
                return Err(RunError::InvalidSelection);
            }
        }
        Ok(indices.iter().map(|&idx| self.hand[idx]).collect())
    }

    /// Remove previously validated indices from the hand, highest first so
    /// the remaining indices stay stable.
    pub(super) fn take_cards(&mut self, indices: &[usize]) -> Vec<Card> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.into_iter().map(|idx| self.hand.remove(idx)).collect()
    }

    pub(super) fn draw_to_hand(&mut self, events: &mut EventBus) {
        let needed = self.state.hand_size.saturating_sub(self.hand.len());
        if needed == 0 {
            return;
        }
        let mut drawn = self.deck.draw_cards(needed);
        if drawn.is_empty() {
            return;
        }
        let count = drawn.len();
        self.hand.append(&mut drawn);
        events.push(Event::HandDealt { count });
    }

    pub(super) fn announce_blind(&mut self, events: &mut EventBus) {
        let blind = self.current_blind();
        events.push(Event::BlindStarted {
            index: self.state.blind_index,
            name: blind.name.clone(),
            target: blind.target_chips,
        });
    }

    /// The 52-card conservation invariant. Checked after every card-moving
    /// transition; a failure is a programming error, not a user error.
    pub(super) fn check_conservation(&self) -> Result<(), Defect> {
        let found = self.deck.len() + self.hand.len() + self.held.len();
        if found != DECK_SIZE {
            return Err(Defect::CardConservation {
                expected: DECK_SIZE,
                found,
            });
        }
        Ok(())
    }
}
