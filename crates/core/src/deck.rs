use crate::{Card, Rank, RngState, Suit};
use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    pub fn standard52() -> Self {
        let mut draw = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                draw.push(Card::standard(suit, rank));
            }
        }
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    /// The standard deck minus the given cards, matched by suit and rank.
    /// Held cards stay out of circulation, so each new blind deals from the
    /// remainder.
    pub fn standard52_without(missing: &[Card]) -> Self {
        let mut deck = Self::standard52();
        deck.draw.retain(|card| {
            !missing
                .iter()
                .any(|held| held.suit == card.suit && held.rank == card.rank)
        });
        deck
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.draw.pop() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }

    pub fn discard(&mut self, mut cards: Vec<Card>) {
        self.discard.append(&mut cards);
    }

    pub fn len(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty() && self.discard.is_empty()
    }
}
