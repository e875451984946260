use crate::{HandKind, JokerKind, PlanetKind, TarotKind};
use serde::{Deserialize, Serialize};

/// Observation stream for rendering layers. The controller pushes one or
/// more events per transition; drivers drain the bus between intents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    BlindStarted {
        index: usize,
        name: String,
        target: i64,
    },
    HandDealt {
        count: usize,
    },
    HandScored {
        hand: HandKind,
        chips: i64,
        mult: f64,
        total: i64,
        round_score: i64,
    },
    Discarded {
        count: usize,
        discards_left: u8,
    },
    BlindCleared {
        score: i64,
        reward: i64,
        interest: i64,
        money: i64,
    },
    ShopEntered {
        reroll_cost: i64,
    },
    ShopRerolled {
        cost: i64,
        money: i64,
    },
    JokerBought {
        kind: JokerKind,
        cost: i64,
        money: i64,
    },
    TarotUsed {
        kind: TarotKind,
        cost: i64,
        money: i64,
    },
    PlanetUsed {
        kind: PlanetKind,
        cost: i64,
        money: i64,
    },
    RunWon {
        money: i64,
    },
    RunLost {
        score: i64,
        target: i64,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
