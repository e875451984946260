use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Shop,
    Won,
    Lost,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// The serializable counters of a run. Card piles and jokers live on the
/// aggregate in `run`; this struct is what external layers snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    pub blind_index: usize,
    pub round_score: i64,
    pub money: i64,
    pub hands_left: u8,
    pub discards_left: u8,
    pub hand_size: usize,
}

impl GameState {
    pub fn new(money: i64, hands: u8, discards: u8, hand_size: usize) -> Self {
        Self {
            phase: Phase::Playing,
            blind_index: 0,
            round_score: 0,
            money,
            hands_left: hands,
            discards_left: discards,
            hand_size,
        }
    }
}
