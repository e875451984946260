use serde::{Deserialize, Serialize};

/// One stage of the run. Targets must be strictly increasing across the
/// configured list; clearing the last entry wins the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlindRule {
    pub name: String,
    pub target_chips: i64,
    pub money_reward: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyRule {
    /// One dollar of interest per this much money held at blind clear,
    /// computed before the reward lands.
    pub interest_step: i64,
    pub reroll_cost: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopRule {
    pub joker_slots: usize,
    pub tarot_slots: usize,
    pub planet_slots: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub blinds: Vec<BlindRule>,
    pub hands_per_blind: u8,
    pub discards_per_blind: u8,
    pub hand_size: usize,
    pub starting_money: i64,
    pub joker_capacity: usize,
    pub economy: EconomyRule,
    pub shop: ShopRule,
}

impl GameConfig {
    pub fn is_final_blind(&self, index: usize) -> bool {
        index + 1 == self.blinds.len()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let blinds = [
            ("Small Blind", 300, 4),
            ("Big Blind", 450, 5),
            ("The Hook", 600, 6),
            ("The Wall", 900, 7),
            ("The Needle", 1400, 8),
            ("The Manacle", 2100, 9),
            ("The Ox", 3200, 10),
            ("Cerulean Bell", 5000, 12),
        ]
        .into_iter()
        .map(|(name, target_chips, money_reward)| BlindRule {
            name: name.to_string(),
            target_chips,
            money_reward,
        })
        .collect();

        Self {
            blinds,
            hands_per_blind: 4,
            discards_per_blind: 3,
            hand_size: 8,
            starting_money: 4,
            joker_capacity: 5,
            economy: EconomyRule {
                interest_step: 25,
                reroll_cost: 5,
            },
            shop: ShopRule {
                joker_slots: 3,
                tarot_slots: 3,
                planet_slots: 2,
            },
        }
    }
}
