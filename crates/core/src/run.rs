use crate::{Card, Deck, GameConfig, GameState, JokerKind, Phase, RngState, ScoreTables, ShopState};
use thiserror::Error;

mod blind;
mod hand;
mod shop;
mod state;

/// Unrecoverable logic defects. These indicate a bug in the engine, never a
/// bad user action, and must not be presented as retryable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Defect {
    #[error("card conservation violated: expected {expected} cards, found {found}")]
    CardConservation { expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("no cards selected")]
    NoCardsSelected,
    #[error("no hands left this blind")]
    HandBudgetExhausted,
    #[error("no discards left this blind")]
    DiscardBudgetExhausted,
    #[error("not enough money: need ${cost}, have ${money}")]
    InsufficientFunds { cost: i64, money: i64 },
    #[error("joker slots full")]
    JokerCapReached,
    #[error("joker already owned")]
    AlreadyOwned,
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("invalid card selection")]
    InvalidSelection,
    #[error("at most five cards may be selected")]
    TooManyCards,
    #[error("offer not available in this shop")]
    OfferNotAvailable,
    #[error("engine defect: {0}")]
    Internal(#[from] Defect),
}

/// The aggregate root of one run. Exclusively owned by the controller:
/// every transition is a `&mut self` method that either completes fully or
/// returns an error leaving the state untouched. External layers read
/// snapshots between transitions.
#[derive(Debug)]
pub struct RunState {
    pub config: GameConfig,
    pub tables: ScoreTables,
    pub rng: RngState,
    pub deck: Deck,
    pub hand: Vec<Card>,
    pub held: Vec<Card>,
    /// Owned jokers in purchase order. `score_play` iterates left to right,
    /// so append-only growth is a scoring invariant, not a detail.
    pub jokers: Vec<JokerKind>,
    pub shop: Option<ShopState>,
    /// Extra discards bought in the shop, credited when the next blind's
    /// budget is dealt.
    pub pending_discards: u8,
    pub state: GameState,
}
