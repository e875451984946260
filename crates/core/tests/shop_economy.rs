use deckrun_core::{
    score_play, BlindRule, Card, Enhancement, EventBus, GameConfig, HandKind, JokerKind, Phase,
    PlanetKind, Rank, RngState, RunError, RunState, ShopRule, ShopState, Suit, TarotKind,
    DECK_SIZE,
};
use std::collections::HashSet;

fn shop_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.blinds = vec![
        BlindRule {
            name: "First".to_string(),
            target_chips: 1,
            money_reward: 4,
        },
        BlindRule {
            name: "Last".to_string(),
            target_chips: 1_000_000,
            money_reward: 12,
        },
    ];
    config
}

/// A run parked in the shop after clearing the first blind.
fn run_in_shop(seed: u64, events: &mut EventBus) -> RunState {
    let mut run = RunState::new(shop_config(), seed, events);
    run.play_hand(&[0], events).unwrap();
    assert_eq!(run.phase(), Phase::Shop);
    run
}

fn stock(run: &mut RunState, jokers: &[JokerKind], tarots: &[TarotKind], planets: &[PlanetKind]) {
    let shop = run.shop.as_mut().unwrap();
    shop.jokers = jokers.to_vec();
    shop.tarots = tarots.to_vec();
    shop.planets = planets.to_vec();
}

#[test]
fn generated_shop_fills_every_section_with_distinct_offers() {
    let rule = ShopRule {
        joker_slots: 3,
        tarot_slots: 3,
        planet_slots: 2,
    };
    for seed in 0..20 {
        let mut rng = RngState::from_seed(seed);
        let shop = ShopState::generate(&rule, 5, &mut rng, &HashSet::new());
        assert_eq!(shop.jokers.len(), 3);
        assert_eq!(shop.tarots.len(), 3);
        assert_eq!(shop.planets.len(), 2);
        assert_eq!(shop.jokers.iter().collect::<HashSet<_>>().len(), 3);
        assert_eq!(shop.tarots.iter().collect::<HashSet<_>>().len(), 3);
        assert_eq!(shop.planets.iter().collect::<HashSet<_>>().len(), 2);
    }
}

#[test]
fn owned_jokers_never_reappear_as_offers() {
    let rule = ShopRule {
        joker_slots: 3,
        tarot_slots: 3,
        planet_slots: 2,
    };
    let owned: HashSet<JokerKind> =
        [JokerKind::Joker, JokerKind::TheDuo, JokerKind::Cavendish]
            .into_iter()
            .collect();
    for seed in 0..50 {
        let mut rng = RngState::from_seed(seed);
        let shop = ShopState::generate(&rule, 5, &mut rng, &owned);
        assert!(shop.jokers.iter().all(|kind| !owned.contains(kind)));
    }
}

#[test]
fn buying_a_joker_appends_it_and_charges_its_cost() {
    let mut events = EventBus::default();
    let mut run = run_in_shop(1, &mut events);
    run.state.money = 10;
    stock(&mut run, &[JokerKind::Joker], &[], &[]);

    run.buy_joker(JokerKind::Joker, &mut events).unwrap();
    assert_eq!(run.jokers, vec![JokerKind::Joker]);
    assert_eq!(run.state.money, 10 - 3);
    assert!(run.shop.as_ref().unwrap().jokers.is_empty());
}

#[test]
fn purchases_never_drive_money_negative() {
    let mut events = EventBus::default();
    let mut run = run_in_shop(2, &mut events);
    run.state.money = 2;
    stock(&mut run, &[JokerKind::TheDuo], &[TarotKind::TheEmpress], &[]);

    assert!(matches!(
        run.buy_joker(JokerKind::TheDuo, &mut events),
        Err(RunError::InsufficientFunds { cost: 8, money: 2 })
    ));
    assert!(matches!(
        run.buy_tarot(TarotKind::TheEmpress, &mut events),
        Err(RunError::InsufficientFunds { cost: 3, money: 2 })
    ));
    assert!(matches!(
        run.reroll_shop(&mut events),
        Err(RunError::InsufficientFunds { cost: 5, money: 2 })
    ));
    assert_eq!(run.state.money, 2);
    assert!(run.jokers.is_empty());
}

#[test]
fn duplicate_and_over_cap_joker_purchases_are_rejected() {
    let mut events = EventBus::default();
    let mut run = run_in_shop(3, &mut events);
    run.state.money = 100;
    run.jokers = vec![JokerKind::Joker];
    stock(&mut run, &[JokerKind::Joker, JokerKind::Banner], &[], &[]);

    assert!(matches!(
        run.buy_joker(JokerKind::Joker, &mut events),
        Err(RunError::AlreadyOwned)
    ));

    run.jokers = vec![
        JokerKind::Joker,
        JokerKind::GreedyJoker,
        JokerKind::LustyJoker,
        JokerKind::WrathfulJoker,
        JokerKind::GluttonousJoker,
    ];
    assert!(matches!(
        run.buy_joker(JokerKind::Banner, &mut events),
        Err(RunError::JokerCapReached)
    ));
    assert_eq!(run.state.money, 100);
}

#[test]
fn absent_offers_cannot_be_bought() {
    let mut events = EventBus::default();
    let mut run = run_in_shop(4, &mut events);
    run.state.money = 100;
    stock(&mut run, &[JokerKind::Joker], &[], &[]);

    assert!(matches!(
        run.buy_joker(JokerKind::Cavendish, &mut events),
        Err(RunError::OfferNotAvailable)
    ));
    assert!(matches!(
        run.buy_tarot(TarotKind::TheSun, &mut events),
        Err(RunError::OfferNotAvailable)
    ));
    assert!(matches!(
        run.buy_planet(PlanetKind::Pluto, &mut events),
        Err(RunError::OfferNotAvailable)
    ));
    assert_eq!(run.state.money, 100);
}

#[test]
fn shop_intents_are_rejected_outside_the_shop() {
    let mut events = EventBus::default();
    let mut run = RunState::new(shop_config(), 5, &mut events);
    assert_eq!(run.phase(), Phase::Playing);
    assert!(matches!(
        run.buy_joker(JokerKind::Joker, &mut events),
        Err(RunError::InvalidPhase(Phase::Playing))
    ));
    assert!(matches!(
        run.reroll_shop(&mut events),
        Err(RunError::InvalidPhase(Phase::Playing))
    ));
}

#[test]
fn reroll_charges_the_fixed_cost_and_restocks() {
    let mut events = EventBus::default();
    let mut run = run_in_shop(6, &mut events);
    run.state.money = 20;
    run.jokers = vec![JokerKind::Joker];

    run.reroll_shop(&mut events).unwrap();
    assert_eq!(run.state.money, 15);
    let shop = run.shop.as_ref().unwrap();
    assert_eq!(shop.jokers.len(), 3);
    assert!(!shop.jokers.contains(&JokerKind::Joker));

    run.reroll_shop(&mut events).unwrap();
    assert_eq!(run.state.money, 10);
}

#[test]
fn temperance_discard_is_spendable_in_the_next_blind() {
    let mut events = EventBus::default();
    let mut run = run_in_shop(7, &mut events);
    run.state.money = 10;
    stock(&mut run, &[], &[TarotKind::Temperance], &[]);

    run.buy_tarot(TarotKind::Temperance, &mut events).unwrap();
    assert_eq!(run.pending_discards, 1);
    assert_eq!(run.state.money, 10 - 4);

    run.continue_to_next_blind(&mut events).unwrap();
    assert_eq!(run.state.discards_left, 4);
    for _ in 0..4 {
        run.discard_hand(&[0], &mut events).unwrap();
    }
    assert!(matches!(
        run.discard_hand(&[0], &mut events),
        Err(RunError::DiscardBudgetExhausted)
    ));
}

#[test]
fn enhancement_tarots_touch_exactly_one_hand_card() {
    let mut events = EventBus::default();
    let mut run = run_in_shop(8, &mut events);
    run.state.money = 10;
    for card in &mut run.hand {
        card.enhancement = None;
    }
    stock(&mut run, &[], &[TarotKind::Justice], &[]);

    run.buy_tarot(TarotKind::Justice, &mut events).unwrap();
    let glass = run
        .hand
        .iter()
        .filter(|card| card.enhancement == Some(Enhancement::Glass))
        .count();
    assert_eq!(glass, 1);
}

#[test]
fn the_hermit_moves_a_card_to_the_held_pile() {
    let mut events = EventBus::default();
    let mut run = run_in_shop(9, &mut events);
    run.state.money = 10;
    stock(&mut run, &[], &[TarotKind::TheHermit], &[]);
    let hand_size = run.hand.len();

    run.buy_tarot(TarotKind::TheHermit, &mut events).unwrap();
    assert_eq!(run.held.len(), 1);
    // The hand refills from the deck after the move.
    assert_eq!(run.hand.len(), hand_size);
    assert_eq!(run.deck.len() + run.hand.len() + run.held.len(), DECK_SIZE);
}

#[test]
fn held_cards_stay_out_of_circulation_across_blinds() {
    let mut events = EventBus::default();
    let mut run = run_in_shop(12, &mut events);
    run.state.money = 10;
    stock(&mut run, &[], &[TarotKind::TheHermit], &[]);
    run.buy_tarot(TarotKind::TheHermit, &mut events).unwrap();
    let held = run.held[0];

    run.continue_to_next_blind(&mut events).unwrap();
    assert_eq!(run.held, vec![held]);
    // The fresh deal never re-issues the held card.
    assert!(!run
        .deck
        .draw
        .iter()
        .chain(run.hand.iter())
        .any(|card| card.suit == held.suit && card.rank == held.rank));
    assert_eq!(run.deck.len() + run.hand.len() + run.held.len(), DECK_SIZE);
}

#[test]
fn hermit_held_king_boosts_hands_in_the_next_blind() {
    let mut events = EventBus::default();
    let mut run = run_in_shop(13, &mut events);
    run.state.money = 10;
    stock(&mut run, &[], &[TarotKind::TheHermit], &[]);
    run.buy_tarot(TarotKind::TheHermit, &mut events).unwrap();
    run.held[0] = Card::standard(Suit::Clubs, Rank::King);

    run.continue_to_next_blind(&mut events).unwrap();
    let selected = vec![run.hand[0]];
    let without_held = score_play(&selected, &[], &[], &run.tables, run.state.discards_left);
    let preview = run.preview_score(&[0]).unwrap();
    assert_eq!(preview.score.mult, without_held.score.mult + 2.0);

    let played = run.play_hand(&[0], &mut events).unwrap();
    assert_eq!(played.score, preview.score);
    assert_eq!(run.state.round_score, preview.total());
}

#[test]
fn planet_purchase_upgrades_the_hand_table() {
    let mut events = EventBus::default();
    let mut run = run_in_shop(10, &mut events);
    run.state.money = 10;
    stock(&mut run, &[], &[], &[PlanetKind::Mercury]);
    let before = run.tables.hand_base(HandKind::Pair);

    run.buy_planet(PlanetKind::Mercury, &mut events).unwrap();
    let after = run.tables.hand_base(HandKind::Pair);
    assert_eq!(after, (before.0 + 15, before.1 + 1.0));
    assert_eq!(run.state.money, 10 - 3);
    assert!(run.shop.as_ref().unwrap().planets.is_empty());
}

#[test]
fn planet_upgrades_survive_into_the_next_blind() {
    let mut events = EventBus::default();
    let mut run = run_in_shop(11, &mut events);
    run.state.money = 10;
    stock(&mut run, &[], &[], &[PlanetKind::Pluto]);
    run.buy_planet(PlanetKind::Pluto, &mut events).unwrap();

    run.continue_to_next_blind(&mut events).unwrap();
    assert_eq!(run.tables.hand_base(HandKind::HighCard), (15, 2.0));
}
