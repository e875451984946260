use deckrun_core::{
    evaluate_hand, score_play, Card, Enhancement, HandKind, JokerKind, Rank, RngState,
    ScoreTables, Seal, Suit,
};

fn card(suit: Suit, rank: Rank) -> Card {
    Card::standard(suit, rank)
}

fn enhanced(suit: Suit, rank: Rank, enhancement: Enhancement) -> Card {
    let mut card = Card::standard(suit, rank);
    card.enhancement = Some(enhancement);
    card
}

fn sealed(suit: Suit, rank: Rank, seal: Seal) -> Card {
    let mut card = Card::standard(suit, rank);
    card.seal = Some(seal);
    card
}

fn score(selected: &[Card]) -> deckrun_core::ScoreBreakdown {
    score_play(selected, &[], &[], &ScoreTables::new(), 3)
}

#[test]
fn suited_wheel_is_straight_flush() {
    let cards = [
        card(Suit::Spades, Rank::Ace),
        card(Suit::Spades, Rank::Two),
        card(Suit::Spades, Rank::Three),
        card(Suit::Spades, Rank::Four),
        card(Suit::Spades, Rank::Five),
    ];
    let breakdown = score(&cards);
    assert_eq!(breakdown.hand, HandKind::StraightFlush);
    // 80 base chips + (11+2+3+4+5) card chips.
    assert_eq!(breakdown.score.chips, 105);
    assert_eq!(breakdown.score.mult, 8.0);
}

#[test]
fn royal_flush_needs_the_top_end_run() {
    let royal = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Hearts, Rank::Jack),
        card(Suit::Hearts, Rank::Queen),
        card(Suit::Hearts, Rank::King),
    ];
    assert_eq!(evaluate_hand(&royal), HandKind::RoyalFlush);

    // The same run off-suit is only a straight.
    let mut offsuit = royal;
    offsuit[0].suit = Suit::Clubs;
    assert_eq!(evaluate_hand(&offsuit), HandKind::Straight);
}

#[test]
fn full_house_from_multiplicity_counts() {
    let cards = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Diamonds, Rank::Two),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Spades, Rank::Three),
        card(Suit::Diamonds, Rank::Three),
    ];
    assert_eq!(evaluate_hand(&cards), HandKind::FullHouse);
}

#[test]
fn four_card_run_is_not_a_straight() {
    let cards = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Clubs, Rank::Four),
        card(Suit::Spades, Rank::Five),
    ];
    assert_eq!(evaluate_hand(&cards), HandKind::HighCard);
}

#[test]
fn wild_cards_count_toward_any_suit_for_flushes() {
    let cards = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Hearts, Rank::Nine),
        enhanced(Suit::Clubs, Rank::King, Enhancement::Wild),
    ];
    assert_eq!(evaluate_hand(&cards), HandKind::Flush);
}

#[test]
fn evaluation_is_order_insensitive() {
    let mut cards = vec![
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Four),
        card(Suit::Diamonds, Rank::Four),
        card(Suit::Hearts, Rank::Nine),
    ];
    let expected = evaluate_hand(&cards);
    let mut rng = RngState::from_seed(7);
    for _ in 0..20 {
        rng.shuffle(&mut cards);
        assert_eq!(evaluate_hand(&cards), expected);
    }
}

#[test]
fn every_royal_flush_also_satisfies_straight_flush_predicates() {
    for suit in Suit::ALL {
        let cards = [
            card(suit, Rank::Ace),
            card(suit, Rank::Ten),
            card(suit, Rank::Jack),
            card(suit, Rank::Queen),
            card(suit, Rank::King),
        ];
        let kind = evaluate_hand(&cards);
        assert_eq!(kind, HandKind::RoyalFlush);
        assert!(kind > HandKind::StraightFlush);
        // Demoting one card off-suit keeps the straight, dropping one rank
        // out of the run keeps the flush: both predicates held.
        let mut offsuit = cards;
        offsuit[1].suit = if suit == Suit::Clubs {
            Suit::Hearts
        } else {
            Suit::Clubs
        };
        assert_eq!(evaluate_hand(&offsuit), HandKind::Straight);
        let mut broken_run = cards;
        broken_run[0].rank = Rank::Two;
        assert_eq!(evaluate_hand(&broken_run), HandKind::Flush);
    }
}

#[test]
fn card_chip_values_fold_into_chips() {
    let cards = [
        enhanced(Suit::Hearts, Rank::Ace, Enhancement::Chips), // 11 + 10
        enhanced(Suit::Clubs, Rank::King, Enhancement::Bonus), // 10 + 5
        enhanced(Suit::Spades, Rank::Two, Enhancement::BlueChip), // 2 + 20
        sealed(Suit::Diamonds, Rank::Three, Seal::Blue),       // 3 + 25
        sealed(Suit::Diamonds, Rank::Nine, Seal::Gold),        // 9 + 50
    ];
    let breakdown = score(&cards);
    assert_eq!(breakdown.hand, HandKind::HighCard);
    assert_eq!(breakdown.card_chips, 21 + 15 + 22 + 28 + 59);
    assert_eq!(breakdown.score.chips, 5 + breakdown.card_chips);
}

#[test]
fn card_level_mult_bonuses_are_additive() {
    let cards = [
        enhanced(Suit::Hearts, Rank::Four, Enhancement::Mult), // +4
        enhanced(Suit::Clubs, Rank::Six, Enhancement::RedMult), // +8
        sealed(Suit::Spades, Rank::Eight, Seal::Red),          // +15
        sealed(Suit::Diamonds, Rank::Ten, Seal::Purple),       // +20
    ];
    let breakdown = score(&cards);
    assert_eq!(breakdown.score.mult, 1.0 + 4.0 + 8.0 + 15.0 + 20.0);
}

#[test]
fn glass_doubles_after_additive_bonuses() {
    let cards = [
        enhanced(Suit::Hearts, Rank::Two, Enhancement::Glass),
        enhanced(Suit::Clubs, Rank::Seven, Enhancement::Glass),
    ];
    let breakdown = score(&cards);
    // Each glass card adds +4 mult first, then doubles once: 2^2 over the
    // whole additive column.
    assert_eq!(breakdown.score.mult, (1.0 + 4.0 + 4.0) * 4.0);
}

#[test]
fn held_kings_and_aces_grant_passive_mult() {
    let selected = [card(Suit::Hearts, Rank::Two)];
    let held = [
        card(Suit::Clubs, Rank::King),
        card(Suit::Spades, Rank::King),
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Diamonds, Rank::Seven),
    ];
    let breakdown = score_play(&selected, &held, &[], &ScoreTables::new(), 3);
    assert_eq!(breakdown.score.mult, 1.0 + 2.0 + 2.0 + 1.0);
}

#[test]
fn jokers_apply_in_purchase_order() {
    // A pair so TheDuo's gate is open.
    let cards = [
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Nine),
    ];
    let tables = ScoreTables::new();
    let add_then_double = score_play(
        &cards,
        &[],
        &[JokerKind::Joker, JokerKind::TheDuo],
        &tables,
        3,
    );
    let double_then_add = score_play(
        &cards,
        &[],
        &[JokerKind::TheDuo, JokerKind::Joker],
        &tables,
        3,
    );
    // (2 + 4) * 2 versus 2 * 2 + 4.
    assert_eq!(add_then_double.score.mult, 12.0);
    assert_eq!(double_then_add.score.mult, 8.0);
}

#[test]
fn banner_and_mystic_summit_read_the_discard_budget() {
    let cards = [card(Suit::Hearts, Rank::Two)];
    let tables = ScoreTables::new();
    let with_discards = score_play(&cards, &[], &[JokerKind::Banner], &tables, 3);
    assert_eq!(with_discards.score.chips, 5 + 2 + 90);

    let summit_idle = score_play(&cards, &[], &[JokerKind::MysticSummit], &tables, 1);
    assert_eq!(summit_idle.score.mult, 1.0);
    let summit_live = score_play(&cards, &[], &[JokerKind::MysticSummit], &tables, 0);
    assert_eq!(summit_live.score.mult, 16.0);
}

#[test]
fn suit_jokers_count_matching_selected_cards() {
    let cards = [
        card(Suit::Diamonds, Rank::Two),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Nine),
    ];
    let breakdown = score_play(
        &cards,
        &[],
        &[JokerKind::GreedyJoker],
        &ScoreTables::new(),
        3,
    );
    assert_eq!(breakdown.score.mult, 1.0 + 6.0);
}

#[test]
fn planet_upgrades_are_permanent_and_cover_royal_flush() {
    let mut tables = ScoreTables::new();
    tables.apply_planet(HandKind::StraightFlush, 40, 4.0);
    assert_eq!(tables.hand_base(HandKind::StraightFlush), (120, 12.0));
    // RoyalFlush shares the straight-flush upgrade entry.
    assert_eq!(tables.hand_base(HandKind::RoyalFlush), (140, 12.0));
    assert_eq!(tables.hand_base(HandKind::Flush), (35, 4.0));
}

#[test]
fn scores_are_deterministic_and_non_negative() {
    let cards = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Three),
    ];
    let tables = ScoreTables::new();
    let jokers = [JokerKind::Joker, JokerKind::Cavendish];
    let first = score_play(&cards, &[], &jokers, &tables, 2);
    let second = score_play(&cards, &[], &jokers, &tables, 2);
    assert_eq!(first.score, second.score);
    assert!(first.score.chips >= 0);
    assert!(first.score.mult >= 0.0);
    assert!(first.total() >= 0);
}

#[test]
fn final_total_rounds_each_column() {
    let breakdown = score(&[card(Suit::Hearts, Rank::Seven)]);
    assert_eq!(
        breakdown.total(),
        breakdown.score.chips * breakdown.score.mult.round() as i64
    );
}
