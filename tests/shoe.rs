//! Card source tests.

use std::collections::HashMap;

use bjsim::{Card, DECK_SIZE, Deck, Rank, Shoe, ShoeError, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(*card).or_insert(0) += 1;
    }
    counts
}

#[test]
fn fresh_deck_holds_each_card_once() {
    let deck = Deck::single_deck(rng(1));
    assert_eq!(deck.cards_remaining(), DECK_SIZE);
    assert_eq!(deck.capacity(), DECK_SIZE);

    let counts = counts(&deck.cheat_showall());
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&n| n == 1));
}

#[test]
fn shoe_holds_each_card_once_per_deck() {
    for decks in 1..=8 {
        let shoe = Shoe::seeded(decks, u64::from(decks)).unwrap();
        let expected = usize::from(decks);
        assert_eq!(shoe.cards_remaining(), DECK_SIZE * expected);

        let counts = counts(&shoe.cheat_showall());
        assert_eq!(counts.len(), DECK_SIZE);
        assert!(counts.values().all(|&n| n == expected));
    }
}

#[test]
fn construction_errors() {
    assert_eq!(Shoe::new(0, rng(1)).unwrap_err(), ShoeError::NoDecks);
    assert_eq!(
        Shoe::with_capacity(0, rng(1)).unwrap_err(),
        ShoeError::InvalidCapacity(0)
    );
    assert_eq!(
        Shoe::with_capacity(53, rng(1)).unwrap_err(),
        ShoeError::InvalidCapacity(53)
    );
    assert_eq!(
        Shoe::from_draws(Vec::new(), rng(1)).unwrap_err(),
        ShoeError::Empty
    );

    let shoe = Shoe::with_capacity(104, rng(1)).unwrap();
    assert_eq!(shoe.capacity(), 104);
    assert_eq!(shoe.cards_remaining(), 104);
}

#[test]
fn draining_counts_down_by_one() {
    let mut shoe = Shoe::seeded(2, 9).unwrap();
    let expected = shoe.cheat_showall();

    let mut dealt = Vec::new();
    for remaining in (0..2 * DECK_SIZE).rev() {
        dealt.push(shoe.draw());
        assert_eq!(shoe.cards_remaining(), remaining);
    }
    assert_eq!(dealt, expected);
}

#[test]
fn draw_on_exhausted_shoe_reshuffles() {
    let mut deck = Deck::single_deck(rng(3));
    let first_pass: Vec<Card> = (0..DECK_SIZE).map(|_| deck.draw()).collect();
    assert_eq!(deck.cards_remaining(), 0);

    let card = deck.draw();
    assert_eq!(deck.cards_remaining(), DECK_SIZE - 1);
    assert!(first_pass.contains(&card));

    let mut second_pass = vec![card];
    second_pass.extend(deck.cheat_showall());
    assert_eq!(counts(&second_pass), counts(&first_pass));
}

#[test]
fn peek_matches_next_draw_and_consumes_nothing() {
    let mut shoe = Shoe::seeded(6, 11).unwrap();
    for _ in 0..100 {
        let remaining = shoe.cards_remaining();
        let peeked = shoe.cheat_peek();
        assert_eq!(shoe.cards_remaining(), remaining);
        assert_eq!(shoe.cheat_showall()[0], peeked);
        assert_eq!(shoe.draw(), peeked);
    }
}

#[test]
fn peek_on_exhausted_shoe_returns_bottom_card() {
    let draws = vec![
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Five, Suit::Hearts),
        Card::new(Rank::King, Suit::Spades),
    ];
    let mut shoe = Shoe::from_draws(draws.clone(), rng(5)).unwrap();
    for card in &draws {
        assert_eq!(shoe.draw(), *card);
    }
    assert_eq!(shoe.cards_remaining(), 0);

    assert_eq!(shoe.cheat_peek(), Card::new(Rank::King, Suit::Spades));
    assert_eq!(shoe.cards_remaining(), 0);
    assert!(shoe.cheat_showall().is_empty());

    shoe.draw();
    assert_eq!(shoe.cards_remaining(), 2);
}

#[test]
fn peek_on_exhausted_deck_returns_last_card_dealt() {
    let mut deck = Deck::single_deck(rng(21));
    let bottom = *deck.cheat_showall().last().unwrap();
    for _ in 0..DECK_SIZE {
        deck.draw();
    }
    assert_eq!(deck.cheat_peek(), bottom);
    assert_eq!(deck.cards_remaining(), 0);
}

#[test]
fn shuffle_resets_remaining() {
    let mut shoe = Shoe::seeded(1, 2).unwrap();
    for _ in 0..10 {
        shoe.draw();
    }
    assert_eq!(shoe.cards_remaining(), DECK_SIZE - 10);

    shoe.shuffle();
    assert_eq!(shoe.cards_remaining(), DECK_SIZE);
    assert_eq!(counts(&shoe.cheat_showall()).len(), DECK_SIZE);
}

#[test]
fn same_seed_deals_same_order() {
    let a = Shoe::seeded(4, 1234).unwrap();
    let b = Shoe::seeded(4, 1234).unwrap();
    let c = Shoe::seeded(4, 4321).unwrap();

    assert_eq!(a.cheat_showall(), b.cheat_showall());
    assert_ne!(a.cheat_showall(), c.cheat_showall());
}

#[test]
fn shuffle_spreads_cards_over_positions() {
    // The ace of clubs should land in the top half about as often as the bottom.
    let target = Card::new(Rank::Ace, Suit::Clubs);
    let mut deck = Deck::single_deck(rng(77));
    let mut top_half = 0;
    let trials = 4_000;

    for _ in 0..trials {
        deck.shuffle();
        let position = deck
            .cheat_showall()
            .iter()
            .position(|card| *card == target)
            .unwrap();
        if position < DECK_SIZE / 2 {
            top_half += 1;
        }
    }

    assert!((1_800..=2_200).contains(&top_half), "top half {top_half}");
}
