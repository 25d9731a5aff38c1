//! Hand evaluation tests.

use bjsim::{Card, Hand, Rank, Suit, value_of};

const fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades)
}

fn non_aces() -> impl Iterator<Item = Rank> {
    Rank::ALL.into_iter().filter(|rank| !rank.is_ace())
}

#[test]
fn known_hands() {
    assert_eq!(value_of(&[card(Rank::Ace), card(Rank::King)]), 21);
    assert_eq!(value_of(&[card(Rank::Ace), card(Rank::Ace)]), 12);
    assert_eq!(
        value_of(&[card(Rank::Ace), card(Rank::Ace), card(Rank::Nine)]),
        21
    );
    assert_eq!(
        value_of(&[card(Rank::King), card(Rank::Queen), card(Rank::Two)]),
        22
    );
    assert_eq!(value_of(&[]), 0);
}

#[test]
fn hands_without_aces_sum_face_values() {
    for first in non_aces() {
        for second in non_aces() {
            for third in non_aces() {
                let cards = [card(first), card(second), card(third)];
                let expected = first.points() + second.points() + third.points();
                assert_eq!(value_of(&cards), expected, "{first} {second} {third}");
            }
        }
    }
}

#[test]
fn single_ace_is_soft_only_when_it_fits() {
    for first in non_aces() {
        for second in non_aces() {
            let sum = first.points() + second.points();
            let cards = [card(first), card(Rank::Ace), card(second)];
            let expected = if sum + 11 <= 21 { sum + 11 } else { sum + 1 };
            assert_eq!(value_of(&cards), expected, "{first} {second}");
        }
    }
}

#[test]
fn two_aces_promote_at_most_one() {
    for first in non_aces() {
        for second in non_aces() {
            let sum = first.points() + second.points();
            let cards = [card(Rank::Ace), card(first), card(second), card(Rank::Ace)];
            let expected = if sum + 12 <= 21 { sum + 12 } else { sum + 2 };
            assert_eq!(value_of(&cards), expected, "{first} {second}");
        }
    }
}

#[test]
fn many_aces_count_as_one_except_the_first() {
    let aces = |n: usize| vec![card(Rank::Ace); n];

    assert_eq!(value_of(&aces(3)), 13);
    assert_eq!(value_of(&aces(4)), 14);
    assert_eq!(value_of(&aces(11)), 21);
    assert_eq!(value_of(&aces(12)), 12);

    let mut cards = aces(3);
    cards.push(card(Rank::Eight));
    assert_eq!(value_of(&cards), 21);
    cards.push(card(Rank::Two));
    assert_eq!(value_of(&cards), 13);
}

#[test]
fn hand_tracks_soft_and_bust() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.value(), 0);

    hand.add_card(card(Rank::Ace));
    hand.add_card(card(Rank::Six));
    assert_eq!(hand.value(), 17);
    assert!(hand.is_soft());
    assert!(!hand.is_bust());

    hand.add_card(card(Rank::Nine));
    assert_eq!(hand.value(), 16);
    assert!(!hand.is_soft());

    hand.add_card(card(Rank::Jack));
    assert_eq!(hand.value(), 26);
    assert!(hand.is_bust());
    assert_eq!(hand.len(), 4);

    hand.clear();
    assert!(hand.is_empty());
}

#[test]
fn hand_display_lists_cards() {
    let hand = Hand::from(vec![
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Clubs),
    ]);
    assert_eq!(hand.to_string(), "Ace of hearts, ten of clubs");
    assert_eq!(hand.value(), value_of(hand.cards()));
}
