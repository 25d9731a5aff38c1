//! Hand representation and point evaluation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Best total a hand can reach before it busts.
pub const BLACKJACK: u8 = 21;

/// Computes the point total of a sequence of cards.
///
/// Non-ace cards count at face value (face cards are 10). Every ace counts as
/// 1, and one of them is promoted to 11 when that does not push the total
/// past 21. Promoting a second ace would always bust, so at most one ace is
/// ever soft. The result is the highest total not exceeding 21 when one
/// exists, otherwise the lowest possible total.
///
/// ```
/// use bjsim::{Card, Rank, Suit, value_of};
///
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// let nine = Card::new(Rank::Nine, Suit::Hearts);
/// assert_eq!(value_of(&[ace, ace, nine]), 21);
/// ```
#[must_use]
pub fn value_of(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank().is_ace() {
            aces = aces.saturating_add(1);
        } else {
            value = value.saturating_add(card.rank().points());
        }
    }

    match aces {
        0 => (value, false),
        1 if value.saturating_add(11) <= BLACKJACK => (value + 11, true),
        1 => (value.saturating_add(1), false),
        _ => {
            value = value.saturating_add(aces);
            if value.saturating_add(10) <= BLACKJACK {
                (value + 10, true)
            } else {
                (value, false)
            }
        }
    }
}

/// A hand built during a single round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// See [`value_of`].
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
