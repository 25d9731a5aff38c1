//! The fixed-policy round.

use core::fmt;

use rand::Rng;

use crate::hand::{BLACKJACK, Hand};
use crate::result::Outcome;
use crate::shoe::Shoe;

/// Dealer total at which both hands stop drawing.
pub const DEALER_STANDS_ON: u8 = 17;

/// A finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// The player's final hand.
    pub player: Hand,
    /// The dealer's final hand.
    pub dealer: Hand,
    /// Who won.
    pub outcome: Outcome,
}

/// Plays one round from the shoe.
///
/// Two cards go to the player, then two to the dealer. While the dealer is
/// under 17 and the player is under 21, the player and then the dealer each
/// take one more card. Both hands advance together every time, so a hand that
/// has already reached 21 or busted keeps drawing as long as the joint
/// condition holds.
pub fn play_round<R: Rng>(shoe: &mut Shoe<R>) -> Round {
    let mut player = Hand::new();
    let mut dealer = Hand::new();

    player.add_card(shoe.draw());
    player.add_card(shoe.draw());
    dealer.add_card(shoe.draw());
    dealer.add_card(shoe.draw());

    while dealer.value() < DEALER_STANDS_ON && player.value() < BLACKJACK {
        player.add_card(shoe.draw());
        dealer.add_card(shoe.draw());
    }

    let outcome = Outcome::classify(player.value(), dealer.value());
    Round {
        player,
        dealer,
        outcome,
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dealer: {}, {} points.", self.dealer, self.dealer.value())?;
        writeln!(f, "Player: {}, {} points.", self.player, self.player.value())?;
        write!(f, "{}", self.outcome)
    }
}
