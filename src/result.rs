//! Round outcomes and running tallies.

use core::fmt;

use crate::hand::BLACKJACK;

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Dealer wins (player busts alone or dealer has the higher value).
    DealerWins,
    /// Push (tie, or both hands bust).
    Push,
    /// Player wins (dealer busts alone or player has the higher value).
    PlayerWins,
}

impl Outcome {
    /// Classifies a finished round from the two hand values.
    ///
    /// Busts are checked first; a double bust is a push. Otherwise the higher
    /// value wins and equal values push.
    ///
    /// ```
    /// use bjsim::Outcome;
    ///
    /// assert_eq!(Outcome::classify(22, 23), Outcome::Push);
    /// assert_eq!(Outcome::classify(18, 22), Outcome::PlayerWins);
    /// assert_eq!(Outcome::classify(17, 17), Outcome::Push);
    /// ```
    #[must_use]
    pub const fn classify(player_value: u8, dealer_value: u8) -> Self {
        let player_bust = player_value > BLACKJACK;
        let dealer_bust = dealer_value > BLACKJACK;

        match (player_bust, dealer_bust) {
            (false, true) => Self::PlayerWins,
            (true, true) => Self::Push,
            (false, false) if player_value > dealer_value => Self::PlayerWins,
            (false, false) if player_value == dealer_value => Self::Push,
            (true, false) | (false, false) => Self::DealerWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DealerWins => "Dealer wins.",
            Self::Push => "Push.",
            Self::PlayerWins => "Player wins.",
        })
    }
}

/// Outcome counts accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Rounds won by the dealer.
    pub dealer_wins: u64,
    /// Rounds pushed.
    pub pushes: u64,
    /// Rounds won by the player.
    pub player_wins: u64,
}

impl Tally {
    /// Counts one round.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::DealerWins => self.dealer_wins += 1,
            Outcome::Push => self.pushes += 1,
            Outcome::PlayerWins => self.player_wins += 1,
        }
    }

    /// Returns the number of rounds counted.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.dealer_wins + self.pushes + self.player_wins
    }

    /// Returns each outcome's share of the rounds counted.
    ///
    /// Returns `None` before any round has been counted.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for round counts"
    )]
    pub fn fractions(&self) -> Option<Fractions> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let total = total as f64;
        Some(Fractions {
            dealer: self.dealer_wins as f64 / total,
            push: self.pushes as f64 / total,
            player: self.player_wins as f64 / total,
        })
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(dealer | push | player): ({} | {} | {})",
            self.dealer_wins, self.pushes, self.player_wins
        )
    }
}

/// Outcome frequencies as ratios of the rounds played.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fractions {
    /// Share of rounds won by the dealer.
    pub dealer: f64,
    /// Share of rounds pushed.
    pub push: f64,
    /// Share of rounds won by the player.
    pub player: f64,
}

impl fmt::Display for Fractions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.dealer, self.push, self.player)
    }
}
