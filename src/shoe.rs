//! Card sources: a single deck or a multi-deck shoe.
//!
//! Both are the same [`Shoe`] type at different capacities. A shoe never runs
//! dry: drawing from an exhausted shoe reshuffles every card back into play
//! first, so cards dealt earlier can come out again.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, standard_deck};
use crate::error::ShoeError;

/// A single 52-card deck. Same contract as a shoe of one deck.
pub type Deck<R = ChaCha8Rng> = Shoe<R>;

/// An ordered, shuffled supply of cards with a draw cursor.
///
/// The shoe owns its random generator, so a seeded generator gives a
/// reproducible dealing order.
#[derive(Debug, Clone)]
pub struct Shoe<R = ChaCha8Rng> {
    /// All cards, including those already dealt. The next card to deal sits
    /// at index `remaining - 1`; index 0 is the bottom card.
    cards: Vec<Card>,
    /// Number of undealt cards.
    remaining: usize,
    /// Random number generator used for every shuffle.
    rng: R,
}

impl<R: Rng> Shoe<R> {
    /// Creates a shuffled single deck.
    #[must_use]
    pub fn single_deck(rng: R) -> Self {
        Self::from_cards(standard_deck().collect(), rng)
    }

    /// Creates a shuffled shoe holding `decks` standard decks.
    ///
    /// Each deck is built and shuffled on its own, dealt out in full into one
    /// combined sequence, and the combined sequence is shuffled once more.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::NoDecks`] if `decks` is zero.
    pub fn new(decks: u8, mut rng: R) -> Result<Self, ShoeError> {
        if decks == 0 {
            return Err(ShoeError::NoDecks);
        }

        let mut cards = Vec::with_capacity(usize::from(decks) * DECK_SIZE);
        for _ in 0..decks {
            let mut deck = Shoe::<&mut R>::single_deck(&mut rng);
            cards.extend((0..DECK_SIZE).map(|_| deck.draw()));
        }

        log::debug!("built shoe of {decks} deck(s), {} cards", cards.len());
        Ok(Self::from_cards(cards, rng))
    }

    /// Creates a shoe holding exactly `capacity` cards.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidCapacity`] unless `capacity` is a positive
    /// multiple of [`DECK_SIZE`] that fits in a `u8` deck count.
    pub fn with_capacity(capacity: usize, rng: R) -> Result<Self, ShoeError> {
        if capacity == 0 || capacity % DECK_SIZE != 0 {
            return Err(ShoeError::InvalidCapacity(capacity));
        }
        let decks =
            u8::try_from(capacity / DECK_SIZE).map_err(|_| ShoeError::InvalidCapacity(capacity))?;
        Self::new(decks, rng)
    }

    /// Creates a stacked shoe that deals `draws` in the given order.
    ///
    /// The shoe is not shuffled up front. Once the stacked cards run out it
    /// reshuffles them like any other shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if `draws` is empty.
    pub fn from_draws(mut draws: Vec<Card>, rng: R) -> Result<Self, ShoeError> {
        if draws.is_empty() {
            return Err(ShoeError::Empty);
        }
        draws.reverse();
        let remaining = draws.len();
        Ok(Self {
            cards: draws,
            remaining,
            rng,
        })
    }

    fn from_cards(cards: Vec<Card>, rng: R) -> Self {
        let mut shoe = Self {
            remaining: cards.len(),
            cards,
            rng,
        };
        shoe.shuffle();
        shoe
    }

    /// Shuffles every card back into the shoe.
    ///
    /// Uses an unbiased Fisher-Yates shuffle over the full sequence, dealt
    /// cards included, and resets the remaining count to capacity.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.remaining = self.cards.len();
    }

    /// Draws the next card, reshuffling first if the shoe is exhausted.
    pub fn draw(&mut self) -> Card {
        if self.remaining == 0 {
            log::debug!("shoe exhausted, reshuffling {} cards", self.cards.len());
            self.shuffle();
        }
        self.remaining -= 1;
        self.cards[self.remaining]
    }

    /// Returns the number of cards not yet dealt.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.remaining
    }

    /// Returns the total number of cards in the shoe.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cards.len()
    }

    /// Looks at the next card without dealing it.
    ///
    /// On an exhausted shoe this returns the bottom card rather than
    /// reshuffling, unlike [`draw`](Self::draw). The card returned there is
    /// not necessarily the one the next draw will deal.
    #[must_use]
    pub fn cheat_peek(&self) -> Card {
        if self.remaining == 0 {
            return self.cards[0];
        }
        self.cards[self.remaining - 1]
    }

    /// Returns every undealt card, next card first.
    #[must_use]
    pub fn cheat_showall(&self) -> Vec<Card> {
        self.cards[..self.remaining].iter().rev().copied().collect()
    }
}

impl Shoe<ChaCha8Rng> {
    /// Creates a shoe of `decks` decks shuffled by a `ChaCha8` generator seeded
    /// with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::NoDecks`] if `decks` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::Shoe;
    ///
    /// let shoe = Shoe::seeded(6, 42).unwrap();
    /// assert_eq!(shoe.cards_remaining(), 312);
    /// ```
    pub fn seeded(decks: u8, seed: u64) -> Result<Self, ShoeError> {
        Self::new(decks, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a shoe of `decks` decks seeded from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::NoDecks`] if `decks` is zero.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn from_entropy(decks: u8) -> Result<Self, ShoeError> {
        Self::new(decks, ChaCha8Rng::from_os_rng())
    }
}
