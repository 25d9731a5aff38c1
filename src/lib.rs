//! A Monte Carlo simulator for a fixed-policy blackjack variant, with optional
//! `no_std` support.
//!
//! The crate provides a [`Shoe`] card source that reshuffles itself when it
//! runs out, the [`value_of`] hand evaluator, and a [`Simulation`] that plays
//! many rounds under one fixed drawing rule and counts dealer wins, pushes
//! and player wins.
//!
//! # Example
//!
//! ```
//! use bjsim::{Shoe, Simulation, SimulationOptions};
//!
//! let options = SimulationOptions::default().with_iterations(1_000);
//! let shoe = Shoe::seeded(options.decks, 42).unwrap();
//! let mut simulation = Simulation::new(options, shoe).unwrap();
//! let tally = simulation.run(|_| {});
//! assert_eq!(tally.total(), 1_000);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod shoe;
pub mod simulation;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use error::{OptionsError, ShoeError, SimulationError};
pub use hand::{Hand, value_of};
pub use options::{MAX_DECKS, MIN_DECKS, SimulationOptions};
pub use result::{Fractions, Outcome, Tally};
pub use round::{Round, play_round};
pub use shoe::{Deck, Shoe};
pub use simulation::{Event, Simulation};
