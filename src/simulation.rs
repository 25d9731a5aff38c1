//! Simulation loop and progress reporting.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::OptionsError;
#[cfg(feature = "std")]
use crate::error::SimulationError;
use crate::options::SimulationOptions;
use crate::result::Tally;
use crate::round::{Round, play_round};
use crate::shoe::Shoe;

/// Something worth reporting while a simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// One of the first rounds, reported in full.
    Round {
        /// Zero-based round number.
        index: u64,
        /// The finished round.
        round: &'a Round,
    },
    /// Running totals after a share of the run has completed.
    Progress {
        /// Rounds played so far.
        completed: u64,
        /// Outcome counts so far.
        tally: Tally,
    },
}

/// Plays many fixed-policy rounds from one shoe and counts the outcomes.
///
/// # Example
///
/// ```
/// use bjsim::{Shoe, Simulation, SimulationOptions};
///
/// let options = SimulationOptions::default().with_decks(2).with_iterations(100);
/// let shoe = Shoe::seeded(options.decks, 7).unwrap();
/// let mut simulation = Simulation::new(options, shoe).unwrap();
/// let tally = simulation.run(|_| {});
/// assert_eq!(tally.total(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation<R = ChaCha8Rng> {
    options: SimulationOptions,
    shoe: Shoe<R>,
    tally: Tally,
}

impl<R: Rng> Simulation<R> {
    /// Creates a simulation that deals from `shoe`.
    ///
    /// The shoe is used as given; `options.decks` and `options.seed` only
    /// matter to [`Simulation::from_options`].
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`SimulationOptions::validate`].
    pub fn new(options: SimulationOptions, shoe: Shoe<R>) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            shoe,
            tally: Tally::default(),
        })
    }

    /// Plays every round and returns the tally for this run.
    ///
    /// Counts start from zero on every call; the shoe carries over, so a
    /// second run keeps dealing where the first stopped. `observer` sees the first `shown_rounds` rounds and a progress event
    /// every [`progress_interval`](SimulationOptions::progress_interval)
    /// rounds. Runs too short for a non-zero interval emit no progress.
    pub fn run<F>(&mut self, mut observer: F) -> Tally
    where
        F: FnMut(Event<'_>),
    {
        let interval = self.options.progress_interval();
        self.tally = Tally::default();
        log::info!(
            "simulating {} rounds from a {}-card shoe",
            self.options.iterations,
            self.shoe.capacity()
        );

        for index in 0..self.options.iterations {
            let round = play_round(&mut self.shoe);
            self.tally.record(round.outcome);

            if index < self.options.shown_rounds {
                observer(Event::Round {
                    index,
                    round: &round,
                });
            }

            let completed = index + 1;
            if interval != 0 && completed % interval == 0 {
                observer(Event::Progress {
                    completed,
                    tally: self.tally,
                });
            }
        }

        log::info!("simulation finished: {}", self.tally);
        self.tally
    }

    /// Returns the outcome counts of the current or last run.
    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    /// Returns the options the simulation was built with.
    #[must_use]
    pub const fn options(&self) -> &SimulationOptions {
        &self.options
    }

    /// Returns the shoe the simulation deals from.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe<R> {
        &self.shoe
    }
}

#[cfg(feature = "std")]
impl Simulation<ChaCha8Rng> {
    /// Creates a simulation with a fresh shoe of `options.decks` decks.
    ///
    /// The shoe is seeded from `options.seed`, or from system entropy when no
    /// seed is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn from_options(options: SimulationOptions) -> Result<Self, SimulationError> {
        options.validate()?;
        let shoe = match options.seed {
            Some(seed) => Shoe::seeded(options.decks, seed)?,
            None => Shoe::from_entropy(options.decks)?,
        };
        Ok(Self::new(options, shoe)?)
    }
}
