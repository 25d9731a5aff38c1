//! Simulation configuration options.

use crate::error::OptionsError;

/// Fewest decks a simulation accepts.
pub const MIN_DECKS: u8 = 1;
/// Most decks a simulation accepts.
pub const MAX_DECKS: u8 = 8;

/// Configuration options for a simulation run.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::SimulationOptions;
///
/// let options = SimulationOptions::default()
///     .with_decks(2)
///     .with_iterations(10_000)
///     .with_seed(Some(7));
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Number of rounds to play.
    pub iterations: u64,
    /// Seed for the shoe's generator. `None` seeds from system entropy.
    pub seed: Option<u64>,
    /// Number of initial rounds reported in full.
    pub shown_rounds: u64,
    /// Number of progress reports spread evenly over the run.
    pub progress_steps: u64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            iterations: 1_000_000,
            seed: None,
            shown_rounds: 5,
            progress_steps: 10,
        }
    }
}

impl SimulationOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of rounds to play.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_iterations(500);
    /// assert_eq!(options.iterations, 500);
    /// ```
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the generator seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets how many initial rounds are reported card by card.
    #[must_use]
    pub const fn with_shown_rounds(mut self, rounds: u64) -> Self {
        self.shown_rounds = rounds;
        self
    }

    /// Sets how many progress reports a run emits.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimulationOptions;
    ///
    /// let options = SimulationOptions::default()
    ///     .with_iterations(1_000)
    ///     .with_progress_steps(4);
    /// assert_eq!(options.progress_interval(), 250);
    /// ```
    #[must_use]
    pub const fn with_progress_steps(mut self, steps: u64) -> Self {
        self.progress_steps = steps;
        self
    }

    /// Returns the number of rounds between progress reports.
    ///
    /// The interval is rounded up, so a run never reports more than
    /// `progress_steps` times. Zero means the run is shorter than the step
    /// count and reports no progress.
    ///
    /// ```
    /// use bjsim::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_iterations(15);
    /// assert_eq!(options.progress_interval(), 2);
    /// assert_eq!(options.with_iterations(7).progress_interval(), 0);
    /// ```
    #[must_use]
    pub const fn progress_interval(&self) -> u64 {
        if self.progress_steps == 0 || self.iterations < self.progress_steps {
            return 0;
        }
        self.iterations.div_ceil(self.progress_steps)
    }

    /// Checks the options against the accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck count is outside
    /// [`MIN_DECKS`]..=[`MAX_DECKS`], or if the iteration count or progress
    /// step count is zero.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.decks < MIN_DECKS || self.decks > MAX_DECKS {
            return Err(OptionsError::DeckCount(self.decks));
        }
        if self.iterations == 0 {
            return Err(OptionsError::ZeroIterations);
        }
        if self.progress_steps == 0 {
            return Err(OptionsError::ZeroProgressSteps);
        }
        Ok(())
    }
}
