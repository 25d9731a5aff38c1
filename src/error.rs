//! Error types for building card sources and simulations.

use thiserror::Error;

/// Errors that can occur while building a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// A shoe needs at least one deck.
    #[error("a shoe needs at least one deck")]
    NoDecks,
    /// Capacity is not a positive multiple of the deck size.
    #[error("capacity {0} is not a positive multiple of 52")]
    InvalidCapacity(usize),
    /// A stacked shoe was given no cards.
    #[error("a stacked shoe needs at least one card")]
    Empty,
}

/// Errors that can occur while validating simulation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Deck count is outside the accepted range.
    #[error("deck count {0} is outside 1..=8")]
    DeckCount(u8),
    /// The simulation would play no rounds.
    #[error("iteration count must be positive")]
    ZeroIterations,
    /// Progress reporting needs at least one step.
    #[error("progress steps must be positive")]
    ZeroProgressSteps,
}

/// Errors that can occur while setting up a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The options were rejected.
    #[error(transparent)]
    Options(#[from] OptionsError),
    /// The shoe could not be built.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}
