//! Error types for the GA engine.
//!
//! Configuration problems and degenerate sampling surface as [`Error`]
//! values. Operator invariant violations (a crossover or mutation producing
//! a non-permutation) are programming faults and panic instead.

use thiserror::Error;

/// Errors reported by configuration parsing and the driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A strategy key was not found in the catalogue for its role.
    #[error("unknown {role} strategy: {key:?}")]
    UnknownStrategy { role: &'static str, key: String },

    /// A run-configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A sample without replacement asked for more elements than exist.
    ///
    /// Raised instead of silently truncating the sample.
    #[error("cannot sample {requested} specimens from a pool of {available}")]
    SampleExhausted { requested: usize, available: usize },

    /// The population was empty when the best specimen was requested.
    #[error("population is empty")]
    EmptyPopulation,
}

pub type Result<T> = std::result::Result<T, Error>;
