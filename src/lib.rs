//! Strategy-pluggable genetic algorithm engine for permutation-encoded
//! specimens.
//!
//! Evolves permutations of identifiers `0..N` toward maximizing a fitness
//! value returned by an external evaluator. The engine guarantees the
//! permutation invariant across every operator (children and mutants
//! always carry exactly the allele set of their inputs) while staying
//! agnostic to the fitness function and to population size.
//!
//! # Components
//!
//! - [`operators`]: pure crossover, mutation, selection, and succession
//!   functions over permutations and scored populations
//! - [`adapter`]: normalizes raw operator signatures into the canonical
//!   strategy roles the driver expects
//! - [`ExecutionState`]: per-run and per-iteration mutable state
//! - [`GaDriver`]: the iteration loop wiring strategies together
//! - strategy catalogues ([`SelectionOp`], [`CrossoverOp`], [`MutationOp`],
//!   [`SuccessionOp`]) with fail-fast string-key parsing
//!
//! # Example
//!
//! ```
//! use permga::{CrossoverOp, GaConfig, GaDriver, MutationOp, SelectionOp, SuccessionOp};
//!
//! // Toy evaluator: reward alleles sitting at their own index.
//! let evaluator = |specimen: &[usize]| {
//!     specimen.iter().enumerate().filter(|&(i, &v)| i == v).count() as f64
//! };
//!
//! let config = GaConfig::new(10)
//!     .with_population_size(30)
//!     .with_iterations(50)
//!     .with_selection(SelectionOp::Tournament)
//!     .with_crossover(CrossoverOp::Injection)
//!     .with_mutation(MutationOp::SingleSwap)
//!     .with_succession(SuccessionOp::Best)
//!     .with_seed(42);
//!
//! let result = GaDriver::run(&evaluator, &config).unwrap();
//! assert_eq!(result.best.specimen.len(), 10);
//! ```

pub mod adapter;
mod config;
mod driver;
mod error;
pub mod operators;
mod registry;
mod state;
mod types;

pub use config::GaConfig;
pub use driver::{GaDriver, GaResult, IterBound, SolutionRecord, StopCondition};
pub use error::{Error, Result};
pub use registry::{CrossoverOp, MutationOp, SelectionOp, SuccessionOp};
pub use state::ExecutionState;
pub use types::{Evaluator, Score, ScoredSpecimen, Specimen};
