//! Permutation operators library.
//!
//! Pure functions implementing crossover, mutation, selection, and
//! succession over permutations and scored populations. All operators
//! assume the allele universe `0..n` and preserve it: children and mutants
//! are always permutations of the same element set as their inputs.
//!
//! The functions here carry their natural signatures; [`crate::adapter`]
//! normalizes them into the canonical strategy roles the driver expects.

pub mod crossover;
pub mod mutation;
pub mod selection;
pub mod succession;

pub use crossover::{
    cycle_crossover, injection_crossover, multiple_injection_crossover, pmx_crossover,
    pmx_single_point_crossover,
};
pub use mutation::{
    adjacent_swap_mutation, insertion_mutation, inversion_mutation, random_slide_mutation,
    random_swap_mutation, scramble_mutation, single_swap_mutation,
};
pub use selection::{rank_selection, roulette_wheel_selection, tournament_selection};
pub use succession::{best_succession, best_then_uniform_succession, rank_succession};
