//! Operator adapter.
//!
//! Normalizes the raw operator signatures from [`crate::operators`] into
//! the three canonical strategy roles the driver expects:
//!
//! - **selection**: scored population → parent groups of two raw specimens
//! - **crossover/mutation**: two specimens → two specimens, resp. one owned
//!   specimen → one specimen
//! - **succession**: merged scored population × target size → replacement
//!   population
//!
//! The `Noop` entries reproduce the framework defaults, so a run configured
//! entirely with `noop` strategies degenerates to re-scoring the initial
//! population.

use rand::seq::index;
use rand::Rng;

use crate::error::{Error, Result};
use crate::operators::{crossover, mutation, selection, succession};
use crate::registry::{CrossoverOp, MutationOp, SelectionOp, SuccessionOp};
use crate::types::{Score, ScoredSpecimen, Specimen};

/// Parents drawn per group. Crossover operators are binary, so the adapter
/// fixes the group arity at two.
pub const PARENTS_PER_GROUP: usize = 2;

/// Run the selection strategy once, producing `parent_groups` groups of two
/// raw specimens each.
///
/// `Noop` returns a single group holding (up to) the first two population
/// members, scores stripped.
pub fn select_parent_groups<S: Score, R: Rng>(
    op: SelectionOp,
    population: &[ScoredSpecimen<S>],
    parent_groups: usize,
    rng: &mut R,
) -> Vec<Vec<Specimen>> {
    match op {
        SelectionOp::Noop => vec![population
            .iter()
            .take(PARENTS_PER_GROUP)
            .map(|s| s.specimen.clone())
            .collect()],
        SelectionOp::Tournament => (0..parent_groups)
            .map(|_| selection::tournament_selection(population, PARENTS_PER_GROUP, rng))
            .collect(),
        SelectionOp::Roulette => (0..parent_groups)
            .map(|_| selection::roulette_wheel_selection(population, PARENTS_PER_GROUP, rng))
            .collect(),
        SelectionOp::Rank => (0..parent_groups)
            .map(|_| selection::rank_selection(population, PARENTS_PER_GROUP, rng))
            .collect(),
    }
}

/// Apply the crossover strategy to one parent group, producing two
/// children. `Noop` clones the parents.
///
/// # Panics
/// Panics if a non-noop crossover receives a group whose size is not two;
/// that indicates a broken selection strategy, not a runtime condition.
pub fn crossover_group<R: Rng>(
    op: CrossoverOp,
    parents: &[Specimen],
    rng: &mut R,
) -> Vec<Specimen> {
    if op == CrossoverOp::Noop {
        return parents.to_vec();
    }

    assert_eq!(
        parents.len(),
        PARENTS_PER_GROUP,
        "crossover expects exactly two parents"
    );
    let (p1, p2) = (&parents[0], &parents[1]);
    let (child1, child2) = match op {
        CrossoverOp::Noop => unreachable!(),
        CrossoverOp::Cycle => crossover::cycle_crossover(p1, p2),
        CrossoverOp::Injection => crossover::injection_crossover(p1, p2, rng),
        CrossoverOp::MultiInjection => crossover::multiple_injection_crossover(p1, p2, rng),
        CrossoverOp::Pmx => crossover::pmx_crossover(p1, p2, rng),
        CrossoverOp::SinglePointPmx => crossover::pmx_single_point_crossover(p1, p2, rng),
    };
    vec![child1, child2]
}

/// Draw `count` mutation candidates from the population, without
/// replacement. Candidates are owned copies; mutation never touches the
/// population's stored specimens.
///
/// # Errors
/// Returns [`Error::SampleExhausted`] when `count` exceeds the population
/// size instead of truncating the sample.
pub fn mutation_candidates<S: Score, R: Rng>(
    population: &[ScoredSpecimen<S>],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Specimen>> {
    if count > population.len() {
        return Err(Error::SampleExhausted {
            requested: count,
            available: population.len(),
        });
    }
    Ok(index::sample(rng, population.len(), count)
        .into_iter()
        .map(|i| population[i].specimen.clone())
        .collect())
}

/// Apply the mutation strategy to one owned specimen. `Noop` is the
/// identity.
pub fn mutate<R: Rng>(op: MutationOp, specimen: Specimen, rng: &mut R) -> Specimen {
    match op {
        MutationOp::Noop => specimen,
        MutationOp::AdjacentSwap => mutation::adjacent_swap_mutation(specimen, rng),
        MutationOp::SingleSwap => mutation::single_swap_mutation(specimen, rng),
        MutationOp::RandomSwap => mutation::random_swap_mutation(specimen, rng),
        MutationOp::Insertion => mutation::insertion_mutation(specimen, rng),
        MutationOp::Inversion => mutation::inversion_mutation(specimen, rng),
        MutationOp::Slide => mutation::random_slide_mutation(specimen, rng),
        MutationOp::Scramble => mutation::scramble_mutation(specimen, rng),
    }
}

/// Apply the succession strategy to the merged population, producing the
/// replacement population. `Noop` keeps the population unchanged; `k` and
/// `perc_best` only apply where the underlying operator uses them.
pub fn succession<S: Score, R: Rng>(
    op: SuccessionOp,
    population: Vec<ScoredSpecimen<S>>,
    k: usize,
    perc_best: f64,
    rng: &mut R,
) -> Result<Vec<ScoredSpecimen<S>>> {
    match op {
        SuccessionOp::Noop => Ok(population),
        SuccessionOp::Best => Ok(succession::best_succession(population, k)),
        SuccessionOp::Rank => Ok(succession::rank_succession(population, k, rng)),
        SuccessionOp::BestThenRandom => {
            succession::best_then_uniform_succession(population, k, perc_best, rng)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
