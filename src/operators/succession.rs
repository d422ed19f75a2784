//! Succession operators.
//!
//! Succession decides which scored specimens survive into the next
//! generation. It consumes the merged population (previous generation plus
//! this iteration's scored children and mutants) and returns the
//! replacement population.

use rand::seq::index;
use rand::Rng;

use super::selection::spin;
use crate::error::{Error, Result};
use crate::types::{Score, ScoredSpecimen};

/// Elitist succession: the `k` highest-fitness individuals.
///
/// Returns `min(k, population_size)` specimens; the minimum fitness of the
/// survivors is never below any fitness in the discarded set.
pub fn best_succession<S: Score>(
    mut population: Vec<ScoredSpecimen<S>>,
    k: usize,
) -> Vec<ScoredSpecimen<S>> {
    sort_descending(&mut population);
    population.truncate(k);
    population
}

/// Rank succession: `k` roulette draws (with replacement) over the whole
/// population, using raw fitness as the weight.
pub fn rank_succession<S: Score, R: Rng>(
    population: Vec<ScoredSpecimen<S>>,
    k: usize,
    rng: &mut R,
) -> Vec<ScoredSpecimen<S>> {
    if population.is_empty() {
        return population;
    }
    let weights: Vec<f64> = population.iter().map(ScoredSpecimen::fitness).collect();

    (0..k)
        .map(|_| population[spin(&weights, rng)].clone())
        .collect()
}

/// Hybrid succession: keep the top `max(perc_best * k, 1)` by fitness, then
/// fill the remainder with a uniform sample (without replacement) from the
/// rest.
///
/// # Errors
/// Returns [`Error::SampleExhausted`] when the non-elite remainder cannot
/// supply the shortfall, and [`Error::InvalidConfig`] when the elite share
/// alone exceeds `k`. Neither case is truncated silently.
pub fn best_then_uniform_succession<S: Score, R: Rng>(
    mut population: Vec<ScoredSpecimen<S>>,
    k: usize,
    perc_best: f64,
    rng: &mut R,
) -> Result<Vec<ScoredSpecimen<S>>> {
    sort_descending(&mut population);

    let to_take = ((perc_best * k as f64) as usize).max(1);
    let shortfall = k.checked_sub(to_take).ok_or_else(|| {
        Error::InvalidConfig(format!(
            "succession target {k} is smaller than the elite share {to_take}"
        ))
    })?;

    let rest = population.split_off(to_take.min(population.len()));
    if rest.len() < shortfall {
        return Err(Error::SampleExhausted {
            requested: shortfall,
            available: rest.len(),
        });
    }

    for rest_index in index::sample(rng, rest.len(), shortfall) {
        population.push(rest[rest_index].clone());
    }

    Ok(population)
}

/// Sort a scored population by fitness, best first.
pub(crate) fn sort_descending<S: Score>(population: &mut [ScoredSpecimen<S>]) {
    population.sort_by(|a, b| {
        b.fitness()
            .partial_cmp(&a.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

// ============================================================================
// Tests
// ============================================================================
