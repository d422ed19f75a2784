//! Selection operators.
//!
//! Selection chooses `k` raw specimens (scores stripped, with replacement)
//! from a scored population to become crossover inputs. All operators
//! return exactly `k` specimens, even when `k` exceeds the population size.

use rand::seq::index;
use rand::Rng;

use crate::types::{Score, ScoredSpecimen, Specimen};

/// Tournament selection.
///
/// Repeats `k` times: draw a random-size random subset of the population
/// (without replacement within one tournament) and keep its best-by-fitness
/// member.
///
/// # Panics
/// Panics if the population is empty.
pub fn tournament_selection<S: Score, R: Rng>(
    population: &[ScoredSpecimen<S>],
    k: usize,
    rng: &mut R,
) -> Vec<Specimen> {
    assert!(!population.is_empty(), "cannot select from empty population");
    let n = population.len();

    (0..k)
        .map(|_| {
            let subpopulation_size = if n == 1 { 1 } else { rng.random_range(1..n) };
            let winner = index::sample(rng, n, subpopulation_size)
                .into_iter()
                .max_by(|&a, &b| {
                    population[a]
                        .fitness()
                        .partial_cmp(&population[b].fitness())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .expect("tournament holds at least one contender");
            population[winner].specimen.clone()
        })
        .collect()
}

/// Roulette wheel (fitness-proportionate) selection.
///
/// Each of the `k` draws picks the first individual whose cumulative
/// fitness weight exceeds a uniform point in `[0, total)`.
///
/// # Panics
/// Panics if the population is empty.
pub fn roulette_wheel_selection<S: Score, R: Rng>(
    population: &[ScoredSpecimen<S>],
    k: usize,
    rng: &mut R,
) -> Vec<Specimen> {
    assert!(!population.is_empty(), "cannot select from empty population");

    let weights: Vec<f64> = population.iter().map(ScoredSpecimen::fitness).collect();

    (0..k)
        .map(|_| population[spin(&weights, rng)].specimen.clone())
        .collect()
}

/// Rank selection.
///
/// Sorts ascending by fitness, assigns rank weights `1..=n`, then applies a
/// roulette draw over the ranks instead of the raw fitness values. This
/// flattens fitness-scale skew.
///
/// # Panics
/// Panics if the population is empty.
pub fn rank_selection<S: Score, R: Rng>(
    population: &[ScoredSpecimen<S>],
    k: usize,
    rng: &mut R,
) -> Vec<Specimen> {
    assert!(!population.is_empty(), "cannot select from empty population");

    let mut by_fitness: Vec<&ScoredSpecimen<S>> = population.iter().collect();
    by_fitness.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let ranks: Vec<f64> = (1..=by_fitness.len()).map(|r| r as f64).collect();

    (0..k)
        .map(|_| by_fitness[spin(&ranks, rng)].specimen.clone())
        .collect()
}

/// One roulette draw over `weights`. Returns the index of the first element
/// whose cumulative weight exceeds a uniform point in `[0, total)`; the
/// last index is the floating-point (and all-zero-weight) fallback.
pub(crate) fn spin<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..weights.len());
    }

    let pick = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > pick {
            return i;
        }
    }
    weights.len() - 1
}

// ============================================================================
// Tests
// ============================================================================
