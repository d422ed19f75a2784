//! GA iteration loop.
//!
//! [`GaDriver`] wires the configured strategies together: selection →
//! crossover (children scored immediately) → mutation selection → mutation
//! (mutants scored) → merge → succession → stats. The external evaluator is
//! the only source of scores; the driver never invents or mutates fitness.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::adapter;
use crate::config::GaConfig;
use crate::error::{Error, Result};
use crate::state::ExecutionState;
use crate::types::{Evaluator, Score, ScoredSpecimen, Specimen};

/// Decides, at each iteration boundary, whether the run goes on.
///
/// `next_iteration` is the number of the iteration about to start. The
/// state is the one left by the previous iteration, with per-iteration
/// buffers already reset.
pub trait StopCondition<S: Score> {
    fn should_continue(&mut self, next_iteration: usize, state: &ExecutionState<S>) -> bool;
}

/// Default stop condition: run exactly `n` iterations.
#[derive(Debug, Clone, Copy)]
pub struct IterBound(pub usize);

impl<S: Score> StopCondition<S> for IterBound {
    fn should_continue(&mut self, next_iteration: usize, _state: &ExecutionState<S>) -> bool {
        next_iteration < self.0
    }
}

/// Any `FnMut(usize, &ExecutionState<S>) -> bool` works as a stop condition.
impl<S: Score, F> StopCondition<S> for F
where
    F: FnMut(usize, &ExecutionState<S>) -> bool,
{
    fn should_continue(&mut self, next_iteration: usize, state: &ExecutionState<S>) -> bool {
        self(next_iteration, state)
    }
}

/// Result of one GA run.
#[derive(Debug, Clone)]
pub struct GaResult<S: Score> {
    /// Best specimen of the final population.
    pub best: ScoredSpecimen<S>,

    /// Iteration at which the population's running best fitness last
    /// improved (0 when the initial population was never beaten). With a
    /// non-elitist succession the final population may no longer contain
    /// the specimen that set this mark.
    pub best_iteration: usize,

    /// Iterations actually executed.
    pub iterations: usize,

    /// Each recorded iteration's best fitness, for trend inspection.
    /// Populated only when [`GaConfig::gather_iteration_stats`] is set.
    pub iteration_best: BTreeMap<usize, f64>,
}

impl<S: Score> GaResult<S> {
    /// The persistable (specimen, iteration) pair for external tooling.
    pub fn record(&self) -> SolutionRecord {
        SolutionRecord {
            specimen: self.best.specimen.clone(),
            iteration: self.best_iteration,
        }
    }
}

/// A solution paired with the iteration at which it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionRecord {
    pub specimen: Specimen,
    pub iteration: usize,
}

/// Executes the GA iteration loop.
pub struct GaDriver;

impl GaDriver {
    /// Run with the default iteration-bound stop condition.
    pub fn run<E: Evaluator>(evaluator: &E, config: &GaConfig) -> Result<GaResult<E::Score>> {
        Self::run_with_stop(evaluator, config, IterBound(config.iterations))
    }

    /// Run with a custom stop condition.
    ///
    /// # Errors
    /// Fails fast on an invalid configuration, and surfaces degenerate
    /// sampling (mutation candidates or succession asking for more
    /// specimens than exist) as [`Error::SampleExhausted`]. An empty final
    /// population yields [`Error::EmptyPopulation`].
    pub fn run_with_stop<E, C>(
        evaluator: &E,
        config: &GaConfig,
        mut stop: C,
    ) -> Result<GaResult<E::Score>>
    where
        E: Evaluator,
        C: StopCondition<E::Score>,
    {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        let mut state: ExecutionState<E::Score> = ExecutionState::new();

        // Population initialization: uniformly shuffled permutations of the
        // allele universe, scored up front.
        for _ in 0..config.population_size {
            let mut specimen: Specimen = (0..config.genome_length).collect();
            specimen.shuffle(&mut rng);
            let score = evaluator.evaluate(&specimen);
            state.population.push(ScoredSpecimen::new(specimen, score));
        }
        info!(
            population_size = config.population_size,
            genome_length = config.genome_length,
            selection = %config.selection,
            crossover = %config.crossover,
            mutation = %config.mutation,
            succession = %config.succession,
            "population initialized"
        );

        let mut best_fitness = max_fitness(&state.population).unwrap_or(f64::NEG_INFINITY);
        let mut best_iteration = 0;
        let mut iteration_best = BTreeMap::new();

        let mut i = 0;
        while stop.should_continue(i, &state) {
            state.current_iteration = i;

            // An empty population cannot breed; the iteration starves
            // silently rather than being treated as a driver fault.
            if !state.population.is_empty() {
                // Selection.
                let parents_list = adapter::select_parent_groups(
                    config.selection,
                    &state.population,
                    config.parent_groups,
                    &mut rng,
                );

                // Crossover; each child is scored as soon as it exists, so
                // it is visible (with score) to this iteration's mutation.
                for parents in &parents_list {
                    for child in adapter::crossover_group(config.crossover, parents, &mut rng) {
                        let score = evaluator.evaluate(&child);
                        state
                            .scored_children
                            .push(ScoredSpecimen::new(child.clone(), score));
                        state.children.push(child);
                    }
                }
                state.parents_list = parents_list;

                // Mutation, on owned copies only.
                state.mutation_candidates = adapter::mutation_candidates(
                    &state.population,
                    config.mutation_count,
                    &mut rng,
                )?;
                for candidate in state.mutation_candidates.clone() {
                    let mutated = adapter::mutate(config.mutation, candidate, &mut rng);
                    let score = evaluator.evaluate(&mutated);
                    state
                        .scored_mutated_specimens
                        .push(ScoredSpecimen::new(mutated, score));
                }

                // Merge, then hand the whole population to succession; its
                // output replaces the population instead of extending it.
                state.population.append(&mut state.scored_children);
                state.population.append(&mut state.scored_mutated_specimens);

                let merged = std::mem::take(&mut state.population);
                state.population = adapter::succession(
                    config.succession,
                    merged,
                    config.population_size,
                    config.perc_best,
                    &mut rng,
                )?;

                if let Some(iteration_max) = max_fitness(&state.population) {
                    let fitness_sum: f64 =
                        state.population.iter().map(ScoredSpecimen::fitness).sum();
                    debug!(
                        iteration = i,
                        max_fitness = iteration_max,
                        fitness_sum,
                        population = state.population.len(),
                        "iteration finished"
                    );
                    if config.gather_iteration_stats {
                        iteration_best.insert(i, iteration_max);
                    }
                    if iteration_max > best_fitness {
                        best_fitness = iteration_max;
                        best_iteration = i;
                    }
                }
            }

            state.reset_per_iteration_state();
            i += 1;
        }

        let best = state
            .population
            .iter()
            .max_by(|a, b| {
                a.fitness()
                    .partial_cmp(&b.fitness())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .cloned()
            .ok_or(Error::EmptyPopulation)?;
        info!(
            iterations = i,
            best_fitness = best.fitness(),
            best_iteration,
            "run finished"
        );

        Ok(GaResult {
            best,
            best_iteration,
            iterations: i,
            iteration_best,
        })
    }
}

/// Highest fitness in a scored population, `None` when empty.
fn max_fitness<S: Score>(population: &[ScoredSpecimen<S>]) -> Option<f64> {
    population
        .iter()
        .map(ScoredSpecimen::fitness)
        .fold(None, |acc, f| match acc {
            Some(best) if best >= f => Some(best),
            _ => Some(f),
        })
}

// ============================================================================
// Tests
// ============================================================================
