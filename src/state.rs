//! Execution state.
//!
//! [`ExecutionState`] is the mutable context the driver threads through a
//! run. It owns the population for the whole run, plus the transient
//! per-iteration buffers the iteration protocol fills in order. The driver
//! owns the state exclusively; strategies receive it by reference and
//! never retain per-iteration data across iterations.

use crate::types::{Score, ScoredSpecimen, Specimen};

/// Per-run and per-iteration state of one GA execution.
#[derive(Debug, Clone)]
pub struct ExecutionState<S: Score> {
    /// Iteration currently being executed.
    pub current_iteration: usize,

    /// The population. Lives for the whole run: seeded by population
    /// initialization, grown by merged children/mutants each iteration, and
    /// replaced by the succession strategy's output at iteration end.
    pub population: Vec<ScoredSpecimen<S>>,

    /// Parent groups chosen by the selection strategy this iteration.
    pub parents_list: Vec<Vec<Specimen>>,

    /// Raw crossover outputs of this iteration.
    pub children: Vec<Specimen>,

    /// Crossover outputs with their scores, visible to same-iteration
    /// mutation selection.
    pub scored_children: Vec<ScoredSpecimen<S>>,

    /// Owned copies drawn for mutation this iteration.
    pub mutation_candidates: Vec<Specimen>,

    /// Mutation outputs with their scores.
    pub scored_mutated_specimens: Vec<ScoredSpecimen<S>>,
}

impl<S: Score> ExecutionState<S> {
    pub fn new() -> Self {
        Self {
            current_iteration: 0,
            population: Vec::new(),
            parents_list: Vec::new(),
            children: Vec::new(),
            scored_children: Vec::new(),
            mutation_candidates: Vec::new(),
            scored_mutated_specimens: Vec::new(),
        }
    }

    /// Clear all per-iteration buffers, keeping their allocations.
    pub fn reset_per_iteration_state(&mut self) {
        self.parents_list.clear();
        self.children.clear();
        self.scored_children.clear();
        self.mutation_candidates.clear();
        self.scored_mutated_specimens.clear();
    }
}

impl<S: Score> Default for ExecutionState<S> {
    fn default() -> Self {
        Self::new()
    }
}
