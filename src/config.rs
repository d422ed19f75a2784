//! Run configuration.
//!
//! [`GaConfig`] holds every parameter the driver reads: genome and
//! population sizing, iteration budget, the four strategy choices, and the
//! random seed. Strategies can be set from string keys for declarative
//! configuration; unknown keys fail at construction, never at iteration
//! time.

use crate::error::{Error, Result};
use crate::registry::{CrossoverOp, MutationOp, SelectionOp, SuccessionOp};

/// Configuration for one GA run.
///
/// # Builder pattern
///
/// ```
/// use permga::{CrossoverOp, GaConfig, MutationOp, SelectionOp, SuccessionOp};
///
/// let config = GaConfig::new(20)
///     .with_population_size(100)
///     .with_iterations(500)
///     .with_selection(SelectionOp::Roulette)
///     .with_crossover(CrossoverOp::Injection)
///     .with_mutation(MutationOp::SingleSwap)
///     .with_succession(SuccessionOp::Best)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Length of every specimen; the allele universe is `0..genome_length`.
    pub genome_length: usize,

    /// Number of specimens created at initialization, and the target size
    /// handed to the succession strategy.
    pub population_size: usize,

    /// Iteration bound for the default stop condition.
    pub iterations: usize,

    /// Parent groups drawn per iteration. Each group holds two parents.
    pub parent_groups: usize,

    /// Specimens sampled (without replacement) for mutation per iteration.
    pub mutation_count: usize,

    /// Fraction of the succession target reserved for elites in
    /// best-then-random succession. Must lie in `[0, 1]`.
    pub perc_best: f64,

    /// Strategy choices, one per role.
    pub selection: SelectionOp,
    pub crossover: CrossoverOp,
    pub mutation: MutationOp,
    pub succession: SuccessionOp,

    /// Record each iteration's best fitness in the run result.
    pub gather_iteration_stats: bool,

    /// Random seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GaConfig {
    /// A configuration with framework defaults and all strategies `Noop`.
    pub fn new(genome_length: usize) -> Self {
        Self {
            genome_length,
            population_size: 100,
            iterations: 100,
            parent_groups: 1,
            mutation_count: 2,
            perc_best: 0.2,
            selection: SelectionOp::Noop,
            crossover: CrossoverOp::Noop,
            mutation: MutationOp::Noop,
            succession: SuccessionOp::Noop,
            gather_iteration_stats: false,
            seed: None,
        }
    }

    /// Build a configuration from the registry's string keys.
    ///
    /// # Errors
    /// Returns [`Error::UnknownStrategy`] for any key missing from its
    /// role's catalogue.
    pub fn from_keys(
        genome_length: usize,
        selection: &str,
        crossover: &str,
        mutation: &str,
        succession: &str,
    ) -> Result<Self> {
        Ok(Self::new(genome_length)
            .with_selection(selection.parse()?)
            .with_crossover(crossover.parse()?)
            .with_mutation(mutation.parse()?)
            .with_succession(succession.parse()?))
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_parent_groups(mut self, n: usize) -> Self {
        self.parent_groups = n;
        self
    }

    pub fn with_mutation_count(mut self, n: usize) -> Self {
        self.mutation_count = n;
        self
    }

    pub fn with_perc_best(mut self, perc: f64) -> Self {
        self.perc_best = perc;
        self
    }

    pub fn with_selection(mut self, op: SelectionOp) -> Self {
        self.selection = op;
        self
    }

    pub fn with_crossover(mut self, op: CrossoverOp) -> Self {
        self.crossover = op;
        self
    }

    pub fn with_mutation(mut self, op: MutationOp) -> Self {
        self.mutation = op;
        self
    }

    pub fn with_succession(mut self, op: SuccessionOp) -> Self {
        self.succession = op;
        self
    }

    pub fn with_iteration_stats(mut self, gather: bool) -> Self {
        self.gather_iteration_stats = gather;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// The driver calls this before touching the evaluator, so a bad
    /// configuration never costs a single fitness evaluation.
    pub fn validate(&self) -> Result<()> {
        if self.genome_length == 0 {
            return Err(Error::InvalidConfig("genome_length must be positive".into()));
        }
        if self.population_size == 0 {
            return Err(Error::InvalidConfig("population_size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.perc_best) {
            return Err(Error::InvalidConfig(format!(
                "perc_best must lie in [0, 1], got {}",
                self.perc_best
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_noop_strategies() {
        let config = GaConfig::new(10);
        assert_eq!(config.selection, SelectionOp::Noop);
        assert_eq!(config.crossover, CrossoverOp::Noop);
        assert_eq!(config.mutation, MutationOp::Noop);
        assert_eq!(config.succession, SuccessionOp::Noop);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_keys_builds_full_strategy_set() {
        let config =
            GaConfig::from_keys(10, "tournament", "cycle", "inversion", "best_then_random")
                .unwrap();
        assert_eq!(config.selection, SelectionOp::Tournament);
        assert_eq!(config.crossover, CrossoverOp::Cycle);
        assert_eq!(config.mutation, MutationOp::Inversion);
        assert_eq!(config.succession, SuccessionOp::BestThenRandom);
    }

    #[test]
    fn from_keys_rejects_unknown_key() {
        let err = GaConfig::from_keys(10, "tournament", "uniform", "inversion", "best")
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownStrategy { role: "crossover", key: "uniform".to_string() }
        );
    }

    #[test]
    fn validate_rejects_zero_genome() {
        assert!(GaConfig::new(0).validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_population() {
        assert!(GaConfig::new(5).with_population_size(0).validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_perc_best() {
        assert!(GaConfig::new(5).with_perc_best(1.5).validate().is_err());
        assert!(GaConfig::new(5).with_perc_best(-0.1).validate().is_err());
        assert!(GaConfig::new(5).with_perc_best(1.0).validate().is_ok());
    }

    #[test]
    fn builder_chains() {
        let config = GaConfig::new(8)
            .with_population_size(40)
            .with_iterations(250)
            .with_parent_groups(3)
            .with_mutation_count(5)
            .with_perc_best(0.5)
            .with_iteration_stats(true)
            .with_seed(7);
        assert_eq!(config.population_size, 40);
        assert_eq!(config.iterations, 250);
        assert_eq!(config.parent_groups, 3);
        assert_eq!(config.mutation_count, 5);
        assert_eq!(config.perc_best, 0.5);
        assert!(config.gather_iteration_stats);
        assert_eq!(config.seed, Some(7));
    }
}
