//! Core type definitions for the permutation GA engine.
//!
//! The engine is deliberately agnostic about how fitness is computed: the
//! [`Evaluator`] trait is the only channel through which domain knowledge
//! enters, and [`Score`] values are opaque except for their scalar
//! comparison key.

/// A candidate solution: a permutation of the identifiers `0..N`.
///
/// Every operator in this crate preserves the permutation invariant:
/// children and mutants contain exactly the same allele set as their
/// inputs, with no slot left unset.
pub type Specimen = Vec<usize>;

/// Opaque fitness value produced by the external evaluator.
///
/// The engine never constructs scores itself; it only compares them via
/// [`fitness`](Score::fitness). Higher fitness is better (maximization).
pub trait Score: Clone + Send + Sync + std::fmt::Debug + 'static {
    /// Scalar comparison key. Used for ordering, statistics, and as the
    /// weight in fitness-proportional selection/succession.
    fn fitness(&self) -> f64;
}

impl Score for f64 {
    fn fitness(&self) -> f64 {
        *self
    }
}

/// A specimen paired with the score the evaluator assigned to it.
#[derive(Debug, Clone)]
pub struct ScoredSpecimen<S: Score> {
    pub specimen: Specimen,
    pub score: S,
}

impl<S: Score> ScoredSpecimen<S> {
    pub fn new(specimen: Specimen, score: S) -> Self {
        Self { specimen, score }
    }

    /// Shortcut for `self.score.fitness()`.
    pub fn fitness(&self) -> f64 {
        self.score.fitness()
    }
}

/// The external fitness collaborator.
///
/// Called once per generated child and mutant, plus once per member of the
/// initial population. The engine assumes evaluation is deterministic given
/// a specimen (required for reproducible runs) but does not require it to
/// be side-effect-free.
pub trait Evaluator {
    type Score: Score;

    fn evaluate(&self, specimen: &[usize]) -> Self::Score;
}

/// Any `Fn(&[usize]) -> S` is an evaluator, which keeps tests and callers
/// with simple fitness functions free of boilerplate.
impl<F, S> Evaluator for F
where
    F: Fn(&[usize]) -> S,
    S: Score,
{
    type Score = S;

    fn evaluate(&self, specimen: &[usize]) -> S {
        self(specimen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_specimen_exposes_fitness() {
        let s = ScoredSpecimen::new(vec![0, 1, 2], 0.75f64);
        assert_eq!(s.fitness(), 0.75);
    }

    #[test]
    fn closures_are_evaluators() {
        let eval = |specimen: &[usize]| specimen.len() as f64;
        assert_eq!(eval.evaluate(&[0, 1, 2]), 3.0);
    }
}
