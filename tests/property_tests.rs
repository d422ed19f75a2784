//! Property-based tests for permutation closure.
//!
//! For arbitrary permutations of arbitrary sizes, every crossover must
//! produce two children over the same allele multiset as the parents, and
//! every mutation must return a permutation of the same universe as its
//! input.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use permga::operators::{
    adjacent_swap_mutation, cycle_crossover, injection_crossover, insertion_mutation,
    inversion_mutation, multiple_injection_crossover, pmx_crossover, pmx_single_point_crossover,
    random_slide_mutation, random_swap_mutation, scramble_mutation, single_swap_mutation,
};
use permga::Specimen;

fn permutation(n: usize) -> impl Strategy<Value = Specimen> {
    Just((0..n).collect::<Specimen>()).prop_shuffle()
}

fn parents_and_seed() -> impl Strategy<Value = (Specimen, Specimen, u64)> {
    (1usize..40).prop_flat_map(|n| (permutation(n), permutation(n), any::<u64>()))
}

fn specimen_and_seed() -> impl Strategy<Value = (Specimen, u64)> {
    (1usize..40).prop_flat_map(|n| (permutation(n), any::<u64>()))
}

fn assert_permutation(perm: &[usize], n: usize, label: &str) {
    let mut sorted = perm.to_vec();
    sorted.sort_unstable();
    let expected: Specimen = (0..n).collect();
    assert_eq!(sorted, expected, "{label} is not a permutation of 0..{n}: {perm:?}");
}

macro_rules! crossover_closure {
    ($test:ident, $op:expr) => {
        proptest! {
            #[test]
            fn $test((p1, p2, seed) in parents_and_seed()) {
                let n = p1.len();
                let mut rng = StdRng::seed_from_u64(seed);
                let (c1, c2) = $op(&p1, &p2, &mut rng);
                assert_permutation(&c1, n, "child1");
                assert_permutation(&c2, n, "child2");
            }
        }
    };
}

macro_rules! mutation_closure {
    ($test:ident, $op:expr) => {
        proptest! {
            #[test]
            fn $test((specimen, seed) in specimen_and_seed()) {
                let n = specimen.len();
                let mut rng = StdRng::seed_from_u64(seed);
                let mutated = $op(specimen, &mut rng);
                assert_permutation(&mutated, n, "mutant");
            }
        }
    };
}

crossover_closure!(injection_crossover_is_closed, injection_crossover);
crossover_closure!(multiple_injection_crossover_is_closed, multiple_injection_crossover);
crossover_closure!(pmx_crossover_is_closed, pmx_crossover);
crossover_closure!(pmx_single_point_crossover_is_closed, pmx_single_point_crossover);

proptest! {
    // Cycle crossover draws no randomness, so it gets its own property.
    #[test]
    fn cycle_crossover_is_closed((p1, p2, _) in parents_and_seed()) {
        let n = p1.len();
        let (c1, c2) = cycle_crossover(&p1, &p2);
        assert_permutation(&c1, n, "child1");
        assert_permutation(&c2, n, "child2");
    }

    // Every position of a cycle-crossover child comes from one of the two
    // parents at the same index, which is exactly the cycle partition
    // property observed from the outside.
    #[test]
    fn cycle_crossover_is_positionwise_parental((p1, p2, _) in parents_and_seed()) {
        let (c1, c2) = cycle_crossover(&p1, &p2);
        for i in 0..p1.len() {
            prop_assert!(c1[i] == p1[i] || c1[i] == p2[i]);
            prop_assert!(c2[i] == p1[i] || c2[i] == p2[i]);
            // The children split the parents' alleles between them.
            prop_assert!(c1[i] != c2[i] || p1[i] == p2[i]);
        }
    }
}

mutation_closure!(adjacent_swap_is_closed, adjacent_swap_mutation);
mutation_closure!(single_swap_is_closed, single_swap_mutation);
mutation_closure!(random_swap_is_closed, random_swap_mutation);
mutation_closure!(insertion_is_closed, insertion_mutation);
mutation_closure!(inversion_is_closed, inversion_mutation);
mutation_closure!(random_slide_is_closed, random_slide_mutation);
mutation_closure!(scramble_is_closed, scramble_mutation);
