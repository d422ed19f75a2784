//! Permutation mutation operators.
//!
//! Every operator takes its specimen by value: callers hand over an owned
//! copy, so the operator may reorder it destructively without the caller
//! ever observing a partially mutated population entry. The output is
//! always a permutation of the same universe as the input.

use rand::Rng;

use crate::types::Specimen;

/// Exchange two consecutive positions chosen at random.
pub fn adjacent_swap_mutation<R: Rng>(mut specimen: Specimen, rng: &mut R) -> Specimen {
    let n = specimen.len();
    if n < 2 {
        return specimen;
    }
    let i = rng.random_range(0..n - 1);
    specimen.swap(i, i + 1);
    specimen
}

/// Exchange two distinct positions chosen uniformly at random.
pub fn single_swap_mutation<R: Rng>(mut specimen: Specimen, rng: &mut R) -> Specimen {
    let n = specimen.len();
    if n < 2 {
        return specimen;
    }
    let (i, j) = distinct_pair(n, rng);
    specimen.swap(i, j);
    specimen
}

/// Like single swap, but exchanges two equally sized blocks instead.
///
/// Picks positions `a < b`, then a swath size bounded by
/// `min(b - a, n - b)`, and exchanges the block starting at `b` with the
/// block starting at `a`. A swath size of zero leaves the specimen
/// unchanged.
pub fn random_swap_mutation<R: Rng>(specimen: Specimen, rng: &mut R) -> Specimen {
    let n = specimen.len();
    if n < 2 {
        return specimen;
    }
    let (a, b) = sorted_distinct_pair(n, rng);
    let max_swath = (b - a).min(n - b);
    let swath = rng.random_range(0..=max_swath);

    let mut mutated = Vec::with_capacity(n);
    mutated.extend_from_slice(&specimen[..a]);
    mutated.extend_from_slice(&specimen[b..b + swath]);
    mutated.extend_from_slice(&specimen[a + swath..b]);
    mutated.extend_from_slice(&specimen[a..a + swath]);
    mutated.extend_from_slice(&specimen[b + swath..]);
    mutated
}

/// Mark each allele selected or not by an independent coin flip, then
/// reorder as: unselected alleles preceding the first selected one, then
/// all selected alleles, then the rest, each group in original relative
/// order.
pub fn insertion_mutation<R: Rng>(specimen: Specimen, rng: &mut R) -> Specimen {
    let mut preceding = Vec::new();
    let mut selected = Vec::new();
    let mut remaining = Vec::new();

    for allele in specimen {
        if rng.random_bool(0.5) {
            selected.push(allele);
        } else if selected.is_empty() {
            preceding.push(allele);
        } else {
            remaining.push(allele);
        }
    }

    preceding.extend(selected);
    preceding.extend(remaining);
    preceding
}

const MAX_INVERSION_FACTOR: f64 = 0.6;

/// Reverse a contiguous swath whose size is capped at 60% of the genome.
pub fn inversion_mutation<R: Rng>(mut specimen: Specimen, rng: &mut R) -> Specimen {
    let n = specimen.len();
    if n < 2 {
        return specimen;
    }
    let max_swath = (n as f64 * MAX_INVERSION_FACTOR) as usize;

    let (a, mut b) = sorted_distinct_pair(n, rng);
    if b - a > max_swath {
        b = a + max_swath;
    }
    specimen[a..b].reverse();
    specimen
}

const MAX_SLIDE_FACTOR: f64 = 0.6;

/// Slide a random swath left or right by a random distance, shifting the
/// intervening elements to fill the gap.
pub fn random_slide_mutation<R: Rng>(specimen: Specimen, rng: &mut R) -> Specimen {
    let n = specimen.len();
    if n < 2 {
        return specimen;
    }
    let swath = rng.random_range(1..=(n as f64 * MAX_SLIDE_FACTOR) as usize);

    let mut mutated = Vec::with_capacity(n);
    if rng.random_bool(0.5) {
        // Slide left. Leave at least one position for the swath to move into.
        let a = rng.random_range(1..=n - swath);
        let b = a + swath - 1;
        let distance = rng.random_range(1..=a);
        let x = a - distance;
        mutated.extend_from_slice(&specimen[..x]);
        mutated.extend_from_slice(&specimen[a..=b]);
        mutated.extend_from_slice(&specimen[x..a]);
        mutated.extend_from_slice(&specimen[b + 1..]);
    } else {
        // Slide right.
        let b = rng.random_range(swath - 1..=n - 2);
        let a = b + 1 - swath;
        let distance = rng.random_range(1..=n - 1 - b);
        let y = b + distance;
        mutated.extend_from_slice(&specimen[..a]);
        mutated.extend_from_slice(&specimen[b + 1..=y]);
        mutated.extend_from_slice(&specimen[a..=b]);
        mutated.extend_from_slice(&specimen[y + 1..]);
    }
    mutated
}

/// Pick a random swath of size at least two and perform as many random
/// pairwise swaps within it as its length, the two indices distinct each
/// time.
pub fn scramble_mutation<R: Rng>(mut specimen: Specimen, rng: &mut R) -> Specimen {
    let n = specimen.len();
    if n < 3 {
        return specimen;
    }
    let swath = rng.random_range(2..n);
    let a = rng.random_range(0..n - swath);
    let b = a + swath;

    for _ in 0..swath {
        let i = rng.random_range(a..=b);
        let mut j = rng.random_range(a..=b);
        while j == i {
            j = rng.random_range(a..=b);
        }
        specimen.swap(i, j);
    }
    specimen
}

/// Two distinct indices drawn uniformly from `0..n`, in draw order.
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(n >= 2);
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

/// Two distinct indices `a < b` drawn uniformly from `0..n`.
fn sorted_distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let (i, j) = distinct_pair(n, rng);
    if i < j {
        (i, j)
    } else {
        (j, i)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let set: HashSet<usize> = perm.iter().copied().collect();
        set.len() == n && perm.iter().all(|&v| v < n)
    }

    fn all_operators() -> Vec<(&'static str, fn(Specimen, &mut StdRng) -> Specimen)> {
        vec![
            ("adjacent_swap", adjacent_swap_mutation::<StdRng>),
            ("single_swap", single_swap_mutation::<StdRng>),
            ("random_swap", random_swap_mutation::<StdRng>),
            ("insertion", insertion_mutation::<StdRng>),
            ("inversion", inversion_mutation::<StdRng>),
            ("slide", random_slide_mutation::<StdRng>),
            ("scramble", scramble_mutation::<StdRng>),
        ]
    }

    #[test]
    fn every_operator_preserves_the_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for (name, op) in all_operators() {
            for _ in 0..200 {
                let specimen: Specimen = (0..15).collect();
                let mutated = op(specimen, &mut rng);
                assert!(
                    is_valid_permutation(&mutated, 15),
                    "{name} broke the permutation: {mutated:?}"
                );
            }
        }
    }

    #[test]
    fn every_operator_handles_tiny_genomes() {
        let mut rng = StdRng::seed_from_u64(42);
        for (name, op) in all_operators() {
            for n in 1..=4 {
                for _ in 0..50 {
                    let specimen: Specimen = (0..n).collect();
                    let mutated = op(specimen, &mut rng);
                    assert!(
                        is_valid_permutation(&mutated, n),
                        "{name} broke a {n}-element genome: {mutated:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn adjacent_swap_moves_exactly_one_neighbour_pair() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Specimen = (0..10).collect();
        let mutated = adjacent_swap_mutation(original.clone(), &mut rng);

        let changed: Vec<usize> = (0..10).filter(|&i| mutated[i] != original[i]).collect();
        assert_eq!(changed.len(), 2);
        assert_eq!(changed[0] + 1, changed[1]);
        assert_eq!(mutated[changed[0]], original[changed[1]]);
        assert_eq!(mutated[changed[1]], original[changed[0]]);
    }

    #[test]
    fn single_swap_exchanges_two_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let original: Specimen = (0..10).collect();
            let mutated = single_swap_mutation(original.clone(), &mut rng);
            let changed: Vec<usize> = (0..10).filter(|&i| mutated[i] != original[i]).collect();
            assert_eq!(changed.len(), 2, "expected exactly one swap: {mutated:?}");
        }
    }

    #[test]
    fn insertion_keeps_relative_order_within_groups() {
        // With a seeded rng we can recompute the expected grouping by
        // replaying the coin flips.
        let original: Specimen = (0..12).collect();

        let mut rng = StdRng::seed_from_u64(7);
        let flips: Vec<bool> = (0..12).map(|_| rng.random_bool(0.5)).collect();

        let mut rng = StdRng::seed_from_u64(7);
        let mutated = insertion_mutation(original.clone(), &mut rng);

        let mut preceding = Vec::new();
        let mut selected = Vec::new();
        let mut remaining = Vec::new();
        for (allele, &flip) in original.iter().zip(&flips) {
            if flip {
                selected.push(*allele);
            } else if selected.is_empty() {
                preceding.push(*allele);
            } else {
                remaining.push(*allele);
            }
        }
        preceding.extend(selected);
        preceding.extend(remaining);
        assert_eq!(mutated, preceding);
    }

    #[test]
    fn inversion_swath_respects_size_cap() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Specimen = (0..20).collect();
        let cap = (20.0 * MAX_INVERSION_FACTOR) as usize;
        for _ in 0..200 {
            let mutated = inversion_mutation(original.clone(), &mut rng);
            let changed = (0..20).filter(|&i| mutated[i] != original[i]).count();
            assert!(changed <= cap, "inversion touched {changed} positions");
        }
    }

    #[test]
    fn slide_preserves_swath_order() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let original: Specimen = (0..10).collect();
            let mutated = random_slide_mutation(original, &mut rng);
            assert!(is_valid_permutation(&mutated, 10));
        }
    }

    #[test]
    fn scramble_eventually_reorders() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Specimen = (0..10).collect();
        let mut changed = false;
        for _ in 0..50 {
            let mutated = scramble_mutation(original.clone(), &mut rng);
            assert!(is_valid_permutation(&mutated, 10));
            changed |= mutated != original;
        }
        assert!(changed, "scramble never changed the specimen");
    }
}
