//! Permutation crossover operators.
//!
//! Every operator takes two equal-length permutations of the universe
//! `0..n` and produces two children over the same universe. The allele
//! multiset is always preserved: sorted children equal sorted parents.
//!
//! Where an operator draws cut points, the same points are applied to both
//! children so the pair stays symmetric.
//!
//! # Operators
//!
//! - [`cycle_crossover`]: alternate disjoint positional cycles between parents
//! - [`injection_crossover`]: single-swath order crossover (order 1)
//! - [`multiple_injection_crossover`]: several bounded swaths, greedy placement
//! - [`pmx_crossover`] (swath form): mapping-chain conflict resolution
//! - [`pmx_single_point_crossover`]: positional swap repair below one cut

use rand::Rng;

use crate::types::Specimen;

// ============================================================================
// Cycle crossover
// ============================================================================

/// Cycle crossover (CX).
///
/// Partitions the index range into disjoint cycles that link the two
/// parents by positional value-chasing, then alternates which parent
/// supplies each cycle's alleles between the two children. The operator is
/// deterministic: it draws no randomness.
///
/// # Panics
/// Panics if the parents differ in length, are empty, or are not
/// permutations of `0..n`.
pub fn cycle_crossover(parent1: &[usize], parent2: &[usize]) -> (Specimen, Specimen) {
    let n = check_parents(parent1, parent2);

    let mut child1 = vec![usize::MAX; n];
    let mut child2 = vec![usize::MAX; n];

    let mut straight = true;
    for cycle in find_cycles(parent1, parent2) {
        for index in cycle {
            if straight {
                child1[index] = parent1[index];
                child2[index] = parent2[index];
            } else {
                child1[index] = parent2[index];
                child2[index] = parent1[index];
            }
        }
        straight = !straight;
    }

    (child1, child2)
}

/// Index sets of the disjoint cycles linking `parent1` and `parent2`.
///
/// Each cycle starts at the lowest index not yet covered and follows
/// `parent2`'s value at the current index back into `parent1` until the
/// walk returns to the starting value. The union of all cycles is exactly
/// `0..n` with no overlap.
fn find_cycles(parent1: &[usize], parent2: &[usize]) -> Vec<Vec<usize>> {
    let n = parent1.len();
    let mut position_in_p1 = vec![usize::MAX; n];
    for (i, &v) in parent1.iter().enumerate() {
        position_in_p1[v] = i;
    }

    let mut covered = vec![false; n];
    let mut cycles = Vec::new();

    for start in 0..n {
        if covered[start] {
            continue;
        }
        let mut cycle = Vec::new();
        let starting_value = parent1[start];
        let mut index = start;
        loop {
            cycle.push(index);
            covered[index] = true;
            let next_value = parent2[index];
            if next_value == starting_value {
                break;
            }
            index = position_in_p1[next_value];
        }
        cycles.push(cycle);
    }

    cycles
}

// ============================================================================
// Injection (order) crossover
// ============================================================================

/// Single-swath injection crossover, also known as order 1 crossover (OX1).
///
/// Copies the contiguous swath `[a, b)` verbatim from one parent, then
/// fills the remaining positions in left-to-right order with the other
/// parent's alleles, skipping any already placed. The cut points `a < b`
/// are drawn once and reused for both children.
///
/// # Panics
/// Panics if the parents differ in length or are empty.
pub fn injection_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Specimen, Specimen) {
    let n = check_parents(parent1, parent2);
    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (a, b) = distinct_sorted_pair(n, rng);

    (
        injection_child(parent1, parent2, a, b),
        injection_child(parent2, parent1, a, b),
    )
}

/// Build one injection child: swath `[a, b)` from `template`, the rest from
/// `donor` in left-to-right order.
fn injection_child(template: &[usize], donor: &[usize], a: usize, b: usize) -> Specimen {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in a..b {
        child[i] = template[i];
        placed[template[i]] = true;
    }

    let mut remainder = donor.iter().copied().filter(|&v| !placed[v]);
    for i in (0..a).chain(b..n) {
        child[i] = remainder
            .next()
            .expect("donor must supply an allele for every free slot");
    }

    child
}

// ============================================================================
// Multiple injection crossover
// ============================================================================

const SWATHS_FACTOR: f64 = 0.2;

/// Multi-swath injection crossover.
///
/// Partitions the index range into several non-overlapping swaths (target
/// count roughly 20% of the genome length, each swath capped at
/// `n / swaths - swaths / 2`), placed greedily by always splitting the
/// currently longest free range. All swaths are copied verbatim from one
/// parent; remaining positions are filled in left-to-right order from the
/// other parent, skipping used alleles.
///
/// When the longest free range shrinks below two elements before the target
/// count is reached, the round places nothing and the crossover simply uses
/// fewer swaths. This is intentional: forcing the configured count would
/// change the operator's statistical behavior.
///
/// # Panics
/// Panics if the parents differ in length or are empty.
pub fn multiple_injection_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Specimen, Specimen) {
    let n = check_parents(parent1, parent2);

    let number_of_swaths = (n as f64 * SWATHS_FACTOR) as usize;
    let swaths = if number_of_swaths == 0 {
        Vec::new()
    } else {
        let max_swath_size = (n / number_of_swaths).saturating_sub(number_of_swaths / 2);
        pick_swaths(n, number_of_swaths, max_swath_size, rng)
    };

    (
        multi_injection_child(parent1, parent2, &swaths),
        multi_injection_child(parent2, parent1, &swaths),
    )
}

/// Greedily split the longest free range into swaths. Ranges and swaths are
/// inclusive `(start, end)` index pairs.
fn pick_swaths<R: Rng>(
    n: usize,
    number_of_swaths: usize,
    max_swath_size: usize,
    rng: &mut R,
) -> Vec<(usize, usize)> {
    let mut free_ranges: Vec<(usize, usize)> = vec![(0, n - 1)];
    let mut swaths = Vec::new();

    for _ in 0..number_of_swaths {
        let Some(longest) = free_ranges
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|&(_, (start, end))| end - start)
        else {
            break;
        };
        let (range_index, (start, end)) = longest;
        if start == end {
            // No free range holds two elements any more; this round places
            // nothing and the crossover ends up with fewer swaths.
            continue;
        }

        let (a, mut b) = distinct_sorted_pair_in(start, end, rng);
        if b - a > max_swath_size {
            b = a + max_swath_size;
        }
        swaths.push((a, b));

        free_ranges.swap_remove(range_index);
        if start != a {
            free_ranges.push((start, a - 1));
        }
        if end != b {
            free_ranges.push((b + 1, end));
        }
    }

    swaths
}

/// Build one multi-injection child: all swaths (inclusive ranges) from
/// `template`, everything else left-to-right from `donor`.
fn multi_injection_child(
    template: &[usize],
    donor: &[usize],
    swaths: &[(usize, usize)],
) -> Specimen {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for &(a, b) in swaths {
        for i in a..=b {
            child[i] = template[i];
            placed[template[i]] = true;
        }
    }

    let mut remainder = donor.iter().copied().filter(|&v| !placed[v]);
    for slot in child.iter_mut() {
        if *slot == usize::MAX {
            *slot = remainder
                .next()
                .expect("donor must supply an allele for every free slot");
        }
    }

    child
}

// ============================================================================
// Partially mapped crossover (PMX)
// ============================================================================

/// PMX, swath form.
///
/// Copies one parent's swath `[a, b)` into the child, then places every
/// donor value from that swath that is not already present by following the
/// donor→template mapping chain until a position outside `[a, b)` is found.
/// Remaining free positions take the donor's value directly.
///
/// The cut points are drawn once from `0..=n` (so the swath may reach the
/// end of the genome) and shared by both children for symmetry.
///
/// # Panics
/// Panics if the parents differ in length, are empty, or are not
/// permutations of `0..n`.
pub fn pmx_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Specimen, Specimen) {
    let n = check_parents(parent1, parent2);

    // Both endpoints inclusive of n: the swath is half-open, so b == n
    // means "through the last position".
    let (a, b) = distinct_sorted_pair(n + 1, rng);

    (pmx_child(parent1, parent2, a, b), pmx_child(parent2, parent1, a, b))
}

/// Build one PMX child from `template`'s swath `[a, b)` and `donor`.
fn pmx_child(template: &[usize], donor: &[usize], a: usize, b: usize) -> Specimen {
    let n = template.len();
    let mut position_in_donor = vec![usize::MAX; n];
    for (i, &v) in donor.iter().enumerate() {
        position_in_donor[v] = i;
    }

    let mut child = template.to_vec();
    let mut fixed = vec![false; n];
    let mut in_swath = vec![false; n];
    for i in a..b {
        fixed[i] = true;
        in_swath[template[i]] = true;
    }

    for i in a..b {
        let value = donor[i];
        if in_swath[value] {
            continue;
        }
        // Chase the mapping chain until it leaves the swath. A target inside
        // [a, b) is already taken and reflects the walk further; the chain
        // always terminates because each hop lands on a new swath position.
        let mut current = value;
        loop {
            let index_in_donor = position_in_donor[current];
            let target = position_in_donor[template[index_in_donor]];
            if target >= a && target < b {
                current = donor[target];
            } else {
                child[target] = value;
                fixed[target] = true;
                break;
            }
        }
    }

    for i in 0..n {
        if !fixed[i] {
            child[i] = donor[i];
        }
    }

    child
}

/// PMX, single-point form.
///
/// Picks one cut point `c` from `0..=n`. For every position below `c`,
/// child1 is repaired by swapping so that it matches parent2's allele at
/// that position (locating the duplicate and exchanging), and child2
/// symmetrically against parent1. Each swap exchanges two elements that are
/// both already present, so the result stays a permutation.
///
/// # Panics
/// Panics if the parents differ in length or are empty.
pub fn pmx_single_point_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Specimen, Specimen) {
    let n = check_parents(parent1, parent2);
    let cut = rng.random_range(0..=n);

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();

    for i in 0..cut {
        let wanted = parent2[i];
        let j = child1
            .iter()
            .position(|&v| v == wanted)
            .expect("parents share one allele universe");
        child1.swap(i, j);
    }
    for i in 0..cut {
        let wanted = parent1[i];
        let j = child2
            .iter()
            .position(|&v| v == wanted)
            .expect("parents share one allele universe");
        child2.swap(i, j);
    }

    (child1, child2)
}

// ============================================================================
// Helpers
// ============================================================================

/// Validate shared crossover preconditions and return the genome length.
fn check_parents(parent1: &[usize], parent2: &[usize]) -> usize {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");
    n
}

/// Two distinct values `a < b` drawn uniformly from `0..upper`.
fn distinct_sorted_pair<R: Rng>(upper: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(upper >= 2);
    let a = rng.random_range(0..upper);
    let mut b = rng.random_range(0..upper - 1);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Two distinct values `a < b` drawn uniformly from the inclusive range
/// `low..=high`.
fn distinct_sorted_pair_in<R: Rng>(low: usize, high: usize, rng: &mut R) -> (usize, usize) {
    let (a, b) = distinct_sorted_pair(high - low + 1, rng);
    (low + a, low + b)
}

// ============================================================================
// Tests
// ============================================================================
