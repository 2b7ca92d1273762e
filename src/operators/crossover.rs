//! Crossover operators (§4.5.1-§4.5.4): OX, CX, ERX, AEX.
//!
//! The teacher only ever implements order crossover, against a flat tour
//! (`utils::ordered_crossover` + `Subsequence`). This module keeps OX's
//! shape (flatten, slice a middle segment, fill from the other parent) but
//! operates on the flattened multi-part chromosome and repartitions
//! afterwards, and adds CX/ERX/AEX alongside it per spec.md §4.5.

use crate::individual::Individual;
use crate::utils::partition_into_k;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Runtime-selectable crossover variant (spec.md §4.5: "a configuration
/// choice with the enumerated options `{OX, CX, ERX, AEX}`").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverKind {
    Ox,
    Cx,
    Erx,
    Aex,
}

/// Breeds one child from `parent1` and `parent2` using `kind`, repartitioned
/// into `k` parts. Returns the child alongside whether AEX degenerated and
/// fell back to OX (tracked by the driver as `OperatorDegenerate`, never
/// surfaced as an error per spec.md §7).
pub fn crossover<R: Rng + ?Sized>(
    kind: CrossoverKind,
    parent1: &Individual,
    parent2: &Individual,
    k: usize,
    rng: &mut R,
) -> (Individual, bool) {
    let generation = parent1.generation().max(parent2.generation()) + 1;
    let flat1 = parent1.flatten();
    let flat2 = parent2.flatten();

    let (sequence, degenerated) = match kind {
        CrossoverKind::Ox => (order_crossover_sequence(&flat1, &flat2, rng), false),
        CrossoverKind::Cx => (cycle_crossover_sequence(&flat1, &flat2), false),
        CrossoverKind::Erx => (edge_recombination_sequence(&flat1, &flat2, rng), false),
        CrossoverKind::Aex => match alternating_edges_sequence(parent1, parent2, flat1.len(), rng) {
            Some(seq) => (seq, false),
            None => {
                log::trace!("AEX produced an invalid permutation; falling back to OX");
                (order_crossover_sequence(&flat1, &flat2, rng), true)
            }
        },
    };

    let parts = partition_into_k(sequence, k, 1, rng);
    (Individual::new(parts, generation), degenerated)
}

/// §4.5.1: slice `parent1`'s `[start, end)` into the child verbatim, then
/// fill the remaining positions in `parent2`'s order, skipping anything
/// already placed.
fn order_crossover_sequence<R: Rng + ?Sized>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let len = parent1.len();
    if len == 0 {
        return vec![];
    }
    let start = rng.gen_range(0..len);
    let end = rng.gen_range(start..=len);
    let middle = &parent1[start..end];
    let middle_set: HashSet<usize> = middle.iter().copied().collect();
    let remaining: Vec<usize> = parent2
        .iter()
        .copied()
        .filter(|v| !middle_set.contains(v))
        .collect();

    let mut child = Vec::with_capacity(len);
    child.extend_from_slice(&remaining[..start]);
    child.extend_from_slice(middle);
    child.extend_from_slice(&remaining[start..]);
    child
}

/// §4.5.2: partitions positions into cycles of the `parent1[i] <-> parent2[i]`
/// mapping; odd-numbered cycles take their values from `parent1`, even from
/// `parent2`.
fn cycle_crossover_sequence(parent1: &[usize], parent2: &[usize]) -> Vec<usize> {
    let len = parent1.len();
    if len == 0 {
        return vec![];
    }
    let position_in_parent1: HashMap<usize, usize> =
        parent1.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let mut cycle_of = vec![usize::MAX; len];
    let mut cycle_id = 0;
    for start in 0..len {
        if cycle_of[start] != usize::MAX {
            continue;
        }
        let mut idx = start;
        loop {
            cycle_of[idx] = cycle_id;
            let value_at_parent2 = parent2[idx];
            let next_idx = position_in_parent1[&value_at_parent2];
            if next_idx == start {
                break;
            }
            idx = next_idx;
        }
        cycle_id += 1;
    }

    (0..len)
        .map(|i| if cycle_of[i] % 2 == 0 { parent1[i] } else { parent2[i] })
        .collect()
}

/// §4.5.3: greedily walks an adjacency map built from both parents'
/// predecessor/successor sets, always preferring the unvisited neighbour
/// with the fewest remaining neighbours.
fn edge_recombination_sequence<R: Rng + ?Sized>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let len = parent1.len();
    if len == 0 {
        return vec![];
    }

    let mut neighbors: HashMap<usize, HashSet<usize>> = HashMap::new();
    for sequence in [parent1, parent2] {
        for (i, &customer) in sequence.iter().enumerate() {
            let entry = neighbors.entry(customer).or_default();
            if i > 0 {
                entry.insert(sequence[i - 1]);
            }
            if i + 1 < sequence.len() {
                entry.insert(sequence[i + 1]);
            }
        }
    }

    let mut current = *parent1.choose(rng).expect("non-empty parent");
    let mut child = Vec::with_capacity(len);
    child.push(current);
    let mut remaining: HashSet<usize> = parent1.iter().copied().filter(|&v| v != current).collect();
    for set in neighbors.values_mut() {
        set.remove(&current);
    }

    while !remaining.is_empty() {
        let candidates = neighbors.get(&current).cloned().unwrap_or_default();
        let next = if !candidates.is_empty() {
            let min_remaining = candidates
                .iter()
                .map(|c| neighbors.get(c).map_or(0, |s| s.len()))
                .min()
                .unwrap();
            let mut fewest: Vec<usize> = candidates
                .into_iter()
                .filter(|c| neighbors.get(c).map_or(0, |s| s.len()) == min_remaining)
                .collect();
            fewest.sort_unstable();
            *fewest.choose(rng).expect("non-empty candidate set")
        } else {
            let mut unvisited: Vec<usize> = remaining.iter().copied().collect();
            unvisited.sort_unstable();
            *unvisited.choose(rng).expect("non-empty remaining set")
        };

        child.push(next);
        remaining.remove(&next);
        for set in neighbors.values_mut() {
            set.remove(&next);
        }
        current = next;
    }
    child
}

/// §4.5.4: builds a child edge list alternating parent1's and parent2's
/// within-part adjacent pairs, then reassembles a tour by greedy walk.
/// Returns `None` if the walk dead-ends before covering every customer —
/// the fragility spec.md §9 calls out explicitly.
fn alternating_edges_sequence<R: Rng + ?Sized>(
    parent1: &Individual,
    parent2: &Individual,
    total_customers: usize,
    rng: &mut R,
) -> Option<Vec<usize>> {
    let edges1 = part_edges(parent1.parts());
    let edges2 = part_edges(parent2.parts());
    let n = edges1.len().min(edges2.len());
    if n == 0 {
        return None;
    }

    let child_edges: Vec<(usize, usize)> = (0..n)
        .map(|i| if i % 2 == 0 { edges1[i] } else { edges2[i] })
        .collect();

    reassemble_from_edges(&child_edges, total_customers, rng)
}

fn part_edges(parts: &[Vec<usize>]) -> Vec<(usize, usize)> {
    parts
        .iter()
        .flat_map(|part| part.iter().copied().tuple_windows())
        .collect()
}

fn reassemble_from_edges<R: Rng + ?Sized>(
    edges: &[(usize, usize)],
    total_customers: usize,
    rng: &mut R,
) -> Option<Vec<usize>> {
    let mut adjacency: HashMap<usize, Vec<usize>> = HashMap::new();
    for &(a, b) in edges {
        adjacency.entry(a).or_default().push(b);
    }
    let mut adjacency_keys: Vec<usize> = adjacency.keys().copied().collect();
    adjacency_keys.sort_unstable();
    let start = *adjacency_keys.choose(rng)?;

    let mut visited = HashSet::new();
    visited.insert(start);
    let mut tour = vec![start];
    let mut current = start;

    while tour.len() < total_customers {
        let next = adjacency
            .get(&current)
            .and_then(|neighbours| neighbours.iter().copied().find(|n| !visited.contains(n)));
        match next {
            Some(n) => {
                visited.insert(n);
                tour.push(n);
                current = n;
            }
            None => return None,
        }
    }
    Some(tour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn individual(parts: Vec<Vec<usize>>) -> Individual {
        Individual::new(parts, 0)
    }

    fn assert_permutation(sequence: &[usize], universe: &[usize]) {
        let mut sorted = sequence.to_vec();
        sorted.sort_unstable();
        let mut expected = universe.to_vec();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn ox_preserves_permutation() {
        let mut rng = StdRng::seed_from_u64(1);
        let p1 = individual(vec![vec![1, 2, 3], vec![4, 5]]);
        let p2 = individual(vec![vec![5, 4, 3], vec![2, 1]]);
        for _ in 0..50 {
            let (child, degenerated) = crossover(CrossoverKind::Ox, &p1, &p2, 2, &mut rng);
            assert!(!degenerated);
            assert_permutation(&child.customers(), &[1, 2, 3, 4, 5]);
            assert_eq!(child.num_parts(), 2);
        }
    }

    #[test]
    fn cx_preserves_permutation() {
        let mut rng = StdRng::seed_from_u64(2);
        let p1 = individual(vec![vec![1, 2, 3, 4, 5]]);
        let p2 = individual(vec![vec![5, 4, 3, 2, 1]]);
        for _ in 0..50 {
            let (child, _) = crossover(CrossoverKind::Cx, &p1, &p2, 3, &mut rng);
            assert_permutation(&child.customers(), &[1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn erx_preserves_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let p1 = individual(vec![vec![1, 2, 3, 4, 5]]);
        let p2 = individual(vec![vec![3, 5, 1, 4, 2]]);
        for _ in 0..50 {
            let (child, _) = crossover(CrossoverKind::Erx, &p1, &p2, 2, &mut rng);
            assert_permutation(&child.customers(), &[1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn aex_always_yields_a_valid_permutation_or_falls_back() {
        let mut rng = StdRng::seed_from_u64(4);
        let p1 = individual(vec![vec![1, 2, 3, 4, 5]]);
        let p2 = individual(vec![vec![5, 4, 3, 2, 1]]);
        for _ in 0..50 {
            let (child, _) = crossover(CrossoverKind::Aex, &p1, &p2, 2, &mut rng);
            assert_permutation(&child.customers(), &[1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn aex_falls_back_on_singleton_parts_with_no_edges() {
        let mut rng = StdRng::seed_from_u64(5);
        let p1 = individual(vec![vec![1], vec![2], vec![3]]);
        let p2 = individual(vec![vec![3], vec![1], vec![2]]);
        let (child, degenerated) = crossover(CrossoverKind::Aex, &p1, &p2, 3, &mut rng);
        assert!(degenerated);
        assert_permutation(&child.customers(), &[1, 2, 3]);
    }

    #[test]
    fn ox_from_paper_example() {
        // https://citeseerx.ist.psu.edu/viewdoc/download?doi=10.1.1.50.1898
        let parent1 = vec![9, 8, 4, 5, 6, 7, 1, 3, 2];
        let parent2 = vec![8, 7, 1, 2, 3, 0, 9, 5, 4];
        let child = {
            let middle = &parent1[3..6];
            let middle_set: HashSet<usize> = middle.iter().copied().collect();
            let remaining: Vec<usize> = parent2
                .iter()
                .copied()
                .filter(|v| !middle_set.contains(v))
                .collect();
            let mut child = Vec::new();
            child.extend_from_slice(&remaining[..3]);
            child.extend_from_slice(middle);
            child.extend_from_slice(&remaining[3..]);
            child
        };
        assert_eq!(child, vec![8, 1, 2, 5, 6, 7, 3, 0, 9, 4]);
    }
}
