//! 2-opt local search refinement (§4.5.7).
//!
//! Grounded directly on `u-routing`'s `local_search::two_opt::two_opt_improve`
//! (first-improvement 2-opt with an `O(n^2)` per-pass delta check), adapted
//! to this crate's [`DistanceMat`] and to operate per-part on a multi-part
//! chromosome rather than on a single tour.

use crate::distance_mat::DistanceMat;
use crate::individual::Individual;

const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Applies 2-opt to every part of `individual`, replacing each with its
/// locally-optimal reordering. The customer set of every part is
/// unchanged — only the order within each part may differ.
pub fn two_opt_refine(individual: Individual, depot: usize, distances: &DistanceMat) -> Individual {
    let generation = individual.generation();
    let refined_parts: Vec<Vec<usize>> = individual
        .into_parts()
        .into_iter()
        .map(|part| two_opt_improve(&part, depot, distances))
        .collect();
    Individual::new(refined_parts, generation)
}

/// Repeatedly reverses the sub-sequence `[i..=j]` that most recently
/// strictly decreased the part's depot-anchored closed-tour length, until a
/// full pass finds no improvement (first-improvement strategy).
pub fn two_opt_improve(part: &[usize], depot: usize, distances: &DistanceMat) -> Vec<usize> {
    if part.len() < 2 {
        return part.to_vec();
    }

    let mut current = part.to_vec();
    let mut improved = true;
    while improved {
        improved = false;
        let n = current.len();
        for i in 0..n - 1 {
            for j in (i + 1)..n {
                let delta = two_opt_delta(&current, depot, distances, i, j);
                if delta < -IMPROVEMENT_EPSILON {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }
    current
}

fn two_opt_delta(route: &[usize], depot: usize, distances: &DistanceMat, i: usize, j: usize) -> f64 {
    let n = route.len();
    let prev_i = if i == 0 { depot } else { route[i - 1] };
    let next_j = if j == n - 1 { depot } else { route[j + 1] };

    let old_cost = distances.get(prev_i, route[i]) + distances.get(route[j], next_j);
    let new_cost = distances.get(prev_i, route[j]) + distances.get(route[i], next_j);
    new_cost - old_cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;

    fn line_matrix() -> DistanceMat {
        DistanceMat::precompute(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(2.0, 0.0),
            Coordinate::new(1.0, -1.0),
        ])
    }

    #[test]
    fn already_optimal_route_is_unchanged() {
        let dm = DistanceMat::precompute(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(2.0, 0.0),
            Coordinate::new(3.0, 0.0),
        ]);
        let improved = two_opt_improve(&[1, 2, 3], 0, &dm);
        assert_eq!(improved, vec![1, 2, 3]);
    }

    #[test]
    fn crossing_route_is_unreversed() {
        let dm = line_matrix();
        let original = dm.route_distance(0, &[1, 3, 2]);
        let improved = two_opt_improve(&[1, 3, 2], 0, &dm);
        let improved_dist = dm.route_distance(0, &improved);
        assert!(improved_dist <= original + 1e-9);
    }

    #[test]
    fn never_worsens_a_part() {
        let dm = DistanceMat::precompute(&[
            Coordinate::new(5.0, 5.0),
            Coordinate::new(0.0, 0.0),
            Coordinate::new(10.0, 0.0),
            Coordinate::new(0.0, 10.0),
            Coordinate::new(10.0, 10.0),
        ]);
        let initial = vec![1, 4, 2, 3];
        let before = dm.route_distance(0, &initial);
        let improved = two_opt_improve(&initial, 0, &dm);
        let after = dm.route_distance(0, &improved);
        assert!(after <= before + 1e-9);
    }

    #[test]
    fn empty_and_singleton_parts_pass_through() {
        let dm = line_matrix();
        assert_eq!(two_opt_improve(&[], 0, &dm), Vec::<usize>::new());
        assert_eq!(two_opt_improve(&[2], 0, &dm), vec![2]);
    }

    #[test]
    fn refine_preserves_customer_set_per_part() {
        let dm = line_matrix();
        let individual = Individual::new(vec![vec![1, 3, 2]], 0);
        let refined = two_opt_refine(individual, 0, &dm);
        let mut customers = refined.customers();
        customers.sort_unstable();
        assert_eq!(customers, vec![1, 2, 3]);
    }
}
