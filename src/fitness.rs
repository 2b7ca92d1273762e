//! The fitness evaluator (component C3): scores an [`Individual`] against a
//! [`Problem`].
//!
//! Grounded on the teacher's `Solution::fitness`/`Route::fitness`, which
//! each scored a single flat tour against a `DistanceMat`; generalized here
//! to sum per-part depot-anchored tour length across all of an
//! individual's parts, with the empty-part `+∞` penalty spec.md §4.3
//! requires.

use crate::individual::Individual;
use crate::problem::Problem;

/// Polymorphic over the capability `evaluate(individual) -> individual'`.
/// Alternative objectives (e.g. minimise the longest single tour, for load
/// balancing) implement this trait without the driver needing to change.
pub trait FitnessEvaluator {
    fn evaluate(&self, individual: Individual, problem: &Problem) -> Individual;
}

/// Total Euclidean distance across all parts, each a closed walk anchored
/// at the depot. An empty part contributes `+∞` (an idle worker should
/// never win selection unless no non-empty assignment exists).
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimizeTotalDistance;

impl FitnessEvaluator for MinimizeTotalDistance {
    fn evaluate(&self, individual: Individual, problem: &Problem) -> Individual {
        let total: f64 = individual
            .parts()
            .iter()
            .map(|part| {
                if part.is_empty() {
                    f64::INFINITY
                } else {
                    problem.distances().route_distance(problem.depot(), part)
                }
            })
            .sum();
        individual.with_fitness(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;

    fn line_problem() -> Problem {
        Problem::new(
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 0.0),
                Coordinate::new(2.0, 0.0),
                Coordinate::new(3.0, 0.0),
            ],
            1,
        )
        .unwrap()
    }

    #[test]
    fn single_part_round_trip() {
        let problem = line_problem();
        let individual = Individual::new(vec![vec![1, 2, 3]], 0);
        let scored = MinimizeTotalDistance.evaluate(individual, &problem);
        assert_eq!(scored.fitness(), Some(6.0));
    }

    #[test]
    fn empty_part_is_infinite() {
        let problem = line_problem();
        let individual = Individual::new(vec![vec![1, 2], vec![]], 0);
        let scored = MinimizeTotalDistance.evaluate(individual, &problem);
        assert_eq!(scored.fitness(), Some(f64::INFINITY));
    }

    #[test]
    fn multi_part_sums_contributions() {
        let problem = line_problem();
        let individual = Individual::new(vec![vec![1], vec![2, 3]], 0);
        let scored = MinimizeTotalDistance.evaluate(individual, &problem);
        // part 1: 0->1->0 = 2.0; part 2: 0->2->3->0 = 2+1+3 = 6.0
        assert_eq!(scored.fitness(), Some(8.0));
    }

    #[test]
    fn evaluator_is_idempotent() {
        let problem = line_problem();
        let individual = Individual::new(vec![vec![1, 2, 3]], 0);
        let once = MinimizeTotalDistance.evaluate(individual.clone(), &problem);
        let twice = MinimizeTotalDistance.evaluate(individual, &problem);
        assert_eq!(once.fitness(), twice.fitness());
    }
}
