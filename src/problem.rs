//! The problem instance (component C1): coordinates, worker count, and the
//! distance matrix shared by every individual in a run.

use crate::coordinate::Coordinate;
use crate::distance_mat::DistanceMat;
use crate::error::SolverError;

/// An immutable mVRP problem instance.
///
/// Index `0` is always the depot by convention; indices `1..n-1` are
/// customers. Construction fails with [`SolverError::InvalidInstance`] if
/// there are fewer than two coordinates, fewer than one worker, or any
/// non-finite coordinate.
#[derive(Debug, Clone)]
pub struct Problem {
    coordinates: Vec<Coordinate>,
    workers: usize,
    distances: DistanceMat,
}

impl Problem {
    /// Builds a problem instance, precomputing the full distance matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use mvrp_solver::coordinate::Coordinate;
    /// use mvrp_solver::problem::Problem;
    ///
    /// let problem = Problem::new(
    ///     vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0)],
    ///     1,
    /// ).unwrap();
    /// assert_eq!(problem.num_customers(), 1);
    /// ```
    pub fn new(coordinates: Vec<Coordinate>, workers: usize) -> Result<Self, SolverError> {
        Self::build(coordinates, workers, true)
    }

    /// Builds a problem instance that computes distances lazily instead of
    /// precomputing the O(n²) matrix.
    pub fn new_lazy(coordinates: Vec<Coordinate>, workers: usize) -> Result<Self, SolverError> {
        Self::build(coordinates, workers, false)
    }

    fn build(
        coordinates: Vec<Coordinate>,
        workers: usize,
        precompute: bool,
    ) -> Result<Self, SolverError> {
        if coordinates.len() < 2 {
            return Err(SolverError::InvalidInstance(format!(
                "need at least 2 coordinates (depot + 1 customer), got {}",
                coordinates.len()
            )));
        }
        if workers < 1 {
            return Err(SolverError::InvalidInstance(format!(
                "need at least 1 worker, got {workers}"
            )));
        }
        if let Some((idx, _)) = coordinates.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            return Err(SolverError::InvalidInstance(format!(
                "coordinate at index {idx} is not finite"
            )));
        }

        let distances = if precompute {
            DistanceMat::precompute(&coordinates)
        } else {
            DistanceMat::lazy(&coordinates)
        };

        Ok(Self {
            coordinates,
            workers,
            distances,
        })
    }

    /// Total number of points, including the depot.
    pub fn num_points(&self) -> usize {
        self.coordinates.len()
    }

    /// Number of customer points (excludes the depot at index 0).
    pub fn num_customers(&self) -> usize {
        self.coordinates.len() - 1
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn depot(&self) -> usize {
        0
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Deterministic, symmetric distance between points `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances.get(i, j)
    }

    pub fn distances(&self) -> &DistanceMat {
        &self.distances
    }

    /// The customer indices `1..=num_customers()`, i.e. every point except
    /// the depot.
    pub fn customer_indices(&self) -> Vec<usize> {
        (1..self.coordinates.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(n: usize) -> Vec<Coordinate> {
        (0..n).map(|i| Coordinate::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn rejects_too_few_coordinates() {
        assert!(matches!(
            Problem::new(coords(1), 1),
            Err(SolverError::InvalidInstance(_))
        ));
    }

    #[test]
    fn rejects_zero_workers() {
        assert!(matches!(
            Problem::new(coords(3), 0),
            Err(SolverError::InvalidInstance(_))
        ));
    }

    #[test]
    fn rejects_non_finite_coordinate() {
        let mut c = coords(3);
        c[1] = Coordinate::new(f64::NAN, 0.0);
        assert!(matches!(
            Problem::new(c, 1),
            Err(SolverError::InvalidInstance(_))
        ));
    }

    #[test]
    fn accepts_minimal_instance() {
        let problem = Problem::new(coords(2), 1).unwrap();
        assert_eq!(problem.num_points(), 2);
        assert_eq!(problem.num_customers(), 1);
        assert_eq!(problem.depot(), 0);
    }

    #[test]
    fn distance_matches_lazy_mode() {
        let precomputed = Problem::new(coords(4), 2).unwrap();
        let lazy = Problem::new_lazy(coords(4), 2).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(precomputed.distance(i, j), lazy.distance(i, j));
            }
        }
    }

    #[test]
    fn customer_indices_excludes_depot() {
        let problem = Problem::new(coords(4), 2).unwrap();
        assert_eq!(problem.customer_indices(), vec![1, 2, 3]);
    }
}
