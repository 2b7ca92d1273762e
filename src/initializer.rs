//! Population initialisers (component C4): seed strategies for generation 0.
//!
//! The teacher's `Population::random`/`Routes::random` shuffle a flat
//! `0..n_objects` range into a single tour; generalized here into two
//! strategies that partition `1..N` (customers only, depot excluded) into
//! K parts: uniform-random split, and K-means clustering with the
//! stride-style redistribution documented in `SPEC_FULL.md` §2.

use crate::fitness::FitnessEvaluator;
use crate::individual::Individual;
use crate::kmeans::{kmeans, stride_redistribute, KMeansSettings};
use crate::population::Population;
use crate::problem::Problem;
use crate::utils::partition_into_k;
use rand::seq::SliceRandom;
use rand::Rng;

/// Polymorphic over the capability `generate() -> Population of size P`.
/// All initialisers tag individuals with generation 0 and invoke the
/// fitness evaluator before returning.
pub trait PopulationInitializer {
    fn generate<R: Rng + ?Sized>(
        &self,
        problem: &Problem,
        population_size: usize,
        evaluator: &dyn FitnessEvaluator,
        rng: &mut R,
    ) -> Population;
}

/// Shuffles the customer list uniformly, then cuts it into K contiguous
/// parts at K-1 split points.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSplitInitializer;

impl PopulationInitializer for RandomSplitInitializer {
    fn generate<R: Rng + ?Sized>(
        &self,
        problem: &Problem,
        population_size: usize,
        evaluator: &dyn FitnessEvaluator,
        rng: &mut R,
    ) -> Population {
        let customers = problem.customer_indices();
        let k = problem.workers();
        let mut individuals = Vec::with_capacity(population_size);
        for _ in 0..population_size {
            let mut shuffled = customers.clone();
            shuffled.shuffle(rng);
            let parts = partition_into_k(shuffled, k, 1, rng);
            let individual = evaluator.evaluate(Individual::new(parts, 0), problem);
            individuals.push(individual);
        }
        Population::new(individuals)
    }
}

/// Clusters non-depot points into K groups with K-means, then builds each
/// individual by shuffling every cluster independently and dealing its
/// members round-robin across the K parts (`cluster[j::K]`), so cluster
/// membership does not rigidly determine which worker a point ends up
/// with.
#[derive(Debug, Clone, Copy)]
pub struct KMeansInitializer {
    pub settings: KMeansSettings,
}

impl Default for KMeansInitializer {
    fn default() -> Self {
        Self {
            settings: KMeansSettings::default(),
        }
    }
}

impl PopulationInitializer for KMeansInitializer {
    fn generate<R: Rng + ?Sized>(
        &self,
        problem: &Problem,
        population_size: usize,
        evaluator: &dyn FitnessEvaluator,
        rng: &mut R,
    ) -> Population {
        let customers = problem.customer_indices();
        let k = problem.workers();
        let customer_coords: Vec<_> = customers
            .iter()
            .map(|&idx| problem.coordinates()[idx])
            .collect();
        let labels = kmeans(&customer_coords, k, self.settings, rng);

        let mut clusters: Vec<Vec<usize>> = vec![Vec::new(); k.min(customers.len().max(1))];
        for (pos, &label) in labels.iter().enumerate() {
            clusters[label].push(customers[pos]);
        }

        let mut individuals = Vec::with_capacity(population_size);
        for _ in 0..population_size {
            let mut parts = vec![Vec::new(); k];
            for cluster in &clusters {
                let mut shuffled = cluster.clone();
                shuffled.shuffle(rng);
                for (part_idx, members) in stride_redistribute(&shuffled, k).into_iter().enumerate() {
                    parts[part_idx].extend(members);
                }
            }
            let individual = evaluator.evaluate(Individual::new(parts, 0), problem);
            individuals.push(individual);
        }
        Population::new(individuals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::fitness::MinimizeTotalDistance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square_problem(workers: usize) -> Problem {
        Problem::new(
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 0.0),
                Coordinate::new(2.0, 0.0),
                Coordinate::new(3.0, 0.0),
                Coordinate::new(4.0, 0.0),
            ],
            workers,
        )
        .unwrap()
    }

    #[test]
    fn random_split_preserves_permutation() {
        let problem = square_problem(3);
        let mut rng = StdRng::seed_from_u64(1);
        let population =
            RandomSplitInitializer.generate(&problem, 5, &MinimizeTotalDistance, &mut rng);
        for individual in population.iter() {
            assert_eq!(individual.num_parts(), 3);
            let mut customers = individual.customers();
            customers.sort_unstable();
            assert_eq!(customers, vec![1, 2, 3, 4]);
            assert!(individual.fitness().is_some());
        }
    }

    #[test]
    fn random_split_tags_generation_zero() {
        let problem = square_problem(2);
        let mut rng = StdRng::seed_from_u64(2);
        let population =
            RandomSplitInitializer.generate(&problem, 3, &MinimizeTotalDistance, &mut rng);
        for individual in population.iter() {
            assert_eq!(individual.generation(), 0);
        }
    }

    #[test]
    fn kmeans_initializer_preserves_permutation() {
        let problem = square_problem(2);
        let mut rng = StdRng::seed_from_u64(3);
        let initializer = KMeansInitializer::default();
        let population = initializer.generate(&problem, 4, &MinimizeTotalDistance, &mut rng);
        for individual in population.iter() {
            assert_eq!(individual.num_parts(), 2);
            let mut customers = individual.customers();
            customers.sort_unstable();
            assert_eq!(customers, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn more_workers_than_customers_allows_empty_parts() {
        let problem = square_problem(10);
        let mut rng = StdRng::seed_from_u64(4);
        let population =
            RandomSplitInitializer.generate(&problem, 3, &MinimizeTotalDistance, &mut rng);
        for individual in population.iter() {
            assert_eq!(individual.num_parts(), 10);
            let mut customers = individual.customers();
            customers.sort_unstable();
            assert_eq!(customers, vec![1, 2, 3, 4]);
        }
    }
}
