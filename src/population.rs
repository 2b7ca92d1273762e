//! The population (component C2): an ordered collection of [`Individual`]s
//! with sort/prune/sample operations.
//!
//! Generalizes the teacher's `Population`/`Routes` (which kept a flat
//! `Vec<Solution>`/`HashSet<Solution>` scored against an external
//! `DistanceMat` on every read) into a collection over pre-evaluated
//! [`Individual`]s, since fitness now lives on the individual itself.

use crate::individual::Individual;
use ordered_float::OrderedFloat;
use rand::Rng;

/// An ordered collection of individuals.
///
/// Equality is not derived: two individuals with identical chromosomes are
/// still distinct population members, so [`Population::random_distinct_pair`]
/// compares *indices*, never individual contents.
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Returns a new population that is the ordered union of `self` and
    /// `other` (`self`'s members first).
    pub fn concat(mut self, other: Population) -> Population {
        self.individuals.extend(other.individuals);
        self
    }

    /// Uniform-random sample over current members. No replacement bookkeeping:
    /// callers that need two distinct parents retry on a repeated draw (see
    /// [`Population::random_distinct_pair`]).
    pub fn random_pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Individual {
        let idx = rng.gen_range(0..self.individuals.len());
        &self.individuals[idx]
    }

    /// Draws two distinct population indices uniformly, retrying while they
    /// coincide, and returns the corresponding individuals. Requires at
    /// least two members.
    pub fn random_distinct_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> (&Individual, &Individual) {
        assert!(
            self.individuals.len() >= 2,
            "need at least 2 individuals to draw a distinct pair"
        );
        let i = rng.gen_range(0..self.individuals.len());
        let j = loop {
            let candidate = rng.gen_range(0..self.individuals.len());
            if candidate != i {
                break candidate;
            }
        };
        (&self.individuals[i], &self.individuals[j])
    }

    /// Stable sort by fitness, ascending (unevaluated individuals, treated
    /// as `+∞`, sort last).
    pub fn sort_ascending(&mut self) {
        self.individuals
            .sort_by_key(|individual| OrderedFloat(individual.fitness_or_infinity()));
    }

    /// Sorts ascending by fitness, then retains only the first `m`.
    pub fn prune(mut self, m: usize) -> Population {
        self.sort_ascending();
        self.individuals.truncate(m);
        self
    }

    /// The `k` best individuals (ascending sort, best first), without
    /// mutating `self`.
    pub fn top_k(&self, k: usize) -> Vec<Individual> {
        let mut sorted = self.individuals.clone();
        sorted.sort_by_key(|individual| OrderedFloat(individual.fitness_or_infinity()));
        sorted.truncate(k);
        sorted
    }

    /// The single best individual, if any.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .min_by_key(|individual| OrderedFloat(individual.fitness_or_infinity()))
    }
}
