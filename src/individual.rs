//! The chromosome (component C2): a multi-part permutation plus its
//! evaluation state.
//!
//! Generalizes the teacher's single-tour `Solution`/`Route` (a flat
//! `Vec<usize>`) into the K-part representation an mVRP individual needs.
//! Parent distinctness for crossover (spec: "reject parent-pairs with
//! referential equality") is decided by the population on population
//! *indices*, not by comparing `Individual` values, so this type does not
//! need identity semantics of its own.

/// One candidate assignment: `parts[w]` is the ordered list of customer
/// indices worker `w` visits. The depot index never appears inside a part.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    parts: Vec<Vec<usize>>,
    fitness: Option<f64>,
    generation: usize,
}

impl Individual {
    /// Builds an unevaluated individual tagged with `generation`.
    pub fn new(parts: Vec<Vec<usize>>, generation: usize) -> Self {
        Self {
            parts,
            fitness: None,
            generation,
        }
    }

    pub fn parts(&self) -> &[Vec<usize>] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Vec<usize>> {
        self.parts
    }

    pub fn num_parts(&self) -> usize {
        self.parts.len()
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// `None` until a fitness evaluator has scored this individual.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Attaches a computed fitness. Used exclusively by evaluators in
    /// `crate::fitness`.
    pub fn with_fitness(mut self, fitness: f64) -> Self {
        self.fitness = Some(fitness);
        self
    }

    /// Fitness for ordering purposes; unevaluated individuals sort last by
    /// treating their fitness as `+∞`. The driver must evaluate before
    /// sorting (spec invariant), so this is a defensive fallback, not a
    /// sanctioned code path.
    pub fn fitness_or_infinity(&self) -> f64 {
        self.fitness.unwrap_or(f64::INFINITY)
    }

    /// Flattens the chromosome's parts, in part order, into a single
    /// sequence of length N-1. Used by crossover operators that work on a
    /// linear permutation before repartitioning.
    pub fn flatten(&self) -> Vec<usize> {
        self.parts.iter().flatten().copied().collect()
    }

    /// The multiset-union of all parts, for checking the permutation
    /// invariant against `1..N`.
    pub fn customers(&self) -> Vec<usize> {
        self.flatten()
    }
}
