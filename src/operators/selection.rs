//! Elitist (μ+λ) truncation selection (§4.5.6).
//!
//! Grounded on the teacher's `Population::get_fittest_population`/
//! `Routes::get_fittest_population` (sort by fitness, keep the top n) —
//! here applied to the concatenation of parents and children with μ=λ=P,
//! and no duplicate filtering, exactly as spec.md §4.5.6 specifies.

use crate::population::Population;

/// Combines `parents` and `children` (size `2P`) and keeps only the `p`
/// fittest, breaking no ties specially (stable sort; duplicates allowed).
pub fn select(parents: Population, children: Population, p: usize) -> Population {
    parents.concat(children).prune(p)
}
