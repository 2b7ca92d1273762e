//! Swap mutation (§4.5.5).
//!
//! The teacher's `Solution::mutate`/`Route::mutate` pick one position and
//! swap it with a random other position in the whole flat tour, applied
//! with overall probability `prob`. This crate's chromosome is multi-part,
//! so mutation here walks every position of every part independently with
//! probability `mutation_rate`, and a swap partner is drawn only from
//! within the same part — spec.md §4.5.5 is explicit that mutation must
//! never move a customer across parts.

use crate::individual::Individual;
use rand::Rng;

/// Applies swap mutation in place to every part of `individual`, returning
/// it with the same generation tag (mutation does not advance generations;
/// crossover already did).
pub fn mutate<R: Rng + ?Sized>(individual: Individual, mutation_rate: f32, rng: &mut R) -> Individual {
    let generation = individual.generation();
    let mutated_parts: Vec<Vec<usize>> = individual
        .into_parts()
        .into_iter()
        .map(|part| mutate_part(part, mutation_rate, rng))
        .collect();
    Individual::new(mutated_parts, generation)
}

fn mutate_part<R: Rng + ?Sized>(mut part: Vec<usize>, mutation_rate: f32, rng: &mut R) -> Vec<usize> {
    if part.len() < 2 {
        return part;
    }
    for i in 0..part.len() {
        if rng.gen::<f32>() < mutation_rate {
            let j = rng.gen_range(0..part.len());
            part.swap(i, j);
        }
    }
    part
}
