//! Genetic operators (component C5): crossover, mutation, selection, and
//! 2-opt local search refinement.

pub mod crossover;
pub mod mutation;
pub mod selection;
pub mod two_opt;

pub use crossover::CrossoverKind;
