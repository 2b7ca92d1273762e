//! The solver driver (component C6): runs generations and returns the best
//! individuals found.
//!
//! Grounded on the teacher's `evolve_population`/`benchmark_population`
//! (fold over generations, each step evolving then truncating to
//! `size_generation`), generalized to the full state machine spec.md §4.6
//! describes: seed → (breed → mutate → evaluate → select)×G → refine →
//! done, with cancellation checked at generation head and the
//! `OperatorDegenerate` counter threaded through from crossover.

use crate::cancellation::CancellationToken;
use crate::config::{FitnessKind, GaConfig, InitializerKind};
use crate::error::SolverError;
use crate::fitness::{FitnessEvaluator, MinimizeTotalDistance};
use crate::individual::Individual;
use crate::initializer::{KMeansInitializer, PopulationInitializer, RandomSplitInitializer};
use crate::operators::crossover::crossover;
use crate::operators::mutation::mutate;
use crate::operators::selection::select;
use crate::operators::two_opt::two_opt_refine;
use crate::population::Population;
use crate::problem::Problem;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The outcome of a run: the final population, its best individual, how
/// many generations actually ran, whether it was cancelled, and how many
/// times AEX degenerated and fell back to OX.
///
/// `Cancelled` is not a [`SolverError`] — spec.md §7 treats it as a
/// successful outcome carrying the best-so-far individual, so it is a
/// field here rather than a `Result::Err`.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub population: Population,
    pub best: Option<Individual>,
    pub generations_completed: usize,
    pub cancelled: bool,
    pub operator_degenerate_count: usize,
}

impl RunOutcome {
    pub fn top_k(&self, k: usize) -> Vec<Individual> {
        self.population.top_k(k)
    }
}

/// Runs the configured genetic algorithm over a [`Problem`]. Validated at
/// construction (spec.md §7: `InvalidConfiguration` is the only
/// construction-time failure mode); never fails once built.
pub struct SolverDriver {
    config: GaConfig,
}

impl SolverDriver {
    pub fn new(config: GaConfig) -> Result<Self, SolverError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Executes one full run: `Created -> Seeded -> (Breed -> Mutate ->
    /// Evaluate -> Select)xG -> Refined -> Done`, or `-> Done` early with
    /// `cancelled = true` if `cancellation` fires between generations.
    pub fn run(&self, problem: &Problem, cancellation: Option<&CancellationToken>) -> RunOutcome {
        let mut rng = match self.config.random_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let population_size = self.config.resolved_population_size(problem.num_points());
        let workers = problem.workers();
        let evaluator = self.build_evaluator();

        log::debug!("seeding population of size {population_size}");
        let mut population = self.seed(problem, population_size, evaluator.as_ref(), &mut rng);

        let mut operator_degenerate_count = 0usize;
        let mut generations_completed = 0usize;
        let mut cancelled = false;

        for generation in 0..self.config.num_generations() {
            if cancellation.map_or(false, |token| token.is_cancelled()) {
                log::debug!("cancelled at generation {generation}");
                cancelled = true;
                break;
            }

            let mut children = Vec::with_capacity(population.len());
            for _ in 0..population.len() {
                let (parent1, parent2) = population.random_distinct_pair(&mut rng);
                let (child, degenerated) =
                    crossover(self.config.crossover(), parent1, parent2, workers, &mut rng);
                if degenerated {
                    operator_degenerate_count += 1;
                }
                let child = mutate(child, self.config.mutation_rate(), &mut rng);
                let child = evaluator.evaluate(child, problem);
                children.push(child);
            }

            population = select(population, Population::new(children), population_size);

            if let Some(best) = population.best() {
                log::debug!(
                    "generation {generation}: best fitness {:.4}",
                    best.fitness_or_infinity()
                );
            }
            generations_completed += 1;
        }

        if cancelled {
            population.sort_ascending();
            let best = population.best().cloned();
            return RunOutcome {
                population,
                best,
                generations_completed,
                cancelled,
                operator_degenerate_count,
            };
        }

        population.sort_ascending();
        let mut individuals = population.into_individuals();
        if let Some(best) = individuals.first().cloned() {
            let refined = two_opt_refine(best, problem.depot(), problem.distances());
            individuals[0] = evaluator.evaluate(refined, problem);
        }
        let mut population = Population::new(individuals);
        population.sort_ascending();
        let best = population.best().cloned();

        RunOutcome {
            population,
            best,
            generations_completed,
            cancelled: false,
            operator_degenerate_count,
        }
    }

    fn build_evaluator(&self) -> Box<dyn FitnessEvaluator> {
        match self.config.fitness() {
            FitnessKind::MinimizeTotalDistance => Box::new(MinimizeTotalDistance),
        }
    }

    fn seed(
        &self,
        problem: &Problem,
        population_size: usize,
        evaluator: &dyn FitnessEvaluator,
        rng: &mut StdRng,
    ) -> Population {
        match self.config.initializer() {
            InitializerKind::RandomSplit => {
                RandomSplitInitializer.generate(problem, population_size, evaluator, rng)
            }
            InitializerKind::KMeansRandomised => {
                KMeansInitializer::default().generate(problem, population_size, evaluator, rng)
            }
        }
    }
}
