//! ABC optimization loop execution.
//!
//! [`AbcRunner`] orchestrates the complete run: input validation,
//! population initialization and evaluation, the fixed-count iteration
//! loop (employed → onlooker → best-tracking → scout → optional
//! opposition), and result assembly.

use super::config::AbcConfig;
use super::events::{AbcEvent, BeePhase};
use super::fitness::FitnessEvaluator;
use super::phases::{employed_phase, onlooker_phase, opposition_phase, scout_phase};
use super::types::{create_initial_population, FoodSource, SolutionMetrics};
use crate::error::AbcError;
use crate::model::Task;
use crate::random::create_rng;
use tracing::{debug, warn};

/// Result of an ABC optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbcResult {
    /// The best assignment found: worker index per task.
    pub best_assignment: Vec<usize>,

    /// Fitness of the best assignment (higher is better).
    pub best_fitness: f64,

    /// Makespan and total cost of the best assignment.
    pub metrics: Option<SolutionMetrics>,

    /// Number of iterations executed (always the configured count).
    pub iterations: usize,

    /// Best-so-far fitness after each iteration. Non-decreasing.
    pub fitness_history: Vec<f64>,
}

/// Executes the Artificial Bee Colony optimization.
///
/// # Usage
///
/// ```
/// use abc_sched::abc::{AbcConfig, AbcRunner};
/// use abc_sched::model::{Task, WeightClass};
///
/// let tasks = vec![Task::new(WeightClass::Light); 8];
/// let config = AbcConfig::default().with_seed(42);
/// let result = AbcRunner::run(tasks.len(), 3, &tasks, &config).unwrap();
/// assert_eq!(result.best_assignment.len(), 8);
/// ```
pub struct AbcRunner;

impl AbcRunner {
    /// Runs the optimization without an observer.
    pub fn run(
        task_count: usize,
        worker_count: usize,
        tasks: &[Task],
        config: &AbcConfig,
    ) -> Result<AbcResult, AbcError> {
        Self::run_with_observer(task_count, worker_count, tasks, config, |_| {})
    }

    /// Runs the optimization, reporting progress to `observer`.
    ///
    /// # Errors
    ///
    /// - [`AbcError::EmptyTasks`] when `tasks` is empty.
    /// - [`AbcError::InvalidConfig`] when the configuration or
    ///   `worker_count` is invalid.
    ///
    /// A `task_count` that disagrees with `tasks.len()` is not an error:
    /// the list length wins and the correction is surfaced as a warning
    /// and a [`AbcEvent::TaskCountAdjusted`] event.
    pub fn run_with_observer<F>(
        task_count: usize,
        worker_count: usize,
        tasks: &[Task],
        config: &AbcConfig,
        mut observer: F,
    ) -> Result<AbcResult, AbcError>
    where
        F: FnMut(&AbcEvent),
    {
        if tasks.is_empty() {
            return Err(AbcError::EmptyTasks);
        }
        if worker_count == 0 {
            return Err(AbcError::InvalidConfig(
                "worker_count must be positive".into(),
            ));
        }
        config.validate().map_err(AbcError::InvalidConfig)?;

        let task_count = if task_count == tasks.len() {
            task_count
        } else {
            warn!(
                requested = task_count,
                actual = tasks.len(),
                "task count disagrees with task list length; using list length"
            );
            observer(&AbcEvent::TaskCountAdjusted {
                requested: task_count,
                actual: tasks.len(),
            });
            tasks.len()
        };

        let population_size = config.effective_population_size();
        let employed_count = population_size / 2;
        let onlooker_count = population_size / 2;
        let dimensions = task_count;
        let limit = (0.5 * employed_count as f64 * dimensions as f64).round() as usize;
        debug!(
            population_size,
            employed_count, onlooker_count, dimensions, limit, "starting ABC run"
        );

        let evaluator = FitnessEvaluator::new(tasks, worker_count)?;
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut population =
            create_initial_population(population_size, task_count, worker_count, &mut rng);
        for food in &mut population {
            evaluator.evaluate(food);
        }

        let mut best: Option<FoodSource> = None;
        let mut fitness_history = Vec::with_capacity(config.iterations);

        for iteration in 1..=config.iterations {
            observer(&AbcEvent::PhaseStarted {
                iteration,
                phase: BeePhase::Employed,
            });
            employed_phase(
                &mut population,
                employed_count,
                worker_count,
                &evaluator,
                &mut rng,
            );

            observer(&AbcEvent::PhaseStarted {
                iteration,
                phase: BeePhase::Onlooker,
            });
            onlooker_phase(
                &mut population,
                employed_count,
                onlooker_count,
                worker_count,
                &evaluator,
                &mut rng,
            );

            // Best tracking over the whole population; promotion is a deep
            // copy, immune to later in-place mutation of the source slot.
            let mut current_best_idx = 0;
            for (i, food) in population.iter().enumerate().skip(1) {
                if food.fitness.value() > population[current_best_idx].fitness.value() {
                    current_best_idx = i;
                }
            }
            let best_so_far = best
                .as_ref()
                .map_or(f64::NEG_INFINITY, |b| b.fitness.value());
            if population[current_best_idx].fitness.value() > best_so_far {
                let promoted = population[current_best_idx].clone();
                debug!(
                    iteration,
                    fitness = promoted.fitness.value(),
                    "best-so-far improved"
                );
                observer(&AbcEvent::BestImproved {
                    iteration,
                    fitness: promoted.fitness.value(),
                    metrics: promoted.metrics,
                });
                best = Some(promoted);
            }

            observer(&AbcEvent::PhaseStarted {
                iteration,
                phase: BeePhase::Scout,
            });
            if let Some((slot, trials)) = scout_phase(
                &mut population,
                employed_count,
                limit,
                worker_count,
                &evaluator,
                &mut rng,
            ) {
                observer(&AbcEvent::ScoutReplaced {
                    iteration,
                    slot,
                    trials,
                });
            }

            if config.use_opposition {
                observer(&AbcEvent::PhaseStarted {
                    iteration,
                    phase: BeePhase::Opposition,
                });
                if let Some(slot) = opposition_phase(
                    &mut population,
                    worker_count,
                    config.opposition_coefficient,
                    &evaluator,
                    &mut rng,
                ) {
                    observer(&AbcEvent::OppositionAccepted { iteration, slot });
                }
            }

            let best_fitness = best
                .as_ref()
                .map_or(f64::NEG_INFINITY, |b| b.fitness.value());
            fitness_history.push(best_fitness);
            observer(&AbcEvent::IterationCompleted {
                iteration,
                best_fitness,
            });
        }

        let best = best.ok_or(AbcError::NoSolution)?;
        Ok(AbcResult {
            best_fitness: best.fitness.value(),
            metrics: best.metrics,
            best_assignment: best.assignment,
            iterations: config.iterations,
            fitness_history,
        })
    }
}
