//! Solution representation: food sources and their fitness state.

use rand::Rng;

/// Fitness of a food source. Higher is better.
///
/// An explicit tagged state instead of a raw sentinel, so an unevaluated
/// solution can never be mistaken for a scored one. [`value`](Self::value)
/// yields negative infinity for `Unevaluated`, which keeps every greedy
/// comparison well-defined: any scored candidate beats an unevaluated
/// slot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fitness {
    /// Not yet evaluated.
    Unevaluated,
    /// Evaluated to the given scalar.
    Scored(f64),
}

impl Fitness {
    /// The comparable scalar value.
    pub fn value(self) -> f64 {
        match self {
            Fitness::Unevaluated => f64::NEG_INFINITY,
            Fitness::Scored(v) => v,
        }
    }

    /// Whether this fitness has been computed.
    pub fn is_evaluated(self) -> bool {
        matches!(self, Fitness::Scored(_))
    }
}

/// Auxiliary metrics cached by the fitness evaluator for reporting.
///
/// Written solely by [`FitnessEvaluator`](super::FitnessEvaluator); never
/// used in comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionMetrics {
    /// Maximum accumulated execution time across workers.
    pub makespan: f64,
    /// Sum of per-worker resource costs.
    pub total_cost: f64,
}

/// A food source: one candidate task-to-worker assignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoodSource {
    /// Worker index per task; length equals the task count, every gene in
    /// `[0, worker_count)`.
    pub assignment: Vec<usize>,
    /// Current fitness state.
    pub fitness: Fitness,
    /// Consecutive non-improving perturbations; reset to 0 on any
    /// accepted improvement.
    pub trials: usize,
    /// Metrics from the most recent evaluation.
    pub metrics: Option<SolutionMetrics>,
}

impl FoodSource {
    /// Creates a food source with a uniformly random assignment.
    pub fn random<R: Rng>(task_count: usize, worker_count: usize, rng: &mut R) -> Self {
        let assignment = (0..task_count)
            .map(|_| rng.random_range(0..worker_count))
            .collect();
        Self {
            assignment,
            fitness: Fitness::Unevaluated,
            trials: 0,
            metrics: None,
        }
    }

    /// Creates a food source from an existing assignment, unevaluated.
    pub fn from_assignment(assignment: Vec<usize>) -> Self {
        Self {
            assignment,
            fitness: Fitness::Unevaluated,
            trials: 0,
            metrics: None,
        }
    }
}

/// Creates `size` independent random food sources.
pub fn create_initial_population<R: Rng>(
    size: usize,
    task_count: usize,
    worker_count: usize,
    rng: &mut R,
) -> Vec<FoodSource> {
    (0..size)
        .map(|_| FoodSource::random(task_count, worker_count, rng))
        .collect()
}
