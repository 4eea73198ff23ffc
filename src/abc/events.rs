//! Structured progress events.
//!
//! The optimizer reports progress through an optional observer callback
//! instead of writing text anywhere. Observers receive borrowed events
//! and may render, log, or aggregate them as they see fit.

use super::types::SolutionMetrics;

/// The phase a bee-colony iteration is entering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BeePhase {
    /// Employed bees perturb their own food sources.
    Employed,
    /// Onlooker bees sample and perturb high-fitness sources.
    Onlooker,
    /// The scout bee checks for an abandoned source.
    Scout,
    /// Opposition-based enhancement of the current best.
    Opposition,
}

/// A progress event emitted during an optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbcEvent {
    /// The requested task count disagreed with the task list length and
    /// was corrected to the list length.
    TaskCountAdjusted {
        /// Count passed by the caller.
        requested: usize,
        /// Count actually used (the task list length).
        actual: usize,
    },
    /// A phase is starting. Iterations count from 1.
    PhaseStarted {
        /// Current iteration.
        iteration: usize,
        /// Phase being entered.
        phase: BeePhase,
    },
    /// The tracked best-so-far solution improved.
    BestImproved {
        /// Iteration in which the improvement was found.
        iteration: usize,
        /// New best fitness.
        fitness: f64,
        /// Metrics of the new best solution.
        metrics: Option<SolutionMetrics>,
    },
    /// The scout bee replaced an abandoned food source.
    ScoutReplaced {
        /// Current iteration.
        iteration: usize,
        /// Employed slot that was replaced.
        slot: usize,
        /// Trial count the slot had accumulated.
        trials: usize,
    },
    /// The opposition candidate beat the global best and replaced the
    /// globally worst food source.
    OppositionAccepted {
        /// Current iteration.
        iteration: usize,
        /// Population slot that was replaced.
        slot: usize,
    },
    /// An iteration finished all of its phases.
    IterationCompleted {
        /// Iteration that completed.
        iteration: usize,
        /// Best-so-far fitness after the iteration.
        best_fitness: f64,
    },
}
