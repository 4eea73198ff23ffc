//! Crate error types.
//!
//! All failures are local validation failures raised synchronously before
//! any population work begins; nothing in the optimization loop itself is
//! fallible.

use thiserror::Error;

/// Errors produced by the ABC optimizer.
#[derive(Error, Debug)]
pub enum AbcError {
    /// The task list was empty. Every run needs at least one task.
    #[error("tasks cannot be empty")]
    EmptyTasks,

    /// The fitness evaluator was constructed without a usable task list.
    #[error("tasks required for fitness evaluation")]
    TasksRequiredForFitness,

    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No solution was ever evaluated during the run.
    ///
    /// Defensive: cannot occur when the population is initialized and
    /// evaluated before the first iteration.
    #[error("no evaluated solution available")]
    NoSolution,
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, AbcError>;
