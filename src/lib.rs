//! Artificial Bee Colony optimizer for cloud task scheduling.
//!
//! Assigns N tasks (each with a workload class) to M workers so as to
//! minimize a combined objective of maximum worker completion time
//! (makespan) and total resource cost, using the Artificial Bee Colony
//! (ABC) swarm metaheuristic:
//!
//! - **Employed bees**: perturb each food source (candidate assignment)
//!   toward a random peer, one dimension at a time, with greedy
//!   acceptance.
//! - **Onlooker bees**: sample high-fitness employed sources via
//!   fitness-proportionate selection and perturb them the same way.
//! - **Scout bee**: abandons the single most-stagnant food source once
//!   its trial counter exceeds the abandonment limit.
//! - **Opposition-based learning (optional)**: injects the reflection of
//!   the current best solution when it improves on it.
//!
//! # Architecture
//!
//! The crate is a pure optimization engine. Producing the task list,
//! rendering progress, and CLI wiring are external concerns — progress is
//! surfaced through structured [`AbcEvent`](abc::AbcEvent) callbacks
//! rather than hard-wired output. Execution is single-threaded and fully
//! sequential; all randomness flows through one seedable generator, so
//! runs are reproducible bit-for-bit given a seed.
//!
//! # Example
//!
//! ```
//! use abc_sched::abc::{AbcConfig, AbcRunner};
//! use abc_sched::model::{Task, WeightClass};
//!
//! let tasks = vec![
//!     Task::new(WeightClass::Light),
//!     Task::new(WeightClass::Medium),
//!     Task::new(WeightClass::Heavy),
//! ];
//! let config = AbcConfig::default().with_seed(42);
//! let result = AbcRunner::run(tasks.len(), 2, &tasks, &config).unwrap();
//! assert_eq!(result.best_assignment.len(), 3);
//! ```
//!
//! # References
//!
//! - Karaboga (2005), *An Idea Based on Honey Bee Swarm for Numerical
//!   Optimization*
//! - Karaboga & Basturk (2007), *A Powerful and Efficient Algorithm for
//!   Numerical Function Optimization: Artificial Bee Colony (ABC)
//!   Algorithm*
//! - Tizhoosh (2005), *Opposition-Based Learning: A New Scheme for
//!   Machine Intelligence*

pub mod abc;
pub mod error;
pub mod model;
pub mod random;

pub use error::{AbcError, Result};
