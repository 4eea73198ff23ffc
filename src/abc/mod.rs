//! Artificial Bee Colony search engine.
//!
//! Implements the three-phase bee-colony loop over a population of food
//! sources (candidate task-to-worker assignments), plus an optional
//! opposition-based diversification step.
//!
//! # Key Types
//!
//! - [`AbcConfig`]: algorithm parameters (population size, iterations,
//!   opposition learning, seed)
//! - [`FoodSource`]: a candidate assignment with fitness and trial count
//! - [`FitnessEvaluator`]: maps a food source to a scalar fitness from
//!   makespan and total resource cost
//! - [`AbcRunner`]: executes the optimization loop
//! - [`AbcResult`]: final result with statistics
//! - [`AbcEvent`]: structured progress events for observers
//!
//! # Phase Order
//!
//! Each iteration runs Employed → Onlooker → best-tracking → Scout →
//! (optional) Opposition, strictly sequentially. The employed phase
//! mutates population slots in place as it goes, so later bees within the
//! same phase observe earlier bees' writes; this order-dependent behavior
//! is a deliberate contract of the algorithm, not an accident.
//!
//! # References
//!
//! - Karaboga & Basturk (2007), *A Powerful and Efficient Algorithm for
//!   Numerical Function Optimization*
//! - Tizhoosh (2005), *Opposition-Based Learning*

mod config;
mod events;
mod fitness;
mod phases;
mod runner;
mod selection;
mod types;

pub use config::AbcConfig;
pub use events::{AbcEvent, BeePhase};
pub use fitness::FitnessEvaluator;
pub use runner::{AbcResult, AbcRunner};
pub use selection::{calculate_probabilities, select_food_source};
pub use types::{create_initial_population, Fitness, FoodSource, SolutionMetrics};
