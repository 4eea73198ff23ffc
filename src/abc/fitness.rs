//! Fitness evaluation from makespan and total resource cost.

use super::types::{Fitness, FoodSource, SolutionMetrics};
use crate::error::AbcError;
use crate::model::{Task, BANDWIDTH_USAGE, COST_PER_BW, COST_PER_MIPS, COST_PER_RAM, RAM_USAGE};

/// Maps a food source to a scalar fitness.
///
/// For each task `i` assigned to worker `w`, the task's execution time
/// accumulates into `w`'s load and its resource cost into `w`'s cost
/// total. The combined fitness is
///
/// ```text
/// fitness = 1/(makespan + 1) + 1/(total_cost + 0.1)
/// ```
///
/// so lower makespan and lower cost both raise fitness. The additive
/// epsilons keep both terms finite. As a side effect, evaluation writes
/// the makespan and total cost onto the food source as
/// [`SolutionMetrics`]; it touches no other state.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator<'a> {
    tasks: &'a [Task],
    worker_count: usize,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator over the given task list.
    ///
    /// # Errors
    /// Returns [`AbcError::TasksRequiredForFitness`] if `tasks` is empty.
    pub fn new(tasks: &'a [Task], worker_count: usize) -> Result<Self, AbcError> {
        if tasks.is_empty() {
            return Err(AbcError::TasksRequiredForFitness);
        }
        Ok(Self {
            tasks,
            worker_count,
        })
    }

    /// The task list this evaluator scores against.
    pub fn tasks(&self) -> &[Task] {
        self.tasks
    }

    /// Evaluates a food source, writing its fitness and metrics.
    ///
    /// Returns the fitness scalar for convenience.
    pub fn evaluate(&self, food: &mut FoodSource) -> f64 {
        let mut loads = vec![0.0_f64; self.worker_count];
        let mut costs = vec![0.0_f64; self.worker_count];

        for (task, &worker) in self.tasks.iter().zip(food.assignment.iter()) {
            let exec_time = task.weight_class.exec_time();
            let cost = exec_time * COST_PER_MIPS
                + RAM_USAGE * COST_PER_RAM
                + BANDWIDTH_USAGE * COST_PER_BW;
            loads[worker] += exec_time;
            costs[worker] += cost;
        }

        // Degenerate guard: an empty load set means an infinite makespan
        // (extremely low but defined fitness), never a panic.
        let makespan = if loads.iter().all(|&l| l == 0.0) {
            f64::INFINITY
        } else {
            loads.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
        };
        let total_cost: f64 = costs.iter().sum();

        let fitness = 1.0 / (makespan + 1.0) + 1.0 / (total_cost + 0.1);

        food.fitness = Fitness::Scored(fitness);
        food.metrics = Some(SolutionMetrics {
            makespan,
            total_cost,
        });
        fitness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abc::types::FoodSource;
    use crate::model::WeightClass;

    fn tasks(classes: &[WeightClass]) -> Vec<Task> {
        classes.iter().map(|&c| Task::new(c)).collect()
    }

    #[test]
    fn test_empty_tasks_rejected() {
        let empty: Vec<Task> = vec![];
        assert!(matches!(
            FitnessEvaluator::new(&empty, 2),
            Err(AbcError::TasksRequiredForFitness)
        ));
    }

    #[test]
    fn test_single_light_task() {
        // One light task alone on a worker: exec = 10000/400 = 25,
        // cost = 25*0.5 + 512*0.05 + 1000*0.1 = 138.1.
        let tasks = tasks(&[WeightClass::Light]);
        let evaluator = FitnessEvaluator::new(&tasks, 1).unwrap();
        let mut food = FoodSource::from_assignment(vec![0]);
        evaluator.evaluate(&mut food);

        let metrics = food.metrics.unwrap();
        assert!((metrics.makespan - 25.0).abs() < 1e-9);
        assert!((metrics.total_cost - 138.1).abs() < 1e-9);
    }

    #[test]
    fn test_two_worker_example() {
        // [light, medium] on worker 0, [heavy] on worker 1:
        // worker 0 load = 25 + 20 = 45, cost = 138.1 + 135.6 = 273.7;
        // worker 1 load = 10000/600, cost = (10000/600)*0.5 + 125.6;
        // makespan = 45, fitness = 1/46 + 1/(total + 0.1).
        let tasks = tasks(&[WeightClass::Light, WeightClass::Medium, WeightClass::Heavy]);
        let evaluator = FitnessEvaluator::new(&tasks, 2).unwrap();
        let mut food = FoodSource::from_assignment(vec![0, 0, 1]);
        let fitness = evaluator.evaluate(&mut food);

        let metrics = food.metrics.unwrap();
        assert!((metrics.makespan - 45.0).abs() < 1e-9);
        assert!((metrics.total_cost - 407.633333).abs() < 1e-4);
        assert!((fitness - 0.024192).abs() < 1e-4);
        assert_eq!(food.fitness, Fitness::Scored(fitness));
    }

    #[test]
    fn test_fitness_prefers_balanced_load() {
        let tasks = tasks(&[WeightClass::Medium, WeightClass::Medium]);
        let evaluator = FitnessEvaluator::new(&tasks, 2).unwrap();

        let mut stacked = FoodSource::from_assignment(vec![0, 0]);
        let mut spread = FoodSource::from_assignment(vec![0, 1]);
        let stacked_fitness = evaluator.evaluate(&mut stacked);
        let spread_fitness = evaluator.evaluate(&mut spread);

        // Cost is assignment-independent here, so the balanced makespan
        // must win.
        assert!(spread_fitness > stacked_fitness);
    }

    #[test]
    fn test_empty_assignment_is_degenerate_not_fatal() {
        let tasks = tasks(&[WeightClass::Light]);
        let evaluator = FitnessEvaluator::new(&tasks, 2).unwrap();
        let mut food = FoodSource::from_assignment(vec![]);
        let fitness = evaluator.evaluate(&mut food);

        let metrics = food.metrics.unwrap();
        assert!(metrics.makespan.is_infinite());
        // 1/(inf + 1) = 0, so fitness collapses to the cost term.
        assert!((fitness - 1.0 / 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let tasks = tasks(&[WeightClass::Heavy, WeightClass::Light]);
        let evaluator = FitnessEvaluator::new(&tasks, 3).unwrap();
        let mut food = FoodSource::from_assignment(vec![2, 0]);
        let first = evaluator.evaluate(&mut food);
        let second = evaluator.evaluate(&mut food);
        assert_eq!(first, second);
    }
}
