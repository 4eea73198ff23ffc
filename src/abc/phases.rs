//! The bee-colony phases: employed, onlooker, scout, opposition.
//!
//! Each phase is an explicit sequential fold over the owned population
//! buffer. The employed and onlooker phases mutate slots in place as they
//! go, so later bees within the same phase observe earlier bees' writes —
//! that ordering is part of the algorithm's contract.

use super::fitness::FitnessEvaluator;
use super::selection::{calculate_probabilities, select_food_source};
use super::types::FoodSource;
use rand::Rng;
use tracing::debug;

/// Picks a random employed index distinct from `exclude`.
fn pick_partner<R: Rng>(employed_count: usize, exclude: usize, rng: &mut R) -> usize {
    loop {
        let k = rng.random_range(0..employed_count);
        if k != exclude {
            return k;
        }
    }
}

/// Builds a neighbor of the food source at `source_idx` by perturbing one
/// random dimension toward a random employed partner:
///
/// ```text
/// v_d = x_d + phi * (x_d - partner_d),   phi in {-1, 0, 1}
/// ```
///
/// clamped to `[0, worker_count - 1]`. All other genes are copied.
fn generate_candidate<R: Rng>(
    population: &[FoodSource],
    source_idx: usize,
    employed_count: usize,
    worker_count: usize,
    rng: &mut R,
) -> FoodSource {
    let source = &population[source_idx];
    let dimension = rng.random_range(0..source.assignment.len());
    let partner_idx = pick_partner(employed_count, source_idx, rng);
    let partner = &population[partner_idx];

    let phi = rng.random_range(-1..=1_i64);
    let x = source.assignment[dimension] as i64;
    let p = partner.assignment[dimension] as i64;
    let v = (x + phi * (x - p)).clamp(0, worker_count as i64 - 1) as usize;

    let mut candidate = FoodSource::from_assignment(source.assignment.clone());
    candidate.assignment[dimension] = v;
    candidate
}

/// Employed-bee phase.
///
/// Each employed slot produces a one-dimension neighbor and keeps it only
/// on strict fitness improvement (greedy acceptance). Acceptance resets
/// the slot's trial counter; rejection increments it.
pub fn employed_phase<R: Rng>(
    population: &mut [FoodSource],
    employed_count: usize,
    worker_count: usize,
    evaluator: &FitnessEvaluator<'_>,
    rng: &mut R,
) {
    for i in 0..employed_count {
        let mut candidate = generate_candidate(population, i, employed_count, worker_count, rng);
        let candidate_fitness = evaluator.evaluate(&mut candidate);

        if candidate_fitness > population[i].fitness.value() {
            population[i] = candidate;
        } else {
            population[i].trials += 1;
        }
    }
}

/// Onlooker-bee phase.
///
/// The selection distribution is computed once at phase start. Each
/// onlooker samples an employed source, perturbs it, and stores the
/// candidate unconditionally into its own slot — onlooker slots always
/// hold the newest candidate, win or lose. Independently, the candidate
/// is greedy-compared against the selected employed slot: on a strict win
/// a deep copy replaces that slot and its trials reset, otherwise the
/// slot's trials increment.
pub fn onlooker_phase<R: Rng>(
    population: &mut [FoodSource],
    employed_count: usize,
    onlooker_count: usize,
    worker_count: usize,
    evaluator: &FitnessEvaluator<'_>,
    rng: &mut R,
) {
    let probabilities = calculate_probabilities(population, employed_count);

    for i in 0..onlooker_count {
        let selected = select_food_source(&probabilities, employed_count, rng);
        let mut candidate =
            generate_candidate(population, selected, employed_count, worker_count, rng);
        let candidate_fitness = evaluator.evaluate(&mut candidate);
        let improved = candidate_fitness > population[selected].fitness.value();

        population[employed_count + i] = candidate.clone();

        if improved {
            population[selected] = candidate;
        } else {
            population[selected].trials += 1;
        }
    }
}

/// Scout-bee phase.
///
/// Scans the employed half for the single most-stagnant slot (first
/// occurrence on ties) and, only when its trials exceed `limit`, replaces
/// it with a fresh random, immediately evaluated food source. At most one
/// replacement per iteration; onlooker slots are never scouted.
///
/// Returns the replaced slot and its trial count, if any.
pub fn scout_phase<R: Rng>(
    population: &mut [FoodSource],
    employed_count: usize,
    limit: usize,
    worker_count: usize,
    evaluator: &FitnessEvaluator<'_>,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let mut max_idx = 0;
    let mut max_trials = population[0].trials;
    for (i, food) in population[..employed_count].iter().enumerate().skip(1) {
        if food.trials > max_trials {
            max_trials = food.trials;
            max_idx = i;
        }
    }

    if max_trials <= limit {
        return None;
    }

    let task_count = evaluator.tasks().len();
    let mut scout = FoodSource::random(task_count, worker_count, rng);
    evaluator.evaluate(&mut scout);
    debug!(
        slot = max_idx,
        trials = max_trials,
        limit,
        fitness = scout.fitness.value(),
        "scout replaced abandoned food source"
    );
    population[max_idx] = scout;
    Some((max_idx, max_trials))
}

/// Opposition-based enhancement.
///
/// Reflects the globally best food source across the search-space
/// midpoint scaled by `coefficient`: per dimension,
/// `floor((worker_count - 1) * coefficient) - gene`, falling back to a
/// fresh uniform gene when the reflection leaves `[0, worker_count - 1]`.
/// The reflected solution replaces the globally worst slot (any slot,
/// onlookers included) only when its fitness strictly exceeds the current
/// global best's.
///
/// Returns the replaced slot, if any.
pub fn opposition_phase<R: Rng>(
    population: &mut [FoodSource],
    worker_count: usize,
    coefficient: f64,
    evaluator: &FitnessEvaluator<'_>,
    rng: &mut R,
) -> Option<usize> {
    let mut best_idx = 0;
    for (i, food) in population.iter().enumerate().skip(1) {
        if food.fitness.value() > population[best_idx].fitness.value() {
            best_idx = i;
        }
    }
    let best_fitness = population[best_idx].fitness.value();

    let reflected_base = ((worker_count - 1) as f64 * coefficient).floor() as i64;
    let upper = worker_count as i64 - 1;
    let opposite_assignment: Vec<usize> = population[best_idx]
        .assignment
        .iter()
        .map(|&gene| {
            let reflected = reflected_base - gene as i64;
            if (0..=upper).contains(&reflected) {
                reflected as usize
            } else {
                rng.random_range(0..worker_count)
            }
        })
        .collect();

    let mut opposite = FoodSource::from_assignment(opposite_assignment);
    let opposite_fitness = evaluator.evaluate(&mut opposite);

    if opposite_fitness <= best_fitness {
        return None;
    }

    let mut worst_idx = 0;
    for (i, food) in population.iter().enumerate().skip(1) {
        if food.fitness.value() < population[worst_idx].fitness.value() {
            worst_idx = i;
        }
    }
    debug!(
        slot = worst_idx,
        fitness = opposite_fitness,
        previous_best = best_fitness,
        "opposition candidate replaced worst food source"
    );
    population[worst_idx] = opposite;
    Some(worst_idx)
}
