//! Fitness-proportionate selection for the onlooker phase.
//!
//! Onlooker bees choose which employed food source to exploit with
//! probability proportional to its (clamped) fitness — roulette-wheel
//! selection over the employed half of the population.

use super::types::FoodSource;
use rand::Rng;

/// Computes the selection distribution over the employed half.
///
/// Each employed fitness is clamped to `>= 0`; when the clamped sum is
/// positive, probabilities are the normalized clamped values. When the
/// sum is zero (all employed fitness non-positive), every employed slot
/// gets the uniform probability `1/employed_count`. Non-employed slots
/// always get probability 0.
///
/// The returned vector has one entry per population slot.
pub fn calculate_probabilities(population: &[FoodSource], employed_count: usize) -> Vec<f64> {
    let fitness_sum: f64 = population[..employed_count]
        .iter()
        .map(|f| f.fitness.value().max(0.0))
        .sum();

    let mut probabilities = vec![0.0; population.len()];
    if fitness_sum > 0.0 {
        for (p, food) in probabilities[..employed_count]
            .iter_mut()
            .zip(&population[..employed_count])
        {
            *p = food.fitness.value().max(0.0) / fitness_sum;
        }
    } else {
        let uniform = 1.0 / employed_count as f64;
        for p in &mut probabilities[..employed_count] {
            *p = uniform;
        }
    }
    probabilities
}

/// Draws an employed index from the selection distribution.
///
/// Walks the employed prefix accumulating probability mass and returns
/// the first index whose cumulative mass reaches a uniform draw in
/// `[0, 1)`. When rounding leaves the walk short, falls back to a
/// uniformly random employed index.
pub fn select_food_source<R: Rng>(
    probabilities: &[f64],
    employed_count: usize,
    rng: &mut R,
) -> usize {
    let r: f64 = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (i, &p) in probabilities[..employed_count].iter().enumerate() {
        cumulative += p;
        if r <= cumulative {
            return i;
        }
    }
    rng.random_range(0..employed_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abc::types::{Fitness, FoodSource};
    use crate::random::create_rng;

    fn population(fitnesses: &[f64]) -> Vec<FoodSource> {
        fitnesses
            .iter()
            .map(|&v| {
                let mut food = FoodSource::from_assignment(vec![0]);
                food.fitness = Fitness::Scored(v);
                food
            })
            .collect()
    }

    #[test]
    fn test_probabilities_normalized() {
        let pop = population(&[0.3, 0.1, 0.6, 0.9]);
        let probs = calculate_probabilities(&pop, 2);

        assert_eq!(probs.len(), 4);
        assert!((probs[0] - 0.75).abs() < 1e-12);
        assert!((probs[1] - 0.25).abs() < 1e-12);
        // Onlooker slots never receive probability mass.
        assert_eq!(probs[2], 0.0);
        assert_eq!(probs[3], 0.0);
    }

    #[test]
    fn test_negative_fitness_clamped() {
        let pop = population(&[-5.0, 0.4, 0.0, 0.0]);
        let probs = calculate_probabilities(&pop, 2);
        assert_eq!(probs[0], 0.0);
        assert!((probs[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_non_positive_uniform_fallback() {
        let pop = population(&[-1.0, -2.0, 0.0, 0.0]);
        let probs = calculate_probabilities(&pop, 2);
        assert!((probs[0] - 0.5).abs() < 1e-12);
        assert!((probs[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_unevaluated_treated_as_zero() {
        let mut pop = population(&[0.5, 0.5, 0.0, 0.0]);
        pop[1].fitness = Fitness::Unevaluated;
        let probs = calculate_probabilities(&pop, 2);
        assert!((probs[0] - 1.0).abs() < 1e-12);
        assert_eq!(probs[1], 0.0);
    }

    #[test]
    fn test_selection_favors_high_fitness() {
        let pop = population(&[0.9, 0.1, 0.0, 0.0]);
        let probs = calculate_probabilities(&pop, 2);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 2];
        let n = 10_000;
        for _ in 0..n {
            counts[select_food_source(&probs, 2, &mut rng)] += 1;
        }
        // Slot 0 carries 90% of the mass.
        assert!(
            counts[0] > 8_500,
            "expected slot 0 to dominate, got {counts:?}"
        );
    }

    #[test]
    fn test_selection_uniform_on_fallback_distribution() {
        let pop = population(&[-1.0, -1.0, 0.0, 0.0]);
        let probs = calculate_probabilities(&pop, 2);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 2];
        for _ in 0..10_000 {
            counts[select_food_source(&probs, 2, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 4_000, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_selection_never_returns_onlooker_slot() {
        let pop = population(&[0.2, 0.8, 0.0, 0.0]);
        let probs = calculate_probabilities(&pop, 2);
        let mut rng = create_rng(7);
        for _ in 0..1_000 {
            assert!(select_food_source(&probs, 2, &mut rng) < 2);
        }
    }

    #[test]
    fn test_selection_fallback_on_empty_mass() {
        // A zeroed distribution forces the floating-point fallback path.
        let probs = vec![0.0; 4];
        let mut rng = create_rng(3);
        let idx = select_food_source(&probs, 2, &mut rng);
        assert!(idx < 2);
    }
}
