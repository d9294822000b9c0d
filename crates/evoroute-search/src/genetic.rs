//! Genetic operators over route populations.
//!
//! The algorithm is deliberately minimal: pairwise tournament selection,
//! cut-splice crossover, and single-waypoint mutation, repeated over a
//! fixed-size population. Lower fitness is better throughout.
//!
//! # Tournament selection
//!
//! Each output slot draws two indices uniformly *with replacement* and
//! clones the route with the lower fitness. An individual may be compared
//! against itself; no diversity is preserved beyond that. Premature
//! convergence is an accepted tradeoff, not a defect.
//!
//! # Cut-splice crossover
//!
//! Consecutive pairs (0,1), (2,3), ... recombine at a random cut index.
//! With an odd population the last individual wraps around and pairs with
//! the first - a single self-paired individual per generation, preserved
//! here as a documented edge case rather than silently repaired. Children
//! inherit the opposite parent's length, so the multiset of route lengths
//! is invariant under crossover.
//!
//! # Waypoint mutation
//!
//! With a configured probability per route, one uniformly chosen interior
//! waypoint is replaced by a freshly rejection-sampled obstacle-free
//! point. The endpoints are structurally unreachable: mutation only sees
//! the interior slice.

use evoroute_evaluator::RouteEvaluator;
use evoroute_field::{FreeSpaceExhausted, PointSampler, Route};
use rand::Rng;

use crate::stats::FitnessStats;

/// A population of candidate routes with their fitness values.
///
/// Fitness is computed once, when the population is formed; the values
/// are parallel to [`Self::routes`]. Populations are fully replaced every
/// generation - no individual identity survives except through genetic
/// material.
#[derive(Debug, Clone)]
pub struct Population {
    routes: Vec<Route>,
    fitness: Vec<f64>,
}

impl Population {
    /// Scores `routes` to form a population.
    #[must_use]
    pub fn evaluate(routes: Vec<Route>, evaluator: &RouteEvaluator<'_>) -> Self {
        let fitness = routes.iter().map(|route| evaluator.fitness(route)).collect();
        Self { routes, fitness }
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Index of the best (lowest-fitness) individual; ties resolve to the
    /// earliest index. `None` for an empty population.
    #[must_use]
    pub fn best_index(&self) -> Option<usize> {
        self.fitness
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(index, _)| index)
    }

    /// Fitness distribution of this population.
    #[must_use]
    pub fn fitness_stats(&self) -> Option<FitnessStats> {
        FitnessStats::new(self.fitness.iter().copied())
    }

    /// Pairwise tournament selection into a same-sized parent list.
    ///
    /// # Panics
    ///
    /// Panics on an empty population.
    #[must_use]
    pub fn select<R>(&self, rng: &mut R) -> Vec<Route>
    where
        R: Rng + ?Sized,
    {
        assert!(!self.routes.is_empty(), "cannot select from an empty population");
        (0..self.routes.len())
            .map(|_| {
                let a = rng.random_range(0..self.routes.len());
                let b = rng.random_range(0..self.routes.len());
                if self.fitness[a] < self.fitness[b] {
                    self.routes[a].clone()
                } else {
                    self.routes[b].clone()
                }
            })
            .collect()
    }
}

/// Cut-splice crossover over consecutive pairs of `selected`.
///
/// For each pair a cut index is drawn uniformly from
/// `[0, min(len1, len2))`; the first child takes parent 1's prefix and
/// parent 2's suffix (inheriting parent 2's length), the second child the
/// symmetric swap. Endpoints always survive because every route
/// terminates in the same shared start and end points.
///
/// The returned list has exactly the input length: with an odd input the
/// wraparound pair contributes only its first child.
#[must_use]
pub fn crossover<R>(selected: &[Route], rng: &mut R) -> Vec<Route>
where
    R: Rng + ?Sized,
{
    let mut offspring = Vec::with_capacity(selected.len());
    let mut i = 0;
    while i < selected.len() {
        let parent1 = &selected[i];
        let parent2 = &selected[(i + 1) % selected.len()];
        let cut = rng.random_range(0..parent1.len().min(parent2.len()));

        let mut child1 = parent1.points()[..cut].to_vec();
        child1.extend_from_slice(&parent2.points()[cut..]);
        offspring.push(Route::from_points(child1));

        if offspring.len() < selected.len() {
            let mut child2 = parent2.points()[..cut].to_vec();
            child2.extend_from_slice(&parent1.points()[cut..]);
            offspring.push(Route::from_points(child2));
        }
        i += 2;
    }
    offspring
}

/// Waypoint mutation, in place.
///
/// With probability `probability` per route, replaces one uniformly
/// chosen interior waypoint with a fresh obstacle-free point. Routes
/// without an interior are left untouched.
pub fn mutate<R>(
    offspring: &mut [Route],
    probability: f64,
    sampler: &PointSampler<'_>,
    rng: &mut R,
) -> Result<(), FreeSpaceExhausted>
where
    R: Rng + ?Sized,
{
    for route in offspring {
        if !rng.random_bool(probability) {
            continue;
        }
        let interior = route.interior_mut();
        if interior.is_empty() {
            continue;
        }
        let index = rng.random_range(0..interior.len());
        interior[index] = sampler.free_point(rng)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use evoroute_field::{Obstacle, Point, RouteField};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn test_rng() -> Pcg32 {
        Pcg32::from_seed([9; 16])
    }

    fn open_field() -> RouteField {
        RouteField::new(100, 100, Point::new(0, 0), Point::new(99, 99), vec![]).unwrap()
    }

    /// Builds a route from `(0, 0)` to `(99, 99)` through the given
    /// interior waypoints.
    fn route_through(interior: &[(i32, i32)]) -> Route {
        let mut points = vec![Point::new(0, 0)];
        points.extend(interior.iter().map(|&(x, y)| Point::new(x, y)));
        points.push(Point::new(99, 99));
        Route::from_points(points)
    }

    #[test]
    fn test_selection_preserves_size_and_membership() {
        let field = open_field();
        let evaluator = RouteEvaluator::new(&field);
        let routes = vec![
            route_through(&[(10, 10)]),
            route_through(&[(90, 10), (10, 90)]),
            route_through(&[(50, 50)]),
        ];
        let population = Population::evaluate(routes.clone(), &evaluator);
        let selected = population.select(&mut test_rng());
        assert_eq!(selected.len(), routes.len());
        for route in &selected {
            assert!(routes.contains(route));
        }
    }

    #[test]
    fn test_best_index_prefers_earliest_on_ties() {
        let field = open_field();
        let evaluator = RouteEvaluator::new(&field);
        let route = route_through(&[(50, 50)]);
        let population = Population::evaluate(vec![route.clone(), route], &evaluator);
        assert_eq!(population.best_index(), Some(0));
    }

    #[test]
    fn test_crossover_children_swap_lengths() {
        let short = route_through(&[(10, 10)]);
        let long = route_through(&[(20, 20), (40, 40), (60, 60), (80, 80)]);
        let mut rng = test_rng();
        for _ in 0..50 {
            let offspring = crossover(&[short.clone(), long.clone()], &mut rng);
            assert_eq!(offspring.len(), 2);
            assert_eq!(offspring[0].len(), long.len());
            assert_eq!(offspring[1].len(), short.len());
        }
    }

    #[test]
    fn test_crossover_keeps_shared_endpoints() {
        let a = route_through(&[(10, 10), (20, 20)]);
        let b = route_through(&[(90, 10), (50, 50), (10, 90)]);
        let mut rng = test_rng();
        for _ in 0..50 {
            for child in crossover(&[a.clone(), b.clone()], &mut rng) {
                assert_eq!(child.start(), Point::new(0, 0));
                assert_eq!(child.end(), Point::new(99, 99));
            }
        }
    }

    #[test]
    fn test_crossover_odd_population_wraps_around() {
        let routes = vec![
            route_through(&[(10, 10)]),
            route_through(&[(20, 20), (30, 30)]),
            route_through(&[(40, 40), (50, 50), (60, 60)]),
        ];
        let offspring = crossover(&routes, &mut test_rng());
        assert_eq!(offspring.len(), 3);
        // The wraparound pair (routes[2], routes[0]) contributes only its
        // first child, which inherits routes[0]'s length.
        assert_eq!(offspring[2].len(), routes[0].len());
    }

    #[test]
    fn test_crossover_single_individual_recombines_with_itself() {
        let only = route_through(&[(33, 44), (55, 66)]);
        let offspring = crossover(std::slice::from_ref(&only), &mut test_rng());
        assert_eq!(offspring.len(), 1);
        assert_eq!(offspring[0], only);
    }

    #[test]
    fn test_mutation_never_touches_the_endpoints() {
        let field = RouteField::new(
            100,
            100,
            Point::new(0, 0),
            Point::new(99, 99),
            vec![Obstacle::new(30, 30, 20, 20)],
        )
        .unwrap();
        let sampler = PointSampler::new(&field, 10_000);
        let mut rng = test_rng();
        let mut offspring = vec![
            route_through(&[(10, 10)]),
            route_through(&[(20, 80), (80, 20)]),
            route_through(&[(5, 5), (25, 25), (60, 60)]),
        ];
        let lengths: Vec<_> = offspring.iter().map(Route::len).collect();
        mutate(&mut offspring, 1.0, &sampler, &mut rng).unwrap();
        for (route, len) in offspring.iter().zip(lengths) {
            assert_eq!(route.start(), Point::new(0, 0));
            assert_eq!(route.end(), Point::new(99, 99));
            assert_eq!(route.len(), len);
            for &point in &route.points()[1..route.len() - 1] {
                assert!(!field.is_blocked(point));
            }
        }
    }

    #[test]
    fn test_mutation_skips_routes_without_interior() {
        let field = open_field();
        let sampler = PointSampler::new(&field, 10_000);
        let bare = Route::from_points(vec![Point::new(0, 0), Point::new(99, 99)]);
        let mut offspring = vec![bare.clone()];
        mutate(&mut offspring, 1.0, &sampler, &mut test_rng()).unwrap();
        assert_eq!(offspring[0], bare);
    }

    #[test]
    fn test_zero_probability_mutation_is_identity() {
        let field = open_field();
        let sampler = PointSampler::new(&field, 10_000);
        let original = vec![route_through(&[(10, 10)]), route_through(&[(20, 20)])];
        let mut offspring = original.clone();
        mutate(&mut offspring, 0.0, &sampler, &mut test_rng()).unwrap();
        assert_eq!(offspring, original);
    }
}
