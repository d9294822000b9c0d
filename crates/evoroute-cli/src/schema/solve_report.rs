use chrono::{DateTime, Utc};
use evoroute_field::Route;
use evoroute_search::{
    search::{SearchParams, SolveOutcome},
    seed::SearchSeed,
};
use serde::Serialize;

/// JSON report for a finished solve run.
///
/// Carries everything needed to reproduce the run (seed and parameters)
/// alongside the result itself, including the human-readable route form
/// for direct display.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub solved_at: DateTime<Utc>,
    pub seed: SearchSeed,
    pub population_size: usize,
    pub max_generations: usize,
    pub mutation_probability: f64,
    pub collision_free: bool,
    pub fitness: f64,
    pub intersections: usize,
    pub generation: usize,
    pub route: Route,
    pub route_display: String,
}

impl SolveReport {
    #[must_use]
    pub fn new(seed: SearchSeed, params: &SearchParams, outcome: &SolveOutcome) -> Self {
        let best = outcome.best();
        Self {
            solved_at: Utc::now(),
            seed,
            population_size: params.population_size,
            max_generations: params.max_generations,
            mutation_probability: params.mutation_probability,
            collision_free: outcome.is_collision_free(),
            fitness: best.fitness,
            intersections: best.intersections,
            generation: best.generation,
            route: best.route.clone(),
            route_display: best.route.to_string(),
        }
    }
}
