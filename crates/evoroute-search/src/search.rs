//! The generational evolution controller.
//!
//! [`RouteSearch`] owns every piece of run state: the population, the
//! run's only random generator, the best-ever record, and the generation
//! counter. A search is constructed (which samples and scores the initial
//! population), stepped one generation at a time, and finally consumed
//! for its [`SolveOutcome`]. Stepping is the cancellation point: callers
//! that need a deadline simply stop calling [`RouteSearch::step`].

use evoroute_evaluator::{COLLISION_PENALTY, RouteEvaluator};
use evoroute_field::{
    FreeSpaceExhausted, MAX_INTERIOR_POINTS, PointSampler, Route, RouteField,
};
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::{
    genetic::{self, Population},
    seed::SearchSeed,
    stats::FitnessStats,
};

/// Tolerance for the zero-fitness early exit.
///
/// Fitness is a sum of square roots; an exact `== 0.0` comparison would
/// hinge on floating-point luck, so anything within this band of zero
/// counts as optimal.
pub const FITNESS_EPSILON: f64 = 1e-9;

/// Run configuration for a route search.
///
/// `Default` matches the classic configuration: 100 routes per
/// generation, a 2000-generation cap, 5% mutation probability, and a
/// 10 000-attempt budget per sampled point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Number of routes kept alive per generation.
    pub population_size: usize,
    /// Generation cap; the search stops here even without convergence.
    pub max_generations: usize,
    /// Per-route probability of a waypoint mutation.
    pub mutation_probability: f64,
    /// Rejection-sampling attempt budget per point draw.
    pub max_sample_attempts: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 2000,
            mutation_probability: 0.05,
            max_sample_attempts: 10_000,
        }
    }
}

/// Rejected [`SearchParams`].
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum SearchConfigError {
    #[display("population size must be at least 1")]
    EmptyPopulation,
    #[display("generation cap must be at least 1")]
    NoGenerations,
    #[display("mutation probability must lie in [0, 1], got {value}")]
    MutationProbabilityOutOfRange {
        #[error(not(source))]
        value: f64,
    },
    #[display(
        "a collision penalty of {penalty} does not dominate routes up to {longest_route:.1} long"
    )]
    PenaltyDominationViolated { penalty: f64, longest_route: f64 },
}

/// Route search failure.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// The configuration was rejected before any evolution ran.
    #[display("invalid search configuration: {_0}")]
    Config(SearchConfigError),
    /// Free-space sampling ran out of attempts.
    #[display("sampling failed: {_0}")]
    Sampling(FreeSpaceExhausted),
}

/// Best route discovered so far, tracked outside the live population so
/// it can never be lost to stochastic replacement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestRoute {
    /// The route; starts at the field's start, ends at its end.
    pub route: Route,
    /// Fitness at discovery time (length plus collision penalties).
    pub fitness: f64,
    /// Intersecting (segment, obstacle) pairs along the route.
    pub intersections: usize,
    /// Generation the route was first recorded in (0-based).
    pub generation: usize,
}

/// Final verdict of a finished search.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// The best recorded route crosses no obstacle.
    CollisionFree(BestRoute),
    /// The generation cap elapsed with every recorded route still
    /// crossing at least one obstacle: no valid solution exists in the
    /// record, only a best effort.
    BestEffort(BestRoute),
}

impl SolveOutcome {
    #[must_use]
    pub fn best(&self) -> &BestRoute {
        match self {
            Self::CollisionFree(best) | Self::BestEffort(best) => best,
        }
    }

    #[must_use]
    pub fn is_collision_free(&self) -> bool {
        matches!(self, Self::CollisionFree(_))
    }
}

/// One generation's progress summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSummary {
    /// Generation index, starting at 0.
    pub generation: usize,
    /// Best fitness within the freshly replaced population.
    pub generation_best: f64,
    /// Fitness distribution of the freshly replaced population.
    pub fitness: FitnessStats,
    /// Whether the best-ever record improved this generation.
    pub improved: bool,
}

/// Generational evolution controller.
///
/// Drives the evaluate-select-crossover-mutate cycle over a fixed-size
/// population, re-scores every replaced generation, and keeps the
/// best-ever record up to date. The record is bookkeeping only - it is
/// never reinserted into the live population, so the same genome may or
/// may not survive stochastically.
///
/// # Example
///
/// ```
/// use evoroute_field::{Point, RouteField};
/// use evoroute_search::search::{RouteSearch, SearchParams};
/// use evoroute_search::seed::SearchSeed;
///
/// let field = RouteField::new(100, 100, Point::new(0, 0), Point::new(99, 99), vec![])?;
/// let params = SearchParams {
///     max_generations: 50,
///     ..SearchParams::default()
/// };
/// let seed = SearchSeed::from_bytes([1; 16]);
/// let outcome = RouteSearch::new(&field, params, seed)?.run()?;
/// assert!(outcome.is_collision_free());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct RouteSearch<'a> {
    field: &'a RouteField,
    params: SearchParams,
    rng: Pcg32,
    population: Population,
    best: Option<BestRoute>,
    generation: usize,
    terminated: bool,
}

impl<'a> RouteSearch<'a> {
    /// Validates `params` against `field` and samples the initial
    /// population.
    pub fn new(
        field: &'a RouteField,
        params: SearchParams,
        seed: SearchSeed,
    ) -> Result<Self, SearchError> {
        validate_params(&params, field).map_err(SearchError::Config)?;

        let mut rng = Pcg32::from_seed(seed.to_bytes());
        let sampler = PointSampler::new(field, params.max_sample_attempts);
        let routes = sampler
            .routes(params.population_size, &mut rng)
            .map_err(SearchError::Sampling)?;
        let population = Population::evaluate(routes, &RouteEvaluator::new(field));

        Ok(Self {
            field,
            params,
            rng,
            population,
            best: None,
            generation: 0,
            terminated: false,
        })
    }

    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    #[must_use]
    pub fn best(&self) -> Option<&BestRoute> {
        self.best.as_ref()
    }

    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Runs one full generation: select, crossover, mutate, replace,
    /// re-score, and update the best-ever record on strict improvement.
    ///
    /// # Panics
    ///
    /// Panics when called after termination.
    pub fn step(&mut self) -> Result<GenerationSummary, SearchError> {
        assert!(!self.terminated, "step called on a terminated search");

        let sampler = PointSampler::new(self.field, self.params.max_sample_attempts);
        let evaluator = RouteEvaluator::new(self.field);

        let selected = self.population.select(&mut self.rng);
        let mut offspring = genetic::crossover(&selected, &mut self.rng);
        genetic::mutate(
            &mut offspring,
            self.params.mutation_probability,
            &sampler,
            &mut self.rng,
        )
        .map_err(SearchError::Sampling)?;
        self.population = Population::evaluate(offspring, &evaluator);

        let improved = self.record_best(&evaluator);

        let best_index = self
            .population
            .best_index()
            .expect("population is never empty");
        let generation_best = self.population.fitness()[best_index];
        let fitness = self
            .population
            .fitness_stats()
            .expect("population is never empty");
        let summary = GenerationSummary {
            generation: self.generation,
            generation_best,
            fitness,
            improved,
        };

        self.generation += 1;
        if generation_best <= FITNESS_EPSILON || self.generation >= self.params.max_generations {
            self.terminated = true;
        }

        Ok(summary)
    }

    /// Scans the freshly replaced population in order and adopts any
    /// strict improvement over the current record.
    fn record_best(&mut self, evaluator: &RouteEvaluator<'_>) -> bool {
        let mut improved = false;
        for (route, &fitness) in self
            .population
            .routes()
            .iter()
            .zip(self.population.fitness())
        {
            let current = self.best.as_ref().map_or(f64::INFINITY, |best| best.fitness);
            if fitness < current {
                self.best = Some(BestRoute {
                    route: route.clone(),
                    fitness,
                    intersections: evaluator.count_intersections(route),
                    generation: self.generation,
                });
                improved = true;
            }
        }
        improved
    }

    /// Consumes the search and reports the outcome.
    ///
    /// `None` until at least one generation has run.
    #[must_use]
    pub fn into_outcome(self) -> Option<SolveOutcome> {
        let best = self.best?;
        Some(if best.intersections == 0 {
            SolveOutcome::CollisionFree(best)
        } else {
            SolveOutcome::BestEffort(best)
        })
    }

    /// Steps to termination and reports the outcome.
    pub fn run(mut self) -> Result<SolveOutcome, SearchError> {
        while !self.terminated {
            self.step()?;
        }
        Ok(self
            .into_outcome()
            .expect("a terminated search has recorded a best route"))
    }
}

fn validate_params(params: &SearchParams, field: &RouteField) -> Result<(), SearchConfigError> {
    if params.population_size == 0 {
        return Err(SearchConfigError::EmptyPopulation);
    }
    if params.max_generations == 0 {
        return Err(SearchConfigError::NoGenerations);
    }
    if !(0.0..=1.0).contains(&params.mutation_probability) {
        return Err(SearchConfigError::MutationProbabilityOutOfRange {
            value: params.mutation_probability,
        });
    }

    // Routes never exceed MAX_INTERIOR_POINTS + 1 segments, so this is an
    // upper bound on any expressible path length. A collision must
    // outweigh even the longest detour, otherwise the penalty stops
    // dominating and a long-but-clean route can lose to a short colliding
    // one.
    #[expect(clippy::cast_precision_loss)]
    let longest_route = (MAX_INTERIOR_POINTS + 1) as f64 * field.diagonal();
    if longest_route >= COLLISION_PENALTY {
        return Err(SearchConfigError::PenaltyDominationViolated {
            penalty: COLLISION_PENALTY,
            longest_route,
        });
    }

    Ok(())
}
