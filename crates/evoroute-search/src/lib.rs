//! Genetic search for collision-free routes across an obstacle field.
//!
//! This crate evolves populations of candidate routes between the fixed
//! start and end points of a [`RouteField`](evoroute_field::RouteField),
//! scored by the [`evoroute_evaluator`] fitness function (path length plus
//! a heavy penalty per obstacle intersection; lower is better).
//!
//! # How a search runs
//!
//! 1. **Initialize** - sample a population of random start-to-end routes
//!    with obstacle-free interior waypoints
//! 2. **Evaluate** - score every route
//! 3. **Select** - pairwise tournaments, lower fitness wins
//! 4. **Crossover** - cut-splice consecutive pairs of parents
//! 5. **Mutate** - occasionally resample one interior waypoint
//! 6. **Replace** - the offspring become the next generation; the
//!    best-ever record is updated on strict improvement
//! 7. **Repeat** until the generation cap or a (near-)zero fitness
//!
//! # Architecture
//!
//! ```text
//! SearchSeed
//!     v seeds
//! RouteSearch (controller, owns the only rng)
//!     v drives
//! Population + genetic operators
//!     v scored by
//! RouteEvaluator (evoroute-evaluator)
//!     v produces
//! GenerationSummary per step, SolveOutcome at the end
//! ```
//!
//! The controller owns every piece of mutable state - population, random
//! generator, best-ever record - and hands results out by value after
//! termination. Nothing is shared and nothing is ambient; two searches
//! with the same seed, field, and parameters produce identical population
//! sequences and the same final route.
//!
//! # Known limitations
//!
//! - **No diversity preservation** beyond pairwise tournaments; premature
//!   convergence is an accepted tradeoff of the design.
//! - **No adaptive parameters**: mutation probability and population size
//!   stay fixed for the whole run.
//! - **Single objective**: length and collisions are folded into one
//!   scalar; there is no Pareto exploration of detour-length tradeoffs.

pub mod genetic;
pub mod search;
pub mod seed;
pub mod stats;
