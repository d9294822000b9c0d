//! Route scoring: path length plus obstacle-collision penalties.
//!
//! This crate defines what "good" means for the genetic search. A route's
//! fitness is its total Euclidean length plus a fixed penalty for every
//! (segment, obstacle) intersecting pair; lower is better and 0 is the
//! theoretical optimum (a straight, collision-free path of zero length).
//!
//! The penalty is chosen so that a single collision always outweighs any
//! detour the field can express - length differences only ever decide
//! between routes with the same collision count. The search layer
//! validates this domination property against the actual field size at
//! setup.
//!
//! Collision reporting and the fitness penalty share one geometric test
//! ([`RouteEvaluator::count_intersections`]), so the two can never
//! disagree about whether a route is collision-free.

pub use self::route_evaluator::*;

pub mod route_evaluator;
