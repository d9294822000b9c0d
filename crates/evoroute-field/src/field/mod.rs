//! Field environment, candidate routes, and free-space sampling.
//!
//! - [`RouteField`] - immutable run environment (bounds, endpoints, obstacles)
//! - [`Route`] - ordered point sequence from the field's start to its end
//! - [`PointSampler`] - bounded rejection sampling of obstacle-free points
//!   and fresh candidate routes
//!
//! A [`RouteField`] is validated once at construction and never mutated
//! afterwards; everything downstream may assume well-formed input.

pub use self::{route::*, route_field::*, sampler::*};

mod route;
mod route_field;
mod sampler;
