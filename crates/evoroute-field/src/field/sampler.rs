use rand::Rng;

use crate::{
    FreeSpaceExhausted,
    core::Point,
    field::{Route, RouteField},
};

/// Fewest interior waypoints in a freshly sampled route.
pub const MIN_INTERIOR_POINTS: usize = 1;
/// Most interior waypoints in a freshly sampled route.
pub const MAX_INTERIOR_POINTS: usize = 5;

/// Draws obstacle-free points and candidate routes by rejection sampling.
///
/// Every point draw is uniform over the field bounds, resampled while it
/// lands inside an obstacle. Sampling is bounded: after `max_attempts`
/// rejected draws the sampler gives up with [`FreeSpaceExhausted`], so a
/// field whose free area is (nearly) exhausted fails loudly instead of
/// spinning forever.
///
/// The sampler is generic over [`Rng`] so one seeded generator can drive
/// an entire run deterministically.
#[derive(Debug, Clone, Copy)]
pub struct PointSampler<'a> {
    field: &'a RouteField,
    max_attempts: usize,
}

impl<'a> PointSampler<'a> {
    #[must_use]
    pub fn new(field: &'a RouteField, max_attempts: usize) -> Self {
        Self {
            field,
            max_attempts,
        }
    }

    /// Draws one uniformly distributed point outside every obstacle.
    pub fn free_point<R>(&self, rng: &mut R) -> Result<Point, FreeSpaceExhausted>
    where
        R: Rng + ?Sized,
    {
        for _ in 0..self.max_attempts {
            let point = Point::new(
                rng.random_range(0..self.field.width()),
                rng.random_range(0..self.field.height()),
            );
            if !self.field.is_blocked(point) {
                return Ok(point);
            }
        }
        Err(FreeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Draws a start-to-end route with 1 to 5 obstacle-free interior
    /// waypoints, the waypoint count itself drawn uniformly.
    pub fn route<R>(&self, rng: &mut R) -> Result<Route, FreeSpaceExhausted>
    where
        R: Rng + ?Sized,
    {
        let interior = rng.random_range(MIN_INTERIOR_POINTS..=MAX_INTERIOR_POINTS);
        let mut points = Vec::with_capacity(interior + 2);
        points.push(self.field.start());
        for _ in 0..interior {
            points.push(self.free_point(rng)?);
        }
        points.push(self.field.end());
        Ok(Route::from_points(points))
    }

    /// Draws `count` routes, the initial population of a run.
    pub fn routes<R>(&self, count: usize, rng: &mut R) -> Result<Vec<Route>, FreeSpaceExhausted>
    where
        R: Rng + ?Sized,
    {
        (0..count).map(|_| self.route(rng)).collect()
    }
}
