use evoroute_field::{Route, RouteField};

/// Penalty added to a route's fitness for every intersecting
/// (segment, obstacle) pair.
pub const COLLISION_PENALTY: f64 = 10_000.0;

/// Scores routes against a field.
///
/// Fitness = total path length + [`COLLISION_PENALTY`] x intersection
/// count. Lower is better. [`Self::count_intersections`] backs both the
/// penalty term and standalone collision reporting.
#[derive(Debug, Clone, Copy)]
pub struct RouteEvaluator<'a> {
    field: &'a RouteField,
}

impl<'a> RouteEvaluator<'a> {
    #[must_use]
    pub fn new(field: &'a RouteField) -> Self {
        Self { field }
    }

    /// Scores `route`; lower is better.
    ///
    /// For a collision-free route this is exactly the sum of consecutive
    /// Euclidean distances.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn fitness(&self, route: &Route) -> f64 {
        route.path_length() + COLLISION_PENALTY * self.count_intersections(route) as f64
    }

    /// Counts intersecting (segment, obstacle) pairs along `route`.
    ///
    /// One segment crossing two obstacles counts twice, as do two
    /// segments crossing the same obstacle.
    #[must_use]
    pub fn count_intersections(&self, route: &Route) -> usize {
        route
            .segments()
            .map(|(a, b)| {
                self.field
                    .obstacles()
                    .iter()
                    .filter(|obstacle| obstacle.intersects_segment(a, b))
                    .count()
            })
            .sum()
    }
}
