use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Point;

/// An ordered sequence of points from the field's start to its end.
///
/// Invariant: the first point equals the field's start and the last point
/// equals its end, for every route in every generation. The genetic
/// operators uphold this structurally - mutation can only reach the
/// interior through [`Self::interior_mut`], and crossover exchanges whole
/// prefixes and suffixes that both terminate in the shared endpoints.
///
/// Serializes transparently as its point list; [`fmt::Display`] renders
/// the human-readable `(x, y) -> (x, y) -> ...` form used for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    /// Wraps an ordered point list as a route.
    ///
    /// # Panics
    ///
    /// Panics when fewer than two points are given; a route always carries
    /// at least its two endpoints.
    #[must_use]
    pub fn from_points(points: Vec<Point>) -> Self {
        assert!(points.len() >= 2, "a route needs at least its two endpoints");
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// The waypoints strictly between the two endpoints.
    ///
    /// Empty for a two-point route; the endpoints themselves are not
    /// reachable through this slice.
    pub fn interior_mut(&mut self) -> &mut [Point] {
        let len = self.points.len();
        &mut self.points[1..len - 1]
    }

    /// Consecutive point pairs, in order.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Sum of Euclidean segment lengths.
    #[must_use]
    pub fn path_length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{point}")?;
        }
        Ok(())
    }
}
