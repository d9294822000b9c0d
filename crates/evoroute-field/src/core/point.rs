use std::fmt;

use serde::{Deserialize, Serialize};

/// A position on the field, in integer cell coordinates.
///
/// Valid positions lie within `[0, width) x [0, height)` of their
/// [`RouteField`](crate::RouteField). This is the single value type used
/// wherever a position crosses an API boundary: sampling, evaluation, and
/// reporting all share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_exact_for_pythagorean_triple() {
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 5.0);
        assert_eq!(Point::new(-3, 0).distance(Point::new(0, -4)), 5.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(Point::new(17, 42).distance(Point::new(17, 42)), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point::new(1, 9);
        let b = Point::new(-6, 4);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Point::new(12, -3).to_string(), "(12, -3)");
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_string(&Point::new(3, 7)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":7}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Point::new(3, 7));
    }
}
