use serde::{Deserialize, Serialize};

use super::point::Point;

/// An axis-aligned rectangular obstacle.
///
/// Containment is half-open: a point is inside when `x <= px < x + width`
/// and `y <= py < y + height`. The same containment test backs both
/// rejection sampling and the segment test below, so a sampled waypoint
/// can never sit inside the obstacle that would have rejected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Obstacle {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Tests whether `p` lies inside this obstacle.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Tests whether the segment from `a` to `b` crosses this obstacle.
    ///
    /// The segment intersects when it touches any of the four rectangle
    /// edges or when an endpoint lies inside the rectangle (a segment
    /// strictly interior to the rectangle crosses no edge). The test is
    /// exact: all arithmetic is on integers.
    #[must_use]
    pub fn intersects_segment(&self, a: Point, b: Point) -> bool {
        if self.contains(a) || self.contains(b) {
            return true;
        }
        self.edges()
            .into_iter()
            .any(|(p, q)| segments_intersect(a, b, p, q))
    }

    fn edges(&self) -> [(Point, Point); 4] {
        let tl = Point::new(self.x, self.y);
        let tr = Point::new(self.x + self.width, self.y);
        let br = Point::new(self.x + self.width, self.y + self.height);
        let bl = Point::new(self.x, self.y + self.height);
        [(tl, tr), (tr, br), (br, bl), (bl, tl)]
    }
}

/// Cross product of `b - a` and `c - a`; the sign gives the turn direction.
fn orientation(a: Point, b: Point, c: Point) -> i64 {
    i64::from(b.x - a.x) * i64::from(c.y - a.y) - i64::from(b.y - a.y) * i64::from(c.x - a.x)
}

/// Whether `p`, already known collinear with `a`-`b`, lies within the
/// segment's bounding box.
fn within_bounds(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Exact segment-segment intersection, endpoints included.
fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let o1 = orientation(a1, a2, b1).signum();
    let o2 = orientation(a1, a2, b2).signum();
    let o3 = orientation(b1, b2, a1).signum();
    let o4 = orientation(b1, b2, a2).signum();

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear and touching cases.
    (o1 == 0 && within_bounds(a1, a2, b1))
        || (o2 == 0 && within_bounds(a1, a2, b2))
        || (o3 == 0 && within_bounds(b1, b2, a1))
        || (o4 == 0 && within_bounds(b1, b2, a2))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: Obstacle = Obstacle::new(10, 10, 10, 10);

    #[test]
    fn test_contains_is_half_open() {
        assert!(BLOCK.contains(Point::new(10, 10)));
        assert!(BLOCK.contains(Point::new(19, 19)));
        assert!(!BLOCK.contains(Point::new(20, 10)));
        assert!(!BLOCK.contains(Point::new(10, 20)));
        assert!(!BLOCK.contains(Point::new(9, 15)));
    }

    #[test]
    fn test_segment_through_the_middle_intersects() {
        assert!(BLOCK.intersects_segment(Point::new(0, 15), Point::new(30, 15)));
        assert!(BLOCK.intersects_segment(Point::new(15, 0), Point::new(15, 30)));
        assert!(BLOCK.intersects_segment(Point::new(0, 0), Point::new(30, 30)));
    }

    #[test]
    fn test_segment_far_away_misses() {
        assert!(!BLOCK.intersects_segment(Point::new(0, 0), Point::new(9, 0)));
        assert!(!BLOCK.intersects_segment(Point::new(0, 25), Point::new(30, 25)));
        assert!(!BLOCK.intersects_segment(Point::new(25, 0), Point::new(25, 9)));
    }

    #[test]
    fn test_segment_with_endpoint_inside_intersects() {
        assert!(BLOCK.intersects_segment(Point::new(15, 15), Point::new(50, 50)));
        assert!(BLOCK.intersects_segment(Point::new(50, 50), Point::new(15, 15)));
    }

    #[test]
    fn test_segment_touching_an_edge_intersects() {
        // Runs along the top edge.
        assert!(BLOCK.intersects_segment(Point::new(0, 10), Point::new(30, 10)));
        // Grazes the top-left corner exactly.
        assert!(BLOCK.intersects_segment(Point::new(20, 0), Point::new(0, 20)));
    }

    #[test]
    fn test_degenerate_segment_is_a_point_test() {
        assert!(BLOCK.intersects_segment(Point::new(15, 15), Point::new(15, 15)));
        assert!(!BLOCK.intersects_segment(Point::new(5, 5), Point::new(5, 5)));
        // A zero-length segment on the boundary touches the edge.
        assert!(BLOCK.intersects_segment(Point::new(20, 15), Point::new(20, 15)));
    }

    #[test]
    fn test_diagonal_near_miss() {
        // Passes just outside the top-right corner.
        assert!(!BLOCK.intersects_segment(Point::new(21, 0), Point::new(30, 9)));
    }
}
