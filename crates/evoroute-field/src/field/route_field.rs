use crate::{
    EndpointKind, FieldError,
    core::{Obstacle, Point},
};

/// The immutable environment a route is evolved in.
///
/// Holds the field bounds, the fixed start and end points, and the ordered
/// obstacle set. Construction validates the whole description and fails
/// fast on malformed input; a constructed field is well-formed for the
/// duration of a run.
#[derive(Debug, Clone)]
pub struct RouteField {
    width: i32,
    height: i32,
    start: Point,
    end: Point,
    obstacles: Vec<Obstacle>,
}

impl RouteField {
    pub fn new(
        width: i32,
        height: i32,
        start: Point,
        end: Point,
        obstacles: Vec<Obstacle>,
    ) -> Result<Self, FieldError> {
        if width <= 0 || height <= 0 {
            return Err(FieldError::NonPositiveDimensions { width, height });
        }
        for obstacle in &obstacles {
            if obstacle.width <= 0 || obstacle.height <= 0 {
                return Err(FieldError::DegenerateObstacle {
                    x: obstacle.x,
                    y: obstacle.y,
                    width: obstacle.width,
                    height: obstacle.height,
                });
            }
        }
        let field = Self {
            width,
            height,
            start,
            end,
            obstacles,
        };
        field.validate_endpoint(EndpointKind::Start, start)?;
        field.validate_endpoint(EndpointKind::End, end)?;
        Ok(field)
    }

    fn validate_endpoint(&self, endpoint: EndpointKind, point: Point) -> Result<(), FieldError> {
        if !self.contains(point) {
            return Err(FieldError::EndpointOutOfBounds {
                endpoint,
                point,
                width: self.width,
                height: self.height,
            });
        }
        if self.is_blocked(point) {
            return Err(FieldError::EndpointBlocked { endpoint, point });
        }
        Ok(())
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Whether `p` lies within the field bounds.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` lies inside any obstacle.
    #[must_use]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.obstacles.iter().any(|obstacle| obstacle.contains(p))
    }

    /// Length of the field diagonal, an upper bound on any single segment.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        f64::from(self.width).hypot(f64::from(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_field(obstacles: Vec<Obstacle>) -> Result<RouteField, FieldError> {
        RouteField::new(100, 80, Point::new(5, 5), Point::new(90, 70), obstacles)
    }

    #[test]
    fn test_valid_field_is_accepted() {
        let field = small_field(vec![Obstacle::new(40, 0, 10, 60)]).unwrap();
        assert_eq!(field.width(), 100);
        assert_eq!(field.height(), 80);
        assert_eq!(field.obstacles().len(), 1);
    }

    #[test]
    fn test_non_positive_dimensions_are_rejected() {
        let err = RouteField::new(0, 80, Point::new(0, 0), Point::new(1, 1), vec![]).unwrap_err();
        assert_eq!(
            err,
            FieldError::NonPositiveDimensions {
                width: 0,
                height: 80
            }
        );
    }

    #[test]
    fn test_degenerate_obstacle_is_rejected() {
        let err = small_field(vec![Obstacle::new(10, 10, 5, 0)]).unwrap_err();
        assert!(matches!(err, FieldError::DegenerateObstacle { .. }));
    }

    #[test]
    fn test_out_of_bounds_endpoint_is_rejected() {
        let err =
            RouteField::new(100, 80, Point::new(5, 5), Point::new(100, 70), vec![]).unwrap_err();
        assert_eq!(
            err,
            FieldError::EndpointOutOfBounds {
                endpoint: EndpointKind::End,
                point: Point::new(100, 70),
                width: 100,
                height: 80,
            }
        );
    }

    #[test]
    fn test_blocked_start_is_rejected() {
        let err = small_field(vec![Obstacle::new(0, 0, 20, 20)]).unwrap_err();
        assert_eq!(
            err,
            FieldError::EndpointBlocked {
                endpoint: EndpointKind::Start,
                point: Point::new(5, 5),
            }
        );
    }

    #[test]
    fn test_is_blocked_matches_obstacle_containment() {
        let field = small_field(vec![Obstacle::new(40, 0, 10, 60)]).unwrap();
        assert!(field.is_blocked(Point::new(45, 30)));
        assert!(!field.is_blocked(Point::new(45, 60)));
        assert!(!field.is_blocked(Point::new(39, 30)));
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = small_field(vec![Obstacle::new(0, 0, 20, 20)]).unwrap_err();
        assert_eq!(err.to_string(), "start point (5, 5) lies inside an obstacle");
    }
}
