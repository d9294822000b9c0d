use evoroute_field::{FieldError, Obstacle, Point, RouteField};
use serde::{Deserialize, Serialize};

/// On-disk field description.
///
/// Mirrors the environment input contract: positive dimensions, start and
/// end points within bounds, and an ordered obstacle list. Validation
/// happens when the file is turned into a [`RouteField`], so a malformed
/// file fails before any search starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldFile {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

impl FieldFile {
    pub fn into_field(self) -> Result<RouteField, FieldError> {
        RouteField::new(self.width, self.height, self.start, self.end, self.obstacles)
    }
}
