use evoroute_field::{FieldError, Obstacle, Point, RouteField};

/// A named, ready-made field layout.
///
/// The classic exercise shipped a numbered map catalog; these presets
/// keep that workflow without requiring external files.
pub(crate) struct BuiltinMap {
    pub id: u32,
    pub name: &'static str,
    pub build: fn() -> Result<RouteField, FieldError>,
}

pub(crate) const BUILTIN_MAPS: &[BuiltinMap] = &[
    BuiltinMap {
        id: 1,
        name: "open field",
        build: open_field,
    },
    BuiltinMap {
        id: 2,
        name: "central block",
        build: central_block,
    },
    BuiltinMap {
        id: 3,
        name: "wall with gap",
        build: wall_with_gap,
    },
    BuiltinMap {
        id: 4,
        name: "slalom",
        build: slalom,
    },
    BuiltinMap {
        id: 5,
        name: "pillars",
        build: pillars,
    },
];

pub(crate) fn find(id: u32) -> Option<&'static BuiltinMap> {
    BUILTIN_MAPS.iter().find(|map| map.id == id)
}

fn open_field() -> Result<RouteField, FieldError> {
    RouteField::new(500, 500, Point::new(10, 10), Point::new(490, 490), vec![])
}

fn central_block() -> Result<RouteField, FieldError> {
    RouteField::new(
        500,
        500,
        Point::new(10, 10),
        Point::new(490, 490),
        vec![Obstacle::new(200, 200, 100, 100)],
    )
}

fn wall_with_gap() -> Result<RouteField, FieldError> {
    RouteField::new(
        500,
        500,
        Point::new(10, 250),
        Point::new(490, 250),
        vec![
            Obstacle::new(240, 0, 20, 200),
            Obstacle::new(240, 300, 20, 200),
        ],
    )
}

fn slalom() -> Result<RouteField, FieldError> {
    RouteField::new(
        800,
        600,
        Point::new(20, 300),
        Point::new(780, 300),
        vec![
            Obstacle::new(200, 0, 30, 400),
            Obstacle::new(400, 200, 30, 400),
            Obstacle::new(600, 0, 30, 400),
        ],
    )
}

fn pillars() -> Result<RouteField, FieldError> {
    let mut obstacles = Vec::new();
    for &x in &[100, 275, 450] {
        for &y in &[100, 275, 450] {
            obstacles.push(Obstacle::new(x, y, 50, 50));
        }
    }
    RouteField::new(600, 600, Point::new(20, 20), Point::new(580, 580), obstacles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_map_builds() {
        for map in BUILTIN_MAPS {
            let field = (map.build)()
                .unwrap_or_else(|err| panic!("map {} ({}) is invalid: {err}", map.id, map.name));
            assert!(!field.is_blocked(field.start()));
            assert!(!field.is_blocked(field.end()));
        }
    }

    #[test]
    fn test_ids_are_unique_and_findable() {
        for map in BUILTIN_MAPS {
            assert_eq!(find(map.id).map(|found| found.id), Some(map.id));
        }
        assert!(find(999).is_none());
    }
}
