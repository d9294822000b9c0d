pub use self::{core::*, field::*};

pub mod core;
pub mod field;

/// Which of the two fixed route endpoints a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EndpointKind {
    #[display("start")]
    Start,
    #[display("end")]
    End,
}

/// Rejected field description.
///
/// Construction of a [`RouteField`] fails fast on malformed input so that
/// no geometric computation downstream ever sees it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FieldError {
    #[display("field dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: i32, height: i32 },
    #[display("obstacle at ({x}, {y}) has non-positive size {width}x{height}")]
    DegenerateObstacle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    #[display("{endpoint} point {point} lies outside the {width}x{height} field")]
    EndpointOutOfBounds {
        endpoint: EndpointKind,
        point: Point,
        width: i32,
        height: i32,
    },
    #[display("{endpoint} point {point} lies inside an obstacle")]
    EndpointBlocked { endpoint: EndpointKind, point: Point },
}

/// Bounded rejection sampling found no obstacle-free point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no obstacle-free point found within {attempts} sampling attempts")]
pub struct FreeSpaceExhausted {
    #[error(not(source))]
    pub attempts: usize,
}
