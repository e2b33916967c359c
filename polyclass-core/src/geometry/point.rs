use std::fmt::{self, Display, Formatter};

use approx::AbsDiffEq;
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::{
    error::DomainError,
    math::{Bounds, COORD_EPSILON, EPSILON},
};

/// Hashable stand-in for a point's raw coordinates, quantized by
/// `COORD_EPSILON`.
pub(crate) type CoordKey = (OrderedFloat<f64>, OrderedFloat<f64>);

/// A 2D coordinate, immutable once constructed.
///
/// Equality is within-`EPSILON` Euclidean distance, not field-wise — which
/// makes it non-transitive near the tolerance boundary, so there is no `Eq`
/// or `Hash`.
#[derive(Debug, Copy, Clone, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0., y: 0. };

    pub fn new(x: f64, y: f64) -> Result<Point, DomainError> {
        Bounds::WORKSPACE.check(x)?;
        Bounds::WORKSPACE.check(y)?;
        Ok(Point { x, y })
    }

    /// Euclidean distance to `other`.
    pub fn dist(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// A new point offset by `(dx, dy)`, validated like `new`.
    pub fn translate(&self, dx: f64, dy: f64) -> Result<Point, DomainError> {
        Point::new(self.x + dx, self.y + dy)
    }

    pub(crate) fn key(&self) -> CoordKey {
        (
            OrderedFloat((self.x / COORD_EPSILON).round()),
            OrderedFloat((self.y / COORD_EPSILON).round()),
        )
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.dist(other) < EPSILON
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
