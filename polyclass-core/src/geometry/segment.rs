use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::{
    error::DomainError,
    geometry::point::Point,
    math::{COORD_EPSILON, EPSILON},
};

/// A line segment whose `start` is always the endpoint closer to the origin.
/// Exact distance ties keep construction order (unspecified, but stable).
///
/// Segments are immutable; transforms return new values. Zero-length
/// segments are legal and act as a single point for intersection purposes.
#[derive(Debug, Copy, Clone, Serialize)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Segment {
        if a.dist(&Point::ORIGIN) > b.dist(&Point::ORIGIN) {
            Segment { start: b, end: a }
        } else {
            Segment { start: a, end: b }
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.dist(&self.end)
    }

    fn is_degenerate(&self) -> bool {
        self.length() < COORD_EPSILON
    }

    /// A new segment offset by `(dx, dy)`, re-canonicalized.
    pub fn translate(&self, dx: f64, dy: f64) -> Result<Segment, DomainError> {
        Ok(Segment::new(
            self.start.translate(dx, dy)?,
            self.end.translate(dx, dy)?,
        ))
    }

    /// True iff the two segments have exactly one endpoint in common.
    ///
    /// All four endpoint pairings are checked: canonicalization can place a
    /// shared vertex in `start` on one segment and `end` on the other.
    /// Identical segments (two matches) and disjoint segments (none) do not
    /// count as endpoint-sharing.
    pub fn share_endpoint(&self, other: &Segment) -> bool {
        let matches = [
            self.start == other.start,
            self.start == other.end,
            self.end == other.start,
            self.end == other.end,
        ];
        matches.iter().filter(|&&m| m).count() == 1
    }

    /// Whether two segments intersect; touching counts, so identical
    /// segments and segments sharing one endpoint intersect by definition.
    ///
    /// The general case translates the system so this segment starts at the
    /// origin, rotates it onto the positive x-axis, and asks whether `other`
    /// straddles the axis with its crossing strictly inside `(0, length)`.
    /// Collinear overlap without a proper crossing is not detected.
    pub fn intersect(&self, other: &Segment) -> Result<bool, DomainError> {
        if self == other || self.share_endpoint(other) {
            return Ok(true);
        }
        if self.is_degenerate() {
            // A point past the shortcuts above cannot cross anything
            return Ok(false);
        }

        let a = self.translate(-self.start.x, -self.start.y)?;
        let b = other.translate(-self.start.x, -self.start.y)?;

        let length = a.end.dist(&Point::ORIGIN);
        let sin = a.end.y / length;
        let cos = a.end.x / length;

        let b_start = rotate_into_frame(&b.start, sin, cos)?;
        let b_end = rotate_into_frame(&b.end, sin, cos)?;

        // No crossing unless `other` straddles the x-axis
        if (b_start.y < 0. && b_end.y < 0.) || (b_start.y >= 0. && b_end.y >= 0.) {
            return Ok(false);
        }

        let x_intercept = b_end.x + (b_start.x - b_end.x) * b_end.y / (b_end.y - b_start.y);
        Ok(x_intercept > 0. && x_intercept < length)
    }

    /// Whether `p` lies on this segment: within `EPSILON` of the carrier
    /// line, with its projection inside `(0, length + EPSILON)`.
    ///
    /// The segment's own `start` projects to 0 and is therefore excluded,
    /// while `end` projects to `length` and is included by the widened upper
    /// bound. Callers that need the `start` endpoint treated as "on" must
    /// special-case it.
    pub fn point_on(&self, p: &Point) -> Result<bool, DomainError> {
        if self.is_degenerate() {
            return Ok(false);
        }

        let a = self.translate(-self.start.x, -self.start.y)?;
        let p = p.translate(-self.start.x, -self.start.y)?;

        let length = a.end.dist(&Point::ORIGIN);
        let sin = a.end.y / length;
        let cos = a.end.x / length;

        let p = rotate_into_frame(&p, sin, cos)?;
        Ok(p.y.abs() <= EPSILON && p.x > 0. && p.x < length + EPSILON)
    }

    /// How many members of `segments` this segment intersects.
    pub fn intersections_with(&self, segments: &[Segment]) -> Result<usize, DomainError> {
        let mut count = 0;
        for s in segments {
            if self.intersect(s)? {
                count += 1;
            }
        }
        Ok(count)
    }
}

/// Rotates `p` into the frame where an origin-anchored segment with
/// direction `(cos, sin)` lies on the positive x-axis.
fn rotate_into_frame(p: &Point, sin: f64, cos: f64) -> Result<Point, DomainError> {
    Point::new(p.x * cos + p.y * sin, p.y * cos - p.x * sin)
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}
