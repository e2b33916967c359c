use serde::Serialize;

use crate::{
    error::GeomError,
    geometry::{point::Point, polygon::Polygon, segment::Segment},
};

/// Where a query point landed relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    OnBoundary,
    Inside,
    Outside,
}

/// Fixed ray terminus, outside the problem square; every cast ray runs from
/// the query point to here.
pub const RAY_TARGET: Point = Point { x: 2.0, y: 2.0 };

/// Ray-casting classification of a single point.
///
/// The boundary test runs first — crossing parity is only meaningful for
/// points strictly off the edges. Off-boundary points are inside iff the ray
/// to `RAY_TARGET` crosses an odd number of edges.
pub fn classify(polygon: &Polygon, p: &Point) -> Result<Region, GeomError> {
    for s in polygon {
        if s.point_on(p)? {
            return Ok(Region::OnBoundary);
        }
    }

    let ray = Segment::new(*p, RAY_TARGET);
    let crossings = ray.intersections_with(polygon.segments())?;
    if crossings % 2 == 1 {
        Ok(Region::Inside)
    } else {
        Ok(Region::Outside)
    }
}
