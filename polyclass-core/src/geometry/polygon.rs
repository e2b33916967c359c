use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    error::{GeomError, InvalidPolygon},
    geometry::{
        point::{CoordKey, Point},
        segment::Segment,
    },
};

/// A simple closed loop of segments.
///
/// An instance is proof that construction-time validation passed: every
/// vertex has degree exactly 2, and no two non-adjacent segments cross. The
/// checks never re-run after construction, and no mutation is exposed.
#[derive(Debug, Clone, Serialize)]
pub struct Polygon {
    segments: Vec<Segment>,
}

impl Polygon {
    pub fn new(segments: Vec<Segment>) -> Result<Polygon, GeomError> {
        Polygon::validate(&segments)?;
        Ok(Polygon { segments })
    }

    /// The construction-time validity check, exposed so generators and tests
    /// can re-run it against an existing segment list.
    pub fn validate(segments: &[Segment]) -> Result<(), GeomError> {
        check_degrees(segments)?;
        check_crossings(segments)?;
        Ok(())
    }

    /// Segments in construction order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn num_sides(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;
    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Every endpoint must be used by exactly two segments: one closed loop, no
/// branching, no dangling ends.
fn check_degrees(segments: &[Segment]) -> Result<(), GeomError> {
    let mut degrees: HashMap<CoordKey, (Point, usize)> = HashMap::new();
    for s in segments {
        for p in [s.start(), s.end()] {
            degrees.entry(p.key()).or_insert((p, 0)).1 += 1;
        }
    }
    for (p, degree) in degrees.into_values() {
        if degree != 2 {
            return Err(InvalidPolygon::BadDegree { x: p.x, y: p.y, degree }.into());
        }
    }
    Ok(())
}

/// No two distinct segments may cross; pairs sharing exactly one endpoint
/// are adjacent edges of the loop and exempt.
fn check_crossings(segments: &[Segment]) -> Result<(), GeomError> {
    for (a, b) in segments.iter().tuple_combinations::<(_, _)>() {
        if a == b || a.share_endpoint(b) {
            continue;
        }
        if a.intersect(b)? {
            return Err(InvalidPolygon::Crossing {
                a: a.to_string(),
                b: b.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(pt(x0, y0), pt(x1, y1))
    }

    fn unit_square() -> Vec<Segment> {
        vec![
            seg(0., 0., 1., 0.),
            seg(1., 0., 1., 1.),
            seg(1., 1., 0., 1.),
            seg(0., 1., 0., 0.),
        ]
    }

    #[test]
    fn test_unit_square_valid() {
        let p = Polygon::new(unit_square()).unwrap();
        assert_eq!(p.num_sides(), 4);
        // Construction order is preserved
        assert_abs_diff_eq!(p.segments()[0].start(), Point { x: 0., y: 0. });
    }

    #[test]
    fn test_triangle_valid() {
        let p = Polygon::new(vec![
            seg(0., 0., 1., 0.),
            seg(1., 0., 0.5, 1.),
            seg(0.5, 1., 0., 0.),
        ]);
        assert!(p.is_ok());
    }

    #[test]
    fn test_dangling_segment() {
        let mut segments = unit_square();
        segments.push(seg(0.5, 0.5, 0.5, 2.));
        let err = Polygon::new(segments).unwrap_err();
        assert!(matches!(
            err,
            GeomError::Polygon(InvalidPolygon::BadDegree { degree: 1, .. })
        ));
    }

    #[test]
    fn test_crossing_segments() {
        // Hourglass: two closed triangles whose long edges cross mid-air
        let segments = vec![
            seg(0., 0., 1., 1.),
            seg(1., 1., 1., 0.),
            seg(1., 0., 0., 1.),
            seg(0., 1., 0., 0.),
        ];
        let err = Polygon::new(segments).unwrap_err();
        assert!(matches!(
            err,
            GeomError::Polygon(InvalidPolygon::Crossing { .. })
        ));
    }

    #[test]
    fn test_validate_matches_construction() {
        let segments = unit_square();
        assert!(Polygon::validate(&segments).is_ok());
        let p = Polygon::new(segments).unwrap();
        assert!(Polygon::validate(p.segments()).is_ok());
    }
}
