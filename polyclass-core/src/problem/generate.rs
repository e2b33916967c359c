use log::debug;
use rand::Rng;

use crate::{
    error::{GeomError, InvalidPolygon},
    geometry::{point::Point, polygon::Polygon, segment::Segment},
    math::{map, Bounds, COORD_EPSILON},
};

/// Lower-band ceiling and upper-band floor for generated y-coordinates; the
/// gap between them keeps the two zig-zag runs from tangling.
pub const GAP_MIN: f64 = 0.4;
pub const GAP_MAX: f64 = 0.6;

/// Retry budget per generator call before reporting `GenerationFailed`.
pub const MAX_GENERATION_ATTEMPTS: usize = 10_000;

/// Draws a random simple polygon with roughly `sides` edges by rejection
/// sampling.
///
/// Each attempt lays a zig-zag chain across the problem square: a run of
/// vertices through the lower band (`y <= GAP_MIN`), a run back through the
/// upper band (`y >= GAP_MAX`), and one closing segment from the last chain
/// vertex to the first. A candidate that produces an out-of-domain point or
/// fails the polygon checks is discarded and redrawn; both error kinds are
/// ordinary rejection outcomes here, not faults.
///
/// Even `sides` yield one edge fewer (the two runs cover `sides - 1`
/// vertices); the loop is closed regardless.
pub fn random_polygon<R: Rng>(sides: usize, rng: &mut R) -> Result<Polygon, GeomError> {
    if sides < 3 {
        return Err(InvalidPolygon::TooFewSides(sides).into());
    }

    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        match try_polygon(sides, rng) {
            Ok(polygon) => {
                debug!("accepted {}-sided polygon on attempt {}", polygon.num_sides(), attempt);
                return Ok(polygon);
            }
            Err(err) => debug!("rejected candidate on attempt {}: {}", attempt, err),
        }
    }
    Err(GeomError::GenerationFailed {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}

/// One zig-zag candidate; any error rejects the attempt.
fn try_polygon<R: Rng>(sides: usize, rng: &mut R) -> Result<Polygon, GeomError> {
    let half = (sides - 1) / 2;
    let increment = 1.0 / ((sides as f64 - 1.0) / 2.0);

    let mut segments = Vec::with_capacity(2 * half + 1);

    // The first vertex sits a hair inside the left edge of the square
    let first = Point::new(COORD_EPSILON, rng.gen::<f64>().max(GAP_MIN))?;

    let mut cursor = first;
    for i in 0..half {
        let end = Point::new(increment * (i + 1) as f64, rng.gen::<f64>().min(GAP_MIN))?;
        segments.push(Segment::new(cursor, end));
        cursor = end;
    }
    for i in (1..=half).rev() {
        let end = Point::new(increment * i as f64, rng.gen::<f64>().max(GAP_MAX))?;
        segments.push(Segment::new(cursor, end));
        cursor = end;
    }

    // Close the loop back to the true first vertex. The chain ends are
    // tracked here rather than read back out of the segments, whose
    // endpoint slots may have been reordered toward the origin.
    segments.push(Segment::new(cursor, first));

    Polygon::new(segments)
}

/// Draws `count` pairwise-distinct points uniformly inside the problem
/// square.
///
/// Raw draws are mapped through `map` into the problem interval; a draw on
/// the closed edge or within tolerance of an already-collected point is
/// rejected and redrawn.
pub fn random_points<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<Point>, GeomError> {
    let mut points: Vec<Point> = Vec::with_capacity(count);
    let budget = MAX_GENERATION_ATTEMPTS + count;
    let mut attempts = 0;

    while points.len() < count {
        attempts += 1;
        if attempts > budget {
            return Err(GeomError::GenerationFailed { attempts });
        }

        let x = map(rng.gen(), 0., 1., Bounds::PROBLEM.min, Bounds::PROBLEM.max);
        let y = map(rng.gen(), 0., 1., Bounds::PROBLEM.min, Bounds::PROBLEM.max);
        if !Bounds::PROBLEM.contains(x) || !Bounds::PROBLEM.contains(y) {
            continue;
        }

        let p = Point::new(x, y)?;
        if points.contains(&p) {
            debug!("duplicate draw {}, redrawing", p);
            continue;
        }
        points.push(p);
    }

    Ok(points)
}
