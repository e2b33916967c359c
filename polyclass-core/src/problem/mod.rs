pub mod generate;

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use crate::{
    analysis::classify::{classify, Region},
    error::GeomError,
    geometry::{point::Point, polygon::Polygon},
};

/// Seed for the convenience constructor, fixed so repeated runs draw the
/// same problems.
pub const DEFAULT_SEED: u64 = 1337;

/// The three disjoint classification sets, together partitioning the query
/// set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Solution {
    pub on_boundary: Vec<Point>,
    pub inside: Vec<Point>,
    pub outside: Vec<Point>,
}

/// A polygon, a set of query points, and (once solved) their classification.
///
/// Solving is a one-way transition: the first `solve` computes and caches
/// the partition, later calls are no-ops. The polygon, query points and
/// cached solution are owned here and exposed read-only.
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    polygon: Polygon,
    points: Vec<Point>,
    solution: Option<Solution>,
}

impl Problem {
    pub fn new(polygon: Polygon, points: Vec<Point>) -> Problem {
        Problem {
            polygon,
            points,
            solution: None,
        }
    }

    /// Generates a random problem from the injected random source.
    pub fn generate<R: Rng>(sides: usize, count: usize, rng: &mut R) -> Result<Problem, GeomError> {
        let polygon = generate::random_polygon(sides, rng)?;
        let points = generate::random_points(count, rng)?;
        Ok(Problem::new(polygon, points))
    }

    /// Reproducible generation from the fixed default seed.
    pub fn seeded(sides: usize, count: usize) -> Result<Problem, GeomError> {
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        Problem::generate(sides, count, &mut rng)
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// The cached classification, present once `solve` has run.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Classifies one point against the owned polygon.
    pub fn classify(&self, p: &Point) -> Result<Region, GeomError> {
        classify(&self.polygon, p)
    }

    /// Classifies every query point into the three sets and caches the
    /// result; already-solved problems return without reclassifying.
    pub fn solve(&mut self) -> Result<(), GeomError> {
        if self.solution.is_some() {
            return Ok(());
        }

        let mut solution = Solution::default();
        for p in &self.points {
            match classify(&self.polygon, p)? {
                Region::OnBoundary => solution.on_boundary.push(*p),
                Region::Inside => solution.inside.push(*p),
                Region::Outside => solution.outside.push(*p),
            }
        }
        debug!(
            "classified {} points: {} on boundary, {} inside, {} outside",
            self.points.len(),
            solution.on_boundary.len(),
            solution.inside.len(),
            solution.outside.len(),
        );
        self.solution = Some(solution);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::segment::Segment;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(pt(x0, y0), pt(x1, y1))
    }

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            seg(0., 0., 1., 0.),
            seg(1., 0., 1., 1.),
            seg(1., 1., 0., 1.),
            seg(0., 1., 0., 0.),
        ])
        .unwrap()
    }

    fn square_problem() -> Problem {
        Problem::new(
            unit_square(),
            vec![pt(0.5, 0.5), pt(2., 2.), pt(0.5, 0.)],
        )
    }

    #[test]
    fn test_solve_partitions() {
        let mut problem = square_problem();
        assert!(!problem.is_solved());
        problem.solve().unwrap();
        assert!(problem.is_solved());

        let solution = problem.solution().unwrap();
        assert_eq!(solution.inside, vec![pt(0.5, 0.5)]);
        assert_eq!(solution.outside, vec![pt(2., 2.)]);
        assert_eq!(solution.on_boundary, vec![pt(0.5, 0.)]);
        assert_eq!(
            solution.inside.len() + solution.outside.len() + solution.on_boundary.len(),
            problem.points().len()
        );
    }

    #[test]
    fn test_solve_idempotent() {
        let mut problem = square_problem();
        problem.solve().unwrap();
        let first = problem.solution().unwrap().clone();
        problem.solve().unwrap();
        assert_eq!(problem.solution().unwrap(), &first);
    }

    #[test]
    fn test_classify_delegates() {
        let problem = square_problem();
        assert_eq!(problem.classify(&pt(0.5, 0.5)).unwrap(), Region::Inside);
        assert_eq!(problem.classify(&pt(2., 2.)).unwrap(), Region::Outside);
        assert_eq!(problem.classify(&pt(0.5, 0.)).unwrap(), Region::OnBoundary);
    }

    #[test]
    fn test_seeded_reproducible() {
        let a = Problem::seeded(7, 12).unwrap();
        let b = Problem::seeded(7, 12).unwrap();
        assert_eq!(a.points().len(), 12);
        for (p, q) in a.points().iter().zip(b.points()) {
            assert_eq!(p.x, q.x);
            assert_eq!(p.y, q.y);
        }
        for (s, t) in a.polygon().iter().zip(b.polygon()) {
            assert_eq!(s.start().x, t.start().x);
            assert_eq!(s.end().y, t.end().y);
        }
    }
}
