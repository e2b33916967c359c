#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("coordinate {value} outside the open interval ({min}, {max})")]
    OutOfBounds { value: f64, min: f64, max: f64 },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidPolygon {
    #[error("vertex ({x}, {y}) has degree {degree}, expected 2")]
    BadDegree { x: f64, y: f64, degree: usize },

    #[error("segments {a} and {b} cross without sharing an endpoint")]
    Crossing { a: String, b: String },

    #[error("a polygon needs at least 3 sides, got {0}")]
    TooFewSides(usize),
}

/// Boundary error for polygon construction, problem solving and generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Polygon(#[from] InvalidPolygon),

    #[error("gave up after {attempts} generation attempts")]
    GenerationFailed { attempts: usize },
}
