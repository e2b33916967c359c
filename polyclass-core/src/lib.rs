//! Random point-in-polygon problems: geometry primitives, a validated
//! simple-polygon type, ray-casting classification, and rejection-sampling
//! generators.

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

// Organized modules
pub mod analysis;
pub mod error;
pub mod geometry;
pub mod math;
pub mod problem;

// Re-export key types for external use
pub use analysis::classify::{classify, Region};
pub use error::{DomainError, GeomError, InvalidPolygon};
pub use geometry::point::Point;
pub use geometry::polygon::Polygon;
pub use geometry::segment::Segment;
pub use math::{map, Bounds, COORD_EPSILON, EPSILON};
pub use problem::{Problem, Solution, DEFAULT_SEED};

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> log::LevelFilter {
    match level {
        Some("error") => log::LevelFilter::Error,
        Some("warn") => log::LevelFilter::Warn,
        Some("info") | Some("") | None => log::LevelFilter::Info,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        Some(level) => panic!("invalid log level: {}", level),
    }
}
