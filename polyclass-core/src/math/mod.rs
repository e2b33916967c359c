pub mod bounds;
pub mod map;

pub use bounds::{Bounds, COORD_EPSILON, EPSILON, PEDANTIC};
pub use map::map;
