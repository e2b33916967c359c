pub mod classify;

pub use classify::{classify, Region};
