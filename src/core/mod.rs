// Shared math helpers

pub mod math;

pub use math::{clamp, Rect};
