//! Domain types shared across the pipeline.

pub mod bar;
pub mod params;

pub use bar::Bar;
pub use params::{Interval, ScreenParams};
