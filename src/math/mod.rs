//! Elementary colour arithmetic over pixels and grids

/// Average colour computation
pub mod average;
/// Pixel and grid distance metrics
pub mod distance;

pub use average::average_color;
pub use distance::{grid_distance, pixel_distance};
