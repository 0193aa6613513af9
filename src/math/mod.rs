pub mod angle_2d;
pub mod locate_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance used wherever an accumulated angular sum is compared to a
/// multiple of π. Vertex coincidence is tested exactly, without tolerance.
pub const TOLERANCE: f64 = 1e-9;
