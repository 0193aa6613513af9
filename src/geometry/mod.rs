pub mod bbox;
pub mod polygon;

pub use bbox::{in_bounding_box, Aabb};
pub use polygon::{Polygon, PolygonSet};
