pub mod point;
pub mod polygon;

pub use point::{Point, Segment};
pub use polygon::{Polygon, Winding};
