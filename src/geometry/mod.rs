pub mod convexity;
pub mod distance;
pub mod intersection;

pub use convexity::{convex_vertices, point_in_convex_polygon};
pub use distance::{distance, distance_to_line, path_length};
pub use intersection::{half_plane_side, segment_intersection, segment_polygon_intersections};
