use crate::domain::{Point, Polygon};

/// z component of (b - o) x (c - o)
fn cross(o: Point, b: Point, c: Point) -> f64 {
    (b.x - o.x) * (c.y - o.y) - (b.y - o.y) * (c.x - o.x)
}

/// Vertices whose turn is non-reflex under the polygon's vertex order
///
/// For each vertex the cross product of the two edge vectors leaving the
/// previous vertex is taken; a non-negative value marks the vertex convex, so
/// collinear vertices are included. The walk starts at the second vertex and
/// ends with the first. Polygons with fewer than 3 vertices have none.
pub fn convex_vertices(polygon: &Polygon) -> Vec<Point> {
    let pts = &polygon.points;
    let n = pts.len();
    if n < 3 {
        return Vec::new();
    }

    (1..=n)
        .filter_map(|i| {
            let prev = pts[i - 1];
            let vertex = pts[i % n];
            let next = pts[(i + 1) % n];
            (cross(prev, vertex, next) >= 0.0).then_some(vertex)
        })
        .collect()
}

/// Boundary-inclusive containment for a counter-clockwise convex polygon
pub fn point_in_convex_polygon(point: Point, polygon: &Polygon) -> bool {
    if polygon.is_empty() {
        return false;
    }
    polygon.edges().all(|(a, b)| cross(a, b, point) >= 0.0)
}
