//! Segment and segment/polygon intersection
//!
//! Lines are solved in `a*x + b*y = c` form and the solution is then clipped
//! to both segments' extents with half-plane tests. An intersection exactly
//! at an endpoint counts.

use crate::domain::{Point, Polygon, Segment};

/// True when `probe` lies on the forward side of the perpendicular through `p1`
/// for the direction `p1 -> p2` (dot product is non-negative)
pub fn half_plane_side(p1: Point, p2: Point, probe: Point) -> bool {
    let (vx, vy) = (p2.x - p1.x, p2.y - p1.y);
    let (wx, wy) = (probe.x - p1.x, probe.y - p1.y);
    vx * wx + vy * wy >= 0.0
}

/// Both half-plane tests for a segment: the probe sits between the two
/// perpendiculars through its endpoints
fn within_extent(seg: &Segment, probe: Point) -> bool {
    half_plane_side(seg.start, seg.end, probe) && half_plane_side(seg.end, seg.start, probe)
}

/// Line coefficients (a, b, c) for `a*x + b*y = c` through the segment
fn line_coefficients(seg: &Segment) -> (f64, f64, f64) {
    let a = seg.end.y - seg.start.y;
    let b = seg.start.x - seg.end.x;
    let c = a * seg.start.x + b * seg.start.y;
    (a, b, c)
}

/// Intersection point of two segments, if any
///
/// Parallel and collinear segments never intersect here (zero determinant).
pub fn segment_intersection(s0: &Segment, s1: &Segment) -> Option<Point> {
    let (a1, b1, c1) = line_coefficients(s0);
    let (a2, b2, c2) = line_coefficients(s1);

    let determinant = a1 * b2 - a2 * b1;
    if determinant == 0.0 {
        return None;
    }

    let x = (b2 * c1 - b1 * c2) / determinant;
    let y = (a1 * c2 - a2 * c1) / determinant;
    let point = Point::new(x, y);

    (within_extent(s0, point) && within_extent(s1, point)).then_some(point)
}

/// All distinct points where `seg` meets the polygon's closed edge loop
///
/// Points are returned in edge order; a point shared by two edges (a vertex
/// hit) appears once.
pub fn segment_polygon_intersections(seg: &Segment, polygon: &Polygon) -> Vec<Point> {
    let mut hits: Vec<Point> = Vec::new();

    for (a, b) in polygon.edges() {
        if let Some(p) = segment_intersection(seg, &Segment::new(a, b))
            && !hits.contains(&p)
        {
            hits.push(p);
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    fn square() -> Polygon {
        Polygon::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    }

    #[test]
    fn test_half_plane_side() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 0.0);
        assert!(half_plane_side(a, b, Point::new(1.0, 5.0)));
        assert!(half_plane_side(a, b, Point::new(0.0, -3.0)));
        assert!(!half_plane_side(a, b, Point::new(-0.5, 1.0)));
    }

    #[test]
    fn test_crossing_segments() {
        let p = segment_intersection(&seg(0.0, 0.0, 4.0, 4.0), &seg(0.0, 4.0, 4.0, 0.0));
        assert_eq!(p, Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let s0 = seg(0.0, 1.0, 5.0, 3.0);
        let s1 = seg(2.0, -1.0, 3.0, 6.0);
        let forward = segment_intersection(&s0, &s1);
        let backward = segment_intersection(&s1, &s0);
        assert!(forward.is_some());
        let (f, b) = (forward.unwrap(), backward.unwrap());
        assert!((f.x - b.x).abs() < 1e-12);
        assert!((f.y - b.y).abs() < 1e-12);

        // Direction does not affect whether the segments meet
        assert!(segment_intersection(&s0.reversed(), &s1.reversed()).is_some());
    }

    #[test]
    fn test_parallel_and_collinear() {
        assert_eq!(
            segment_intersection(&seg(0.0, 0.0, 4.0, 0.0), &seg(0.0, 1.0, 4.0, 1.0)),
            None
        );
        assert_eq!(
            segment_intersection(&seg(0.0, 0.0, 4.0, 0.0), &seg(2.0, 0.0, 6.0, 0.0)),
            None
        );
    }

    #[test]
    fn test_line_hit_outside_extent() {
        // Lines cross at (5, 5), beyond the end of the first segment
        assert_eq!(
            segment_intersection(&seg(0.0, 0.0, 2.0, 2.0), &seg(0.0, 10.0, 10.0, 0.0)),
            None
        );
        // Lines cross at (1, 0), before the start of the second segment
        assert_eq!(
            segment_intersection(&seg(0.0, 0.0, 4.0, 0.0), &seg(1.0, 1.0, 1.0, 3.0)),
            None
        );
    }

    #[test]
    fn test_endpoint_touch_counts() {
        let p = segment_intersection(&seg(0.0, 0.0, 1.0, 0.0), &seg(1.0, 0.0, 1.0, 5.0));
        assert_eq!(p, Some(Point::new(1.0, 0.0)));
    }

    #[test]
    fn test_segment_outside_polygon() {
        let hits = segment_polygon_intersections(&seg(5.0, 0.0, 5.0, 4.0), &square());
        assert!(hits.is_empty());

        let hits = segment_polygon_intersections(&seg(-1.0, 5.0, 6.0, 9.0), &square());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_segment_through_polygon() {
        let hits = segment_polygon_intersections(&seg(-1.0, 2.0, 5.0, 2.0), &square());
        assert_eq!(hits, vec![Point::new(4.0, 2.0), Point::new(0.0, 2.0)]);
    }

    #[test]
    fn test_segment_entering_polygon() {
        let hits = segment_polygon_intersections(&seg(2.0, 2.0, 2.0, 7.0), &square());
        assert_eq!(hits, vec![Point::new(2.0, 4.0)]);
    }

    #[test]
    fn test_vertex_hit_deduplicated() {
        // Diagonal through two opposite corners touches each corner via two edges
        let hits = segment_polygon_intersections(&seg(-1.0, -1.0, 5.0, 5.0), &square());
        assert_eq!(hits, vec![Point::new(0.0, 0.0), Point::new(4.0, 4.0)]);
    }

    #[test]
    fn test_empty_polygon() {
        let hits = segment_polygon_intersections(&seg(0.0, 0.0, 1.0, 1.0), &Polygon::default());
        assert!(hits.is_empty());
    }
}
