use crate::domain::Point;

/// Euclidean distance
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Perpendicular distance from `point` to the infinite line through p1 and p2
///
/// Returns NaN when p1 == p2 (no line is defined).
pub fn distance_to_line(p1: Point, p2: Point, point: Point) -> f64 {
    let a = p1.y - p2.y;
    let b = p2.x - p1.x;
    (a * point.x + b * point.y + p1.x * p2.y - p2.x * p1.y).abs() / (a * a + b * b).sqrt()
}

/// Total length of a polyline
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}
