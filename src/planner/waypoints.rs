use crate::domain::{Point, Polygon};
use crate::geometry::convex_vertices;

/// Unit offsets around a corner, in generation order
const NEIGHBOR_OFFSETS: [(f64, f64); 8] = [
    (-1.0, -1.0),
    (-1.0, 0.0),
    (-1.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (1.0, -1.0),
    (1.0, 0.0),
    (1.0, 1.0),
];

/// Candidate detour points next to every obstacle's convex corners
///
/// Each convex vertex contributes its 8 grid neighbours. Points with a
/// negative coordinate and the current `origin` are dropped. Duplicates are
/// kept, both within one obstacle and across obstacles.
pub fn generate_waypoints(obstacles: &[Polygon], origin: Point) -> Vec<Point> {
    obstacles
        .iter()
        .flat_map(convex_vertices)
        .flat_map(|corner| {
            NEIGHBOR_OFFSETS
                .iter()
                .map(move |&(dx, dy)| corner.offset(dx, dy))
        })
        .filter(|p| p.x >= 0.0 && p.y >= 0.0)
        .filter(|p| *p != origin)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_corner_neighbors() {
        let triangle = Polygon::from(vec![(5.0, 5.0), (9.0, 5.0), (5.0, 9.0)]);
        let waypoints = generate_waypoints(&[triangle], Point::new(0.0, 0.0));

        // 3 convex corners x 8 neighbours, none negative
        assert_eq!(waypoints.len(), 24);
        assert_eq!(waypoints[0], Point::new(8.0, 4.0));
        assert!(waypoints.contains(&Point::new(4.0, 4.0)));
        assert!(!waypoints.contains(&Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_negative_coordinates_dropped() {
        let square = Polygon::from(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let waypoints = generate_waypoints(&[square], Point::new(10.0, 10.0));
        assert!(waypoints.iter().all(|p| p.x >= 0.0 && p.y >= 0.0));
        // Corner (0, 0) keeps only (0, 1), (1, 0) and (1, 1)
        assert_eq!(waypoints.len(), 3 + 5 + 8 + 5);
    }

    #[test]
    fn test_origin_excluded() {
        let square = Polygon::from(vec![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
        let origin = Point::new(0.0, 0.0);
        let waypoints = generate_waypoints(&[square], origin);
        assert!(!waypoints.contains(&origin));
    }

    #[test]
    fn test_duplicates_preserved_across_obstacles() {
        let a = Polygon::from(vec![(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 4.0)]);
        let waypoints = generate_waypoints(&[a.clone(), a], Point::new(0.0, 0.0));
        let count = waypoints
            .iter()
            .filter(|p| **p == Point::new(5.0, 5.0))
            .count();
        assert_eq!(count, 2);
        assert_eq!(waypoints.len(), 64);
    }

    #[test]
    fn test_degenerate_obstacle_contributes_nothing() {
        let line = Polygon::from(vec![(2.0, 2.0), (4.0, 2.0)]);
        assert!(generate_waypoints(&[line], Point::new(0.0, 0.0)).is_empty());
    }
}
