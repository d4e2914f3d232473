//! Obstacle layouts with their start and end points

pub mod loader;
pub mod validation;

use serde::{Deserialize, Serialize};

use crate::domain::{Point, Polygon};

pub use loader::{SceneError, load_scene};
pub use validation::{ValidationResult, validate_scene};

fn default_start() -> Point {
    Point::new(0.0, 0.0)
}

fn default_end() -> Point {
    Point::new(20.0, 20.0)
}

/// A planning problem: obstacles plus the two endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default = "default_start")]
    pub start: Point,
    #[serde(default = "default_end")]
    pub end: Point,
    #[serde(default)]
    pub obstacles: Vec<Polygon>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            obstacles: Vec::new(),
        }
    }
}

impl Scene {
    pub fn new(start: Point, end: Point, obstacles: Vec<Polygon>) -> Self {
        Self {
            start,
            end,
            obstacles,
        }
    }

    /// Built-in layout on a 50x50 grid: a short wall next to the start, a
    /// bar above it and two large blocks to the right
    pub fn demo() -> Self {
        Self::new(
            default_start(),
            default_end(),
            vec![
                Polygon::from(vec![(1.0, 0.0), (2.0, 0.0), (2.0, 15.0), (1.0, 15.0)]),
                Polygon::from(vec![(0.0, 17.0), (20.0, 17.0), (20.0, 19.0), (0.0, 19.0)]),
                Polygon::from(vec![(5.0, 0.0), (60.0, 0.0), (60.0, 14.0), (5.0, 14.0)]),
                Polygon::from(vec![(24.0, 16.0), (60.0, 16.0), (60.0, 24.0), (24.0, 24.0)]),
            ],
        )
    }

    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    pub fn with_end(mut self, end: Point) -> Self {
        self.end = end;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene() {
        let scene = Scene::demo();
        assert_eq!(scene.obstacles.len(), 4);
        assert!(scene.obstacles.iter().all(Polygon::is_valid));
        assert_eq!(scene.start, Point::new(0.0, 0.0));
        assert_eq!(scene.end, Point::new(20.0, 20.0));
    }

    #[test]
    fn test_endpoint_overrides() {
        let scene = Scene::demo()
            .with_start(Point::new(3.0, 16.0))
            .with_end(Point::new(40.0, 30.0));
        assert_eq!(scene.start, Point::new(3.0, 16.0));
        assert_eq!(scene.end, Point::new(40.0, 30.0));
    }
}
