//! Scene validation
//!
//! Checks a scene before planning:
//! - Non-finite coordinates (NaN/Inf) in endpoints or obstacles
//! - Degenerate obstacles (fewer than 3 vertices or zero area)
//! - Clockwise obstacles, which the planner reverses by default
//! - Endpoints inside or on an obstacle

use crate::domain::{Point, Polygon, Winding};
use crate::geometry::point_in_convex_polygon;

use super::Scene;

/// Result of scene validation
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Number of obstacles checked
    pub total: usize,
    /// Obstacles with fewer than 3 vertices or zero area
    pub degenerate: usize,
    /// Obstacles listed in clockwise order
    pub clockwise: usize,
    /// Endpoints or obstacles with NaN/Inf coordinates
    pub non_finite: usize,
    /// Obstacles containing the start point
    pub start_blocked: Vec<usize>,
    /// Obstacles containing the end point
    pub end_blocked: Vec<usize>,
    /// Warning messages for issues found
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// The scene can be planned (all coordinates finite)
    pub fn is_valid(&self) -> bool {
        self.non_finite == 0
    }

    pub fn has_issues(&self) -> bool {
        self.degenerate > 0
            || self.clockwise > 0
            || self.non_finite > 0
            || !self.start_blocked.is_empty()
            || !self.end_blocked.is_empty()
    }

    pub fn summary(&self) -> String {
        if !self.has_issues() {
            format!("Scene valid: {} obstacles, no issues", self.total)
        } else {
            format!(
                "Scene issues: {} obstacles, {} degenerate, {} clockwise, {} non-finite",
                self.total, self.degenerate, self.clockwise, self.non_finite
            )
        }
    }
}

/// Validate a scene and return a detailed report
pub fn validate_scene(scene: &Scene) -> ValidationResult {
    let mut result = ValidationResult {
        total: scene.obstacles.len(),
        ..Default::default()
    };

    for (name, point) in [("start", scene.start), ("end", scene.end)] {
        if !point.is_finite() {
            result.non_finite += 1;
            result
                .warnings
                .push(format!("{} point has NaN/Inf coordinates", name));
        }
    }

    for (i, obstacle) in scene.obstacles.iter().enumerate() {
        if !obstacle.is_finite() {
            result.non_finite += 1;
            result
                .warnings
                .push(format!("Obstacle {} has NaN/Inf coordinates", i));
            continue;
        }

        match obstacle.winding() {
            Winding::Degenerate => {
                result.degenerate += 1;
                result.warnings.push(format!(
                    "Obstacle {} is degenerate ({} vertices, zero area) and adds no detours",
                    i,
                    obstacle.len()
                ));
                continue;
            }
            Winding::Clockwise => result.clockwise += 1,
            Winding::CounterClockwise => {}
        }

        let outline = obstacle.to_counter_clockwise();
        if contains(&outline, scene.start) {
            result.start_blocked.push(i);
            result
                .warnings
                .push(format!("Start {} lies inside or on obstacle {}", scene.start, i));
        }
        if contains(&outline, scene.end) {
            result.end_blocked.push(i);
            result
                .warnings
                .push(format!("End {} lies inside or on obstacle {}", scene.end, i));
        }
    }

    if result.clockwise > 0 {
        result.warnings.push(format!(
            "{} obstacles are clockwise (reversed before planning unless winding is kept)",
            result.clockwise
        ));
    }

    result
}

fn contains(outline: &Polygon, point: Point) -> bool {
    point.is_finite() && point_in_convex_polygon(point, outline)
}
