use serde::Serialize;

use crate::domain::{Point, Polygon};
use crate::error::PlanError;
use crate::geometry::path_length;

use super::routes::{extract_routes, select_path};
use super::search::Planner;

/// Outcome of one planning request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub start: Point,
    pub end: Point,
    /// Selected route, empty when the destination is unreachable
    pub path: Vec<Point>,
    pub length: f64,
    /// Root-to-leaf routes in the tree, successful or not
    pub routes: usize,
    pub nodes: usize,
    pub depth: usize,
}

impl Plan {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Intermediate detour points, without the endpoints
    pub fn waypoints(&self) -> &[Point] {
        if self.path.len() < 2 {
            return &[];
        }
        &self.path[1..self.path.len() - 1]
    }
}

impl Planner {
    /// Search, flatten and select in one call
    pub fn plan(
        &self,
        obstacles: &[Polygon],
        start: Point,
        end: Point,
    ) -> Result<Plan, PlanError> {
        let (tree, stats) = self.search_with_stats(obstacles, start, end)?;
        let routes = extract_routes(&tree);
        let path = select_path(&routes, end);

        Ok(Plan {
            start,
            end,
            length: path_length(&path),
            path,
            routes: routes.len(),
            nodes: stats.nodes,
            depth: stats.deepest,
        })
    }
}
