//! Recursive visibility search
//!
//! From the current origin the search first tries the straight segment to the
//! destination. When an obstacle blocks it, every waypoint next to an obstacle
//! corner that is directly visible from the origin becomes a child, and the
//! search continues from each of them. Waypoints already seen on the branch
//! are skipped, and an explicit depth and node budget caps the whole tree.

use std::borrow::Cow;

use crate::domain::{Point, Polygon, Segment};
use crate::error::PlanError;
use crate::geometry::segment_polygon_intersections;

use super::waypoints::generate_waypoints;

fn default_max_depth() -> usize {
    64
}

fn default_max_nodes() -> usize {
    200_000
}

/// Limits and input policy for one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Deepest level (edges from the root) a node may be expanded at
    pub max_depth: usize,
    /// Total nodes the tree may hold
    pub max_nodes: usize,
    /// Reverse clockwise obstacles before searching
    pub normalize_winding: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_nodes: default_max_nodes(),
            normalize_winding: true,
        }
    }
}

impl SearchConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_normalize_winding(mut self, normalize: bool) -> Self {
        self.normalize_winding = normalize;
        self
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.max_depth == 0 {
            return Err(PlanError::invalid_config("max_depth must be positive"));
        }
        if self.max_nodes == 0 {
            return Err(PlanError::invalid_config("max_nodes must be positive"));
        }
        Ok(())
    }
}

/// One node of the route tree
///
/// The root holds the search origin. A leaf holding the destination ends a
/// successful route; any other leaf is a dead branch.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteNode {
    pub point: Point,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn leaf(point: Point) -> Self {
        Self {
            point,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(RouteNode::node_count).sum::<usize>()
    }

    /// Edges on the longest root-to-leaf walk
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Counters collected while building a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: usize,
    pub deepest: usize,
}

/// Route planner over a fixed search configuration
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: SearchConfig,
}

impl Planner {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Build the route tree from `origin` toward `destination`
    pub fn search(
        &self,
        obstacles: &[Polygon],
        origin: Point,
        destination: Point,
    ) -> Result<RouteNode, PlanError> {
        self.search_with_stats(obstacles, origin, destination)
            .map(|(tree, _)| tree)
    }

    /// Same as [`Planner::search`], also returning the search counters
    pub fn search_with_stats(
        &self,
        obstacles: &[Polygon],
        origin: Point,
        destination: Point,
    ) -> Result<(RouteNode, SearchStats), PlanError> {
        self.config.validate()?;
        check_inputs(obstacles, origin, destination)?;

        let obstacles: Cow<'_, [Polygon]> = if self.config.normalize_winding {
            Cow::Owned(
                obstacles
                    .iter()
                    .map(Polygon::to_counter_clockwise)
                    .collect(),
            )
        } else {
            Cow::Borrowed(obstacles)
        };

        let mut state = SearchState {
            obstacles: &obstacles,
            destination,
            config: &self.config,
            stats: SearchStats::default(),
        };
        let tree = state.expand(origin, &[], 0)?;
        Ok((tree, state.stats))
    }
}

/// Build a route tree with the default configuration
pub fn search(
    obstacles: &[Polygon],
    origin: Point,
    destination: Point,
) -> Result<RouteNode, PlanError> {
    Planner::default().search(obstacles, origin, destination)
}

fn check_inputs(obstacles: &[Polygon], origin: Point, destination: Point) -> Result<(), PlanError> {
    if !origin.is_finite() {
        return Err(PlanError::non_finite("origin"));
    }
    if !destination.is_finite() {
        return Err(PlanError::non_finite("destination"));
    }
    if let Some(i) = obstacles.iter().position(|o| !o.is_finite()) {
        return Err(PlanError::non_finite(format!("obstacle {}", i)));
    }
    Ok(())
}

struct SearchState<'a> {
    obstacles: &'a [Polygon],
    destination: Point,
    config: &'a SearchConfig,
    stats: SearchStats,
}

impl SearchState<'_> {
    fn count_node(&mut self) -> Result<(), PlanError> {
        self.stats.nodes += 1;
        if self.stats.nodes > self.config.max_nodes {
            return Err(self.exhausted());
        }
        Ok(())
    }

    fn exhausted(&self) -> PlanError {
        PlanError::SearchExhausted {
            max_depth: self.config.max_depth,
            max_nodes: self.config.max_nodes,
            nodes: self.stats.nodes,
        }
    }

    /// The straight segment to the destination touches each obstacle at most
    /// at its own start point
    fn sees_destination(&self, origin: Point) -> bool {
        let direct = Segment::new(origin, self.destination);
        self.obstacles.iter().all(|obstacle| {
            let hits = segment_polygon_intersections(&direct, obstacle);
            hits.is_empty() || (hits.len() == 1 && hits[0] == origin)
        })
    }

    /// No obstacle edge meets the segment anywhere
    fn clear_line(&self, from: Point, to: Point) -> bool {
        let seg = Segment::new(from, to);
        self.obstacles
            .iter()
            .all(|obstacle| segment_polygon_intersections(&seg, obstacle).is_empty())
    }

    fn expand(
        &mut self,
        origin: Point,
        used: &[Point],
        depth: usize,
    ) -> Result<RouteNode, PlanError> {
        if depth > self.config.max_depth {
            return Err(self.exhausted());
        }
        self.count_node()?;
        self.stats.deepest = self.stats.deepest.max(depth);

        let mut node = RouteNode::leaf(origin);

        if self.sees_destination(origin) {
            self.count_node()?;
            self.stats.deepest = self.stats.deepest.max(depth + 1);
            node.children.push(RouteNode::leaf(self.destination));
            return Ok(node);
        }

        let direct_apexes: Vec<Point> = generate_waypoints(self.obstacles, origin)
            .into_iter()
            .filter(|&waypoint| self.clear_line(origin, waypoint))
            .collect();

        let mut branch_used = direct_apexes.clone();
        branch_used.extend_from_slice(used);

        for &apex in direct_apexes.iter().filter(|a| !used.contains(a)) {
            let child = self.expand(apex, &branch_used, depth + 1)?;
            node.children.push(child);
        }

        Ok(node)
    }
}
