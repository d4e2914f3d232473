//! tangentpath - Short collision-free routes around polygonal obstacles
//!
//! The planner searches outward from the start point through waypoints placed
//! next to obstacle corners, building a tree of visible detours, and picks the
//! shortest branch that reaches the end point.

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod output;
pub mod planner;
pub mod scene;

pub use domain::{Point, Polygon, Segment};
pub use error::PlanError;
pub use planner::{Plan, Planner, SearchConfig};
