pub mod plan;
pub mod routes;
pub mod search;
pub mod waypoints;

pub use plan::Plan;
pub use routes::{extract_routes, select_path};
pub use search::{Planner, RouteNode, SearchConfig, SearchStats, search};
pub use waypoints::generate_waypoints;
