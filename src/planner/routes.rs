use crate::domain::Point;
use crate::geometry::path_length;

use super::search::RouteNode;

/// Every root-to-leaf point sequence of the tree, depth-first
pub fn extract_routes(tree: &RouteNode) -> Vec<Vec<Point>> {
    let mut routes = Vec::new();
    let mut prefix = Vec::new();
    collect_routes(tree, &mut prefix, &mut routes);
    routes
}

fn collect_routes(node: &RouteNode, prefix: &mut Vec<Point>, out: &mut Vec<Vec<Point>>) {
    prefix.push(node.point);
    if node.is_leaf() {
        out.push(prefix.clone());
    } else {
        for child in &node.children {
            collect_routes(child, prefix, out);
        }
    }
    prefix.pop();
}

/// Shortest route that ends at `destination`
///
/// Ties go to the route extracted first. Returns an empty vector when no
/// route reaches the destination.
pub fn select_path(routes: &[Vec<Point>], destination: Point) -> Vec<Point> {
    routes
        .iter()
        .filter(|route| route.last() == Some(&destination))
        .map(|route| (path_length(route), route))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, route)| route.clone())
        .unwrap_or_default()
}
