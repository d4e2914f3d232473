//! Text rendering of a scene on the integer grid
//!
//! One character per cell, row `y` printed on line `y` (y grows downward).
//! When several classes apply, the first in [`CellKind`] order wins.

use crate::domain::{Point, Polygon};
use crate::geometry::{distance_to_line, half_plane_side, point_in_convex_polygon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Start,
    End,
    /// An obstacle vertex
    Apex,
    Obstacle,
    Path,
    Empty,
}

impl CellKind {
    pub fn symbol(self) -> char {
        match self {
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::Apex => '+',
            CellKind::Obstacle => '#',
            CellKind::Path => '*',
            CellKind::Empty => '.',
        }
    }
}

/// Cell lies on a path leg: within half a cell of the leg's line and between
/// its endpoints
fn on_path(cell: Point, path: &[Point]) -> bool {
    path.windows(2).any(|leg| {
        let (p0, p1) = (leg[0], leg[1]);
        distance_to_line(p0, p1, cell).round() == 0.0
            && half_plane_side(p0, p1, cell)
            && half_plane_side(p1, p0, cell)
    })
}

/// Classify one grid cell. Obstacles are expected in counter-clockwise order.
pub fn classify_cell(
    cell: Point,
    obstacles: &[Polygon],
    start: Point,
    end: Point,
    path: &[Point],
) -> CellKind {
    if cell == start {
        CellKind::Start
    } else if cell == end {
        CellKind::End
    } else if obstacles.iter().any(|o| o.has_vertex(cell)) {
        CellKind::Apex
    } else if obstacles.iter().any(|o| point_in_convex_polygon(cell, o)) {
        CellKind::Obstacle
    } else if on_path(cell, path) {
        CellKind::Path
    } else {
        CellKind::Empty
    }
}

/// Render a `width` x `height` grid, one line per row
pub fn render_grid(
    width: u32,
    height: u32,
    obstacles: &[Polygon],
    start: Point,
    end: Point,
    path: &[Point],
) -> String {
    let outlines: Vec<Polygon> = obstacles.iter().map(Polygon::to_counter_clockwise).collect();
    let mut out = String::with_capacity(((width + 1) * height) as usize);

    for y in 0..height {
        for x in 0..width {
            let cell = Point::new(x as f64, y as f64);
            out.push(classify_cell(cell, &outlines, start, end, path).symbol());
        }
        out.push('\n');
    }
    out
}
