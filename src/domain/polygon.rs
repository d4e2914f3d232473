use geo::Area;
use serde::{Deserialize, Serialize};

use super::Point;

/// Vertex ordering of a polygon, derived from the sign of its area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Fewer than 3 vertices or zero enclosed area
    Degenerate,
}

/// A closed obstacle outline
///
/// The last vertex implicitly connects back to the first. Convexity and
/// containment queries assume counter-clockwise order; use
/// [`Polygon::to_counter_clockwise`] when the source winding is unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enough vertices for convexity and containment queries
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(Point::is_finite)
    }

    /// Closed edge loop, including the wrap-around edge from last to first
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace area: positive for counter-clockwise, negative for clockwise
    pub fn signed_area(&self) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }
        let exterior: geo::LineString<f64> = self.points.iter().copied().collect();
        geo::Polygon::new(exterior, vec![]).signed_area()
    }

    pub fn winding(&self) -> Winding {
        let area = self.signed_area();
        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    /// Copy of this polygon with counter-clockwise vertex order
    ///
    /// Clockwise outlines are reversed; everything else is returned as-is.
    pub fn to_counter_clockwise(&self) -> Self {
        match self.winding() {
            Winding::Clockwise => Self::new(self.points.iter().rev().copied().collect()),
            _ => self.clone(),
        }
    }

    /// Vertex equality check used when classifying grid cells
    pub fn has_vertex(&self, point: Point) -> bool {
        self.points.contains(&point)
    }
}

impl From<Vec<(f64, f64)>> for Polygon {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points.into_iter().map(Point::from).collect())
    }
}
