//! Plain geometry value types shared by the pack model and the hit tester.

use serde::{Deserialize, Serialize};

/// 2D point in frame-local pixel units.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle (position + size) in pixel units.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Ordered ring of points; the last point implicitly connects back to the
/// first. Rings with fewer than two points enclose nothing and are skipped
/// by consumers.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
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

    /// A ring needs at least two points to enclose anything.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// Iterate the ring as (current, previous) vertex pairs, the edge
    /// order the even-odd test walks.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| {
            let j = if i == 0 { n - 1 } else { i - 1 };
            (self.points[i], self.points[j])
        })
    }
}
