//! Point-in-polygon hit testing under an affine offset/scale transform.

use crate::data::Frame;
use crate::geom::{Point, Polygon};

/// Denominator floor for horizontal edges; keeps the crossing test from
/// dividing by zero while leaving real edges untouched.
const EDGE_EPSILON: f32 = 1e-6;

/// Even-odd (ray cast) containment test. Each vertex is transformed as
/// `offset + vertex * scale` before testing. Degenerate rings are never
/// inside.
pub fn point_in_polygon(query: Point, polygon: &Polygon, offset: Point, scale: f32) -> bool {
    if polygon.is_degenerate() {
        return false;
    }
    let mut inside = false;
    for (a, b) in polygon.edges() {
        let (xi, yi) = (offset.x + a.x * scale, offset.y + a.y * scale);
        let (xj, yj) = (offset.x + b.x * scale, offset.y + b.y * scale);
        if (yi > query.y) == (yj > query.y) {
            continue;
        }
        let dy = if yj - yi != 0.0 { yj - yi } else { EDGE_EPSILON };
        if query.x < (xj - xi) * (query.y - yi) / dy + xi {
            inside = !inside;
        }
    }
    inside
}

/// True when `query` falls inside any of the frame's collision rings;
/// stops at the first hit.
pub fn frame_hit(frame: &Frame, query: Point, offset: Point, scale: f32) -> bool {
    frame
        .polys
        .iter()
        .any(|poly| point_in_polygon(query, poly, offset, scale))
}
