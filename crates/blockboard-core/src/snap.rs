//! Grid snapping and rectangle overlap tests.

use kurbo::{Point, Rect, Size};

/// Grid cell size for snapping (matches the visual grid).
pub const GRID_SIZE: f64 = 20.0;

/// Snap a value to the nearest multiple of `grid_size`.
///
/// Deterministic and idempotent: snapping an already-snapped value is a
/// no-op.
pub fn snap(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}

/// Snap a point to the nearest grid intersection.
pub fn snap_point(point: Point, grid_size: f64) -> Point {
    Point::new(snap(point.x, grid_size), snap(point.y, grid_size))
}

/// Snap both dimensions of a size to the grid.
pub fn snap_size(size: Size, grid_size: f64) -> Size {
    Size::new(snap(size.width, grid_size), snap(size.height, grid_size))
}

/// Strict axis-aligned overlap test.
///
/// Rectangles overlap only if they overlap on both axes; rectangles that
/// merely touch along an edge or corner do not count.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}
