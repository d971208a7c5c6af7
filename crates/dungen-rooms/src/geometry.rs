//! Shape tests used by the generators and the placement engine.

use dungen_core::Range;

/// Gap kept between placed rooms by [`overlaps`].
pub const ROOM_MARGIN: i32 = 1;

/// Whether two boxes intersect once each is grown by `margin` tiles.
///
/// Boxes that merely touch count as overlapping, so with a margin of 1 any
/// two rooms that pass this test are separated by unclaimed space.
#[inline]
pub fn overlaps(a: Range, b: Range, margin: i32) -> bool {
    a.min.x <= b.max.x + margin
        && a.max.x + margin >= b.min.x
        && a.min.y <= b.max.y + margin
        && a.max.y + margin >= b.min.y
}

/// Whether the offset `(dx, dy)` from an ellipse center lies strictly inside
/// an ellipse with radii `rx`, `ry`.
#[inline]
pub fn inside_ellipse(dx: i32, dy: i32, rx: i32, ry: i32) -> bool {
    let (dx, dy, rx, ry) = (dx as i64, dy as i64, rx as i64, ry as i64);
    dx * dx * ry * ry + dy * dy * rx * rx < rx * rx * ry * ry
}
