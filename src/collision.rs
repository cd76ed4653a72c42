use macroquad::math::Rect;

/// Axis-aligned bounding-box intersection with closed-interval semantics:
/// rectangles that merely touch along an edge count as overlapping.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() <= b.right()
        && a.right() >= b.left()
        && a.top() <= b.bottom()
        && a.bottom() >= b.top()
}
