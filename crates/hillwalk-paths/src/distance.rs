use hillwalk_core::Point;

/// Manhattan (L1) distance between two points.
///
/// A lower bound on the number of 4-directional steps between them.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
