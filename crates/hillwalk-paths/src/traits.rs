use hillwalk_core::Point;

/// Minimal search interface: enumerates the traversable neighbours of a cell.
///
/// Implementations define the implicit graph explored by
/// [`PathRange::bfs_search`](crate::PathRange::bfs_search).
pub trait Pather {
    /// Append neighbours of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
