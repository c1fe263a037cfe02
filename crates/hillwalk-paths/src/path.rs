//! Path reconstruction from a [`SearchTree`]'s predecessor map.

use std::fmt;

use hillwalk_core::Point;

use crate::bfs::SearchTree;
use crate::pathrange::{NO_PARENT, UNREACHABLE};

impl SearchTree {
    /// Reconstruct the path from the source to `target`.
    ///
    /// Returns the cells visited after the source, ending with `target`.
    /// The path is empty when `target` is the source.
    pub fn path_to(&self, target: Point) -> Result<Vec<Point>, PathError> {
        let mut ci = self.visited_index(target)?;
        let mut steps = Vec::with_capacity(self.dist[ci] as usize);
        while self.parent[ci] != NO_PARENT {
            steps.push(self.rng.point_at(ci));
            ci = self.parent[ci];
        }
        steps.reverse();
        Ok(steps)
    }

    /// Number of steps from the source to `target`, counted by walking the
    /// predecessor chain.
    pub fn path_length(&self, target: Point) -> Result<usize, PathError> {
        let mut ci = self.visited_index(target)?;
        let mut len = 0;
        while self.parent[ci] != NO_PARENT {
            ci = self.parent[ci];
            len += 1;
        }
        Ok(len)
    }

    fn visited_index(&self, target: Point) -> Result<usize, PathError> {
        let i = self
            .rng
            .index_of(target)
            .ok_or(PathError::OutOfRange(target))?;
        if self.dist[i] == UNREACHABLE {
            return Err(PathError::Unreachable(target));
        }
        Ok(i)
    }
}

/// Errors that can occur when reconstructing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The target was never discovered by the search.
    Unreachable(Point),
    /// The target lies outside the searched range.
    OutOfRange(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable(p) => write!(f, "path: target {p} was not reached"),
            Self::OutOfRange(p) => write!(f, "path: target {p} is outside the searched range"),
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathRange;
    use crate::bfs::tests::walled;
    use hillwalk_core::Range;

    #[test]
    fn path_follows_detour() {
        // .#.
        // ...
        let rng = Range::new(0, 0, 3, 2);
        let pather = walled(rng, &[(1, 0)]);
        let mut pr = PathRange::new(rng);
        let goal = Point::new(2, 0);
        let tree = pr.bfs_search(&pather, Point::new(0, 0), |p| p == goal);

        let path = tree.path_to(goal).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 0),
            ]
        );
        assert_eq!(tree.path_length(goal), Ok(4));
        assert_eq!(tree.distance_at(goal), 4);
    }

    #[test]
    fn path_to_source_is_empty() {
        let rng = Range::new(0, 0, 1, 1);
        let pather = walled(rng, &[]);
        let mut pr = PathRange::new(rng);
        let src = Point::ZERO;
        let tree = pr.bfs_search(&pather, src, |p| p == src);
        assert_eq!(tree.path_to(src), Ok(vec![]));
        assert_eq!(tree.path_length(src), Ok(0));
    }

    #[test]
    fn unreached_target_is_an_error() {
        let rng = Range::new(0, 0, 3, 1);
        let pather = walled(rng, &[(1, 0)]);
        let mut pr = PathRange::new(rng);
        let goal = Point::new(2, 0);
        let tree = pr.bfs_search(&pather, Point::new(0, 0), |p| p == goal);
        assert_eq!(tree.path_length(goal), Err(PathError::Unreachable(goal)));
        assert_eq!(tree.path_to(goal), Err(PathError::Unreachable(goal)));
    }

    #[test]
    fn out_of_range_target_is_an_error() {
        let rng = Range::new(0, 0, 2, 2);
        let pather = walled(rng, &[]);
        let mut pr = PathRange::new(rng);
        let tree = pr.bfs_search(&pather, Point::ZERO, |_| false);
        let outside = Point::new(-1, 0);
        assert_eq!(tree.path_length(outside), Err(PathError::OutOfRange(outside)));
        assert_eq!(
            PathError::OutOfRange(outside).to_string(),
            "path: target (-1, 0) is outside the searched range"
        );
    }
}
