use std::collections::VecDeque;

use hillwalk_core::{Point, Range};

/// Sentinel distance meaning "unreached" in a [`SearchTree`](crate::SearchTree).
pub const UNREACHABLE: i32 = i32::MAX;

/// Predecessor sentinel: the cell has no predecessor (source or unreached).
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Central coordinator for searches on a grid rectangle.
///
/// `PathRange` owns the scratch buffers used while searching so that
/// repeated queries do not reallocate them. The distance and predecessor
/// maps of a run are not kept here: every search hands back its own
/// [`SearchTree`](crate::SearchTree).
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) queue: VecDeque<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            queue: VecDeque::with_capacity(rng.len().min(1024)),
            nbuf: Vec::with_capacity(4),
        }
    }
}
