use hillwalk_core::{Point, Range};

use crate::PathRange;
use crate::pathrange::{NO_PARENT, UNREACHABLE};
use crate::traits::Pather;

/// Outcome of a single [`PathRange::bfs_search`] run.
///
/// Holds the distance map and predecessor map of the run, both dense and
/// indexed like the search range. A tree belongs to the run that produced
/// it; independent searches never share one. It serializes for reports but
/// cannot be deserialized, since its maps must agree with its range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchTree {
    pub(crate) rng: Range,
    pub(crate) source: Point,
    pub(crate) dist: Vec<i32>,
    pub(crate) parent: Vec<usize>,
    pub(crate) found: Option<Point>,
    pub(crate) explored: usize,
}

impl SearchTree {
    fn new(rng: Range, source: Point) -> Self {
        let len = rng.len();
        Self {
            rng,
            source,
            dist: vec![UNREACHABLE; len],
            parent: vec![NO_PARENT; len],
            found: None,
            explored: 0,
        }
    }

    /// The cell the search started from.
    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    /// The first cell that satisfied the stop predicate, if any.
    ///
    /// `None` means the frontier was exhausted: no matching cell is
    /// reachable from the source.
    #[inline]
    pub fn found(&self) -> Option<Point> {
        self.found
    }

    /// Number of cells discovered, the source included.
    #[inline]
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Step count from the source to `p`.
    ///
    /// Returns [`UNREACHABLE`] if `p` is outside the range or was not
    /// discovered before the search stopped.
    pub fn distance_at(&self, p: Point) -> i32 {
        match self.rng.index_of(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Whether `p` was discovered by the search.
    #[inline]
    pub fn reached(&self, p: Point) -> bool {
        self.distance_at(p) != UNREACHABLE
    }

    /// The cell that first discovered `p`. `None` for the source and for
    /// cells that were never discovered.
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        let i = self.rng.index_of(p)?;
        match self.parent[i] {
            NO_PARENT => None,
            pi => Some(self.rng.point_at(pi)),
        }
    }
}

impl PathRange {
    /// Breadth-first search from `source` over the graph defined by `pather`.
    ///
    /// Every step costs 1. The frontier is a FIFO queue, so a cell is
    /// discovered at its minimum step count. The search stops as soon as a
    /// cell for which `stop` returns `true` is discovered (the source
    /// itself included), recording it in [`SearchTree::found`]. If the
    /// frontier empties first, `found` is `None`.
    ///
    /// Neighbours outside the range are ignored. A source outside the range
    /// yields an empty tree.
    pub fn bfs_search<P: Pather>(
        &mut self,
        pather: &P,
        source: Point,
        mut stop: impl FnMut(Point) -> bool,
    ) -> SearchTree {
        let mut tree = SearchTree::new(self.rng, source);

        let Some(si) = self.rng.index_of(source) else {
            log::debug!("bfs: source {source} outside {}", self.rng);
            return tree;
        };
        tree.dist[si] = 0;
        tree.explored = 1;
        if stop(source) {
            tree.found = Some(source);
            return tree;
        }

        self.queue.clear();
        self.queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        'search: while let Some(ci) = self.queue.pop_front() {
            let nd = tree.dist[ci] + 1;
            let cp = self.rng.point_at(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.rng.index_of(np) else {
                    continue;
                };
                if tree.dist[ni] != UNREACHABLE {
                    continue;
                }
                tree.dist[ni] = nd;
                tree.parent[ni] = ci;
                tree.explored += 1;
                if stop(np) {
                    tree.found = Some(np);
                    break 'search;
                }
                self.queue.push_back(ni);
            }
        }

        self.queue.clear();
        self.nbuf = nbuf;

        log::trace!(
            "bfs: from {source} explored {} cells, found {:?}",
            tree.explored,
            tree.found
        );
        tree
    }
}
