//! The two climbing queries over a [`HeightMap`].
//!
//! Both run one breadth-first search through [`Climber`]; they differ only
//! in the source, the traversal [`Mode`] and the stop predicate.

use hillwalk_core::Point;
use hillwalk_paths::{PathRange, SearchTree};

use crate::climb::{Climber, Mode};
use crate::heightmap::HeightMap;

/// A shortest walk across a map, in physical walking order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Where the walk begins.
    pub from: Point,
    /// Where the walk ends.
    pub to: Point,
    /// Cells entered after `from`, ending with `to`.
    pub steps: Vec<Point>,
}

impl Route {
    /// Number of steps taken.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the walk has no steps (`from == to`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

fn search(
    map: &HeightMap,
    source: Point,
    mode: Mode,
    stop: impl FnMut(Point) -> bool,
) -> SearchTree {
    let mut pr = PathRange::new(map.bounds());
    pr.bfs_search(&Climber::new(map, mode), source, stop)
}

fn climb_search(map: &HeightMap) -> SearchTree {
    let end = map.end();
    search(map, map.start(), Mode::Forward, |p| p == end)
}

fn descent_search(map: &HeightMap) -> SearchTree {
    let lowest = map.lowest();
    search(map, map.end(), Mode::Reverse, |p| {
        map.elevation(p) == Some(lowest)
    })
}

/// Fewest steps from the start to the end, climbing at most one level per
/// step. `None` if the end cannot be reached.
pub fn fewest_steps(map: &HeightMap) -> Option<usize> {
    let tree = climb_search(map);
    let steps = tree.found().and_then(|t| tree.path_length(t).ok());
    log::debug!("route: fewest steps start -> end: {steps:?}");
    steps
}

/// Fewest steps to the end from any cell of the map's lowest elevation.
///
/// Runs a single reverse search from the end that stops at the first
/// lowest cell it discovers, rather than one forward search per low cell.
/// `None` if no lowest cell can reach the end.
pub fn fewest_steps_from_lowest(map: &HeightMap) -> Option<usize> {
    let tree = descent_search(map);
    let steps = tree.found().and_then(|t| tree.path_length(t).ok());
    log::debug!(
        "route: fewest steps lowest -> end: {steps:?} ({} cells explored)",
        tree.explored()
    );
    steps
}

/// The shortest route from the start to the end, if any.
pub fn climb_route(map: &HeightMap) -> Option<Route> {
    let tree = climb_search(map);
    let to = tree.found()?;
    let steps = tree.path_to(to).ok()?;
    Some(Route {
        from: map.start(),
        to,
        steps,
    })
}

/// The shortest route from any lowest cell to the end, if any.
///
/// The search runs backwards from the end; the returned route is turned
/// around so that it reads in walking order.
pub fn descent_route(map: &HeightMap) -> Option<Route> {
    let tree = descent_search(map);
    let from = tree.found()?;
    let mut steps = tree.path_to(from).ok()?;
    let end = map.end();
    if steps.pop().is_some() {
        steps.reverse();
        steps.push(end);
    }
    Some(Route {
        from,
        to: end,
        steps,
    })
}
