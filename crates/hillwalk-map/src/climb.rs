//! Which steps between neighbouring cells a walker may take.

use hillwalk_core::Point;
use hillwalk_paths::Pather;

use crate::elevation::Elevation;
use crate::heightmap::HeightMap;

/// Direction in which a search walks the map's edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Physical direction: climb at most one level per step.
    #[default]
    Forward,
    /// Edges walked backwards, for searching from the end towards the
    /// cells a forward walker could have started from.
    Reverse,
}

/// Whether a step from a cell at `from` to a neighbour at `to` is allowed.
///
/// A physical step may rise by at most one level and drop any amount. In
/// [`Mode::Reverse`] the step is checked as if taken from `to` to `from`.
pub fn is_traversable(from: Elevation, to: Elevation, mode: Mode) -> bool {
    let (lower, upper) = match mode {
        Mode::Forward => (from, to),
        Mode::Reverse => (to, from),
    };
    upper.level() <= lower.level() + 1
}

/// The implicit graph of a [`HeightMap`] walked in a given [`Mode`].
#[derive(Debug, Clone, Copy)]
pub struct Climber<'a> {
    pub map: &'a HeightMap,
    pub mode: Mode,
}

impl<'a> Climber<'a> {
    pub fn new(map: &'a HeightMap, mode: Mode) -> Self {
        Self { map, mode }
    }
}

impl Pather for Climber<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(from) = self.map.elevation(p) else {
            return;
        };
        for np in self.map.neighbors4(p) {
            if self
                .map
                .elevation(np)
                .is_some_and(|to| is_traversable(from, to, self.mode))
            {
                buf.push(np);
            }
        }
    }
}
