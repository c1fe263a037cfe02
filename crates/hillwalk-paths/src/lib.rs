//! Breadth-first search over implicit grid graphs.
//!
//! The graph is never materialised: a [`Pather`] enumerates the neighbours
//! of a cell on demand and [`PathRange::bfs_search`] explores them level by
//! level from a single source until a stop predicate is satisfied.
//!
//! Each search returns an owned [`SearchTree`] holding the distance and
//! predecessor maps of that run, from which paths are reconstructed with
//! [`SearchTree::path_to`] and [`SearchTree::path_length`].
//! [`PathRange`] only keeps scratch buffers (the frontier queue and the
//! neighbour buffer) between runs.

mod bfs;
mod distance;
mod path;
mod pathrange;
mod traits;

pub use bfs::SearchTree;
pub use distance::manhattan;
pub use path::PathError;
pub use pathrange::{PathRange, UNREACHABLE};
pub use traits::Pather;
