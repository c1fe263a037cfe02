//! Elevation maps and the climbing routes across them.
//!
//! A [`HeightMap`] is parsed from rows of `a`..`z` with one `S` (start,
//! elevation `a`) and one `E` (end, elevation `z`). A [`Climber`] turns the
//! map into an implicit graph for [`hillwalk_paths::PathRange`]: in
//! [`Mode::Forward`] a step may climb at most one level, and
//! [`Mode::Reverse`] walks the same edges backwards.
//!
//! The [`route`] module runs the two standard queries:
//!
//! - [`route::fewest_steps`]: start to end, walking forward.
//! - [`route::fewest_steps_from_lowest`]: end back to the nearest cell of
//!   lowest elevation, which answers "shortest climb from any low point"
//!   with a single search.

pub mod climb;
pub mod elevation;
pub mod heightmap;
pub mod route;

pub use climb::{Climber, Mode, is_traversable};
pub use elevation::{Elevation, InvalidElevation};
pub use heightmap::{HeightMap, HeightMapError};
pub use route::Route;
