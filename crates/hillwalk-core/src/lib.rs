//! **hillwalk-core** — geometry primitives shared by the hillwalk crates.
//!
//! A [`Point`] names one cell of a rectangular map and a [`Range`] is the
//! half-open rectangle a map or a search covers.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
