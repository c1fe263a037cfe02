//! The [`HeightMap`] type — an immutable rectangular map of elevations.
//!
//! Cells are stored densely in row-major order and addressed by [`Point`]
//! through the map's bounding [`Range`].

use std::fmt;
use std::str::FromStr;

use hillwalk_core::{Point, Range};

use crate::elevation::Elevation;

/// A rectangular map of [`Elevation`]s with a designated start and end cell.
///
/// Built once, by [`parse`](Self::parse) or [`new`](Self::new), and
/// read-only afterwards. Deserialization goes through the same checks as
/// [`new`](Self::new).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawHeightMap")
)]
pub struct HeightMap {
    cells: Vec<Elevation>,
    bounds: Range,
    start: Point,
    end: Point,
}

impl HeightMap {
    /// Build a map from row-major `elevations`, `width` cells per row.
    ///
    /// Unlike [`parse`](Self::parse), the start and end cells may coincide
    /// and keep whatever elevation `elevations` gives them. Such a map has
    /// no text form: its `Display` output shows only `S` and does not parse
    /// back.
    pub fn new(
        width: usize,
        elevations: Vec<Elevation>,
        start: Point,
        end: Point,
    ) -> Result<Self, HeightMapError> {
        if width == 0 || elevations.is_empty() || elevations.len() % width != 0 {
            return Err(HeightMapError::BadDimensions {
                width,
                len: elevations.len(),
            });
        }
        let bounds = Range::with_size(width, elevations.len() / width);
        for (ch, pos) in [
            (Elevation::START_MARKER, start),
            (Elevation::END_MARKER, end),
        ] {
            if !bounds.contains(pos) {
                return Err(HeightMapError::MarkerOutOfBounds { ch, pos });
            }
        }
        Ok(Self {
            cells: elevations,
            bounds,
            start,
            end,
        })
    }

    /// Parse a map from text.
    ///
    /// Every line must have the same width and hold only `a`..`z` plus
    /// exactly one `S` and one `E`. Both `\n` and `\r\n` line endings are
    /// accepted; trailing blank lines are ignored.
    pub fn parse(s: &str) -> Result<Self, HeightMapError> {
        let mut rows: Vec<&str> = s.lines().collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(HeightMapError::Empty);
        }

        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut start: Option<Point> = None;
        let mut end: Option<Point> = None;

        for (y, row) in rows.iter().enumerate() {
            let mut x: usize = 0;
            for ch in row.chars() {
                let pos = Point::new(x as i32, y as i32);
                let e = Elevation::from_char(ch).ok_or(HeightMapError::InvalidChar { ch, pos })?;
                let marker = match ch {
                    Elevation::START_MARKER => Some(&mut start),
                    Elevation::END_MARKER => Some(&mut end),
                    _ => None,
                };
                if let Some(slot) = marker {
                    if slot.replace(pos).is_some() {
                        return Err(HeightMapError::DuplicateMarker { ch, pos });
                    }
                }
                cells.push(e);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(HeightMapError::InconsistentWidth {
                        row: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(HeightMapError::Empty);
        }
        let start = start.ok_or(HeightMapError::MissingMarker(Elevation::START_MARKER))?;
        let end = end.ok_or(HeightMapError::MissingMarker(Elevation::END_MARKER))?;

        let map = Self {
            bounds: Range::with_size(width, rows.len()),
            cells,
            start,
            end,
        };
        log::debug!(
            "heightmap: parsed {}x{} map, start {} end {}",
            map.width(),
            map.height(),
            map.start,
            map.end
        );
        Ok(map)
    }

    /// The bounding range of the map, `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.bounds.width() as usize
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.bounds.height() as usize
    }

    /// Whether `p` lies on the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The end cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Elevation at `p`, or `None` if `p` is off the map.
    #[inline]
    pub fn elevation(&self, p: Point) -> Option<Elevation> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// The up-to-four cardinal neighbours of `p` that lie on the map, in
    /// the fixed order up, right, down, left.
    pub fn neighbors4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter(move |&np| self.bounds.contains(np))
    }

    /// Lowest elevation present on the map.
    pub fn lowest(&self) -> Elevation {
        self.cells.iter().copied().min().unwrap_or(Elevation::MIN)
    }

    /// All cells at elevation `e`, in row-major order.
    pub fn cells_with_elevation(&self, e: Elevation) -> impl Iterator<Item = Point> + '_ {
        self.iter().filter(move |&(_, c)| c == e).map(|(p, _)| p)
    }

    /// Row-major iterator over `(Point, Elevation)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Elevation)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

/// Unvalidated serialized form of a [`HeightMap`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHeightMap {
    cells: Vec<Elevation>,
    bounds: Range,
    start: Point,
    end: Point,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHeightMap> for HeightMap {
    type Error = HeightMapError;

    fn try_from(raw: RawHeightMap) -> Result<Self, HeightMapError> {
        let RawHeightMap {
            cells,
            bounds,
            start,
            end,
        } = raw;
        if bounds.min != Point::ZERO || bounds.len() != cells.len() {
            return Err(HeightMapError::BadDimensions {
                width: bounds.width().max(0) as usize,
                len: cells.len(),
            });
        }
        Self::new(bounds.width() as usize, cells, start, end)
    }
}

impl FromStr for HeightMap {
    type Err = HeightMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HeightMap {
    /// Renders the map in its input format, markers included. When the
    /// start and end coincide the cell shows `S`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, e) in self.iter() {
            let ch = if p == self.start {
                Elevation::START_MARKER
            } else if p == self.end {
                Elevation::END_MARKER
            } else {
                e.to_char()
            };
            write!(f, "{ch}")?;
            if p.x == self.bounds.max.x - 1 && p.y < self.bounds.max.y - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a [`HeightMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeightMapError {
    /// The input holds no cells.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `a`..`z` and the two markers.
    InvalidChar { ch: char, pos: Point },
    /// The start or end marker does not appear.
    MissingMarker(char),
    /// The start or end marker appears more than once.
    DuplicateMarker { ch: char, pos: Point },
    /// The elevation count is not a positive multiple of the width.
    BadDimensions { width: usize, len: usize },
    /// A start or end cell lies outside the map.
    MarkerOutOfBounds { ch: char, pos: Point },
}

impl fmt::Display for HeightMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "heightmap: empty input"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "heightmap: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "heightmap: invalid character {ch:?} at {pos}")
            }
            Self::MissingMarker(ch) => write!(f, "heightmap: missing marker {ch:?}"),
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "heightmap: duplicate marker {ch:?} at {pos}")
            }
            Self::BadDimensions { width, len } => write!(
                f,
                "heightmap: {len} elevations do not fill rows of width {width}"
            ),
            Self::MarkerOutOfBounds { ch, pos } => {
                write!(f, "heightmap: marker {ch:?} at {pos} is outside the map")
            }
        }
    }
}

impl std::error::Error for HeightMapError {}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    fn elev(ch: char) -> Elevation {
        Elevation::from_char(ch).unwrap()
    }

    #[test]
    fn parse_sample() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        assert_eq!(map.width(), 8);
        assert_eq!(map.height(), 5);
        assert_eq!(map.bounds(), Range::new(0, 0, 8, 5));
        assert_eq!(map.start(), Point::new(0, 0));
        assert_eq!(map.end(), Point::new(5, 2));
        assert_eq!(map.elevation(map.start()), Some(Elevation::MIN));
        assert_eq!(map.elevation(map.end()), Some(Elevation::MAX));
        assert_eq!(map.elevation(Point::new(3, 0)), Some(elev('q')));
        assert_eq!(map.elevation(Point::new(8, 0)), None);
        assert_eq!(map.lowest(), Elevation::MIN);
    }

    #[test]
    fn crlf_and_trailing_blank_lines() {
        let map: HeightMap = "Sb\r\nzE\r\n\r\n\n".parse().unwrap();
        assert_eq!(map.width(), 2);
        assert_eq!(map.height(), 2);
        assert_eq!(map.end(), Point::new(1, 1));
    }

    #[test]
    fn display_round_trips() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        assert_eq!(map.to_string(), SAMPLE.trim_end());
        assert_eq!(HeightMap::parse(&map.to_string()).unwrap(), map);
    }

    #[test]
    fn shared_start_and_end_render_as_start() {
        let map = HeightMap::new(2, vec![Elevation::MIN; 2], Point::ZERO, Point::ZERO).unwrap();
        assert_eq!(map.to_string(), "Sa");
        assert_eq!(
            HeightMap::parse(&map.to_string()),
            Err(HeightMapError::MissingMarker('E'))
        );
    }

    #[test]
    fn neighbors4_are_bounds_checked() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let corner: Vec<_> = map.neighbors4(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
        let inner: Vec<_> = map.neighbors4(Point::new(3, 2)).collect();
        assert_eq!(
            inner,
            vec![
                Point::new(3, 1),
                Point::new(4, 2),
                Point::new(3, 3),
                Point::new(2, 2),
            ]
        );
        let last: Vec<_> = map.neighbors4(Point::new(7, 4)).collect();
        assert_eq!(last, vec![Point::new(7, 3), Point::new(6, 4)]);
    }

    #[test]
    fn cells_with_elevation_includes_start() {
        let map = HeightMap::parse(SAMPLE).unwrap();
        let lows: Vec<_> = map.cells_with_elevation(Elevation::MIN).collect();
        assert_eq!(
            lows,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(0, 3),
                Point::new(0, 4),
            ]
        );
        // The `z` left of the end marker counts as well as the marker itself.
        let tops: Vec<_> = map.cells_with_elevation(Elevation::MAX).collect();
        assert_eq!(tops, vec![Point::new(4, 2), Point::new(5, 2)]);
    }

    #[test]
    fn inconsistent_width_error() {
        let bad = "Saabqponm\nabcryxxl\naccszExk\n";
        assert_eq!(
            HeightMap::parse(bad),
            Err(HeightMapError::InconsistentWidth {
                row: 1,
                expected: 9,
                found: 8,
            })
        );
    }

    #[test]
    fn invalid_char_error() {
        assert_eq!(
            HeightMap::parse("Sab\na#E"),
            Err(HeightMapError::InvalidChar {
                ch: '#',
                pos: Point::new(1, 1),
            })
        );
    }

    #[test]
    fn marker_errors() {
        assert_eq!(
            HeightMap::parse("abc\nabE"),
            Err(HeightMapError::MissingMarker('S'))
        );
        assert_eq!(
            HeightMap::parse("Sbc\nabc"),
            Err(HeightMapError::MissingMarker('E'))
        );
        assert_eq!(
            HeightMap::parse("SbE\nSbc"),
            Err(HeightMapError::DuplicateMarker {
                ch: 'S',
                pos: Point::new(0, 1),
            })
        );
    }

    #[test]
    fn empty_input_error() {
        assert_eq!(HeightMap::parse(""), Err(HeightMapError::Empty));
        assert_eq!(HeightMap::parse("\n\n"), Err(HeightMapError::Empty));
    }

    #[test]
    fn new_validates_dimensions_and_markers() {
        let e = vec![Elevation::MIN; 6];
        let map = HeightMap::new(3, e.clone(), Point::new(0, 0), Point::new(2, 1)).unwrap();
        assert_eq!((map.width(), map.height()), (3, 2));

        assert_eq!(
            HeightMap::new(4, e.clone(), Point::ZERO, Point::ZERO),
            Err(HeightMapError::BadDimensions { width: 4, len: 6 })
        );
        assert_eq!(
            HeightMap::new(0, e.clone(), Point::ZERO, Point::ZERO),
            Err(HeightMapError::BadDimensions { width: 0, len: 6 })
        );
        assert_eq!(
            HeightMap::new(3, e, Point::ZERO, Point::new(3, 0)),
            Err(HeightMapError::MarkerOutOfBounds {
                ch: 'E',
                pos: Point::new(3, 0),
            })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            HeightMapError::InconsistentWidth {
                row: 2,
                expected: 8,
                found: 7,
            }
            .to_string(),
            "heightmap: row 2 has width 7, expected 8"
        );
        assert_eq!(
            HeightMapError::InvalidChar {
                ch: '#',
                pos: Point::new(1, 0),
            }
            .to_string(),
            "heightmap: invalid character '#' at (1, 0)"
        );
    }
}
