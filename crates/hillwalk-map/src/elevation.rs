//! The [`Elevation`] of a map cell.

use std::fmt;

/// Height of a cell, `a` = 0 through `z` = 25.
///
/// Analogous to an integer map cell: a newtype so elevations are not mixed
/// up with coordinates or distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Elevation(u8);

impl Elevation {
    /// Lowest elevation, `a`.
    pub const MIN: Self = Self(0);
    /// Highest elevation, `z`.
    pub const MAX: Self = Self(25);

    /// Marker character for the start cell.
    pub const START_MARKER: char = 'S';
    /// Marker character for the end cell.
    pub const END_MARKER: char = 'E';

    /// Create an elevation from its level. Returns `None` above 25.
    pub const fn new(level: u8) -> Option<Self> {
        if level <= Self::MAX.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// The level as an integer.
    #[inline]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Elevation of a map character. The start marker sits at the lowest
    /// elevation and the end marker at the highest.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            Self::START_MARKER => Some(Self::MIN),
            Self::END_MARKER => Some(Self::MAX),
            'a'..='z' => Some(Self(ch as u8 - b'a')),
            _ => None,
        }
    }

    /// The lowercase letter for this elevation.
    #[inline]
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl TryFrom<char> for Elevation {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, char> {
        Self::from_char(ch).ok_or(ch)
    }
}

impl TryFrom<u8> for Elevation {
    type Error = InvalidElevation;

    fn try_from(level: u8) -> Result<Self, InvalidElevation> {
        Self::new(level).ok_or(InvalidElevation(level))
    }
}

impl From<Elevation> for u8 {
    fn from(e: Elevation) -> Self {
        e.0
    }
}

/// A level above [`Elevation::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidElevation(pub u8);

impl fmt::Display for InvalidElevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "elevation: level {} is above {}", self.0, Elevation::MAX.0)
    }
}

impl std::error::Error for InvalidElevation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_levels() {
        assert_eq!(Elevation::from_char('a'), Some(Elevation::MIN));
        assert_eq!(Elevation::from_char('z'), Some(Elevation::MAX));
        assert_eq!(Elevation::from_char('m').map(Elevation::level), Some(12));
        for level in 0..=25 {
            let e = Elevation::new(level).unwrap();
            assert_eq!(Elevation::from_char(e.to_char()), Some(e));
        }
    }

    #[test]
    fn markers_resolve_to_bounds() {
        assert_eq!(Elevation::from_char('S'), Some(Elevation::MIN));
        assert_eq!(Elevation::from_char('E'), Some(Elevation::MAX));
    }

    #[test]
    fn rejects_other_characters() {
        for ch in ['A', 'Z', '.', '#', ' ', '1', 'é'] {
            assert_eq!(Elevation::from_char(ch), None);
            assert_eq!(Elevation::try_from(ch), Err(ch));
        }
        assert_eq!(Elevation::new(26), None);
        assert_eq!(Elevation::try_from(26u8), Err(InvalidElevation(26)));
        assert_eq!(Elevation::try_from(25u8), Ok(Elevation::MAX));
    }
}
