//! Code for working with [`Location`]s on the Reversi board.

use crate::utils::{COLUMN_LABELS, ROW_LABELS};
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{BitOr, BitOrAssign, Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};
use std::iter::FromIterator;

/// The largest valid coordinate on either axis.
const MAX_COORD: i32 = EDGE_LENGTH as i32 - 1;

/// Returns whether `(x, y)` lies on the board. Both bounds are inclusive.
#[inline]
pub fn is_on_board(x: i32, y: i32) -> bool {
    x >= 0 && x <= MAX_COORD && y >= 0 && y <= MAX_COORD
}

/// A location on the Reversi board.
/// `x` is the column (`A` to `H`) and `y` is the row (`1` to `8`).
/// Internally this is the row-major index `y * 8 + x`, always below 64.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location(u8);

/// A set of locations on the board, such as the legal moves for a side or the
/// tiles captured by a move. Iterating it yields locations in row-major order.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, From, Into, BitOr, BitOrAssign,
)]
pub struct LocationList(u64);

impl Location {
    /// Build a location from coordinates, or `None` if they are off the board.
    #[inline]
    pub fn new(x: i32, y: i32) -> Option<Self> {
        if is_on_board(x, y) {
            Some(Self((y * EDGE_LENGTH as i32 + x) as u8))
        } else {
            None
        }
    }

    /// Convert from a row-major square index (`y * 8 + x`).
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < NUM_SPACES {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0
    }

    /// The column of this location.
    #[inline]
    pub fn x(self) -> usize {
        self.0 as usize % EDGE_LENGTH
    }

    /// The row of this location.
    #[inline]
    pub fn y(self) -> usize {
        self.0 as usize / EDGE_LENGTH
    }

    /// Get the `(x, y)` coordinates.
    #[inline]
    pub fn coords(self) -> (usize, usize) {
        (self.x(), self.y())
    }

    /// Step by `(dx, dy)`, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Self::new(self.x() as i32 + dx, self.y() as i32 + dy)
    }

    /// Iterate over every location on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(Location)
    }

    #[inline]
    fn mask(self) -> u64 {
        1 << self.0
    }
}

/// Convert this [`Location`] into string notation ("C4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col = COLUMN_LABELS.chars().nth(self.x()).ok_or(fmt::Error)?;
        let row = ROW_LABELS.chars().nth(self.y()).ok_or(fmt::Error)?;
        f.write_char(col)?;
        f.write_char(row)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from string notation ("C4", case-insensitive).
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_char = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let row_char = chars.next().ok_or(ParseLocationError)?;
        if chars.next().is_some() {
            return Err(ParseLocationError);
        }

        let x = COLUMN_LABELS.find(col_char).ok_or(ParseLocationError)?;
        let y = ROW_LABELS.find(row_char).ok_or(ParseLocationError)?;
        Self::new(x as i32, y as i32).ok_or(ParseLocationError)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0 & loc.mask() != 0
    }

    /// Add `loc` to this list.
    #[inline]
    pub fn insert(&mut self, loc: Location) {
        self.0 |= loc.mask();
    }

    /// Returns whether the list has no locations.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.is_empty() {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Location(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for LocationList {}

impl FromIterator<Location> for LocationList {
    fn from_iter<T: IntoIterator<Item = Location>>(iter: T) -> Self {
        let mut list = Self::default();
        for loc in iter {
            list.insert(loc);
        }
        list
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "[{}]", string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn on_board_bounds_are_inclusive() {
        assert!(is_on_board(0, 0));
        assert!(is_on_board(7, 7));
        assert!(is_on_board(0, 7));
        assert!(!is_on_board(-1, 3));
        assert!(!is_on_board(8, 0));
        assert!(!is_on_board(3, -1));
        assert!(!is_on_board(0, 8));
    }

    #[test]
    fn location_new() {
        assert_eq!(Location::new(0, 0), Some(Location(0)));
        assert_eq!(Location::new(7, 7), Some(Location(63)));
        assert_eq!(Location::new(2, 3), Some(Location(26)));
        assert_eq!(Location::new(8, 0), None);
        assert_eq!(Location::new(0, -1), None);
    }

    #[test]
    fn location_from_index() {
        assert_eq!(Location::from_index(63), Some(Location(63)));
        assert_eq!(Location::from_index(64), None);
    }

    #[test]
    fn location_coords() {
        assert_eq!(Location(0).coords(), (0, 0));
        assert_eq!(Location(26).coords(), (2, 3));
        assert_eq!(Location(63).coords(), (7, 7));
    }

    #[test]
    fn location_offset() {
        let corner = Location::new(0, 0).unwrap();
        assert_eq!(corner.offset(1, 1), Location::new(1, 1));
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location(0)));
        assert_eq!(Location::from_str("h8"), Ok(Location(63)));
        assert_eq!(Location::from_str("C4"), Ok(Location::new(2, 3).unwrap()));
        assert_eq!(Location::from_str(" e6\n"), Ok(Location::new(4, 5).unwrap()));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location(0).to_string(), "A1");
        assert_eq!(Location(63).to_string(), "H8");
        assert_eq!(Location::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn list_iterates_in_row_major_order() {
        let list: LocationList = ["E6", "C4", "D3"]
            .iter()
            .map(|s| Location::from_str(s).unwrap())
            .collect();

        assert_eq!(list.len(), 3);
        assert!(list.contains(Location::from_str("D3").unwrap()));
        assert!(!list.contains(Location::from_str("F5").unwrap()));
        assert_eq!(list.to_string(), "[D3, C4, E6]");
    }

    #[test]
    fn empty_list() {
        let list = LocationList::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_string(), "[]");
    }
}
