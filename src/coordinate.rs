//! Board coordinates.

use core::fmt;
use core::str::FromStr;

use crate::config::{BOARD_SIZE, CELL_COUNT};

/// A cell on the 10×10 grid. Always within bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(into = "RawCoordinate", try_from = "RawCoordinate")
)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

/// Wire form of [`Coordinate`]; decoding goes back through the bounds check.
#[cfg(feature = "std")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct RawCoordinate {
    row: u8,
    col: u8,
}

#[cfg(feature = "std")]
impl From<Coordinate> for RawCoordinate {
    fn from(c: Coordinate) -> Self {
        Self {
            row: c.row,
            col: c.col,
        }
    }
}

#[cfg(feature = "std")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = ParseCoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.row as usize, raw.col as usize)
            .ok_or(ParseCoordinateError::OutOfBounds)
    }
}

impl Coordinate {
    /// Top-left cell, `A1`.
    pub const ORIGIN: Coordinate = Coordinate { row: 0, col: 0 };

    /// Returns `None` when either component is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE as usize && col < BOARD_SIZE as usize {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Inverse of [`Coordinate::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Self::new(index / BOARD_SIZE as usize, index % BOARD_SIZE as usize)
        } else {
            None
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row-major position in a flat grid.
    pub fn index(&self) -> usize {
        self.row() * BOARD_SIZE as usize + self.col()
    }

    /// In-bounds orthogonal neighbours in north, south, west, east order.
    pub fn neighbors(&self) -> impl Iterator<Item = Coordinate> {
        let (r, c) = (self.row as isize, self.col as isize);
        [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]
            .into_iter()
            .filter_map(|(r, c)| {
                if r < 0 || c < 0 {
                    None
                } else {
                    Coordinate::new(r as usize, c as usize)
                }
            })
    }

    /// `(row + col)` is even. Every ship of length two or more covers at
    /// least one such cell.
    pub fn is_checkerboard(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Every coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..CELL_COUNT).filter_map(Coordinate::from_index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col) as char;
        write!(f, "{}{}", col, self.row + 1)
    }
}

/// Why a text coordinate such as `B7` could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCoordinateError {
    Empty,
    InvalidColumn(char),
    InvalidRow,
    OutOfBounds,
}

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordinateError::Empty => {
                write!(f, "need a column letter and row number (e.g., A5)")
            }
            ParseCoordinateError::InvalidColumn(c) => {
                write!(f, "invalid column '{}' - must be a letter A-J", c)
            }
            ParseCoordinateError::InvalidRow => write!(f, "row must be a number 1-10"),
            ParseCoordinateError::OutOfBounds => write!(f, "coordinate is off the board"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseCoordinateError {}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_ch = chars
            .next()
            .ok_or(ParseCoordinateError::Empty)?
            .to_ascii_uppercase();
        if !col_ch.is_ascii_alphabetic() {
            return Err(ParseCoordinateError::InvalidColumn(col_ch));
        }
        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(ParseCoordinateError::Empty);
        }
        let row: usize = rest
            .parse()
            .map_err(|_| ParseCoordinateError::InvalidRow)?;
        if row == 0 {
            return Err(ParseCoordinateError::InvalidRow);
        }
        let col = (col_ch as u8 - b'A') as usize;
        Coordinate::new(row - 1, col).ok_or(ParseCoordinateError::OutOfBounds)
    }
}
