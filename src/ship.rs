//! Ship kinds and the mutable per-ship hit tracking.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Step from one segment to the next as `(row, col)` deltas.
    pub fn step(&self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

impl From<bool> for Orientation {
    /// `true` maps to horizontal.
    fn from(horizontal: bool) -> Self {
        if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Type tag of a ship, each with a standard length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Submarine,
    Destroyer,
    Frigate,
}

impl ShipKind {
    pub const ALL: [ShipKind; 4] = [
        ShipKind::Carrier,
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::Frigate,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Frigate => "Frigate",
        }
    }

    pub const fn length(&self) -> usize {
        match self {
            ShipKind::Carrier => 4,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Frigate => 1,
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown ship type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownShipKind;

impl fmt::Display for UnknownShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown ship type")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownShipKind {}

impl FromStr for ShipKind {
    type Err = UnknownShipKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownShipKind)
    }
}

/// A ship and the hits it has taken.
///
/// Cells are recorded bow first as the board places the ship, so the first
/// two cells reveal its orientation.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    kind: ShipKind,
    length: usize,
    cells: Vec<Coordinate>,
    hits: usize,
}

impl Ship {
    /// Unplaced ship of the standard length for `kind`.
    pub fn new(kind: ShipKind) -> Self {
        Self::with_length(kind, kind.length())
    }

    /// Unplaced ship with an explicit length. A zero-length ship is sunk
    /// from the start.
    pub fn with_length(kind: ShipKind, length: usize) -> Self {
        Self {
            kind,
            length,
            cells: Vec::with_capacity(length),
            hits: 0,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Occupied cells, bow first. Empty until placed.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Count one more hit. Extra hits on a sunk ship are tolerated.
    pub fn register_hit(&mut self) {
        self.hits += 1;
    }

    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }

    /// Inferred from the first two cells; ships shorter than two cells are
    /// reported as horizontal.
    pub fn orientation(&self) -> Orientation {
        match self.cells.as_slice() {
            [first, second, ..] if first.row() != second.row() => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }

    /// Index of `coord` within the ship, bow being zero.
    pub fn position_of(&self, coord: Coordinate) -> Option<usize> {
        self.cells.iter().position(|c| *c == coord)
    }

    pub(crate) fn push_cell(&mut self, coord: Coordinate) {
        self.cells.push(coord);
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {}, length: {}, hits: {}, cells: {:?} }}",
            self.kind, self.length, self.hits, self.cells
        )
    }
}
