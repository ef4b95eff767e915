//! Game board: flat cell-state grid, ship index and shot resolution.

use alloc::vec::Vec;
use core::fmt;
use log::debug;
use rand::Rng;

use crate::common::{BoardStateError, PlacementError, ShotError, ShotResult};
use crate::config::{BOARD_SIZE, CELL_COUNT, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship, ShipKind};

/// State of a single cell as seen by the board's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Water,
    ShipPresent,
    Hit,
    Miss,
    Sunk,
}

impl CellState {
    /// Cells that have not been fired upon yet.
    pub fn is_targetable(&self) -> bool {
        matches!(self, CellState::Water | CellState::ShipPresent)
    }

    /// Cells that belong to a ship, whether damaged or not.
    pub fn is_ship(&self) -> bool {
        matches!(
            self,
            CellState::ShipPresent | CellState::Hit | CellState::Sunk
        )
    }
}

/// Read-only drawing information for a ship segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderInfo {
    pub kind: ShipKind,
    /// Index of the segment, bow being zero.
    pub position: usize,
    pub length: usize,
    pub orientation: Orientation,
}

/// Serializable board snapshot. Occupancy is rebuilt from the ships' cells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub cells: Vec<CellState>,
    pub ships: Vec<Ship>,
}

/// One side's 10×10 board.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "BoardState", try_from = "BoardState")
)]
pub struct Board {
    cells: [CellState; CELL_COUNT],
    /// Index into `ships` for every cell under a ship.
    occupancy: [Option<u8>; CELL_COUNT],
    ships: Vec<Ship>,
}

impl Board {
    /// All water, no ships.
    pub fn new() -> Self {
        Board {
            cells: [CellState::Water; CELL_COUNT],
            occupancy: [None; CELL_COUNT],
            ships: Vec::new(),
        }
    }

    pub fn cell(&self, coord: Coordinate) -> CellState {
        self.cells[coord.index()]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        self.occupancy[coord.index()].map(|i| &self.ships[i as usize])
    }

    pub fn is_targetable(&self, coord: Coordinate) -> bool {
        self.cell(coord).is_targetable()
    }

    /// Coordinates not yet fired upon, row-major.
    pub fn targetable_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all().filter(move |c| self.is_targetable(*c))
    }

    /// Validate every segment first, then commit them all.
    pub fn place_ship(
        &mut self,
        mut ship: Ship,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if ship.is_placed() {
            return Err(PlacementError::AlreadyPlaced);
        }
        let (dr, dc) = orientation.step();
        let mut targets = Vec::with_capacity(ship.length());
        for i in 0..ship.length() {
            let coord = Coordinate::new(start.row() + dr * i, start.col() + dc * i)
                .ok_or(PlacementError::OutOfBounds)?;
            targets.push(coord);
        }
        if targets.iter().any(|c| self.cell(*c).is_ship()) {
            return Err(PlacementError::Overlap);
        }
        let slot = u8::try_from(self.ships.len()).map_err(|_| PlacementError::NoRoom)?;
        for coord in targets {
            self.cells[coord.index()] = CellState::ShipPresent;
            self.occupancy[coord.index()] = Some(slot);
            ship.push_cell(coord);
        }
        debug!("placed {} at {} ({:?})", ship.kind(), start, orientation);
        self.ships.push(ship);
        Ok(())
    }

    /// Random start and orientation, retried until a placement fits.
    pub fn place_ship_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        ship: Ship,
    ) -> Result<(Coordinate, Orientation), PlacementError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = rng.random_range(0..BOARD_SIZE as usize);
            let col = rng.random_range(0..BOARD_SIZE as usize);
            let orientation = Orientation::from(rng.random::<bool>());
            let Some(start) = Coordinate::new(row, col) else {
                continue;
            };
            match self.place_ship(ship.clone(), start, orientation) {
                Ok(()) => return Ok((start, orientation)),
                Err(PlacementError::OutOfBounds | PlacementError::Overlap) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(PlacementError::NoRoom)
    }

    /// Place a fresh ship of each kind at random.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        kinds: &[ShipKind],
    ) -> Result<(), PlacementError> {
        for kind in kinds {
            self.place_ship_randomly(rng, Ship::new(*kind))?;
        }
        Ok(())
    }

    /// Fire at `target`. Repeat shots are rejected without touching state.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotResult, ShotError> {
        let idx = target.index();
        match self.cells[idx] {
            CellState::Water => {
                self.cells[idx] = CellState::Miss;
                Ok(ShotResult::Miss)
            }
            CellState::ShipPresent => {
                self.cells[idx] = CellState::Hit;
                let Some(slot) = self.occupancy[idx] else {
                    return Ok(ShotResult::Hit);
                };
                let ship = &mut self.ships[slot as usize];
                ship.register_hit();
                if !ship.is_sunk() {
                    return Ok(ShotResult::Hit);
                }
                let kind = ship.kind();
                for coord in ship.cells() {
                    self.cells[coord.index()] = CellState::Sunk;
                }
                Ok(ShotResult::Sunk(kind))
            }
            CellState::Hit | CellState::Miss | CellState::Sunk => {
                Err(ShotError::AlreadyTargeted)
            }
        }
    }

    /// `true` once no untouched ship segment remains.
    pub fn is_fleet_destroyed(&self) -> bool {
        !self.cells.contains(&CellState::ShipPresent)
    }

    /// Ships on this board that have been sunk.
    pub fn sunk_ship_count(&self) -> usize {
        self.ships
            .iter()
            .filter(|s| s.is_placed() && s.is_sunk())
            .count()
    }

    /// Drawing hints for the ship segment at `coord`, if any.
    pub fn render_info(&self, coord: Coordinate) -> Option<RenderInfo> {
        let ship = self.ship_at(coord)?;
        Some(RenderInfo {
            kind: ship.kind(),
            position: ship.position_of(coord)?,
            length: ship.length(),
            orientation: ship.orientation(),
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for r in 0..BOARD_SIZE as usize {
            write!(f, "  ")?;
            for c in 0..BOARD_SIZE as usize {
                let ch = match self.cells[r * BOARD_SIZE as usize + c] {
                    CellState::Water => '.',
                    CellState::ShipPresent => 'S',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                    CellState::Sunk => '#',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            cells: b.cells.to_vec(),
            ships: b.ships.clone(),
        }
    }
}

impl From<Board> for BoardState {
    fn from(b: Board) -> Self {
        BoardState {
            cells: b.cells.to_vec(),
            ships: b.ships,
        }
    }
}

impl TryFrom<BoardState> for Board {
    type Error = BoardStateError;

    fn try_from(state: BoardState) -> Result<Self, Self::Error> {
        let cells: [CellState; CELL_COUNT] = state
            .cells
            .as_slice()
            .try_into()
            .map_err(|_| BoardStateError::WrongCellCount(state.cells.len()))?;
        if state.ships.len() > u8::MAX as usize {
            return Err(BoardStateError::TooManyShips(state.ships.len()));
        }
        let mut occupancy = [None; CELL_COUNT];
        for (slot, ship) in state.ships.iter().enumerate() {
            if !is_straight_hull(ship) {
                return Err(BoardStateError::ShipShape(slot));
            }
            for coord in ship.cells() {
                let idx = coord.index();
                let at = || (coord.row() as u8, coord.col() as u8);
                if occupancy[idx].is_some() {
                    let (row, col) = at();
                    return Err(BoardStateError::SharedCell { row, col });
                }
                if !cells[idx].is_ship() {
                    let (row, col) = at();
                    return Err(BoardStateError::InconsistentCell { row, col });
                }
                occupancy[idx] = Some(slot as u8);
            }
        }
        for coord in Coordinate::all() {
            if cells[coord.index()].is_ship() && occupancy[coord.index()].is_none() {
                return Err(BoardStateError::Unclaimed {
                    row: coord.row() as u8,
                    col: coord.col() as u8,
                });
            }
        }
        for (slot, ship) in state.ships.iter().enumerate() {
            let state_of = |c: &&Coordinate| cells[c.index()];
            let damaged = ship
                .cells()
                .iter()
                .filter(|c| matches!(state_of(c), CellState::Hit | CellState::Sunk))
                .count();
            let sunk = ship
                .cells()
                .iter()
                .filter(|c| state_of(c) == CellState::Sunk)
                .count();
            let expected_sunk = if ship.is_sunk() { ship.length() } else { 0 };
            if damaged != ship.hits() || sunk != expected_sunk {
                return Err(BoardStateError::ShipDamage(slot));
            }
        }
        Ok(Board {
            cells,
            occupancy,
            ships: state.ships,
        })
    }
}

/// Exactly `length` cells, consecutive along the ship's orientation.
fn is_straight_hull(ship: &Ship) -> bool {
    let cells = ship.cells();
    if cells.len() != ship.length() {
        return false;
    }
    let Some(bow) = cells.first() else {
        return true;
    };
    let (dr, dc) = ship.orientation().step();
    cells
        .iter()
        .enumerate()
        .all(|(i, c)| Coordinate::new(bow.row() + dr * i, bow.col() + dc * i) == Some(*c))
}
