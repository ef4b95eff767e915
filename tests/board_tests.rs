use broadside::{
    Board, BoardState, BoardStateError, CellState, Coordinate, Orientation, PlacementError,
    RenderInfo, Ship, ShipKind, ShotError, ShotResult, BOARD_SIZE, FLEET, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

#[test]
fn test_single_cell_ship_sinks_fleet() {
    let mut board = Board::new();
    board
        .place_ship(Ship::with_length(ShipKind::Frigate, 1), at(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(board.cell(at(0, 0)), CellState::ShipPresent);
    assert!(!board.is_fleet_destroyed());

    assert_eq!(
        board.resolve_shot(at(0, 0)).unwrap(),
        ShotResult::Sunk(ShipKind::Frigate)
    );
    assert_eq!(board.cell(at(0, 0)), CellState::Sunk);
    assert!(board.is_fleet_destroyed());
    assert_eq!(board.sunk_ship_count(), 1);
}

#[test]
fn test_hit_hit_sunk_marks_whole_ship() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(ShipKind::Submarine), at(0, 0), Orientation::Horizontal)
        .unwrap();

    assert_eq!(board.resolve_shot(at(0, 0)).unwrap(), ShotResult::Hit);
    assert_eq!(board.cell(at(0, 0)), CellState::Hit);
    assert_eq!(board.resolve_shot(at(0, 1)).unwrap(), ShotResult::Hit);
    assert_eq!(
        board.resolve_shot(at(0, 2)).unwrap(),
        ShotResult::Sunk(ShipKind::Submarine)
    );
    for c in 0..3 {
        assert_eq!(board.cell(at(0, c)), CellState::Sunk);
    }
    assert!(board.ships()[0].is_sunk());
}

#[test]
fn test_miss_marks_water() {
    let mut board = Board::new();
    assert_eq!(board.resolve_shot(at(4, 4)).unwrap(), ShotResult::Miss);
    assert_eq!(board.cell(at(4, 4)), CellState::Miss);
    assert!(!board.is_targetable(at(4, 4)));
}

#[test]
fn test_repeat_shot_rejected_without_change() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(ShipKind::Destroyer), at(2, 2), Orientation::Vertical)
        .unwrap();
    board.resolve_shot(at(2, 2)).unwrap();
    board.resolve_shot(at(7, 7)).unwrap();
    let before = board.clone();

    assert_eq!(board.resolve_shot(at(2, 2)), Err(ShotError::AlreadyTargeted));
    assert_eq!(board.resolve_shot(at(7, 7)), Err(ShotError::AlreadyTargeted));
    assert_eq!(board, before);
    assert_eq!(board.ships()[0].hits(), 1);

    board.resolve_shot(at(3, 2)).unwrap();
    assert_eq!(board.resolve_shot(at(3, 2)), Err(ShotError::AlreadyTargeted));
}

#[test]
fn test_out_of_bounds_placement() {
    let mut board = Board::new();
    let err = board
        .place_ship(Ship::new(ShipKind::Carrier), at(0, 7), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds);
    assert!(board.ships().is_empty());
    assert!(board.cells().iter().all(|c| *c == CellState::Water));

    board
        .place_ship(Ship::new(ShipKind::Carrier), at(0, 6), Orientation::Horizontal)
        .unwrap();
}

#[test]
fn test_overlap_leaves_board_untouched() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(ShipKind::Carrier), at(3, 0), Orientation::Horizontal)
        .unwrap();
    let before = board.clone();
    let err = board
        .place_ship(Ship::new(ShipKind::Submarine), at(1, 2), Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err, PlacementError::Overlap);
    assert_eq!(board, before);
}

#[test]
fn test_placed_ship_cannot_be_reused() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(ShipKind::Destroyer), at(0, 0), Orientation::Horizontal)
        .unwrap();
    let placed = board.ships()[0].clone();
    assert_eq!(
        board.place_ship(placed, at(5, 5), Orientation::Horizontal),
        Err(PlacementError::AlreadyPlaced)
    );
}

/// Every start and orientation for every fleet length, checked against an
/// independent occupancy model.
#[test]
fn test_exhaustive_placement_rules() {
    let n = BOARD_SIZE as usize;
    let mut base = Board::new();
    base.place_ship(Ship::new(ShipKind::Carrier), at(4, 3), Orientation::Horizontal)
        .unwrap();

    for kind in ShipKind::ALL {
        let len = kind.length();
        for start in Coordinate::all() {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let (dr, dc) = orientation.step();
                let end_row = start.row() + dr * (len - 1);
                let end_col = start.col() + dc * (len - 1);
                let in_bounds = end_row < n && end_col < n;
                let overlaps = in_bounds
                    && (0..len).any(|i| {
                        let r = start.row() + dr * i;
                        let c = start.col() + dc * i;
                        r == 4 && (3..7).contains(&c)
                    });

                let mut board = base.clone();
                let result = board.place_ship(Ship::new(kind), start, orientation);
                if !in_bounds {
                    assert_eq!(result, Err(PlacementError::OutOfBounds));
                } else if overlaps {
                    assert_eq!(result, Err(PlacementError::Overlap));
                } else {
                    assert_eq!(result, Ok(()));
                    let ship_cells = board.cells().iter().filter(|c| c.is_ship()).count();
                    assert_eq!(ship_cells, 4 + len);
                }
            }
        }
    }
}

#[test]
fn test_random_fleet_placement() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng, &FLEET).unwrap();
    assert_eq!(board.ships().len(), FLEET.len());
    let ship_cells = board
        .cells()
        .iter()
        .filter(|c| **c == CellState::ShipPresent)
        .count();
    assert_eq!(ship_cells, TOTAL_SHIP_CELLS);
    for ship in board.ships() {
        assert_eq!(ship.cells().len(), ship.length());
        for cell in ship.cells() {
            assert_eq!(board.ship_at(*cell).map(Ship::kind), Some(ship.kind()));
        }
    }
}

#[test]
fn test_random_placement_gives_up_when_full() {
    let mut board = Board::new();
    // Frigates on every checkerboard cell leave no two adjacent free cells.
    for coord in Coordinate::all().filter(Coordinate::is_checkerboard) {
        board
            .place_ship(Ship::new(ShipKind::Frigate), coord, Orientation::Horizontal)
            .unwrap();
    }
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        board.place_ship_randomly(&mut rng, Ship::new(ShipKind::Destroyer)),
        Err(PlacementError::NoRoom)
    );
}

#[test]
fn test_render_info() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(ShipKind::Submarine), at(2, 5), Orientation::Vertical)
        .unwrap();
    assert_eq!(
        board.render_info(at(3, 5)),
        Some(RenderInfo {
            kind: ShipKind::Submarine,
            position: 1,
            length: 3,
            orientation: Orientation::Vertical,
        })
    );
    assert_eq!(board.render_info(at(0, 0)), None);
}

#[test]
fn test_board_state_rejects_inconsistent_cells() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(ShipKind::Destroyer), at(0, 0), Orientation::Horizontal)
        .unwrap();

    let mut state = BoardState::from(&board);
    state.cells[1] = CellState::Water;
    assert_eq!(
        Board::try_from(state),
        Err(BoardStateError::InconsistentCell { row: 0, col: 1 })
    );

    let mut state = BoardState::from(&board);
    state.cells[55] = CellState::ShipPresent;
    assert_eq!(
        Board::try_from(state),
        Err(BoardStateError::Unclaimed { row: 5, col: 5 })
    );

    let mut state = BoardState::from(&board);
    state.cells.pop();
    assert_eq!(Board::try_from(state), Err(BoardStateError::WrongCellCount(99)));

    let state = BoardState::from(&board);
    assert_eq!(Board::try_from(state).unwrap(), board);
}

#[test]
fn test_board_state_rejects_unplaced_ship() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(ShipKind::Destroyer), at(0, 0), Orientation::Horizontal)
        .unwrap();
    let mut state = BoardState::from(&board);
    state.ships.push(Ship::new(ShipKind::Submarine));
    assert_eq!(Board::try_from(state), Err(BoardStateError::ShipShape(1)));

    // zero-length ships never own a cell and stay valid
    let mut board = Board::new();
    board
        .place_ship(Ship::with_length(ShipKind::Frigate, 0), at(3, 3), Orientation::Vertical)
        .unwrap();
    let state = BoardState::from(&board);
    assert_eq!(Board::try_from(state).unwrap(), board);
}

#[test]
fn test_board_state_rejects_mismatched_damage() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(ShipKind::Submarine), at(4, 4), Orientation::Vertical)
        .unwrap();
    board.resolve_shot(at(5, 4)).unwrap();

    // ship remembers a hit the cells no longer show
    let mut state = BoardState::from(&board);
    state.cells[at(5, 4).index()] = CellState::ShipPresent;
    assert_eq!(Board::try_from(state), Err(BoardStateError::ShipDamage(0)));

    // a floating ship with a sunk segment
    let mut state = BoardState::from(&board);
    state.cells[at(5, 4).index()] = CellState::Sunk;
    assert_eq!(Board::try_from(state), Err(BoardStateError::ShipDamage(0)));

    board.resolve_shot(at(4, 4)).unwrap();
    board.resolve_shot(at(6, 4)).unwrap();
    assert_eq!(board.sunk_ship_count(), 1);
    let state = BoardState::from(&board);
    assert_eq!(Board::try_from(state.clone()).unwrap(), board);

    // a sunk ship with a segment still marked as merely hit
    let mut state = state;
    state.cells[at(6, 4).index()] = CellState::Hit;
    assert_eq!(Board::try_from(state), Err(BoardStateError::ShipDamage(0)));
}
