use broadside::{
    fleet_cells, Board, Coordinate, Orientation, Ship, ShipKind, FLEET, FLEET_SIZE,
    TOTAL_SHIP_CELLS,
};

#[test]
fn test_kind_lengths_and_names() {
    assert_eq!(ShipKind::Carrier.length(), 4);
    assert_eq!(ShipKind::Submarine.length(), 3);
    assert_eq!(ShipKind::Destroyer.length(), 2);
    assert_eq!(ShipKind::Frigate.length(), 1);
    for kind in ShipKind::ALL {
        assert_eq!(kind.to_string().parse::<ShipKind>(), Ok(kind));
    }
    assert_eq!("carrier".parse::<ShipKind>(), Ok(ShipKind::Carrier));
    assert!("Battleship".parse::<ShipKind>().is_err());
}

#[test]
fn test_fleet_composition() {
    assert_eq!(FLEET.len(), FLEET_SIZE);
    assert_eq!(fleet_cells(&FLEET), TOTAL_SHIP_CELLS);
    assert_eq!(TOTAL_SHIP_CELLS, 20);
    assert_eq!(fleet_cells(&[ShipKind::Carrier, ShipKind::Frigate]), 5);
    assert_eq!(fleet_cells(&[]), 0);
    assert_eq!(FLEET[0], ShipKind::Carrier);
    let count = |k: ShipKind| FLEET.iter().filter(|f| **f == k).count();
    assert_eq!(count(ShipKind::Carrier), 1);
    assert_eq!(count(ShipKind::Submarine), 2);
    assert_eq!(count(ShipKind::Destroyer), 3);
    assert_eq!(count(ShipKind::Frigate), 4);
}

#[test]
fn test_new_ship_is_fresh() {
    let ship = Ship::new(ShipKind::Submarine);
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.hits(), 0);
    assert!(!ship.is_sunk());
    assert!(!ship.is_placed());
    assert!(ship.cells().is_empty());
}

#[test]
fn test_register_hit_until_sunk() {
    let mut ship = Ship::new(ShipKind::Destroyer);
    ship.register_hit();
    assert!(!ship.is_sunk());
    ship.register_hit();
    assert!(ship.is_sunk());
    // extra hits are tolerated
    ship.register_hit();
    assert!(ship.is_sunk());
    assert_eq!(ship.hits(), 3);
}

#[test]
fn test_zero_length_ship_is_sunk() {
    let ship = Ship::with_length(ShipKind::Frigate, 0);
    assert!(ship.is_sunk());
}

#[test]
fn test_orientation_inferred_from_cells() {
    let mut board = Board::new();
    board
        .place_ship(
            Ship::new(ShipKind::Carrier),
            Coordinate::new(0, 0).unwrap(),
            Orientation::Vertical,
        )
        .unwrap();
    board
        .place_ship(
            Ship::new(ShipKind::Submarine),
            Coordinate::new(0, 5).unwrap(),
            Orientation::Horizontal,
        )
        .unwrap();
    board
        .place_ship(
            Ship::new(ShipKind::Frigate),
            Coordinate::new(9, 9).unwrap(),
            Orientation::Vertical,
        )
        .unwrap();

    let ships = board.ships();
    assert_eq!(ships[0].orientation(), Orientation::Vertical);
    assert_eq!(ships[1].orientation(), Orientation::Horizontal);
    // single-cell ships report horizontal
    assert_eq!(ships[2].orientation(), Orientation::Horizontal);

    let bow = Coordinate::new(0, 0).unwrap();
    assert_eq!(ships[0].cells()[0], bow);
    assert_eq!(ships[0].position_of(Coordinate::new(3, 0).unwrap()), Some(3));
    assert_eq!(ships[0].position_of(Coordinate::new(4, 0).unwrap()), None);
}

#[test]
fn test_orientation_from_bool() {
    assert_eq!(Orientation::from(true), Orientation::Horizontal);
    assert_eq!(Orientation::from(false), Orientation::Vertical);
    assert!(Orientation::Horizontal.is_horizontal());
}
