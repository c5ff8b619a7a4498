use battleship_referee::{
    Board, BoardError, Cell, Orientation, ShipKind, Shot, OPEN_WATER, SHIP_KINDS, SIZE,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_standard_fleet_layout() {
    let board = Board::standard_fleet();
    board.validate().unwrap();
    for row in 0..5 {
        assert_eq!(board.cell(row, 3), Cell::Ship(ShipKind::AircraftCarrier));
    }
    for row in 0..4 {
        assert_eq!(board.cell(row, 2), Cell::Ship(ShipKind::Battleship));
    }
    assert_eq!(board.cell(6, 0), Cell::Ship(ShipKind::Submarine));
    assert_eq!(board.cell(9, 2), Cell::Ship(ShipKind::Destroyer));
    assert_eq!(board.cell(9, 7), Cell::Ship(ShipKind::PatrolBoat));
    assert_eq!(board.cell(5, 5), Cell::OpenWater);
    assert_eq!(board.occupied().count_ones(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_markers_roundtrip_and_unknown_marker() {
    let board = Board::standard_fleet();
    let mut markers = board.to_markers();
    assert_eq!(markers[0][3], ShipKind::AircraftCarrier.marker());
    assert_eq!(markers[5][5], OPEN_WATER);
    assert_eq!(Board::from_markers(&markers).unwrap(), board);

    markers[4][7] = 42;
    assert_eq!(
        Board::from_markers(&markers).unwrap_err(),
        BoardError::UnknownMarker {
            row: 4,
            col: 7,
            marker: 42
        }
    );
}

#[test]
fn test_at_is_none_off_board() {
    let board = Board::standard_fleet();
    assert_eq!(board.at(Shot::new(0, 3)), Some(Cell::Ship(ShipKind::AircraftCarrier)));
    for shot in [
        Shot::new(-1, 0),
        Shot::new(0, -1),
        Shot::new(SIZE as i16, 0),
        Shot::new(0, SIZE as i16),
        Shot::new(i16::MIN, i16::MAX),
    ] {
        assert_eq!(board.at(shot), None, "{:?}", shot);
        assert!(!shot.in_bounds());
    }
}

#[test]
fn test_place_rejects_overlap_repeat_and_edge() {
    let mut board = Board::empty();
    board
        .place(ShipKind::Battleship, 2, 2, Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board.place(ShipKind::Battleship, 5, 5, Orientation::Vertical),
        Err(BoardError::ShipAlreadyPlaced(ShipKind::Battleship))
    );
    assert_eq!(
        board.place(ShipKind::Destroyer, 0, 3, Orientation::Vertical),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(
        board.place(ShipKind::AircraftCarrier, 0, SIZE - 2, Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
}

#[test]
fn test_validate_missing_ship() {
    let mut board = Board::empty();
    board
        .place(ShipKind::PatrolBoat, 0, 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board.validate(),
        Err(BoardError::WrongShipSize {
            kind: ShipKind::AircraftCarrier,
            expected: 5,
            found: 0
        })
    );
}

#[test]
fn test_validate_bent_and_oversized_ships() {
    let mut markers = Board::standard_fleet().to_markers();
    // move the tail of the patrol boat up a row
    markers[9][7] = OPEN_WATER;
    markers[8][7] = ShipKind::PatrolBoat.marker();
    let bent = Board::from_markers(&markers).unwrap();
    assert_eq!(bent.validate(), Err(BoardError::NotALine(ShipKind::PatrolBoat)));

    let mut markers = Board::standard_fleet().to_markers();
    markers[9][8] = ShipKind::PatrolBoat.marker();
    let long = Board::from_markers(&markers).unwrap();
    assert_eq!(
        long.validate(),
        Err(BoardError::WrongShipSize {
            kind: ShipKind::PatrolBoat,
            expected: 2,
            found: 3
        })
    );

    let mut markers = Board::standard_fleet().to_markers();
    markers[9][7] = OPEN_WATER;
    markers[9][8] = ShipKind::PatrolBoat.marker();
    let gap = Board::from_markers(&markers).unwrap();
    assert_eq!(gap.validate(), Err(BoardError::NotALine(ShipKind::PatrolBoat)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_is_valid(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::random_fleet(&mut rng).unwrap();
        prop_assert_eq!(board.validate(), Ok(()));
        prop_assert_eq!(board.occupied().count_ones(), TOTAL_SHIP_CELLS);
        for kind in SHIP_KINDS {
            prop_assert_eq!(board.ship_mask(kind).count_ones(), kind.size());
        }
        prop_assert_eq!(Board::from_markers(&board.to_markers()).unwrap(), board);
    }
}
