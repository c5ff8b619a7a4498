//! The grid an opponent submits at the start of each game.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Shot};
use crate::config::{SHIP_KINDS, SIZE};
use crate::ship::{Orientation, ShipKind};
use core::fmt;
use rand::Rng;

/// Occupancy mask over the referee's grid.
pub type BB = BitBoard<u128, SIZE>;

/// Raw cell markers as they travel on the wire, row-major.
pub type Markers = [[u8; SIZE]; SIZE];

/// Marker for a cell without a ship.
pub const OPEN_WATER: u8 = 0;

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    OpenWater,
    Ship(ShipKind),
}

impl Cell {
    pub fn marker(self) -> u8 {
        match self {
            Cell::OpenWater => OPEN_WATER,
            Cell::Ship(kind) => kind.marker(),
        }
    }

    pub fn from_marker(marker: u8) -> Option<Cell> {
        if marker == OPEN_WATER {
            Some(Cell::OpenWater)
        } else {
            ShipKind::from_marker(marker).map(Cell::Ship)
        }
    }
}

/// A SIZE×SIZE grid of cells. Read-only once a game has started.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// A board with nothing but open water.
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::OpenWater; SIZE]; SIZE],
        }
    }

    /// Decode wire markers. Any marker that is neither open water nor a ship
    /// kind is rejected; shapes are not checked (see [`Board::validate`]).
    pub fn from_markers(markers: &Markers) -> Result<Self, BoardError> {
        let mut board = Board::empty();
        for (row, line) in markers.iter().enumerate() {
            for (col, &marker) in line.iter().enumerate() {
                board.cells[row][col] = Cell::from_marker(marker)
                    .ok_or(BoardError::UnknownMarker { row, col, marker })?;
            }
        }
        Ok(board)
    }

    pub fn to_markers(&self) -> Markers {
        let mut markers = [[OPEN_WATER; SIZE]; SIZE];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                markers[row][col] = cell.marker();
            }
        }
        markers
    }

    /// Cell at board indices. Panics when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Cell under a shot, or `None` when the shot is off the board.
    pub fn at(&self, shot: Shot) -> Option<Cell> {
        shot.cell().map(|(row, col)| self.cells[row][col])
    }

    /// Cells covered by `kind`.
    pub fn ship_mask(&self, kind: ShipKind) -> BB {
        let mut mask = BB::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                if *cell == Cell::Ship(kind) {
                    // indices come from the grid itself
                    let _ = mask.set(row, col);
                }
            }
        }
        mask
    }

    /// Cells covered by any ship.
    pub fn occupied(&self) -> BB {
        SHIP_KINDS
            .iter()
            .fold(BB::new(), |acc, &kind| acc | self.ship_mask(kind))
    }

    /// Check that every ship kind is present exactly once as a straight line
    /// of its own size.
    pub fn validate(&self) -> Result<(), BoardError> {
        for kind in SHIP_KINDS {
            let mask = self.ship_mask(kind);
            let found = mask.count_ones();
            if found != kind.size() {
                return Err(BoardError::WrongShipSize {
                    kind,
                    expected: kind.size(),
                    found,
                });
            }
            if !mask.is_line() {
                return Err(BoardError::NotALine(kind));
            }
        }
        Ok(())
    }

    /// Place `kind` starting at (`row`, `col`).
    pub fn place(
        &mut self,
        kind: ShipKind,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if !self.ship_mask(kind).is_empty() {
            return Err(BoardError::ShipAlreadyPlaced(kind));
        }
        let mask = BB::line(row, col, kind.size(), orientation)
            .map_err(|_| BoardError::ShipOutOfBounds)?;
        if !(self.occupied() & mask).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        for (r, c) in mask.iter_set_bits() {
            self.cells[r][c] = Cell::Ship(kind);
        }
        Ok(())
    }

    /// Returns a random non-overlapping (row, col, Orientation) for `kind`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let occupied = self.occupied();
        for _ in 0..100 {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_r = if orient == Orientation::Vertical {
                SIZE - kind.size()
            } else {
                SIZE - 1
            };
            let max_c = if orient == Orientation::Horizontal {
                SIZE - kind.size()
            } else {
                SIZE - 1
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let mask = BB::line(r, c, kind.size(), orient)?;
            if (occupied & mask).is_empty() {
                return Ok((r, c, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// A complete fleet at random positions.
    pub fn random_fleet<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Board::empty();
        for kind in SHIP_KINDS {
            let (r, c, o) = board.random_placement(rng, kind)?;
            board.place(kind, r, c, o)?;
        }
        Ok(board)
    }

    /// The fixed layout used by the column-scanning reference peer.
    pub fn standard_fleet() -> Self {
        const LAYOUT: [(ShipKind, usize, usize, Orientation); 5] = [
            (ShipKind::AircraftCarrier, 0, 3, Orientation::Vertical),
            (ShipKind::Battleship, 0, 2, Orientation::Vertical),
            (ShipKind::Destroyer, SIZE - 1, 0, Orientation::Horizontal),
            (ShipKind::Submarine, 6, 0, Orientation::Horizontal),
            (ShipKind::PatrolBoat, SIZE - 1, 6, Orientation::Horizontal),
        ];
        let mut board = Board::empty();
        for (kind, row, col, orientation) in LAYOUT {
            for i in 0..kind.size() {
                let (r, c) = match orientation {
                    Orientation::Horizontal => (row, col + i),
                    Orientation::Vertical => (row + i, col),
                };
                board.cells[r][c] = Cell::Ship(kind);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        for line in self.cells.iter() {
            for cell in line.iter() {
                write!(f, "{} ", cell.marker())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
