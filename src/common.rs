//! Common types: shots, shot outcomes, sides and board errors.

use crate::bitboard::BitBoardError;
use crate::config::SIZE;
use crate::ship::ShipKind;

/// A shot as produced by an opponent. Coordinates are untrusted and may lie
/// outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub row: i16,
    pub col: i16,
}

impl Shot {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Board indices of the shot, or `None` when it falls outside the grid.
    pub fn cell(&self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        if row < SIZE && col < SIZE {
            Some((row, col))
        } else {
            None
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.cell().is_some()
    }
}

/// Classification of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Open water or off the board.
    Miss,
    /// Landed on a ship that is not sunk by this shot.
    Hit,
    /// Confirmed the last segment of a ship.
    Sink,
}

/// One of the two opponents. `A` always shoots first in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Errors returned by board construction and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., index outside the grid).
    BitBoardError(BitBoardError),
    /// A cell carried a marker that names no ship kind.
    UnknownMarker { row: usize, col: usize, marker: u8 },
    /// A ship kind covers the wrong number of cells.
    WrongShipSize {
        kind: ShipKind,
        expected: usize,
        found: usize,
    },
    /// A ship's cells do not form one straight, gap-free line.
    NotALine(ShipKind),
    /// Attempted to place a ship kind that is already on the board.
    ShipAlreadyPlaced(ShipKind),
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement leaves the board.
    ShipOutOfBounds,
    /// Random placement gave up.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::UnknownMarker { row, col, marker } => {
                write!(f, "Unknown cell marker {} at ({}, {})", marker, row, col)
            }
            BoardError::WrongShipSize {
                kind,
                expected,
                found,
            } => write!(
                f,
                "{} covers {} cells, expected {}",
                kind, found, expected
            ),
            BoardError::NotALine(kind) => write!(f, "{} is not a straight line", kind),
            BoardError::ShipAlreadyPlaced(kind) => write!(f, "{} is already placed", kind),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
