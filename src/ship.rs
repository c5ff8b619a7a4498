//! Ship kinds and their fixed sizes.

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The five ship categories a fleet is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    AircraftCarrier,
    Battleship,
    Destroyer,
    Submarine,
    PatrolBoat,
}

impl ShipKind {
    /// Every kind, in table order.
    pub const ALL: [ShipKind; 5] = [
        ShipKind::AircraftCarrier,
        ShipKind::Battleship,
        ShipKind::Destroyer,
        ShipKind::Submarine,
        ShipKind::PatrolBoat,
    ];

    /// Number of cells the ship occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::AircraftCarrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    /// Position of this kind in [`ShipKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::AircraftCarrier => "Aircraft Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
            ShipKind::PatrolBoat => "Patrol Boat",
        }
    }

    /// Cell marker used for this kind on the wire.
    pub const fn marker(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`ShipKind::marker`].
    pub fn from_marker(marker: u8) -> Option<ShipKind> {
        ShipKind::ALL.iter().copied().find(|k| k.marker() == marker)
    }
}

impl core::fmt::Display for ShipKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
