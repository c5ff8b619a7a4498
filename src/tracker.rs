//! Per-ship hit accumulation, used to tell a hit from a sink.
//!
//! One [`HitTracker`] exists per board and game. It holds a [`ShipTracker`]
//! for every ship kind; all kinds share the same classification rule, driven
//! only by the kind's size.

use alloc::vec::Vec;

use crate::common::{Shot, ShotOutcome};
use crate::config::{SHIP_KINDS, TOTAL_SHIPS};
use crate::ship::ShipKind;

/// Confirmed hits on one ship, in the order they landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipTracker {
    kind: ShipKind,
    confirmed: Vec<Shot>,
}

impl ShipTracker {
    pub fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            confirmed: Vec::with_capacity(kind.size()),
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn confirmed(&self) -> &[Shot] {
        &self.confirmed
    }

    pub fn is_sunk(&self) -> bool {
        self.confirmed.len() == self.kind.size()
    }

    /// Record a shot that landed on this ship.
    ///
    /// Repeats and shots at an already sunk ship report `Hit` and leave the
    /// tracker untouched. The shot that confirms the last segment reports
    /// `Sink`.
    pub fn record(&mut self, shot: Shot) -> ShotOutcome {
        if self.confirmed.contains(&shot) || self.is_sunk() {
            return ShotOutcome::Hit;
        }
        self.confirmed.push(shot);
        if self.is_sunk() {
            ShotOutcome::Sink
        } else {
            ShotOutcome::Hit
        }
    }

    pub fn reset(&mut self) {
        self.confirmed.clear();
    }
}

/// Hit tracking for every ship on one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitTracker {
    ships: [ShipTracker; TOTAL_SHIPS],
}

impl HitTracker {
    pub fn new() -> Self {
        Self {
            ships: SHIP_KINDS.map(ShipTracker::new),
        }
    }

    /// Classify a shot that landed on a cell of `kind`.
    pub fn record(&mut self, kind: ShipKind, shot: Shot) -> ShotOutcome {
        self.ships[kind.index()].record(shot)
    }

    pub fn confirmed(&self, kind: ShipKind) -> &[Shot] {
        self.ships[kind.index()].confirmed()
    }

    pub fn is_sunk(&self, kind: ShipKind) -> bool {
        self.ships[kind.index()].is_sunk()
    }

    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// Forget all hits; called when a new game starts.
    pub fn reset(&mut self) {
        self.ships.iter_mut().for_each(ShipTracker::reset);
    }

    pub fn ships(&self) -> &[ShipTracker] {
        &self.ships
    }
}

impl Default for HitTracker {
    fn default() -> Self {
        Self::new()
    }
}
