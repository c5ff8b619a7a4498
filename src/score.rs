//! Per-opponent score and the rule that turns a finished game into an
//! outcome.

use crate::common::{ShotOutcome, Side};
use crate::config::TOTAL_SHIPS;

/// Score of one opponent. `wins`, `losses` and `draws` last for the whole
/// match; `hits`, `misses` and `sinks` are per game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub hits: u32,
    pub misses: u32,
    pub sinks: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one resolved shot.
    pub fn record(&mut self, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Miss => self.misses += 1,
            ShotOutcome::Hit => self.hits += 1,
            ShotOutcome::Sink => {
                self.hits += 1;
                self.sinks += 1;
            }
        }
    }

    /// Shots fired in the current game.
    pub fn shots(&self) -> u32 {
        self.hits + self.misses
    }

    /// Whole fleet of the opponent sunk in the current game.
    pub fn fleet_sunk(&self) -> bool {
        self.sinks as usize == TOTAL_SHIPS
    }

    /// Games this score has been decided in.
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Clear the per-game counters.
    pub fn reset_game(&mut self) {
        self.hits = 0;
        self.misses = 0;
        self.sinks = 0;
    }
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    /// Both fleets went down in the same round.
    Draw,
    /// Only this side sank the whole enemy fleet.
    Won(Side),
    /// The round budget ran out first. Counts as a loss for both.
    NoWinner,
}

impl GameOutcome {
    /// Decide a game from both sides' per-game counters.
    pub fn decide(a: &Score, b: &Score) -> Self {
        match (a.fleet_sunk(), b.fleet_sunk()) {
            (true, true) => GameOutcome::Draw,
            (true, false) => GameOutcome::Won(Side::A),
            (false, true) => GameOutcome::Won(Side::B),
            (false, false) => GameOutcome::NoWinner,
        }
    }

    /// Add this outcome to the match counters of both sides.
    pub fn apply(self, a: &mut Score, b: &mut Score) {
        match self {
            GameOutcome::Draw => {
                a.draws += 1;
                b.draws += 1;
            }
            GameOutcome::Won(Side::A) => {
                a.wins += 1;
                b.losses += 1;
            }
            GameOutcome::Won(Side::B) => {
                a.losses += 1;
                b.wins += 1;
            }
            GameOutcome::NoWinner => {
                a.losses += 1;
                b.losses += 1;
            }
        }
    }
}

/// Side with strictly more wins. Equal wins leave the match without a
/// winner.
pub fn match_leader(a: &Score, b: &Score) -> Option<Side> {
    match a.wins.cmp(&b.wins) {
        core::cmp::Ordering::Greater => Some(Side::A),
        core::cmp::Ordering::Less => Some(Side::B),
        core::cmp::Ordering::Equal => None,
    }
}
