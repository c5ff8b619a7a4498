//! Per-game and per-match reports.

use std::fmt;

use serde::Serialize;

use crate::common::Side;
use crate::score::{GameOutcome, Score};

/// One opponent's line in a game report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideReport {
    pub name: String,
    pub shots: u32,
    pub hits: u32,
    pub misses: u32,
    pub sinks: u32,
}

impl SideReport {
    pub fn new(name: &str, score: &Score) -> Self {
        Self {
            name: name.to_string(),
            shots: score.shots(),
            hits: score.hits,
            misses: score.misses,
            sinks: score.sinks,
        }
    }
}

/// Result of one game, captured before the per-game counters are reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub game: u32,
    pub rounds: u32,
    pub max_rounds: u32,
    pub outcome: GameOutcome,
    pub a: SideReport,
    pub b: SideReport,
}

impl GameReport {
    pub fn side(&self, side: Side) -> &SideReport {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game {} Results: ", self.game)?;
        match self.outcome {
            GameOutcome::Draw => writeln!(f, "Draw")?,
            GameOutcome::Won(side) => writeln!(f, "{} won!", self.side(side).name)?,
            GameOutcome::NoWinner => writeln!(f, "No winner within {} rounds", self.max_rounds)?,
        }
        for line in [&self.a, &self.b] {
            writeln!(
                f,
                "{:>16}: {} shots, {} hits, and {} sinks",
                line.name, line.shots, line.hits, line.sinks
            )?;
        }
        Ok(())
    }
}

/// One opponent's match totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchLine {
    pub name: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl MatchLine {
    pub fn new(name: &str, score: &Score) -> Self {
        Self {
            name: name.to_string(),
            wins: score.wins,
            draws: score.draws,
            losses: score.losses,
        }
    }
}

/// Cumulative result after the last game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub games: u32,
    pub a: MatchLine,
    pub b: MatchLine,
    /// Side with more wins; `None` when both have the same number.
    pub winner: Option<Side>,
}

impl MatchSummary {
    pub fn side(&self, side: Side) -> &MatchLine {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Match Results: ")?;
        match self.winner {
            Some(side) => writeln!(f, "{} won!", self.side(side).name)?,
            None => writeln!(f, "No winner, both sides have {} wins", self.a.wins)?,
        }
        for line in [&self.a, &self.b] {
            writeln!(
                f,
                "{:>16}: {} wins, {} draws, and {} losses",
                line.name, line.wins, line.draws, line.losses
            )?;
        }
        Ok(())
    }
}
