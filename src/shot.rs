//! Resolution of a single shot.

use log::debug;

use crate::board::{Board, Cell};
use crate::common::{Shot, ShotOutcome};
use crate::error::MatchError;
use crate::protocol::HostMessage;
use crate::score::Score;
use crate::tracker::HitTracker;
use crate::transport::Transport;

/// Classify `shot` against `board`. Off-board shots and open water miss;
/// anything else goes to the tracker of the ship that was hit.
pub fn classify_shot(shot: Shot, board: &Board, tracker: &mut HitTracker) -> ShotOutcome {
    match board.at(shot) {
        None | Some(Cell::OpenWater) => ShotOutcome::Miss,
        Some(Cell::Ship(kind)) => tracker.record(kind, shot),
    }
}

/// Read one shot from `shooter`, score it against `defender_board`, report
/// the result to the shooter and the coordinates to the defender.
///
/// The shooter must already have been sent a `ShotRequest`.
pub async fn resolve_shot<S, D>(
    shooter: &mut S,
    defender: &mut D,
    score: &mut Score,
    tracker: &mut HitTracker,
    defender_board: &Board,
) -> Result<ShotOutcome, MatchError>
where
    S: Transport + ?Sized,
    D: Transport + ?Sized,
{
    let shot = shooter.recv_shot().await?;
    let outcome = classify_shot(shot, defender_board, tracker);
    score.record(outcome);
    debug!("shot ({}, {}) -> {:?}", shot.row, shot.col, outcome);
    shooter.send(HostMessage::ShotResult(outcome)).await?;
    defender.send(HostMessage::OpponentShot(shot)).await?;
    Ok(outcome)
}
