//! The opponent's side of the protocol.
//!
//! A [`Strategy`] decides boards and shots; [`PeerSession`] answers the
//! referee with it until `MatchOver` arrives. Opponents written against this
//! module satisfy the message contract by construction: one board per
//! `NewGame`, one shot per `ShotRequest`.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::board::Board;
use crate::common::{Shot, ShotOutcome};
use crate::config::SIZE;
use crate::error::MatchError;
use crate::protocol::{HostMessage, PeerMessage};

/// Peer end of an opponent's channel pair.
pub struct PeerChannel<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> PeerChannel<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub async fn recv(&mut self) -> Result<HostMessage, MatchError> {
        HostMessage::read_from(&mut self.reader).await
    }

    pub async fn send(&mut self, msg: PeerMessage) -> Result<(), MatchError> {
        msg.write_to(&mut self.writer).await
    }
}

/// Decisions an opponent makes during a match.
pub trait Strategy: Send {
    /// Fleet for the game that is starting.
    fn new_game(&mut self) -> Board;

    /// Next shot at the enemy board.
    fn next_shot(&mut self) -> Shot;

    /// Outcome of the shot returned by the last [`Strategy::next_shot`].
    fn shot_result(&mut self, _shot: Shot, _outcome: ShotOutcome) {}

    /// The enemy fired at our board.
    fn opponent_shot(&mut self, _shot: Shot) {}
}

/// Drives a [`Strategy`] over a [`PeerChannel`] until the match is over.
pub struct PeerSession<S, R, W> {
    strategy: S,
    channel: PeerChannel<R, W>,
}

impl<S, R, W> PeerSession<S, R, W>
where
    S: Strategy,
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(strategy: S, channel: PeerChannel<R, W>) -> Self {
        Self { strategy, channel }
    }

    /// Answer the referee until `MatchOver`, then hand the strategy back.
    /// Dropping the session afterwards closes the peer's channel ends.
    pub async fn run(mut self) -> Result<S, MatchError> {
        let mut last_shot: Option<Shot> = None;
        let mut games = 0u32;
        loop {
            match self.channel.recv().await? {
                HostMessage::NewGame => {
                    games += 1;
                    last_shot = None;
                    let board = self.strategy.new_game();
                    self.channel.send(PeerMessage::Board(board)).await?;
                }
                HostMessage::ShotRequest => {
                    let shot = self.strategy.next_shot();
                    self.channel.send(PeerMessage::Shot(shot)).await?;
                    last_shot = Some(shot);
                }
                HostMessage::ShotResult(outcome) => {
                    let shot = last_shot.take().ok_or_else(|| {
                        MatchError::violation("shot result without a preceding shot")
                    })?;
                    debug!("({}, {}) -> {:?}", shot.row, shot.col, outcome);
                    self.strategy.shot_result(shot, outcome);
                }
                HostMessage::OpponentShot(shot) => self.strategy.opponent_shot(shot),
                HostMessage::MatchOver => {
                    info!("match over after {} games", games);
                    return Ok(self.strategy);
                }
            }
        }
    }
}

/// Where a [`ScanStrategy`] puts its ships.
#[derive(Debug, Clone)]
pub enum FleetLayout {
    /// [`Board::standard_fleet`] every game.
    Standard,
    /// A fresh random fleet every game.
    Random(SmallRng),
}

/// Reference opponent: fires down each column in turn, left to right,
/// starting again at the top-left corner every game. Once every cell has
/// been shot it keeps going past the right edge.
#[derive(Debug, Clone)]
pub struct ScanStrategy {
    layout: FleetLayout,
    row: i16,
    col: i16,
}

impl ScanStrategy {
    pub fn new() -> Self {
        Self {
            layout: FleetLayout::Standard,
            row: 0,
            col: 0,
        }
    }

    /// Random fleets drawn from a generator seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            layout: FleetLayout::Random(SmallRng::seed_from_u64(seed)),
            row: 0,
            col: 0,
        }
    }
}

impl Default for ScanStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for ScanStrategy {
    fn new_game(&mut self) -> Board {
        self.row = 0;
        self.col = 0;
        match &mut self.layout {
            FleetLayout::Standard => Board::standard_fleet(),
            FleetLayout::Random(rng) => {
                Board::random_fleet(rng).unwrap_or_else(|_| Board::standard_fleet())
            }
        }
    }

    fn next_shot(&mut self) -> Shot {
        let shot = Shot::new(self.row, self.col);
        if self.row < SIZE as i16 - 1 {
            self.row += 1;
        } else {
            self.row = 0;
            self.col += 1;
        }
        shot
    }
}
