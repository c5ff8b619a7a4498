//! Messages exchanged between the referee and an opponent, and their wire
//! encoding.
//!
//! Every record is fixed width, little-endian, encoded with `bincode`:
//!
//! | record        | layout                                   |
//! |---------------|------------------------------------------|
//! | command code  | `u32`                                    |
//! | result code   | `u32`                                    |
//! | shot          | `i16 row`, `i16 col`                     |
//! | board         | `SIZE * SIZE` cell markers, row-major    |
//!
//! Host to peer: a command code optionally followed by its payload. Peer to
//! host: the bare payload the host asked for. The host always knows what it
//! expects next, so peer messages carry no code.

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::board::{Board, Markers};
use crate::common::{Shot, ShotOutcome};
use crate::config::SIZE;
use crate::error::MatchError;

pub const CODE_WIDTH: usize = 4;
pub const SHOT_WIDTH: usize = 4;
pub const BOARD_WIDTH: usize = SIZE * SIZE;

pub const NEW_GAME: u32 = 0;
pub const SHOT_REQUEST: u32 = 1;
pub const SHOT_RESULT: u32 = 2;
pub const OPPONENT_SHOT: u32 = 3;
pub const MATCH_OVER: u32 = 4;

/// Messages sent by the referee. Variant order fixes the command codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostMessage {
    /// Start a game; the peer answers with its board.
    NewGame,
    /// The peer answers with one shot.
    ShotRequest,
    /// Classification of the peer's last shot.
    ShotResult(ShotOutcome),
    /// Where the opponent just fired at the peer's board.
    OpponentShot(Shot),
    /// Terminal: the peer stops after this.
    MatchOver,
}

impl HostMessage {
    pub fn code(&self) -> u32 {
        match self {
            HostMessage::NewGame => NEW_GAME,
            HostMessage::ShotRequest => SHOT_REQUEST,
            HostMessage::ShotResult(_) => SHOT_RESULT,
            HostMessage::OpponentShot(_) => OPPONENT_SHOT,
            HostMessage::MatchOver => MATCH_OVER,
        }
    }

    /// Width of the payload following `code`, or `None` for an unknown code.
    pub fn payload_width(code: u32) -> Option<usize> {
        match code {
            NEW_GAME | SHOT_REQUEST | MATCH_OVER => Some(0),
            SHOT_RESULT => Some(CODE_WIDTH),
            OPPONENT_SHOT => Some(SHOT_WIDTH),
            _ => None,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, MatchError> {
        bincode::serialize(self)
            .map_err(|e| MatchError::violation(format!("cannot encode {:?}: {}", self, e)))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, MatchError> {
        bincode::deserialize(bytes)
            .map_err(|e| MatchError::violation(format!("undecodable host message: {}", e)))
    }

    pub async fn write_to<W: AsyncWrite + Unpin>(&self, writer: &mut W) -> Result<(), MatchError> {
        let data = self.encode()?;
        writer
            .write_all(&data)
            .await
            .map_err(|e| MatchError::io("write", e))?;
        writer.flush().await.map_err(|e| MatchError::io("write", e))
    }

    pub async fn read_from<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Self, MatchError> {
        let mut code = [0u8; CODE_WIDTH];
        reader
            .read_exact(&mut code)
            .await
            .map_err(|e| MatchError::io("read", e))?;
        let width = HostMessage::payload_width(u32::from_le_bytes(code)).ok_or_else(|| {
            MatchError::violation(format!("unknown command code {}", u32::from_le_bytes(code)))
        })?;
        let mut buf = vec![0u8; CODE_WIDTH + width];
        buf[..CODE_WIDTH].copy_from_slice(&code);
        reader
            .read_exact(&mut buf[CODE_WIDTH..])
            .await
            .map_err(|e| MatchError::io("read", e))?;
        HostMessage::decode(&buf)
    }
}

/// The kind of reply the referee is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Board,
    Shot,
}

impl Expected {
    pub fn width(self) -> usize {
        match self {
            Expected::Board => BOARD_WIDTH,
            Expected::Shot => SHOT_WIDTH,
        }
    }
}

/// Messages sent by an opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerMessage {
    /// Answer to `NewGame`.
    Board(Board),
    /// Answer to `ShotRequest`.
    Shot(Shot),
}

impl PeerMessage {
    pub fn kind(&self) -> Expected {
        match self {
            PeerMessage::Board(_) => Expected::Board,
            PeerMessage::Shot(_) => Expected::Shot,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, MatchError> {
        let data = match self {
            PeerMessage::Board(board) => bincode::serialize(&board.to_markers()),
            PeerMessage::Shot(shot) => bincode::serialize(shot),
        };
        data.map_err(|e| MatchError::violation(format!("cannot encode {:?}: {}", self.kind(), e)))
    }

    /// Decode a payload of the given kind. Board markers naming no ship are
    /// rejected as a malformed board.
    pub fn decode(expected: Expected, bytes: &[u8]) -> Result<Self, MatchError> {
        if bytes.len() != expected.width() {
            return Err(MatchError::violation(format!(
                "{:?} payload is {} bytes, expected {}",
                expected,
                bytes.len(),
                expected.width()
            )));
        }
        match expected {
            Expected::Board => {
                let markers: Markers = bincode::deserialize(bytes)
                    .map_err(|e| MatchError::violation(format!("undecodable board: {}", e)))?;
                Ok(PeerMessage::Board(Board::from_markers(&markers)?))
            }
            Expected::Shot => {
                let shot: Shot = bincode::deserialize(bytes)
                    .map_err(|e| MatchError::violation(format!("undecodable shot: {}", e)))?;
                Ok(PeerMessage::Shot(shot))
            }
        }
    }

    pub async fn write_to<W: AsyncWrite + Unpin>(&self, writer: &mut W) -> Result<(), MatchError> {
        let data = self.encode()?;
        writer
            .write_all(&data)
            .await
            .map_err(|e| MatchError::io("write", e))?;
        writer.flush().await.map_err(|e| MatchError::io("write", e))
    }

    pub async fn read_from<R: AsyncRead + Unpin>(
        reader: &mut R,
        expected: Expected,
    ) -> Result<Self, MatchError> {
        let mut buf = vec![0u8; expected.width()];
        reader
            .read_exact(&mut buf)
            .await
            .map_err(|e| MatchError::io("read", e))?;
        PeerMessage::decode(expected, &buf)
    }
}
