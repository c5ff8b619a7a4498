//! The referee's view of one opponent: a pair of one-directional channels,
//! host to peer and peer to host.
//!
//! Every operation blocks until it completes; messages arrive in the order
//! they were written. Implementations exist for any byte stream pair
//! ([`stream::StreamTransport`]), for child processes ([`process`]) and for
//! in-process pipes ([`in_memory`]). [`deadline::DeadlineTransport`] adds an
//! optional receive deadline on top of any of them.

use crate::board::Board;
use crate::common::Shot;
use crate::error::MatchError;
use crate::protocol::{Expected, HostMessage, PeerMessage};

#[async_trait::async_trait]
pub trait Transport: Send {
    /// Write one message to the peer and flush it.
    async fn send(&mut self, msg: HostMessage) -> Result<(), MatchError>;

    /// Read the next peer message, which must be of kind `expected`.
    async fn recv(&mut self, expected: Expected) -> Result<PeerMessage, MatchError>;

    async fn recv_board(&mut self) -> Result<Board, MatchError> {
        match self.recv(Expected::Board).await? {
            PeerMessage::Board(board) => Ok(board),
            other => Err(MatchError::violation(format!(
                "expected a board, got {:?}",
                other.kind()
            ))),
        }
    }

    async fn recv_shot(&mut self) -> Result<Shot, MatchError> {
        match self.recv(Expected::Shot).await? {
            PeerMessage::Shot(shot) => Ok(shot),
            other => Err(MatchError::violation(format!(
                "expected a shot, got {:?}",
                other.kind()
            ))),
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&mut self, msg: HostMessage) -> Result<(), MatchError> {
        (**self).send(msg).await
    }

    async fn recv(&mut self, expected: Expected) -> Result<PeerMessage, MatchError> {
        (**self).recv(expected).await
    }
}

pub mod deadline;
pub mod in_memory;
pub mod process;
pub mod stream;

pub use deadline::DeadlineTransport;
pub use stream::StreamTransport;
