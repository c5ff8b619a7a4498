#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod score;
mod ship;
mod tracker;
#[cfg(feature = "std")]
mod error;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod peer;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
mod referee;
#[cfg(feature = "std")]
mod report;
#[cfg(feature = "std")]
mod shot;
#[cfg(feature = "std")]
pub mod transport;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use score::*;
pub use ship::*;
pub use tracker::*;
#[cfg(feature = "std")]
pub use error::MatchError;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
#[cfg(feature = "std")]
pub use peer::{PeerChannel, PeerSession, ScanStrategy, Strategy};
#[cfg(feature = "std")]
pub use protocol::{Expected, HostMessage, PeerMessage};
#[cfg(feature = "std")]
pub use referee::*;
#[cfg(feature = "std")]
pub use report::*;
#[cfg(feature = "std")]
pub use shot::*;
#[cfg(feature = "std")]
pub use transport::{DeadlineTransport, StreamTransport, Transport};
