use std::fmt;
use std::io;
use std::time::Duration;

use crate::common::BoardError;

/// Fatal errors of a match. Any of them ends the whole match.
#[derive(Debug)]
pub enum MatchError {
    /// An opponent could not be launched or its channels could not be set up.
    ChannelSetup { program: String, source: io::Error },
    /// Short or failed read/write, or a message the protocol does not allow
    /// at this point.
    ProtocolViolation(String),
    /// A received board could not be accepted.
    MalformedBoard(BoardError),
    /// A receive deadline expired.
    Timeout(Duration),
}

impl MatchError {
    pub(crate) fn violation(detail: impl Into<String>) -> Self {
        MatchError::ProtocolViolation(detail.into())
    }

    /// Map an I/O failure on a channel to a protocol violation.
    pub(crate) fn io(op: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => {
                MatchError::violation(format!("short {}: channel closed by peer", op))
            }
            io::ErrorKind::BrokenPipe => {
                MatchError::violation(format!("{} failed: peer closed its end", op))
            }
            _ => MatchError::violation(format!("{} failed: {}", op, err)),
        }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::ChannelSetup { program, source } => {
                write!(f, "Channel setup failed for {}: {}", program, source)
            }
            MatchError::ProtocolViolation(detail) => write!(f, "Protocol violation: {}", detail),
            MatchError::MalformedBoard(e) => write!(f, "Malformed board: {}", e),
            MatchError::Timeout(d) => write!(f, "No message within {:?}", d),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::ChannelSetup { source, .. } => Some(source),
            MatchError::MalformedBoard(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::MalformedBoard(err)
    }
}
