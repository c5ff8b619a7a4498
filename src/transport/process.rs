//! Channel setup for opponents running as child processes.
//!
//! The host to peer channel is a pipe onto the child's standard input, the
//! peer to host channel a pipe from its standard output. The child learns
//! its endpoints from two positional arguments, read endpoint first. Pipe
//! ends are close-on-exec, so after launch the referee holds only its own
//! two ends and the child only the other two; closing either side shows up
//! as end-of-stream on the other.

use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use log::{info, warn};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};

use crate::error::MatchError;
use crate::transport::StreamTransport;

/// Endpoint identifier of the child's read end (its standard input).
pub const READ_ENDPOINT: &str = "0";
/// Endpoint identifier of the child's write end (its standard output).
pub const WRITE_ENDPOINT: &str = "1";

pub type ProcessTransport = StreamTransport<ChildStdout, ChildStdin>;

/// A launched opponent and the referee's ends of its channels.
pub struct PeerProcess {
    name: String,
    child: Child,
    transport: ProcessTransport,
}

impl PeerProcess {
    /// Launch `program` with its channel endpoints as arguments.
    pub fn launch(program: &Path) -> Result<Self, MatchError> {
        let display = program.display().to_string();
        let setup_error = |source: io::Error| MatchError::ChannelSetup {
            program: display.clone(),
            source,
        };
        let mut child = Command::new(program)
            .arg(READ_ENDPOINT)
            .arg(WRITE_ENDPOINT)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(setup_error)?;
        let writer = child
            .stdin
            .take()
            .ok_or_else(|| setup_error(io::Error::other("host to peer channel missing")))?;
        let reader = child
            .stdout
            .take()
            .ok_or_else(|| setup_error(io::Error::other("peer to host channel missing")))?;
        info!("launched {} (pid {:?})", display, child.id());
        Ok(Self {
            name: player_name(program),
            child,
            transport: StreamTransport::new(reader, writer),
        })
    }

    pub fn into_parts(self) -> (String, ProcessTransport, Child) {
        (self.name, self.transport, self.child)
    }
}

/// Display name of an opponent: the last component of its executable path.
pub fn player_name(program: &Path) -> String {
    program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string())
}

/// Wait for an opponent whose channels have been dropped to exit.
pub async fn reap(mut child: Child, name: &str) -> io::Result<ExitStatus> {
    let status = child.wait().await?;
    if status.success() {
        info!("{} exited", name);
    } else {
        warn!("{} exited with {}", name, status);
    }
    Ok(status)
}
