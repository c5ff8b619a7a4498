use std::time::Duration;

use log::warn;
use tokio::time::timeout;

use crate::error::MatchError;
use crate::protocol::{Expected, HostMessage, PeerMessage};
use crate::transport::Transport;

/// Transport wrapper that bounds how long every receive may block.
///
/// Without a deadline the wrapper delegates untouched and receives block
/// indefinitely, which is the referee's default behaviour.
pub struct DeadlineTransport<T: Transport> {
    inner: T,
    deadline: Option<Duration>,
}

impl<T: Transport> DeadlineTransport<T> {
    /// Fail any receive that takes longer than `deadline`.
    pub fn new(inner: T, deadline: Duration) -> Self {
        Self {
            inner,
            deadline: Some(deadline),
        }
    }

    pub fn from_option(inner: T, deadline: Option<Duration>) -> Self {
        Self { inner, deadline }
    }
}

#[async_trait::async_trait]
impl<T: Transport> Transport for DeadlineTransport<T> {
    async fn send(&mut self, msg: HostMessage) -> Result<(), MatchError> {
        self.inner.send(msg).await
    }

    async fn recv(&mut self, expected: Expected) -> Result<PeerMessage, MatchError> {
        let Some(deadline) = self.deadline else {
            return self.inner.recv(expected).await;
        };
        match timeout(deadline, self.inner.recv(expected)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("no {:?} within {:?}", expected, deadline);
                Err(MatchError::Timeout(deadline))
            }
        }
    }
}
