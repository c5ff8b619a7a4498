use log::trace;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::error::MatchError;
use crate::protocol::{Expected, HostMessage, PeerMessage};
use crate::transport::Transport;

/// Host side of an opponent reached through a reader (peer to host) and a
/// writer (host to peer).
pub struct StreamTransport<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> StreamTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

#[async_trait::async_trait]
impl<R, W> Transport for StreamTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn send(&mut self, msg: HostMessage) -> Result<(), MatchError> {
        trace!("-> {:?}", msg);
        msg.write_to(&mut self.writer).await
    }

    async fn recv(&mut self, expected: Expected) -> Result<PeerMessage, MatchError> {
        let msg = PeerMessage::read_from(&mut self.reader, expected).await?;
        trace!("<- {:?}", msg.kind());
        Ok(msg)
    }
}
