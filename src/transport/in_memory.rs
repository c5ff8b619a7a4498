use tokio::io::{duplex, split, DuplexStream, ReadHalf, WriteHalf};

use crate::peer::PeerChannel;
use crate::transport::StreamTransport;

/// Bytes buffered per direction before a writer blocks.
const BUFFER_SIZE: usize = 4096;

pub type MemoryTransport = StreamTransport<ReadHalf<DuplexStream>, WriteHalf<DuplexStream>>;
pub type MemoryPeer = PeerChannel<ReadHalf<DuplexStream>, WriteHalf<DuplexStream>>;

/// An opponent connection that stays inside the process. The wire format is
/// the same as for a child process, byte for byte.
pub fn pair() -> (MemoryTransport, MemoryPeer) {
    let (host, peer) = duplex(BUFFER_SIZE);
    let (peer_reader, peer_writer) = split(peer);
    (host_end(host), PeerChannel::new(peer_reader, peer_writer))
}

/// Like [`pair`] but hands out the peer's raw byte stream, for peers that
/// do not go through [`PeerChannel`].
pub fn raw_pair() -> (MemoryTransport, DuplexStream) {
    let (host, peer) = duplex(BUFFER_SIZE);
    (host_end(host), peer)
}

fn host_end(stream: DuplexStream) -> MemoryTransport {
    let (reader, writer) = split(stream);
    StreamTransport::new(reader, writer)
}
