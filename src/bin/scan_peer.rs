//! Reference opponent: scans the enemy board column by column.
//!
//! Started by the referee as `scan_peer <read-endpoint> <write-endpoint>`.

use anyhow::bail;
use battleship_referee::{init_logging_with, PeerChannel, PeerSession, ScanStrategy};
use clap::Parser;
use log::LevelFilter;
use tokio::io::{AsyncRead, AsyncWrite};

#[derive(Parser)]
#[command(about = "Column-scanning battleship opponent")]
struct Args {
    /// Descriptor the referee writes to us on.
    read_endpoint: String,
    /// Descriptor we answer the referee on.
    write_endpoint: String,
    #[arg(long, help = "Place a random fleet every game, seeded with this value")]
    seed: Option<u64>,
}

type Reader = Box<dyn AsyncRead + Unpin + Send>;
type Writer = Box<dyn AsyncWrite + Unpin + Send>;

fn open_reader(endpoint: &str) -> anyhow::Result<Reader> {
    match endpoint.parse::<i32>()? {
        0 => Ok(Box::new(tokio::io::stdin())),
        fd => Ok(Box::new(tokio::fs::File::from_std(open_descriptor(fd)?))),
    }
}

fn open_writer(endpoint: &str) -> anyhow::Result<Writer> {
    match endpoint.parse::<i32>()? {
        1 => Ok(Box::new(tokio::io::stdout())),
        fd => Ok(Box::new(tokio::fs::File::from_std(open_descriptor(fd)?))),
    }
}

#[cfg(unix)]
fn open_descriptor(fd: i32) -> anyhow::Result<std::fs::File> {
    use std::os::unix::io::FromRawFd;
    if fd < 0 {
        bail!("bad endpoint {}", fd);
    }
    // SAFETY: the launcher hands this descriptor to us and nothing else in
    // this process owns it.
    Ok(unsafe { std::fs::File::from_raw_fd(fd) })
}

#[cfg(not(unix))]
fn open_descriptor(fd: i32) -> anyhow::Result<std::fs::File> {
    bail!("endpoint {} is not a standard stream", fd)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging_with(LevelFilter::Warn);
    let args = Args::parse();

    let channel = PeerChannel::new(
        open_reader(&args.read_endpoint)?,
        open_writer(&args.write_endpoint)?,
    );
    let strategy = match args.seed {
        Some(seed) => ScanStrategy::with_seed(seed),
        None => ScanStrategy::new(),
    };
    PeerSession::new(strategy, channel).run().await?;
    Ok(())
}
