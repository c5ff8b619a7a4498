#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use battleship_referee::{
    init_logging, transport::process::{reap, PeerProcess}, DeadlineTransport, MatchConfig,
    Opponent, Referee, DEFAULT_GAMES, DEFAULT_MAX_ROUNDS,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use tokio::time::Duration;

/// Referee a battleship match between two opponent executables.
///
/// Each opponent is started with two arguments naming its read and write
/// channel endpoints.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Opponent A, which shoots first in every round.
    player_a: PathBuf,
    /// Opponent B.
    player_b: PathBuf,
    #[arg(long, default_value_t = DEFAULT_GAMES, help = "Number of games in the match")]
    games: u32,
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS, help = "Rounds before a game ends without a winner")]
    max_rounds: u32,
    #[arg(long, help = "Fail when an opponent stays silent this long (default: wait forever)")]
    recv_timeout_ms: Option<u64>,
    #[arg(long, help = "Reject boards whose ships are not straight lines of the right size")]
    validate_boards: bool,
    #[arg(long, help = "Also print the match summary as JSON")]
    json: bool,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = MatchConfig::new(cli.games, cli.max_rounds)
        .with_board_validation(cli.validate_boards);
    if let Some(ms) = cli.recv_timeout_ms {
        config = config.with_recv_timeout(Duration::from_millis(ms));
    }

    let (name_a, transport_a, child_a) = PeerProcess::launch(&cli.player_a)?.into_parts();
    let (name_b, transport_b, child_b) = PeerProcess::launch(&cli.player_b)?.into_parts();

    let mut referee = Referee::new(
        config,
        Opponent::new(
            name_a.clone(),
            DeadlineTransport::from_option(transport_a, config.recv_timeout),
        ),
        Opponent::new(
            name_b.clone(),
            DeadlineTransport::from_option(transport_b, config.recv_timeout),
        ),
    );

    let summary = referee.run(|report| print!("\n{}", report)).await?;
    print!("\n{}", summary);
    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    }

    // closing our channel ends lets the opponents see end-of-stream
    drop(referee);
    reap(child_a, &name_a)
        .await
        .with_context(|| format!("waiting for {}", name_a))?;
    reap(child_b, &name_b)
        .await
        .with_context(|| format!("waiting for {}", name_b))?;
    Ok(())
}
