use battleship_referee::{
    init_logging_with, transport::in_memory, MatchConfig, Opponent, PeerSession, Referee,
    ScanStrategy,
};
use log::LevelFilter;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging_with(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let (host_a, peer_a) = in_memory::pair();
    let (host_b, peer_b) = in_memory::pair();

    let a = tokio::spawn(PeerSession::new(ScanStrategy::with_seed(seed1), peer_a).run());
    let b = tokio::spawn(PeerSession::new(ScanStrategy::with_seed(seed2), peer_b).run());

    let mut referee = Referee::new(
        MatchConfig::default(),
        Opponent::new("player1", host_a),
        Opponent::new("player2", host_b),
    );
    let mut games = Vec::new();
    let summary = referee.run(|report| games.push(report.clone())).await?;
    drop(referee);
    a.await??;
    b.await??;

    let result = json!({
        "games": games,
        "summary": summary,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
