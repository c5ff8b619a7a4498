use battleship_referee::{match_leader, GameOutcome, Score, ShotOutcome, Side, TOTAL_SHIPS};

fn sunk(n: u32) -> Score {
    Score {
        sinks: n,
        ..Score::default()
    }
}

#[test]
fn test_record_counts() {
    let mut score = Score::new();
    score.record(ShotOutcome::Miss);
    score.record(ShotOutcome::Hit);
    score.record(ShotOutcome::Sink);
    assert_eq!(score.misses, 1);
    assert_eq!(score.hits, 2);
    assert_eq!(score.sinks, 1);
    assert_eq!(score.shots(), 3);
}

#[test]
fn test_reset_game_keeps_match_counters() {
    let mut score = Score {
        wins: 2,
        losses: 1,
        draws: 3,
        hits: 9,
        misses: 4,
        sinks: 2,
    };
    score.reset_game();
    assert_eq!((score.hits, score.misses, score.sinks), (0, 0, 0));
    assert_eq!((score.wins, score.losses, score.draws), (2, 1, 3));
    assert_eq!(score.games(), 6);
}

#[test]
fn test_both_fleets_sunk_is_draw() {
    let (mut a, mut b) = (sunk(TOTAL_SHIPS as u32), sunk(TOTAL_SHIPS as u32));
    let outcome = GameOutcome::decide(&a, &b);
    assert_eq!(outcome, GameOutcome::Draw);
    outcome.apply(&mut a, &mut b);
    assert_eq!((a.draws, b.draws), (1, 1));
    assert_eq!((a.wins, a.losses, b.wins, b.losses), (0, 0, 0, 0));
}

#[test]
fn test_single_fleet_sunk_wins() {
    let (mut a, mut b) = (sunk(3), sunk(TOTAL_SHIPS as u32));
    let outcome = GameOutcome::decide(&a, &b);
    assert_eq!(outcome, GameOutcome::Won(Side::B));
    outcome.apply(&mut a, &mut b);
    assert_eq!((a.losses, b.wins), (1, 1));
    assert_eq!((a.wins, b.losses, a.draws, b.draws), (0, 0, 0, 0));

    let (mut a, mut b) = (sunk(TOTAL_SHIPS as u32), sunk(0));
    GameOutcome::decide(&a, &b).apply(&mut a, &mut b);
    assert_eq!((a.wins, b.losses), (1, 1));
}

#[test]
fn test_no_fleet_sunk_is_loss_for_both() {
    let (mut a, mut b) = (sunk(4), sunk(4));
    let outcome = GameOutcome::decide(&a, &b);
    assert_eq!(outcome, GameOutcome::NoWinner);
    outcome.apply(&mut a, &mut b);
    assert_eq!((a.losses, b.losses), (1, 1));
    assert_eq!((a.draws, b.draws), (0, 0));
}

#[test]
fn test_match_leader() {
    let a = Score { wins: 3, ..Score::default() };
    let b = Score { wins: 1, ..Score::default() };
    assert_eq!(match_leader(&a, &b), Some(Side::A));
    assert_eq!(match_leader(&b, &a), Some(Side::B));
    assert_eq!(match_leader(&a, &a), None);
}
