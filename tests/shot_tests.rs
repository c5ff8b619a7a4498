use battleship_referee::transport::in_memory;
use battleship_referee::{
    classify_shot, resolve_shot, Board, HitTracker, HostMessage, MatchError, Orientation,
    PeerMessage, Score, ShipKind, Shot, ShotOutcome, SIZE,
};
use proptest::prelude::*;
use tokio::io::AsyncWriteExt;

fn patrol_boat_only() -> Board {
    let mut board = Board::empty();
    board
        .place(ShipKind::PatrolBoat, 0, 0, Orientation::Horizontal)
        .unwrap();
    board
}

#[test]
fn test_hit_sink_then_repeat() {
    let board = patrol_boat_only();
    let mut tracker = HitTracker::new();
    assert_eq!(classify_shot(Shot::new(0, 0), &board, &mut tracker), ShotOutcome::Hit);
    assert_eq!(classify_shot(Shot::new(0, 1), &board, &mut tracker), ShotOutcome::Sink);
    assert_eq!(classify_shot(Shot::new(0, 1), &board, &mut tracker), ShotOutcome::Hit);
    assert_eq!(classify_shot(Shot::new(0, 2), &board, &mut tracker), ShotOutcome::Miss);
    assert_eq!(tracker.sunk_count(), 1);
}

proptest! {
    #[test]
    fn open_water_always_misses(row in 0i16..SIZE as i16, col in 0i16..SIZE as i16) {
        let board = patrol_boat_only();
        prop_assume!(!(row == 0 && col < 2));
        let mut tracker = HitTracker::new();
        prop_assert_eq!(classify_shot(Shot::new(row, col), &board, &mut tracker), ShotOutcome::Miss);
        prop_assert_eq!(tracker.sunk_count(), 0);
    }

    #[test]
    fn off_board_always_misses(row in any::<i16>(), col in any::<i16>()) {
        let shot = Shot::new(row, col);
        prop_assume!(!shot.in_bounds());
        let board = Board::standard_fleet();
        let mut tracker = HitTracker::new();
        prop_assert_eq!(classify_shot(shot, &board, &mut tracker), ShotOutcome::Miss);
    }
}

#[tokio::test]
async fn test_resolve_reports_to_both_sides() {
    let (mut shooter, mut shooter_peer) = in_memory::pair();
    let (mut defender, mut defender_peer) = in_memory::pair();
    let board = patrol_boat_only();
    let mut tracker = HitTracker::new();
    let mut score = Score::new();

    for (shot, expected) in [
        (Shot::new(0, 0), ShotOutcome::Hit),
        (Shot::new(0, 1), ShotOutcome::Sink),
        (Shot::new(0, 1), ShotOutcome::Hit),
        (Shot::new(-4, 40), ShotOutcome::Miss),
    ] {
        shooter_peer.send(PeerMessage::Shot(shot)).await.unwrap();
        let outcome = resolve_shot(&mut shooter, &mut defender, &mut score, &mut tracker, &board)
            .await
            .unwrap();
        assert_eq!(outcome, expected);
        assert_eq!(
            shooter_peer.recv().await.unwrap(),
            HostMessage::ShotResult(expected)
        );
        assert_eq!(
            defender_peer.recv().await.unwrap(),
            HostMessage::OpponentShot(shot)
        );
    }
    assert_eq!((score.hits, score.misses, score.sinks), (3, 1, 1));
}

#[tokio::test]
async fn test_short_shot_is_a_violation() {
    let (mut shooter, mut raw) = in_memory::raw_pair();
    let (mut defender, _defender_peer) = in_memory::pair();
    raw.write_all(&[1, 0]).await.unwrap();
    drop(raw);

    let mut tracker = HitTracker::new();
    let mut score = Score::new();
    let result = resolve_shot(
        &mut shooter,
        &mut defender,
        &mut score,
        &mut tracker,
        &Board::standard_fleet(),
    )
    .await;
    assert!(matches!(result, Err(MatchError::ProtocolViolation(_))));
    assert_eq!(score, Score::new());
}
