use battleship_referee::{HitTracker, ShipKind, ShipTracker, Shot, ShotOutcome, SHIP_KINDS};
use proptest::prelude::*;

#[test]
fn test_patrol_boat_hit_then_sink() {
    let mut tracker = HitTracker::new();
    assert_eq!(
        tracker.record(ShipKind::PatrolBoat, Shot::new(0, 0)),
        ShotOutcome::Hit
    );
    assert_eq!(
        tracker.record(ShipKind::PatrolBoat, Shot::new(0, 1)),
        ShotOutcome::Sink
    );
    assert!(tracker.is_sunk(ShipKind::PatrolBoat));
    assert_eq!(tracker.sunk_count(), 1);
}

#[test]
fn test_repeat_shot_does_not_double_count() {
    let mut ship = ShipTracker::new(ShipKind::Destroyer);
    assert_eq!(ship.record(Shot::new(3, 3)), ShotOutcome::Hit);
    assert_eq!(ship.record(Shot::new(3, 3)), ShotOutcome::Hit);
    assert_eq!(ship.confirmed(), &[Shot::new(3, 3)]);
    assert_eq!(ship.record(Shot::new(3, 4)), ShotOutcome::Hit);
    assert_eq!(ship.record(Shot::new(3, 5)), ShotOutcome::Sink);
}

#[test]
fn test_already_sunk_reports_hit_without_change() {
    let mut ship = ShipTracker::new(ShipKind::PatrolBoat);
    ship.record(Shot::new(0, 0));
    ship.record(Shot::new(0, 1));
    let before = ship.clone();

    // a stray extra cell of the same kind, as an unvalidated board may carry
    assert_eq!(ship.record(Shot::new(5, 5)), ShotOutcome::Hit);
    assert_eq!(ship.record(Shot::new(0, 1)), ShotOutcome::Hit);
    assert_eq!(ship, before);
}

#[test]
fn test_confirmed_keeps_landing_order() {
    let mut tracker = HitTracker::new();
    let shots = [Shot::new(4, 2), Shot::new(2, 2), Shot::new(3, 2)];
    for shot in shots {
        tracker.record(ShipKind::Battleship, shot);
    }
    assert_eq!(tracker.confirmed(ShipKind::Battleship), &shots);
    assert!(!tracker.is_sunk(ShipKind::Battleship));
}

#[test]
fn test_reset_forgets_every_ship() {
    let mut tracker = HitTracker::new();
    for kind in SHIP_KINDS {
        for i in 0..kind.size() {
            tracker.record(kind, Shot::new(kind.index() as i16, i as i16));
        }
    }
    assert_eq!(tracker.sunk_count(), SHIP_KINDS.len());

    tracker.reset();
    assert_eq!(tracker.sunk_count(), 0);
    assert!(SHIP_KINDS.iter().all(|&k| tracker.confirmed(k).is_empty()));
    assert_eq!(tracker, HitTracker::new());
}

fn kind_strategy() -> impl Strategy<Value = ShipKind> {
    prop::sample::select(SHIP_KINDS.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Sink arrives exactly with the N-th distinct coordinate, never before,
    /// and only once however many shots follow.
    #[test]
    fn sink_exactly_on_nth_distinct(
        kind in kind_strategy(),
        shots in prop::collection::vec((0i16..10, 0i16..10), 1..40)
    ) {
        let mut ship = ShipTracker::new(kind);
        let mut distinct: Vec<Shot> = Vec::new();
        let mut sinks = 0;
        for (row, col) in shots {
            let shot = Shot::new(row, col);
            let fresh = !distinct.contains(&shot);
            if fresh {
                distinct.push(shot);
            }
            let outcome = ship.record(shot);
            if outcome == ShotOutcome::Sink {
                sinks += 1;
                prop_assert!(fresh);
                prop_assert_eq!(distinct.len(), kind.size());
            } else {
                prop_assert_eq!(outcome, ShotOutcome::Hit);
            }
            prop_assert!(ship.confirmed().len() <= kind.size());
        }
        prop_assert_eq!(sinks, usize::from(distinct.len() >= kind.size()));
        prop_assert_eq!(ship.is_sunk(), distinct.len() >= kind.size());
    }

    /// The confirmed set never shrinks within a game.
    #[test]
    fn confirmed_is_monotonic(
        kind in kind_strategy(),
        shots in prop::collection::vec((-2i16..12, -2i16..12), 0..30)
    ) {
        let mut tracker = HitTracker::new();
        let mut last = 0;
        for (row, col) in shots {
            tracker.record(kind, Shot::new(row, col));
            let now = tracker.confirmed(kind).len();
            prop_assert!(now >= last);
            last = now;
        }
    }
}
