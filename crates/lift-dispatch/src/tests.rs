//! Unit tests for the assignment pass.

use lift_core::{Call, Direction, ElevatorId, Floor, PendingCalls, Tick};
use lift_car::Elevator;

use crate::Dispatcher;

// ── Helpers ───────────────────────────────────────────────────────────────────

const FLOORS: u8 = 7;

fn dispatcher() -> Dispatcher {
    Dispatcher::new(FLOORS)
}

fn fleet(floors: &[u8]) -> Vec<Elevator> {
    floors
        .iter()
        .enumerate()
        .map(|(i, &f)| Elevator::parked_at(ElevatorId(i as u8), Floor(f)))
        .collect()
}

fn pending_with(calls: &[(u8, Direction)]) -> PendingCalls {
    let mut pending = PendingCalls::new();
    for (i, &(floor, dir)) in calls.iter().enumerate() {
        pending.submit(Call::new(Floor(floor), dir, Tick(i as u64)));
    }
    pending
}

// ── Basic assignment ──────────────────────────────────────────────────────────

#[test]
fn nearest_idle_car_wins() {
    let mut cars = fleet(&[0, 5]);
    let mut pending = pending_with(&[(4, Direction::Up)]);
    dispatcher().assign_pending(&mut pending, &mut cars);

    assert!(pending.is_empty());
    assert!(cars[0].stops().is_empty());
    assert_eq!(cars[1].stops(), &[Floor(4)]);
    assert_eq!(cars[1].committed(), Some(Direction::Up));
}

#[test]
fn equidistant_tie_breaks_to_lowest_id() {
    let mut cars = fleet(&[0, 6]);
    let mut pending = pending_with(&[(3, Direction::Up)]);
    dispatcher().assign_pending(&mut pending, &mut cars);

    assert_eq!(cars[0].stops(), &[Floor(3)]);
    assert!(cars[1].stops().is_empty());
}

#[test]
fn assignment_consumes_the_call() {
    let mut cars = fleet(&[0, 0]);
    let mut pending = pending_with(&[(2, Direction::Up)]);
    dispatcher().assign_pending(&mut pending, &mut cars);

    // The call lives on only as a stop — never in both places.
    assert!(pending.is_empty());
    assert_eq!(cars.iter().map(|c| c.stops().len()).sum::<usize>(), 1);
}

#[test]
fn all_pending_calls_are_assigned_in_one_pass() {
    let mut cars = fleet(&[0, 6]);
    let mut pending = pending_with(&[
        (1, Direction::Up),
        (5, Direction::Down),
        (3, Direction::Up),
    ]);
    dispatcher().assign_pending(&mut pending, &mut cars);

    assert!(pending.is_empty());
    let committed: usize = cars.iter().map(|c| c.stops().len()).sum();
    assert_eq!(committed, 3);
}

// ── En-route preference ───────────────────────────────────────────────────────

#[test]
fn en_route_car_beats_closer_idle_car_behind_a_penalty() {
    // Car 0 idle at floor 6 (distance 2); car 1 committed Up at floor 1
    // (distance 3, en route).  Idle distance wins — but flip the call
    // direction and car 1 pays the penalty instead.
    let mut cars = fleet(&[6, 1]);
    cars[1].commit(Direction::Up);
    cars[1].add_stop(Floor(6));

    let mut pending = pending_with(&[(4, Direction::Up)]);
    dispatcher().assign_pending(&mut pending, &mut cars);
    // distance: car0=2 (idle), car1=3 (en route) → car 0.
    assert_eq!(cars[0].stops(), &[Floor(4)]);

    // Now a call the moving car would pass anyway, closer to it.
    let mut cars = fleet(&[6, 1]);
    cars[1].commit(Direction::Up);
    cars[1].add_stop(Floor(6));
    let mut pending = pending_with(&[(2, Direction::Up)]);
    dispatcher().assign_pending(&mut pending, &mut cars);
    // distance: car0=4 (idle), car1=1 (en route) → car 1.
    assert_eq!(cars[1].stops(), &[Floor(2), Floor(6)]);
}

#[test]
fn opposite_direction_call_pays_the_reversal_penalty() {
    // Car 0 committed Up at floor 2; car 1 idle at floor 6.
    // Call at floor 3 going Down: car 0 is closer (1 vs 3) but must pay
    // 2 × floor_count, so the idle car takes it.
    let mut cars = fleet(&[2, 6]);
    cars[0].commit(Direction::Up);
    cars[0].add_stop(Floor(5));

    let mut pending = pending_with(&[(3, Direction::Down)]);
    dispatcher().assign_pending(&mut pending, &mut cars);

    assert_eq!(cars[0].stops(), &[Floor(5)]);
    assert_eq!(cars[1].stops(), &[Floor(3)]);
    assert_eq!(cars[1].committed(), Some(Direction::Down));
}

#[test]
fn call_behind_a_committed_car_is_penalized_but_never_dropped() {
    // Single car committed Up: a call behind it has nowhere better to go.
    let mut cars = fleet(&[3]);
    cars[0].commit(Direction::Up);
    cars[0].add_stop(Floor(6));

    let mut pending = pending_with(&[(1, Direction::Down)]);
    dispatcher().assign_pending(&mut pending, &mut cars);

    assert!(pending.is_empty());
    // Joins the return leg, after the outbound run.
    assert_eq!(cars[0].stops(), &[Floor(6), Floor(1)]);
}

// ── Sequential pass effects ───────────────────────────────────────────────────

#[test]
fn earlier_assignment_changes_later_costs() {
    // Two idle cars at floor 0; two Up calls at 2 and 3.  The first call
    // commits car 0 upward; the second is en route for car 0 (distance 3)
    // and plain distance 3 for idle car 1 — the tie still goes to car 0.
    let mut cars = fleet(&[0, 0]);
    let mut pending = pending_with(&[(2, Direction::Up), (3, Direction::Up)]);
    dispatcher().assign_pending(&mut pending, &mut cars);

    assert_eq!(cars[0].stops(), &[Floor(2), Floor(3)]);
    assert!(cars[1].stops().is_empty());
}

#[test]
fn oldest_call_is_assigned_first() {
    // One idle car; the older call must end up at the head of the queue
    // when both are on the same side.
    let mut cars = fleet(&[0]);
    let mut pending = pending_with(&[(5, Direction::Up), (2, Direction::Up)]);
    dispatcher().assign_pending(&mut pending, &mut cars);

    // Oldest (floor 5) assigned first; floor 2 then slots in ahead because
    // the car passes it on the way up.
    assert_eq!(cars[0].stops(), &[Floor(2), Floor(5)]);
}

// ── Degenerate inputs ─────────────────────────────────────────────────────────

#[test]
fn empty_fleet_leaves_calls_pending() {
    let mut cars: Vec<Elevator> = Vec::new();
    let mut pending = pending_with(&[(2, Direction::Up)]);
    dispatcher().assign_pending(&mut pending, &mut cars);
    assert_eq!(pending.len(), 1);
}

#[test]
fn empty_pending_set_is_a_noop() {
    let mut cars = fleet(&[0, 3]);
    let mut pending = PendingCalls::new();
    dispatcher().assign_pending(&mut pending, &mut cars);
    assert!(cars.iter().all(|c| c.stops().is_empty()));
}
