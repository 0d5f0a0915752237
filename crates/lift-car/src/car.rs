//! The `Elevator` state machine: motion, stop queue, door cycle.

use std::fmt;

use lift_core::{Direction, ElevatorId, Floor};

use crate::door::{DoorState, DoorTiming};

// ── MotionState ───────────────────────────────────────────────────────────────

/// Whether the car is parked or travelling, and which way.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionState {
    #[default]
    Idle,
    MovingUp,
    MovingDown,
}

impl MotionState {
    #[inline]
    pub fn moving(dir: Direction) -> MotionState {
        match dir {
            Direction::Up   => MotionState::MovingUp,
            Direction::Down => MotionState::MovingDown,
        }
    }

    /// The travel direction, or `None` when idle.
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            MotionState::Idle       => None,
            MotionState::MovingUp   => Some(Direction::Up),
            MotionState::MovingDown => Some(Direction::Down),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MotionState::Idle       => "idle",
            MotionState::MovingUp   => "moving up",
            MotionState::MovingDown => "moving down",
        }
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// One car's complete simulation state.
///
/// The car knows nothing about calls or other cars: the dispatcher feeds it
/// committed stops via [`commit`][Elevator::commit] / [`add_stop`][Elevator::add_stop],
/// and the building advances it one transition per tick via
/// [`step`][Elevator::step].  Those are the only two writers.
///
/// # Stop queue order
///
/// `stops` is kept in *serviceable* order: an outbound leg sorted in the
/// current travel direction, optionally followed by a return leg sorted the
/// opposite way (stops the dispatcher accepted against the committed run,
/// served after the car reverses).  The head is therefore always the next
/// floor the car visits, and one `step` per tick moves strictly toward it.
#[derive(Clone, Debug)]
pub struct Elevator {
    id: ElevatorId,
    floor: Floor,
    motion: MotionState,
    door: DoorState,
    /// Ticks remaining in the current door phase; meaningless when `Closed`.
    door_timer: u32,
    stops: Vec<Floor>,
    committed: Option<Direction>,
}

impl Elevator {
    /// A car parked at the ground floor, doors closed, no commitments —
    /// the state every car starts the simulation in.
    pub fn new(id: ElevatorId) -> Self {
        Self::parked_at(id, Floor::GROUND)
    }

    /// A car parked at `floor`.  Construction has no failure mode; floor
    /// range is the building's concern.
    pub fn parked_at(id: ElevatorId, floor: Floor) -> Self {
        Self {
            id,
            floor,
            motion: MotionState::Idle,
            door: DoorState::Closed,
            door_timer: 0,
            stops: Vec::new(),
            committed: None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn motion(&self) -> MotionState {
        self.motion
    }

    #[inline]
    pub fn door(&self) -> DoorState {
        self.door
    }

    /// The direction the car is currently serving, if any.
    #[inline]
    pub fn committed(&self) -> Option<Direction> {
        self.committed
    }

    /// Floors the car has committed to visit, next first.
    #[inline]
    pub fn stops(&self) -> &[Floor] {
        &self.stops
    }

    /// `true` when the car has nothing to do and its doors are closed.
    pub fn is_quiescent(&self) -> bool {
        self.stops.is_empty() && self.motion == MotionState::Idle && self.door == DoorState::Closed
    }

    // ── Dispatcher interface ──────────────────────────────────────────────

    /// Commit the car to serving `dir`.  Called by the dispatcher when it
    /// assigns a call to a car with no current commitment.
    pub fn commit(&mut self, dir: Direction) {
        if self.committed.is_none() {
            self.committed = Some(dir);
        }
    }

    /// Insert `floor` into the stop queue, preserving serviceable order.
    /// Duplicates are ignored — the car already plans to stop there.
    pub fn add_stop(&mut self, floor: Floor) {
        if self.stops.contains(&floor) {
            return;
        }
        let Some(&head) = self.stops.first() else {
            self.stops.push(floor);
            return;
        };

        // Travel direction toward the current head decides the leg layout.
        let up = head >= self.floor;
        let outbound = |s: Floor| if up { s >= self.floor } else { s <= self.floor };
        let split = self
            .stops
            .iter()
            .position(|&s| !outbound(s))
            .unwrap_or(self.stops.len());

        let idx = if outbound(floor) {
            // Outbound leg: ascending when travelling up, descending when down.
            self.stops[..split]
                .iter()
                .position(|&s| if up { s > floor } else { s < floor })
                .unwrap_or(split)
        } else {
            // Return leg runs opposite to the outbound direction.
            split
                + self.stops[split..]
                    .iter()
                    .position(|&s| if up { s < floor } else { s > floor })
                    .unwrap_or(self.stops.len() - split)
        };
        self.stops.insert(idx, floor);
    }

    // ── Per-tick state advance ────────────────────────────────────────────

    /// Advance the car by exactly one transition.
    ///
    /// Evaluated in fixed priority order so no tick is ever ambiguous:
    /// door phases run to completion first, then arrival handling, then one
    /// floor of travel, then idling.  A car that moves onto its head floor
    /// pops the stop and begins opening its doors the same tick.
    pub fn step(&mut self, timing: &DoorTiming) {
        match self.door {
            DoorState::Opening => {
                self.door_timer = self.door_timer.saturating_sub(1);
                if self.door_timer == 0 {
                    self.door = DoorState::Open;
                    self.door_timer = timing.open_ticks;
                }
            }
            DoorState::Open => {
                self.door_timer = self.door_timer.saturating_sub(1);
                if self.door_timer == 0 {
                    self.door = DoorState::Closing;
                    self.door_timer = timing.closing_ticks;
                }
            }
            DoorState::Closing => {
                self.door_timer = self.door_timer.saturating_sub(1);
                if self.door_timer == 0 {
                    self.door = DoorState::Closed;
                }
            }
            DoorState::Closed => self.step_motion(timing),
        }
    }

    /// Doors are closed: serve the stop queue.
    fn step_motion(&mut self, timing: &DoorTiming) {
        let Some(&head) = self.stops.first() else {
            self.motion = MotionState::Idle;
            self.committed = None;
            return;
        };

        // Already at the next stop (assigned at the current floor).
        if head == self.floor {
            self.arrive(timing);
            return;
        }

        // One floor per tick toward the head; never past it.
        if let Some(dir) = self.floor.direction_to(head) {
            self.motion = MotionState::moving(dir);
            self.floor = self.floor.step_toward(head);
        }
        if self.floor == head {
            self.arrive(timing);
        }
    }

    /// The car is at the head stop: consume it and begin the door cycle.
    fn arrive(&mut self, timing: &DoorTiming) {
        self.stops.remove(0);
        self.motion = MotionState::Idle;
        self.door = DoorState::Opening;
        self.door_timer = timing.opening_ticks;

        // Realign the commitment with the remaining run so the queue-order
        // invariant survives a reversal onto the return leg.
        if let Some(&next) = self.stops.first()
            && let Some(dir) = self.floor.direction_to(next)
        {
            self.committed = Some(dir);
        }
    }

    // ── Shutdown ──────────────────────────────────────────────────────────

    /// Drop every commitment and return to a quiescent state at the current
    /// floor.  Used by the building's shutdown path.
    pub fn reset(&mut self) {
        self.stops.clear();
        self.committed = None;
        self.motion = MotionState::Idle;
        self.door = DoorState::Closed;
        self.door_timer = 0;
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} ({}, doors {})",
            self.id, self.floor, self.motion, self.door
        )
    }
}
