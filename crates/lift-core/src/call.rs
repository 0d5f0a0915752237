//! Floor calls and the outstanding-call set.
//!
//! A [`Call`] is a rider's request for service at a floor, travelling in a
//! direction.  Calls are immutable once created; they live in the building's
//! [`PendingCalls`] set until the dispatcher commits a car to them, at which
//! point they are consumed (the floor enters that car's stop queue and the
//! call leaves the set — never both at once).

use std::fmt;

use crate::floor::Floor;
use crate::time::Tick;

// ── Direction ─────────────────────────────────────────────────────────────────

/// Requested direction of travel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Human-readable label for logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Call ──────────────────────────────────────────────────────────────────────

/// A pending request for elevator service.
///
/// `created_at` records the submission tick for fairness: the dispatcher
/// assigns calls oldest-first.  It does not participate in deduplication —
/// two calls for the same floor and direction are the same call no matter
/// when they were pressed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    pub floor:      Floor,
    pub direction:  Direction,
    pub created_at: Tick,
}

impl Call {
    pub fn new(floor: Floor, direction: Direction, created_at: Tick) -> Self {
        Self { floor, direction, created_at }
    }

    /// `true` when `other` requests the same floor and direction.
    #[inline]
    pub fn same_request(&self, other: &Call) -> bool {
        self.floor == other.floor && self.direction == other.direction
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (at {})", self.floor, self.direction, self.created_at)
    }
}

// ── PendingCalls ──────────────────────────────────────────────────────────────

/// The building's outstanding-call set.
///
/// Insertion-ordered (which equals `created_at` order, since the clock is
/// monotone) and deduplicated on (floor, direction).  Fleets and buildings
/// are small enough that a `Vec` scan beats any hashed structure here.
#[derive(Clone, Debug, Default)]
pub struct PendingCalls {
    calls: Vec<Call>,
}

impl PendingCalls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `call` unless an equivalent (floor, direction) request is
    /// already outstanding.  Returns whether the call was retained.
    pub fn submit(&mut self, call: Call) -> bool {
        if self.calls.iter().any(|c| c.same_request(&call)) {
            return false;
        }
        self.calls.push(call);
        true
    }

    /// `true` if a call for (floor, direction) is outstanding.
    pub fn contains(&self, floor: Floor, direction: Direction) -> bool {
        self.calls
            .iter()
            .any(|c| c.floor == floor && c.direction == direction)
    }

    /// Remove and return all outstanding calls, oldest first.
    pub fn drain_oldest_first(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    /// Discard every outstanding call (simulation teardown).
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Call> {
        self.calls.iter()
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}
