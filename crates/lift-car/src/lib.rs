//! `lift-car` — the per-car state machine.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`door`]  | `DoorState`, `DoorTiming` — the door cycle                 |
//! | [`car`]   | `MotionState`, `Elevator` — motion + stop queue            |
//!
//! # State model
//!
//! A car's full state is the product of its motion state and door state,
//! advanced by exactly one transition per simulation tick through
//! [`Elevator::step`].  Not every combination is reachable: doors leave
//! `Closed` only while the car is `Idle` at a committed stop.  The
//! transition function is total over reachable states — there is nothing a
//! caller can do through the public API that puts a car somewhere the next
//! `step` cannot handle.

pub mod car;
pub mod door;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::{Elevator, MotionState};
pub use door::{DoorState, DoorTiming};
