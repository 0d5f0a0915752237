//! `lift-dispatch` — turns outstanding calls into per-car commitments.
//!
//! The dispatcher is the only component allowed to move a call from the
//! building's pending set into a car's stop queue.  It runs once per tick,
//! before any car advances, and fully drains the pending set: a call is
//! never left unassigned while the fleet is non-empty, so starvation is
//! bounded by one tick.
//!
//! # Assignment heuristic
//!
//! Nearest available car, with two refinements:
//!
//! - a car already travelling toward the call floor in the call's direction
//!   costs only its distance (en-route pickup — no reversal, and matches
//!   rider expectation of "a car already headed my way");
//! - a car that would have to reverse or backtrack pays its distance plus
//!   `2 × floor_count`, so a better-positioned car always wins, but the
//!   call is still assigned when no better car exists.
//!
//! Ties break toward the lowest car id, keeping runs reproducible.

pub mod dispatcher;

#[cfg(test)]
mod tests;

pub use dispatcher::Dispatcher;
