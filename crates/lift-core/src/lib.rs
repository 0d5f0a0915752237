//! `lift-core` — foundational types for the `liftsim` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It
//! intentionally has no `lift-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `ElevatorId`                                          |
//! | [`floor`]     | `Floor` — building level with travel arithmetic       |
//! | [`call`]      | `Direction`, `Call`, `PendingCalls`                   |
//! | [`time`]      | `Tick`, `SimClock`                                    |
//! | [`rng`]       | `SimRng` (seeded, deterministic)                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod call;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use call::{Call, Direction, PendingCalls};
pub use floor::Floor;
pub use ids::ElevatorId;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
