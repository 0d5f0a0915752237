//! `lift-sim` — the building orchestrator and its tick loop.
//!
//! # Per-tick phase order
//!
//! ```text
//! Building::tick():            (no-op unless running)
//!   ① Generate — the call generator may emit one random call,
//!                deduplicated into the pending set.
//!   ② Dispatch — every pending call is committed to a car
//!                (lift-dispatch), oldest first.
//!   ③ Advance  — every car takes exactly one state-machine step
//!                (lift-car), in id order.
//!   ④ Clock    — the tick counter increments.
//! ```
//!
//! The phases run synchronously inside one `tick()` call; with a fixed seed
//! the whole run is deterministic.  Nothing here blocks, sleeps, or owns a
//! timer — an external driver calls `tick()` at its own cadence and reads
//! the world back through copy-out [`BuildingState`] snapshots.
//!
//! # Entry points
//!
//! - [`Building`] — the simulation core (`builder()`/`tick`/`stop`/`snapshot`).
//! - [`Simulator`] — a shell-facing facade adding the start/stop lifecycle
//!   an application window expects (restart with new parameters, empty
//!   snapshot while stopped).
//! - [`SimObserver`] — optional per-tick callbacks for diagnostics and
//!   renderers driven by [`Building::run_ticks`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_sim::{BuildingBuilder, NoopObserver};
//!
//! let mut building = BuildingBuilder::new().floors(7).cars(2).seed(42).build()?;
//! building.run_ticks(300, &mut NoopObserver);
//! let state = building.snapshot();
//! ```

pub mod builder;
pub mod building;
pub mod config;
pub mod error;
pub mod generator;
pub mod observer;
pub mod simulator;
pub mod snapshot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::BuildingBuilder;
pub use building::Building;
pub use config::SimParams;
pub use error::{SimError, SimResult};
pub use generator::CallGenerator;
pub use observer::{NoopObserver, SimObserver};
pub use simulator::Simulator;
pub use snapshot::{BuildingState, ElevatorState};
