//! Simulation observer trait for diagnostics and renderers.

use lift_core::{Call, Tick};

use crate::BuildingState;

/// Callbacks invoked by [`Building::run_ticks`][crate::Building::run_ticks]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers never mutate simulation
/// state: `on_snapshot` receives a committed copy-out view, nothing more.
///
/// # Example — call logger
///
/// ```rust,ignore
/// struct CallLogger;
///
/// impl SimObserver for CallLogger {
///     fn on_call(&mut self, call: &Call) {
///         println!("new call: {call}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when the generator emitted a call that the pending set kept.
    fn on_call(&mut self, _call: &Call) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called every `snapshot_interval_ticks` ticks with a committed view.
    fn on_snapshot(&mut self, _tick: Tick, _state: &BuildingState) {}

    /// Called once when `run_ticks` returns.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
