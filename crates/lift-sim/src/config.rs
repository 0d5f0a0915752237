//! Top-level simulation configuration.

use lift_car::DoorTiming;
use lift_core::time::DEFAULT_TICK_DURATION_MS;

/// Everything needed to start a building.
///
/// Typically assembled by the application shell (its options dialog edits
/// the car count) and handed to [`Simulator::start`][crate::Simulator::start]
/// or [`BuildingBuilder`][crate::BuildingBuilder].  Validation happens at
/// build time, not here — the shell may hold transiently invalid values
/// while the user is editing them.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Number of floors, ground included.  Minimum 2.
    pub floor_count: u8,

    /// Number of cars.  Supported range: 2..=3.
    pub elevator_count: u8,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Wall-clock milliseconds one tick represents — the cadence the
    /// external driver promises to call `tick()` at.
    pub tick_duration_ms: u32,

    /// Mean wall-clock milliseconds between generated calls.  Converted to
    /// a per-tick probability via `tick_duration_ms`.  0 disables the
    /// generator entirely (scripted runs submit their own calls).
    pub mean_call_interval_ms: u32,

    /// Tick budgets for the door cycle.
    pub door_timing: DoorTiming,

    /// Hand a snapshot to `SimObserver::on_snapshot` every N ticks during
    /// `run_ticks`.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

/// Fewest floors that still give a car somewhere to go.
pub const MIN_FLOOR_COUNT: u8 = 2;

/// Supported fleet sizes, matching the shell's configuration spinner.
pub const ELEVATOR_COUNT_RANGE: std::ops::RangeInclusive<u8> = 2..=3;

impl Default for SimParams {
    /// The shell's factory configuration: a 7-floor building with 2 cars,
    /// driven at 200 ms per tick, averaging one call every 4 seconds.
    fn default() -> Self {
        Self {
            floor_count:             7,
            elevator_count:          2,
            seed:                    42,
            tick_duration_ms:        DEFAULT_TICK_DURATION_MS,
            mean_call_interval_ms:   4_000,
            door_timing:             DoorTiming::default(),
            snapshot_interval_ticks: 1,
        }
    }
}

impl SimParams {
    /// Convenience constructor for the two knobs the shell exposes.
    pub fn new(floor_count: u8, elevator_count: u8) -> Self {
        Self {
            floor_count,
            elevator_count,
            ..Self::default()
        }
    }

    /// Probability that a call is generated on any given tick.
    pub fn call_probability(&self) -> f64 {
        if self.mean_call_interval_ms == 0 {
            return 0.0;
        }
        (self.tick_duration_ms as f64 / self.mean_call_interval_ms as f64).clamp(0.0, 1.0)
    }

    /// The highest floor of the building.
    #[inline]
    pub fn top_floor(&self) -> u8 {
        self.floor_count - 1
    }
}
