//! Fluent builder for constructing a [`Building`].

use lift_car::DoorTiming;

use crate::config::{ELEVATOR_COUNT_RANGE, MIN_FLOOR_COUNT, SimParams};
use crate::{Building, SimError, SimResult};

/// Fluent builder for [`Building`].
///
/// Starts from [`SimParams::default`] and overrides field by field; `build`
/// validates and constructs a running building at tick 0.
///
/// # Example
///
/// ```rust,ignore
/// let building = BuildingBuilder::new()
///     .floors(7)
///     .cars(3)
///     .seed(1234)
///     .build()?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct BuildingBuilder {
    params: SimParams,
}

impl BuildingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a complete parameter set (e.g. one the shell assembled).
    pub fn from_params(params: SimParams) -> Self {
        Self { params }
    }

    /// Number of floors, ground included.
    pub fn floors(mut self, n: u8) -> Self {
        self.params.floor_count = n;
        self
    }

    /// Number of cars in the fleet.
    pub fn cars(mut self, n: u8) -> Self {
        self.params.elevator_count = n;
        self
    }

    /// Master RNG seed for the call generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.params.seed = seed;
        self
    }

    /// The driver's tick cadence in wall-clock milliseconds.
    pub fn tick_duration_ms(mut self, ms: u32) -> Self {
        self.params.tick_duration_ms = ms;
        self
    }

    /// Mean wall-clock interval between generated calls.
    pub fn mean_call_interval_ms(mut self, ms: u32) -> Self {
        self.params.mean_call_interval_ms = ms;
        self
    }

    /// Tick budgets for the door cycle.
    pub fn door_timing(mut self, timing: DoorTiming) -> Self {
        self.params.door_timing = timing;
        self
    }

    /// Snapshot cadence for `run_ticks` (0 disables).
    pub fn snapshot_interval_ticks(mut self, n: u64) -> Self {
        self.params.snapshot_interval_ticks = n;
        self
    }

    /// Validate the parameters and construct a running [`Building`].
    ///
    /// Rejects a floor count below 2 and a fleet size outside 2..=3 with
    /// [`SimError::InvalidConfiguration`].
    pub fn build(self) -> SimResult<Building> {
        let p = &self.params;
        if p.floor_count < MIN_FLOOR_COUNT {
            return Err(SimError::InvalidConfiguration(format!(
                "floor count {} is below the minimum of {MIN_FLOOR_COUNT}",
                p.floor_count
            )));
        }
        if !ELEVATOR_COUNT_RANGE.contains(&p.elevator_count) {
            return Err(SimError::InvalidConfiguration(format!(
                "elevator count {} outside supported range {}..={}",
                p.elevator_count,
                ELEVATOR_COUNT_RANGE.start(),
                ELEVATOR_COUNT_RANGE.end()
            )));
        }
        Ok(Building::from_validated_params(self.params))
    }
}
