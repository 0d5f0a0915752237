//! Shell-facing lifecycle facade.

use crate::config::SimParams;
use crate::snapshot::BuildingState;
use crate::{Building, SimResult};

/// The handle an application shell owns for the lifetime of its window.
///
/// Wraps an optional [`Building`]: `start` constructs one, `stop` tears it
/// down, and while stopped the facade still answers `snapshot()` with an
/// empty idle view and swallows `tick()` — so a driver timer that outlives
/// a run never has to care about lifecycle ordering.
#[derive(Default)]
pub struct Simulator {
    building: Option<Building>,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a simulation with `params`, implicitly stopping any run in
    /// progress first (the shell re-starts after editing options).
    ///
    /// Fails with [`SimError::InvalidConfiguration`][crate::SimError] —
    /// and leaves the simulator stopped — when the parameters are invalid.
    pub fn start(&mut self, params: SimParams) -> SimResult<()> {
        self.stop();
        self.building = Some(crate::BuildingBuilder::from_params(params).build()?);
        Ok(())
    }

    /// Stop and tear down the current run.  Idempotent.
    pub fn stop(&mut self) {
        if let Some(building) = &mut self.building {
            building.stop();
        }
        self.building = None;
    }

    /// Advance one tick; a no-op while stopped.
    pub fn tick(&mut self) {
        if let Some(building) = &mut self.building {
            building.tick();
        }
    }

    /// The last committed state, or an empty idle view while stopped.
    pub fn snapshot(&self) -> BuildingState {
        match &self.building {
            Some(building) => building.snapshot(),
            None           => BuildingState::empty(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.building.as_ref().is_some_and(Building::is_running)
    }

    /// Direct access to the running building (tests, demos).
    pub fn building_mut(&mut self) -> Option<&mut Building> {
        self.building.as_mut()
    }
}
