//! Copy-out snapshots of world state for renderers.
//!
//! A renderer polls [`Building::snapshot`][crate::Building::snapshot] at its
//! own cadence and paints whatever it gets; it never holds a reference into
//! the simulation.  Everything here is plain owned data.

use lift_car::{DoorState, MotionState};
use lift_core::{Call, ElevatorId, Floor, Tick};

/// One car's externally visible state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorState {
    pub id: ElevatorId,
    pub floor: Floor,
    pub motion: MotionState,
    pub door: DoorState,
}

/// An immutable view of the whole building at one committed tick.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingState {
    pub floor_count: u8,
    pub elevator_count: u8,
    /// The tick this state was committed at.
    pub tick: Tick,
    pub running: bool,
    pub elevators: Vec<ElevatorState>,
    pub pending_calls: Vec<Call>,
}

impl BuildingState {
    /// The view a stopped simulator exposes: nothing to draw.
    pub fn empty() -> Self {
        Self {
            floor_count:    0,
            elevator_count: 0,
            tick:           Tick::ZERO,
            running:        false,
            elevators:      Vec::new(),
            pending_calls:  Vec::new(),
        }
    }
}

impl Default for BuildingState {
    fn default() -> Self {
        Self::empty()
    }
}
