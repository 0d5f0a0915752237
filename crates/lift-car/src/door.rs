//! Door cycle state and timing.

use std::fmt;

/// Where a car's doors are in their open/close cycle.
///
/// `Opening`, `Open`, and `Closing` each consume a configured number of
/// ticks (see [`DoorTiming`]) before handing over to the next state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl DoorState {
    /// `true` unless the doors are fully closed.  A car may only move while
    /// this is `false`.
    #[inline]
    pub fn is_active(self) -> bool {
        self != DoorState::Closed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DoorState::Closed  => "closed",
            DoorState::Opening => "opening",
            DoorState::Open    => "open",
            DoorState::Closing => "closing",
        }
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tick budgets for each phase of the door cycle.
///
/// At the default 200 ms tick cadence the defaults give a 0.4 s open sweep,
/// a 1.6 s dwell for boarding, and a 0.4 s close sweep.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoorTiming {
    /// Ticks spent in `Opening` before the doors are fully open.
    pub opening_ticks: u32,
    /// Ticks the doors dwell fully `Open` for riders to board.
    pub open_ticks: u32,
    /// Ticks spent in `Closing` before the doors are fully closed.
    pub closing_ticks: u32,
}

impl Default for DoorTiming {
    fn default() -> Self {
        Self {
            opening_ticks: 2,
            open_ticks:    8,
            closing_ticks: 2,
        }
    }
}

impl DoorTiming {
    /// Total ticks a full stop costs (open sweep + dwell + close sweep).
    #[inline]
    pub fn full_cycle_ticks(&self) -> u32 {
        self.opening_ticks + self.open_ticks + self.closing_ticks
    }
}
