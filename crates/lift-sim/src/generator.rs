//! Random call generation.

use lift_core::{Call, Direction, Floor, SimRng, Tick};

/// A stoppable stochastic source of floor calls.
///
/// On each tick, with probability `p`, emits one call at a uniformly random
/// floor with a direction valid for that floor (the ground floor only calls
/// up, the top floor only down, everything between flips a fair coin).
///
/// The generator has no side effects of its own: it hands the call back and
/// the building decides whether the pending set keeps it (dedup rule).
/// Once stopped it emits nothing more, but stopping never touches calls
/// that are already pending.
#[derive(Clone, Debug)]
pub struct CallGenerator {
    floor_count: u8,
    probability: f64,
    stopped: bool,
}

impl CallGenerator {
    /// Generator emitting a call with probability `p` per tick.
    pub fn new(floor_count: u8, p: f64) -> Self {
        Self {
            floor_count,
            probability: p.clamp(0.0, 1.0),
            stopped: false,
        }
    }

    /// Generator averaging one call every `mean_interval_ms`, given the
    /// driver's tick cadence.  A zero interval disables generation.
    pub fn with_mean_interval(floor_count: u8, mean_interval_ms: u32, tick_duration_ms: u32) -> Self {
        let p = if mean_interval_ms == 0 {
            0.0
        } else {
            tick_duration_ms as f64 / mean_interval_ms as f64
        };
        Self::new(floor_count, p)
    }

    /// Maybe synthesize one call for the tick `now`.
    pub fn maybe_generate(&self, now: Tick, rng: &mut SimRng) -> Option<Call> {
        if self.stopped || !rng.gen_bool(self.probability) {
            return None;
        }

        let floor = Floor(rng.gen_range(0..self.floor_count));
        let direction = if floor == Floor::GROUND {
            Direction::Up
        } else if floor.0 == self.floor_count - 1 {
            Direction::Down
        } else if rng.gen_bool(0.5) {
            Direction::Up
        } else {
            Direction::Down
        };

        Some(Call::new(floor, direction, now))
    }

    /// Silence the generator.  Irreversible for this run; `maybe_generate`
    /// returns `None` from now on.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
