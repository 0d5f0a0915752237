//! The assignment pass.

use lift_core::{Call, PendingCalls};
use lift_car::Elevator;

/// Assigns outstanding calls to cars, one full pass per tick.
///
/// Stateless apart from its cost parameters; all mutable state lives in the
/// building's `PendingCalls` and the cars themselves.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    /// Number of floors in the building — sets the reversal penalty scale.
    floor_count: u8,
}

impl Dispatcher {
    pub fn new(floor_count: u8) -> Self {
        Self { floor_count }
    }

    /// Cost added when serving the call would mean reversing or
    /// backtracking.  Twice the building height guarantees any car that can
    /// take the call en route beats any car that cannot.
    #[inline]
    fn reversal_penalty(&self) -> u32 {
        2 * self.floor_count as u32
    }

    /// Drain every pending call, oldest first, and commit each to the
    /// cheapest car.  Calls assigned earlier in the pass influence the cost
    /// of later ones (a newly committed car is no longer idle).
    ///
    /// No-op on an empty pending set; with an empty fleet the calls remain
    /// pending untouched.
    pub fn assign_pending(&self, pending: &mut PendingCalls, cars: &mut [Elevator]) {
        if cars.is_empty() || pending.is_empty() {
            return;
        }
        for call in pending.drain_oldest_first() {
            self.assign_one(&call, cars);
        }
    }

    /// Commit `call` to the cheapest car (ties to the lowest id).
    fn assign_one(&self, call: &Call, cars: &mut [Elevator]) {
        // Slice order is id order, so min_by_key's first-wins tie rule is
        // exactly the lowest-id rule.
        let Some(best) = cars
            .iter()
            .enumerate()
            .min_by_key(|(_, car)| self.cost(car, call))
            .map(|(i, _)| i)
        else {
            return;
        };

        let car = &mut cars[best];
        if car.committed().is_none() {
            car.commit(call.direction);
        }
        car.add_stop(call.floor);
        log::debug!("{} -> {}", call, car.id());
    }

    /// Estimated service cost of `call` for `car`.
    fn cost(&self, car: &Elevator, call: &Call) -> u32 {
        let distance = car.floor().distance_to(call.floor) as u32;
        match car.committed() {
            // Idle car: pure distance.
            None => distance,
            // Car passing through the call floor in the call's direction.
            Some(dir) if dir == call.direction && car.floor().is_toward(call.floor, dir) => {
                distance
            }
            // Behind the car or opposite direction: discourage, don't forbid.
            Some(_) => distance + self.reversal_penalty(),
        }
    }
}
