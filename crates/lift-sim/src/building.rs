//! The `Building` struct and its tick loop.

use lift_car::Elevator;
use lift_core::{Call, ElevatorId, PendingCalls, SimClock, SimRng, Tick};
use lift_dispatch::Dispatcher;

use crate::config::SimParams;
use crate::generator::CallGenerator;
use crate::observer::SimObserver;
use crate::snapshot::{BuildingState, ElevatorState};
use crate::BuildingBuilder;

/// The simulation core: floors, cars, outstanding calls, and the clock.
///
/// The building exclusively owns all mutable state.  The generator and the
/// dispatcher work through narrow interfaces ([`submit_call`][Self::submit_call]
/// and the fleet slice) and never hold references of their own; the renderer
/// sees only copy-out [`BuildingState`] values.
///
/// `tick()` is strictly non-blocking and bounded, and the model is not
/// re-entrant: exactly one external driver may call it, one call at a time.
///
/// Create via [`Building::builder`].
pub struct Building {
    params: SimParams,
    clock: SimClock,
    rng: SimRng,
    generator: CallGenerator,
    dispatcher: Dispatcher,
    elevators: Vec<Elevator>,
    pending: PendingCalls,
    running: bool,
}

impl Building {
    pub fn builder() -> BuildingBuilder {
        BuildingBuilder::new()
    }

    /// Construct from parameters the builder has already validated.
    /// Every car starts parked at the ground floor; the clock starts at 0.
    pub(crate) fn from_validated_params(params: SimParams) -> Self {
        let elevators = (0..params.elevator_count)
            .map(|i| Elevator::new(ElevatorId(i)))
            .collect();
        let generator = CallGenerator::new(params.floor_count, params.call_probability());
        log::debug!(
            "starting simulation: {} floors, {} cars, seed {}",
            params.floor_count,
            params.elevator_count,
            params.seed
        );
        Self {
            clock: SimClock::new(params.tick_duration_ms),
            rng: SimRng::new(params.seed),
            generator,
            dispatcher: Dispatcher::new(params.floor_count),
            elevators,
            pending: PendingCalls::new(),
            params,
            running: true,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The tick the next `tick()` call will process.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn pending_calls(&self) -> &PendingCalls {
        &self.pending
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    // ── Mutation entry points ─────────────────────────────────────────────

    /// Submit a call into the pending set, applying the dedup rule: an
    /// equivalent (floor, direction) request already outstanding wins and
    /// the new call is silently discarded.  Returns whether the call was
    /// retained.
    ///
    /// This is the generator's submission seam, and the way tests and demos
    /// inject scripted calls.
    pub fn submit_call(&mut self, call: Call) -> bool {
        let kept = self.pending.submit(call);
        if kept {
            log::debug!("call submitted: {call}");
        }
        kept
    }

    /// Advance simulated time by one step.  No-op unless running.
    pub fn tick(&mut self) {
        self.tick_observed(&mut crate::NoopObserver);
    }

    /// `tick()` with observer callbacks; the building is unaware of what
    /// the observer does with them.
    pub fn tick_observed<O: SimObserver>(&mut self, observer: &mut O) {
        if !self.running {
            return;
        }
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ① Generate: at most one new call per tick, deduped on submission.
        if let Some(call) = self.generator.maybe_generate(now, &mut self.rng)
            && self.submit_call(call)
        {
            observer.on_call(&call);
        }

        // ② Dispatch: drain pending calls into car stop queues.
        self.dispatcher
            .assign_pending(&mut self.pending, &mut self.elevators);

        // ③ Advance every car by one state-machine step, in id order.
        for car in &mut self.elevators {
            car.step(&self.params.door_timing);
        }

        // ④ Commit the tick.
        self.clock.advance();
        observer.on_tick_end(now);
    }

    /// Drive the building for `n` ticks, feeding the observer and handing
    /// it a snapshot every `snapshot_interval_ticks` ticks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        let interval = self.params.snapshot_interval_ticks;
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.tick_observed(observer);
            if interval > 0 && now.0.is_multiple_of(interval) {
                let state = self.snapshot();
                observer.on_snapshot(now, &state);
            }
        }
        observer.on_run_end(self.clock.current_tick);
    }

    /// Stop the simulation: silence the generator, discard outstanding
    /// calls, and reset every car to a quiescent state at its current
    /// floor.  Idempotent; a later `tick()` is a no-op.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.generator.stop();
        self.pending.clear();
        for car in &mut self.elevators {
            car.reset();
        }
        log::debug!("simulation stopped at {}", self.clock.current_tick);
    }

    // ── Read-only view ────────────────────────────────────────────────────

    /// An immutable copy-out view of the last committed state.  Safe to
    /// call at any time; exposes no handles into the building.
    pub fn snapshot(&self) -> BuildingState {
        BuildingState {
            floor_count:    self.params.floor_count,
            elevator_count: self.params.elevator_count,
            tick:           self.clock.current_tick,
            running:        self.running,
            elevators:      self
                .elevators
                .iter()
                .map(|car| ElevatorState {
                    id:     car.id(),
                    floor:  car.floor(),
                    motion: car.motion(),
                    door:   car.door(),
                })
                .collect(),
            pending_calls:  self.pending.iter().copied().collect(),
        }
    }
}
