//! lobby — terminal demo driver for the liftsim elevator simulator.
//!
//! Plays the role the windowing shell plays in a GUI build: it owns the
//! pacing timer, drives `tick()` at a fixed cadence, and paints each
//! snapshot — here as an ASCII elevation of the building.  The simulation
//! core does none of this itself.
//!
//! Run with `RUST_LOG=debug` to watch calls being generated and assigned.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use lift_car::DoorState;
use lift_core::Call;
use lift_sim::{BuildingBuilder, BuildingState, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOORS:               u8  = 7;
const CARS:                 u8  = 2;
const SEED:                 u64 = 42;
const TICK_MS:              u32 = 200;
const RUN_TICKS:            u64 = 300; // one simulated minute
const FRAME_INTERVAL_TICKS: u64 = 5;   // repaint once per simulated second

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Paints snapshots and announces generated calls.  Read-only consumer:
/// everything it sees arrives through observer callbacks and copied state.
struct AsciiRenderer;

impl SimObserver for AsciiRenderer {
    fn on_call(&mut self, call: &Call) {
        println!("  * new call: {call}");
    }
}

impl AsciiRenderer {
    fn draw(&self, state: &BuildingState) {
        println!("\n-- {} --", state.tick);
        for f in (0..state.floor_count).rev() {
            let mut line = format!("{f:>2} |");
            for car in &state.elevators {
                if car.floor.0 == f {
                    line.push_str(match car.door {
                        DoorState::Closed                   => " [|] ",
                        DoorState::Opening | DoorState::Closing => " [/] ",
                        DoorState::Open                     => " [ ] ",
                    });
                } else {
                    line.push_str("  .  ");
                }
            }
            println!("{line}");
        }
        for car in &state.elevators {
            println!("   {} at {}, {}, doors {}", car.id, car.floor, car.motion, car.door);
        }
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let mut building = BuildingBuilder::new()
        .floors(FLOORS)
        .cars(CARS)
        .seed(SEED)
        .tick_duration_ms(TICK_MS)
        .mean_call_interval_ms(4_000)
        .build()?;

    println!(
        "liftsim demo: {FLOORS} floors, {CARS} cars, seed {SEED}, {RUN_TICKS} ticks at {TICK_MS} ms"
    );

    let mut renderer = AsciiRenderer;
    for _ in 0..RUN_TICKS {
        building.tick_observed(&mut renderer);
        if building.current_tick().0.is_multiple_of(FRAME_INTERVAL_TICKS) {
            renderer.draw(&building.snapshot());
        }
        thread::sleep(Duration::from_millis(TICK_MS as u64));
    }

    building.stop();
    println!("\ndone at {}", building.current_tick());
    Ok(())
}
