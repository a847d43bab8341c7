//! Night Sky — headless firework show driver.
//!
//! Stands in for the scene that owns a real canvas: runs the fixed
//! timestep loop, applies the auto-spawn policy, scripts a few pointer
//! launches, and logs what each frame would draw. Pass a JSON config
//! file path as the first argument to override the defaults.

use std::process::ExitCode;

use glam::Vec2;

use ember_engine::{
    build_frame, EngineConfig, FrameBuffer, Rgb, SegmentInstance, SimEvent, Simulation, StepClock,
};

// ── Show parameters ──────────────────────────────────────────────────

const SEED: u64 = 2024;
/// Ten seconds of show at 60 steps per second.
const FRAMES: u32 = 600;
const STEPS_PER_SECOND: f32 = 60.0;
const FRAME_DT: f32 = 1.0 / STEPS_PER_SECOND;
/// Scripted stand-ins for pointer clicks: (tick, x, y).
const CLICKS: [(u32, f32, f32); 3] = [
    (30, 250.0, 480.0),
    (90, 620.0, 520.0),
    (150, 840.0, 450.0),
];

// ── Driver-owned scene dressing ──────────────────────────────────────

const WATER_DEPTH: f32 = 100.0;
const WATER_COLOR: Rgb = Rgb::new(10, 60, 100);

fn main() -> ExitCode {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("night-sky: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut sim = match Simulation::new(config, SEED) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("night-sky: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut clock = StepClock::per_second(STEPS_PER_SECOND);
    let mut frame = FrameBuffer::new();
    let mut tick_no = 0u32;
    let mut launches = 0u32;
    let mut bursts = 0u32;
    let mut peak_particles = 0usize;

    for frame_no in 0..FRAMES {
        for _ in 0..clock.advance(FRAME_DT) {
            sim.clear_frame_data();
            for &(at, x, y) in &CLICKS {
                if at == tick_no {
                    sim.spawn(x, y);
                }
            }
            sim.auto_spawn();
            sim.tick();
            for event in sim.events() {
                match *event {
                    SimEvent::Launched { .. } => launches += 1,
                    SimEvent::Burst { pattern, count, .. } => {
                        log::info!("burst: {:?} x{} at tick {}", pattern, count, tick_no);
                        bursts += 1;
                    }
                }
            }
            tick_no += 1;
        }

        build_frame(&sim, &mut frame);
        push_waterline(sim.config(), &mut frame);

        peak_particles = peak_particles.max(sim.particle_count());
        if frame_no % 60 == 0 {
            log::info!(
                "frame {}: {} shells, {} particles, {} circles + {} segments",
                frame_no,
                sim.shell_count(),
                sim.particle_count(),
                frame.circle_count(),
                frame.segment_count()
            );
        }
    }

    println!(
        "show over: {} launches, {} bursts, peak {} particles across {} ticks",
        launches, bursts, peak_particles, tick_no
    );
    ExitCode::SUCCESS
}

fn load_config() -> Result<EngineConfig, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|err| format!("cannot read {path}: {err}"))?;
            EngineConfig::from_json(&json).map_err(|err| err.to_string())
        }
        None => EngineConfig::default().validated().map_err(|err| err.to_string()),
    }
}

/// The waterline is scene dressing: owned by the driver, drawn through
/// the same primitive buffer the engine fills.
fn push_waterline(config: &EngineConfig, frame: &mut FrameBuffer) {
    let y = config.height - WATER_DEPTH;
    frame.push_segment(SegmentInstance::new(
        Vec2::new(0.0, y),
        Vec2::new(config.width, y),
        2.0,
        WATER_COLOR,
        0.4,
    ));
}
