//! Headless firework particle engine.
//!
//! The engine owns simulation state only: shells rise, burst into one of
//! a closed set of patterns, and their particles decay away. Each frame
//! the external scene driver runs one `tick()` and one `build_frame()`,
//! then draws the resulting primitives onto whatever surface it owns.
//! All randomness flows through a seeded generator, so a show is
//! reproducible tick-for-tick.

pub mod api;
pub mod core;
pub mod effects;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{ConfigError, EngineConfig};
pub use api::types::SimEvent;
pub use self::core::rng::Rng;
pub use self::core::sim::Simulation;
pub use self::core::time::StepClock;
pub use effects::{Burst, Particle, ParticleDefaults, Pattern, Rgb, Shell, ShellState, Trail};
pub use renderer::primitive::{CircleInstance, FrameBuffer, SegmentInstance};
pub use systems::render::build_frame;
