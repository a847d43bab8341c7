//! Firework entities: colors, trails, particles, burst patterns, shells.

mod color;
mod particle;
mod pattern;
mod shell;
mod trail;

pub use color::Rgb;
pub use particle::{Particle, EXPIRY_THRESHOLD};
pub use pattern::{ParticleDefaults, Pattern};
pub use shell::{Burst, Shell, ShellState};
pub use trail::Trail;
