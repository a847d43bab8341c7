//! Burst patterns: the velocity fields a shell explodes into.
//!
//! Each pattern is a pure generator from a burst origin to a batch of
//! particles. Randomness comes only from the passed `Rng`, so a seeded
//! simulation reproduces identical bursts.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::core::rng::Rng;

use super::color::Rgb;
use super::particle::Particle;

/// Willow sparks decay slower and fall gently, with a long trail.
const WILLOW_DECAY: f32 = 0.98;
const WILLOW_GRAVITY: f32 = 0.05;
const WILLOW_TRAIL: usize = 20;
/// Spiral sparks burn out faster than the default.
const SPIRAL_DECAY: f32 = 0.96;

/// Per-particle parameters a pattern inherits from the engine config.
/// Willow and Spiral override decay/gravity/trail for their look.
#[derive(Debug, Clone, Copy)]
pub struct ParticleDefaults {
    pub decay_rate: f32,
    pub gravity: f32,
    pub trail_capacity: usize,
}

/// The closed set of burst shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Filled disk: random angles, wide speed spread.
    Circle,
    /// Coherent expanding ring: evenly spaced angles, tight speed band.
    Ring,
    /// Drooping long-lived shower.
    Willow,
    /// Two concentric rings sharing one angle set.
    DoubleRing,
    /// Outward spiral arm: angle and speed both scale with index.
    Spiral,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Self::Circle,
        Self::Ring,
        Self::Willow,
        Self::DoubleRing,
        Self::Spiral,
    ];

    /// Pick a pattern uniformly at random.
    pub fn random(rng: &mut Rng) -> Self {
        Self::ALL[rng.next_int(Self::ALL.len() as u32) as usize]
    }

    /// Generate the burst. `count` is clamped to a minimum of 1.
    /// DoubleRing emits two particles per angle, `2 * (count / 2)` total.
    pub fn generate(
        self,
        origin: Vec2,
        color: Rgb,
        count: usize,
        defaults: &ParticleDefaults,
        rng: &mut Rng,
    ) -> Vec<Particle> {
        let count = count.max(1);
        match self {
            Pattern::Circle => {
                let mut particles = Vec::with_capacity(count);
                for _ in 0..count {
                    let angle = rng.range_f32(0.0, TAU);
                    let speed = rng.range_f32(1.0, 5.0);
                    particles.push(Particle::new(
                        origin,
                        polar(angle, speed),
                        rng.range_f32(1.0, 3.0),
                        color,
                        defaults.decay_rate,
                        defaults.gravity,
                        defaults.trail_capacity,
                    ));
                }
                particles
            }
            Pattern::Ring => {
                let mut particles = Vec::with_capacity(count);
                for i in 0..count {
                    let angle = i as f32 / count as f32 * TAU;
                    let speed = rng.range_f32(2.0, 3.0);
                    particles.push(Particle::new(
                        origin,
                        polar(angle, speed),
                        rng.range_f32(1.0, 2.0),
                        color,
                        defaults.decay_rate,
                        defaults.gravity,
                        defaults.trail_capacity,
                    ));
                }
                particles
            }
            Pattern::Willow => {
                let mut particles = Vec::with_capacity(count);
                for _ in 0..count {
                    let angle = rng.range_f32(0.0, TAU);
                    let speed = rng.range_f32(1.0, 3.0);
                    particles.push(Particle::new(
                        origin,
                        polar(angle, speed),
                        rng.range_f32(1.0, 3.0),
                        color,
                        WILLOW_DECAY,
                        WILLOW_GRAVITY,
                        WILLOW_TRAIL,
                    ));
                }
                particles
            }
            Pattern::DoubleRing => {
                let half = (count / 2).max(1);
                let mut particles = Vec::with_capacity(half * 2);
                for i in 0..half {
                    let angle = i as f32 / half as f32 * TAU;
                    let inner = rng.range_f32(1.0, 2.0);
                    let outer = rng.range_f32(3.0, 4.0);
                    particles.push(Particle::new(
                        origin,
                        polar(angle, inner),
                        rng.range_f32(1.0, 2.0),
                        color,
                        defaults.decay_rate,
                        defaults.gravity,
                        defaults.trail_capacity,
                    ));
                    particles.push(Particle::new(
                        origin,
                        polar(angle, outer),
                        rng.range_f32(1.0, 2.0),
                        color,
                        defaults.decay_rate,
                        defaults.gravity,
                        defaults.trail_capacity,
                    ));
                }
                particles
            }
            Pattern::Spiral => {
                let mut particles = Vec::with_capacity(count);
                for i in 0..count {
                    let t = i as f32 / count as f32;
                    // Two full turns, speed growing linearly along the arm.
                    let angle = t * 2.0 * TAU;
                    let speed = t * 5.0;
                    particles.push(Particle::new(
                        origin,
                        polar(angle, speed),
                        rng.range_f32(1.0, 2.0),
                        color,
                        SPIRAL_DECAY,
                        defaults.gravity,
                        defaults.trail_capacity,
                    ));
                }
                particles
            }
        }
    }
}

fn polar(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * speed
}
