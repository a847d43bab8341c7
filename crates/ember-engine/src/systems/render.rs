//! The read-only render pass: simulation state in, draw primitives out.
//!
//! Pass order is fixed: particle trails, particle heads, rising shells,
//! then the water reflection layer. The external surface draws its own
//! background before consuming the frame buffer.

use glam::Vec2;

use crate::core::sim::Simulation;
use crate::effects::{Particle, Shell, ShellState, EXPIRY_THRESHOLD};
use crate::renderer::primitive::{CircleInstance, FrameBuffer};

/// Trail segments draw brighter than the particle head.
const TRAIL_BRIGHTEN: u8 = 50;
/// Rising shells drag a short fixed tail below the body.
const RISING_TAIL_STEPS: usize = 5;
const RISING_TAIL_SPACING: f32 = 3.0;
const RISING_TAIL_FADE: f32 = 50.0 / 255.0;
const RISING_TAIL_RADIUS: f32 = 2.0;
const RISING_TAIL_SHRINK: f32 = 0.3;
/// Reflections dimmer than this are not worth a draw call.
const REFLECTION_FLOOR: f32 = 10.0 / 255.0;

/// Build one frame of draw primitives from the current simulation state.
/// Never mutates the simulation.
pub fn build_frame(sim: &Simulation, buffer: &mut FrameBuffer) {
    buffer.clear();

    for shell in exploded(sim) {
        for particle in &shell.particles {
            push_trail(particle, buffer);
        }
    }

    for shell in exploded(sim) {
        for particle in &shell.particles {
            if particle.radius > EXPIRY_THRESHOLD {
                buffer.push_circle(CircleInstance::new(
                    particle.pos,
                    particle.radius,
                    particle.color,
                    particle.life,
                ));
            }
        }
    }

    for shell in sim.shells().iter().filter(|s| s.state == ShellState::Rising) {
        push_rising(shell, buffer);
    }

    let height = sim.config().height;
    let band = sim.config().reflection_band;
    for shell in exploded(sim) {
        for particle in &shell.particles {
            push_reflection(particle, height, band, buffer);
        }
    }
}

fn exploded(sim: &Simulation) -> impl Iterator<Item = &Shell> {
    sim.shells().iter().filter(|s| s.state == ShellState::Exploded)
}

/// Trail circles oldest to newest: opacity and radius ramp up linearly,
/// so the tail fades out behind the particle. An empty trail draws
/// nothing; the oldest slot always has zero radius and is skipped.
fn push_trail(particle: &Particle, buffer: &mut FrameBuffer) {
    let len = particle.trail.len();
    if len == 0 {
        return;
    }
    let color = particle.color.brightened(TRAIL_BRIGHTEN);
    for (i, point) in particle.trail.iter().enumerate() {
        let t = i as f32 / len as f32;
        let radius = particle.original_radius * t;
        if radius <= 0.0 {
            continue;
        }
        buffer.push_circle(CircleInstance::new(
            point,
            radius,
            color,
            t * particle.life,
        ));
    }
}

/// Rising shell: the body at full opacity plus a short fading tail
/// trailing below it.
fn push_rising(shell: &Shell, buffer: &mut FrameBuffer) {
    buffer.push_circle(CircleInstance::new(
        shell.pos,
        shell.radius,
        shell.color,
        1.0,
    ));
    for i in 0..RISING_TAIL_STEPS {
        let step = i as f32;
        let radius = RISING_TAIL_RADIUS - RISING_TAIL_SHRINK * step;
        if radius <= 0.0 {
            break;
        }
        buffer.push_circle(CircleInstance::new(
            Vec2::new(shell.pos.x, shell.pos.y + step * RISING_TAIL_SPACING),
            radius,
            shell.color,
            1.0 - step * RISING_TAIL_FADE,
        ));
    }
}

/// Mirror a near-ground particle into the water band at halved opacity,
/// attenuated by distance from the ground line and suppressed below the
/// visibility floor.
fn push_reflection(particle: &Particle, height: f32, band: f32, buffer: &mut FrameBuffer) {
    if band <= 0.0 {
        return;
    }
    let band_top = height - band;
    if particle.pos.y <= band_top {
        return;
    }
    let mirrored_y = height - (particle.pos.y - band_top);
    let strength = 1.0 - (mirrored_y - band_top) / band;
    if strength <= REFLECTION_FLOOR {
        return;
    }
    buffer.push_circle(CircleInstance::new(
        Vec2::new(particle.pos.x, mirrored_y),
        particle.radius,
        particle.color,
        strength.min(1.0) * 0.5,
    ));
}
