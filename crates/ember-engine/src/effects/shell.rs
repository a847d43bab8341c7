//! The rising shell: launches upward, bursts into a particle batch.

use glam::Vec2;

use crate::core::rng::Rng;

use super::color::Rgb;
use super::particle::Particle;
use super::pattern::{Pattern, ParticleDefaults};

/// Initial vertical launch speed range (y-down world, negative = up).
const LAUNCH_SPEED_MIN: f32 = -12.0;
const LAUNCH_SPEED_MAX: f32 = -8.0;
/// Burst particle count range.
const BURST_COUNT_MIN: u32 = 50;
const BURST_COUNT_MAX: u32 = 200;

/// Shell lifecycle. `Exploded` is terminal; the shell itself is removed
/// by the simulation once its particle batch has drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Rising,
    Exploded,
}

/// Details of a burst, reported the tick it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Burst {
    pub pattern: Pattern,
    /// Particles actually emitted (DoubleRing rounds `count` down to even).
    pub count: usize,
}

/// A firework shell. Rises under gravity, bursts at apex or on a random
/// per-tick trigger, then owns its particle batch until it drains.
#[derive(Debug, Clone)]
pub struct Shell {
    pub pos: Vec2,
    /// Horizontal component stays fixed; only y accumulates gravity.
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub state: ShellState,
    pub particles: Vec<Particle>,
}

impl Shell {
    /// Launch a shell straight up with a randomized initial speed.
    pub fn launch(pos: Vec2, radius: f32, color: Rgb, rng: &mut Rng) -> Self {
        Shell {
            pos,
            vel: Vec2::new(0.0, rng.range_f32(LAUNCH_SPEED_MIN, LAUNCH_SPEED_MAX)),
            radius,
            color,
            state: ShellState::Rising,
            particles: Vec::new(),
        }
    }

    /// One simulation step. Returns burst details on the tick the shell
    /// transitions to `Exploded`.
    ///
    /// Rising: apply gravity and integrate; burst at apex (`vel.y >= 0`)
    /// or on a `burst_chance` roll, whichever fires first. The apex bound
    /// guarantees every shell eventually bursts.
    /// Exploded: advance every particle, then drop the expired ones.
    pub fn tick(
        &mut self,
        gravity: f32,
        burst_chance: f32,
        defaults: &ParticleDefaults,
        rng: &mut Rng,
    ) -> Option<Burst> {
        match self.state {
            ShellState::Rising => {
                self.vel.y += gravity;
                self.pos.y += self.vel.y;
                if self.vel.y >= 0.0 || rng.chance(burst_chance) {
                    let pattern = Pattern::random(rng);
                    let count = rng.range_int(BURST_COUNT_MIN, BURST_COUNT_MAX) as usize;
                    return Some(self.explode(pattern, count, defaults, rng));
                }
                None
            }
            ShellState::Exploded => {
                for particle in &mut self.particles {
                    particle.advance();
                }
                self.particles.retain(|p| !p.is_expired());
                None
            }
        }
    }

    /// Force the burst with an explicit pattern and count. Used by the
    /// Rising tick and by drivers scripting choreographed shows.
    pub fn explode(
        &mut self,
        pattern: Pattern,
        count: usize,
        defaults: &ParticleDefaults,
        rng: &mut Rng,
    ) -> Burst {
        self.state = ShellState::Exploded;
        self.particles = pattern.generate(self.pos, self.color, count, defaults, rng);
        Burst {
            pattern,
            count: self.particles.len(),
        }
    }

    /// Exploded with an empty batch: nothing left to simulate or draw.
    pub fn is_spent(&self) -> bool {
        self.state == ShellState::Exploded && self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOR: Rgb = Rgb::new(230, 180, 140);

    fn defaults() -> ParticleDefaults {
        ParticleDefaults {
            decay_rate: 0.97,
            gravity: 0.1,
            trail_capacity: 10,
        }
    }

    fn shell_with_velocity(vy: f32) -> Shell {
        Shell {
            pos: Vec2::new(100.0, 500.0),
            vel: Vec2::new(0.0, vy),
            radius: 3.0,
            color: COLOR,
            state: ShellState::Rising,
            particles: Vec::new(),
        }
    }

    #[test]
    fn launch_speed_in_range() {
        let mut rng = Rng::new(42);
        for _ in 0..100 {
            let shell = Shell::launch(Vec2::new(10.0, 20.0), 3.0, COLOR, &mut rng);
            assert!(shell.vel.y >= -12.0 && shell.vel.y < -8.0);
            assert_eq!(shell.vel.x, 0.0);
            assert_eq!(shell.state, ShellState::Rising);
        }
    }

    #[test]
    fn apex_tick_is_deterministic() {
        // v0 = -10, g = 0.1: vy reaches 0 exactly at tick 100.
        let mut rng = Rng::new(42);
        let mut shell = shell_with_velocity(-10.0);
        for tick in 1..=99 {
            let burst = shell.tick(0.1, 0.0, &defaults(), &mut rng);
            assert!(burst.is_none(), "burst too early at tick {}", tick);
            assert_eq!(shell.state, ShellState::Rising);
        }
        let burst = shell.tick(0.1, 0.0, &defaults(), &mut rng);
        assert!(burst.is_some());
        assert_eq!(shell.state, ShellState::Exploded);
        assert!(!shell.particles.is_empty());
    }

    #[test]
    fn random_trigger_fires_immediately_at_certainty() {
        let mut rng = Rng::new(42);
        let mut shell = shell_with_velocity(-10.0);
        let burst = shell.tick(0.1, 1.0, &defaults(), &mut rng);
        assert!(burst.is_some());
        assert_eq!(shell.state, ShellState::Exploded);
    }

    #[test]
    fn burst_count_within_range() {
        for seed in 1..50 {
            let mut rng = Rng::new(seed);
            let mut shell = shell_with_velocity(-0.05);
            let burst = shell.tick(0.1, 0.0, &defaults(), &mut rng).unwrap();
            // DoubleRing may round down by one; everything else is exact.
            assert!((49..=200).contains(&burst.count), "count {}", burst.count);
        }
    }

    #[test]
    fn exploded_tick_advances_and_prunes() {
        let mut rng = Rng::new(42);
        let mut shell = shell_with_velocity(-10.0);
        shell.explode(Pattern::Circle, 100, &defaults(), &mut rng);
        assert_eq!(shell.particles.len(), 100);

        shell.tick(0.1, 0.0, &defaults(), &mut rng);
        for p in &shell.particles {
            assert!((p.life - 0.97).abs() < 1e-6);
        }

        // Life decays to the expiry threshold in bounded time; the batch
        // must fully drain.
        let mut ticks = 0;
        while !shell.is_spent() {
            shell.tick(0.1, 0.0, &defaults(), &mut rng);
            ticks += 1;
            assert!(ticks <= 200, "particle batch never drained");
        }
    }

    #[test]
    fn spent_only_when_exploded_and_empty() {
        let mut rng = Rng::new(42);
        let mut shell = shell_with_velocity(-10.0);
        assert!(!shell.is_spent());
        shell.explode(Pattern::Ring, 10, &defaults(), &mut rng);
        assert!(!shell.is_spent());
        shell.particles.clear();
        assert!(shell.is_spent());
    }

    #[test]
    fn rising_keeps_horizontal_velocity_fixed() {
        let mut rng = Rng::new(42);
        let mut shell = shell_with_velocity(-10.0);
        shell.vel.x = 0.5;
        let x_before = shell.vel.x;
        shell.tick(0.1, 0.0, &defaults(), &mut rng);
        assert_eq!(shell.vel.x, x_before);
        assert_eq!(shell.pos.x, 100.0);
    }
}
