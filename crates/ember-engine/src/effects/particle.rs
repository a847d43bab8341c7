//! A single decaying spark produced by a shell burst.

use glam::Vec2;

use super::color::Rgb;
use super::trail::Trail;

/// Life/radius threshold below which a particle is removed.
pub const EXPIRY_THRESHOLD: f32 = 0.1;

/// A point mass with multiplicative life decay and a bounded trail.
/// Created by a burst pattern, advanced once per simulation tick, and
/// dropped by its owning shell once expired.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// Velocity in world units per tick.
    pub vel: Vec2,
    /// Current visual radius, always `original_radius * life`.
    pub radius: f32,
    pub original_radius: f32,
    pub color: Rgb,
    /// Decay factor in (0, 1], starts at 1.0 and only shrinks.
    pub life: f32,
    /// Per-tick multiplier applied to `life`.
    pub decay_rate: f32,
    /// Added to the vertical velocity each tick (y-down world).
    pub gravity: f32,
    pub trail: Trail,
}

impl Particle {
    pub fn new(
        pos: Vec2,
        vel: Vec2,
        radius: f32,
        color: Rgb,
        decay_rate: f32,
        gravity: f32,
        trail_capacity: usize,
    ) -> Self {
        Particle {
            pos,
            vel,
            radius,
            original_radius: radius,
            color,
            life: 1.0,
            decay_rate,
            gravity,
            trail: Trail::new(trail_capacity),
        }
    }

    /// One simulation step: gravity, integration, decay, trail record.
    pub fn advance(&mut self) {
        self.vel.y += self.gravity;
        self.pos += self.vel;
        self.life *= self.decay_rate;
        self.radius = self.original_radius * self.life;
        self.trail.push(self.pos);
    }

    pub fn is_expired(&self) -> bool {
        self.life < EXPIRY_THRESHOLD || self.radius < EXPIRY_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spark() -> Particle {
        Particle::new(
            Vec2::new(100.0, 200.0),
            Vec2::new(2.0, -3.0),
            2.0,
            Rgb::new(255, 200, 100),
            0.97,
            0.1,
            10,
        )
    }

    #[test]
    fn advance_integrates_and_decays() {
        let mut p = spark();
        p.advance();
        // Gravity applies before integration.
        assert!((p.vel.y - (-2.9)).abs() < 1e-6);
        assert!((p.pos.x - 102.0).abs() < 1e-6);
        assert!((p.pos.y - 197.1).abs() < 1e-6);
        assert!((p.life - 0.97).abs() < 1e-6);
        assert!((p.radius - 2.0 * 0.97).abs() < 1e-6);
        assert_eq!(p.trail.len(), 1);
    }

    #[test]
    fn life_is_monotone_nonincreasing() {
        let mut p = spark();
        let mut prev = p.life;
        for _ in 0..200 {
            p.advance();
            assert!(p.life <= prev);
            prev = p.life;
        }
    }

    #[test]
    fn expires_within_bounded_ticks() {
        let mut p = spark();
        let mut ticks = 0;
        while !p.is_expired() {
            p.advance();
            ticks += 1;
            assert!(ticks <= 151, "particle outlived its decay bound");
        }
        // 0.97^n drops below 0.1 around n = 76.
        assert!(ticks >= 60, "expired suspiciously early: {} ticks", ticks);
    }

    #[test]
    fn trail_respects_capacity() {
        let mut p = spark();
        for _ in 0..50 {
            p.advance();
        }
        assert_eq!(p.trail.len(), 10);
    }

    #[test]
    fn radius_tracks_life() {
        let mut p = spark();
        for _ in 0..10 {
            p.advance();
            assert!((p.radius - p.original_radius * p.life).abs() < 1e-6);
            assert!(p.radius >= 0.0);
        }
    }
}
