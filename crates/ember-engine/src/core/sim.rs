//! The simulation stepper: owns every live shell, advances the world one
//! tick at a time, and prunes spent shells.

use glam::Vec2;

use crate::api::config::{ConfigError, EngineConfig};
use crate::api::types::SimEvent;
use crate::effects::{Rgb, Shell};

use super::rng::Rng;

/// Owns the live shell collection and the injected randomness source.
/// One `tick()` is one simulation step; the renderer only ever borrows
/// this immutably.
pub struct Simulation {
    config: EngineConfig,
    shells: Vec<Shell>,
    events: Vec<SimEvent>,
    rng: Rng,
}

impl Simulation {
    /// Validate the config and build an empty simulation around a seeded
    /// random source. Same seed, same calls, same show.
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        log::info!(
            "simulation ready: {}x{} canvas, auto-spawn p={} cap={}",
            config.width,
            config.height,
            config.auto_spawn_probability,
            config.auto_spawn_cap
        );
        let shell_capacity = config.auto_spawn_cap.max(8);
        Ok(Self {
            config,
            shells: Vec::with_capacity(shell_capacity),
            events: Vec::new(),
            rng: Rng::new(seed),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Clear per-frame transient data. The driver calls this at the start
    /// of each frame, before spawning and ticking.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Launch a shell at (x, y) with a random launch color.
    pub fn spawn(&mut self, x: f32, y: f32) {
        let color = Rgb::random_launch(&mut self.rng);
        self.spawn_colored(x, y, color);
    }

    /// Launch a shell at (x, y), clamped to the canvas. Always succeeds;
    /// bounding the collection is the driver's policy (`auto_spawn_cap`).
    pub fn spawn_colored(&mut self, x: f32, y: f32, color: Rgb) {
        let pos = Vec2::new(
            x.clamp(0.0, self.config.width),
            y.clamp(0.0, self.config.height),
        );
        let shell = Shell::launch(pos, self.config.shell_radius, color, &mut self.rng);
        log::debug!("shell launched at ({}, {}), vy={}", pos.x, pos.y, shell.vel.y);
        self.shells.push(shell);
        self.events.push(SimEvent::Launched { x: pos.x, y: pos.y });
    }

    /// Roll the auto-spawn policy once: below the shell cap, launch with
    /// the configured probability somewhere in the upper launch region.
    /// Returns whether a shell was launched. The driver calls this once
    /// per tick; both knobs live in the config.
    pub fn auto_spawn(&mut self) -> bool {
        if self.shells.len() >= self.config.auto_spawn_cap {
            return false;
        }
        if !self.rng.chance(self.config.auto_spawn_probability) {
            return false;
        }
        let margin_x = (self.config.width * 0.25).min(100.0);
        let margin_y = (self.config.height * 0.25).min(100.0);
        let x = self.rng.range_f32(margin_x, self.config.width - margin_x);
        let y = self.rng.range_f32(margin_y, self.config.height * 0.5);
        self.spawn(x, y);
        true
    }

    /// Advance the world one step: every shell is updated in insertion
    /// order, then spent shells are removed. Removal happens after the
    /// full pass, so no shell misses its update on the tick another one
    /// is pruned.
    pub fn tick(&mut self) {
        let defaults = self.config.particle_defaults();
        for shell in &mut self.shells {
            if let Some(burst) = shell.tick(
                self.config.gravity,
                self.config.burst_chance,
                &defaults,
                &mut self.rng,
            ) {
                log::debug!(
                    "shell burst at ({}, {}): {:?} x{}",
                    shell.pos.x,
                    shell.pos.y,
                    burst.pattern,
                    burst.count
                );
                self.events.push(SimEvent::Burst {
                    x: shell.pos.x,
                    y: shell.pos.y,
                    pattern: burst.pattern,
                    count: burst.count,
                });
            }
        }
        let before = self.shells.len();
        self.shells.retain(|shell| !shell.is_spent());
        let pruned = before - self.shells.len();
        if pruned > 0 {
            log::trace!("pruned {} spent shells", pruned);
        }
    }

    /// Events accumulated since the last `clear_frame_data`.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Read view of the live shells, for the render pass.
    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }

    /// Mutable access for drivers scripting choreographed shows (forcing
    /// a pattern, pinning a launch velocity).
    pub fn shells_mut(&mut self) -> &mut [Shell] {
        &mut self.shells
    }

    /// Split borrow for scripted bursts: the shells plus the shared rng.
    pub fn shells_and_rng(&mut self) -> (&mut [Shell], &mut Rng) {
        (&mut self.shells, &mut self.rng)
    }

    pub fn shell_count(&self) -> usize {
        self.shells.len()
    }

    /// Total particles across all shells, for driver-side work caps.
    pub fn particle_count(&self) -> usize {
        self.shells.iter().map(|s| s.particles.len()).sum()
    }
}
