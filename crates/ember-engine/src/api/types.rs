//! Outbound lifecycle events for the scene driver.

use crate::effects::Pattern;

/// Per-tick transient events: sound hooks, counters, UI feedback.
/// Collected by the simulation; the driver reads and the buffer is cleared
/// via `Simulation::clear_frame_data` at the start of each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// A shell was launched at (x, y).
    Launched { x: f32, y: f32 },
    /// A shell burst at (x, y) into `count` particles.
    Burst {
        x: f32,
        y: f32,
        pattern: Pattern,
        count: usize,
    },
}
