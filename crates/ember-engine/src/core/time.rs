//! Frame-time to simulation-step conversion for the external driver.

/// Converts variable frame deltas into whole simulation steps.
/// The simulation itself has no notion of wall time; one `tick()` is one
/// step, and the driver runs `advance()` worth of steps per rendered frame.
pub struct StepClock {
    /// Seconds per simulation step.
    step: f32,
    /// Accumulated frame time not yet consumed by a step.
    accumulator: f32,
    /// Cap on steps returned per frame, so a long stall cannot snowball.
    max_steps: u32,
}

impl StepClock {
    /// A clock running `rate` simulation steps per second (typically 60).
    pub fn per_second(rate: f32) -> Self {
        Self {
            step: 1.0 / rate,
            accumulator: 0.0,
            max_steps: 8,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Feed one frame's delta. Returns how many simulation steps to run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self.accumulator.min(self.step * self.max_steps as f32);
        let steps = (self.accumulator / self.step) as u32;
        self.accumulator -= steps as f32 * self.step;
        steps
    }

    /// Seconds per simulation step.
    pub fn step(&self) -> f32 {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_frame_one_step() {
        let mut clock = StepClock::per_second(60.0);
        assert_eq!(clock.advance(1.0 / 60.0), 1);
    }

    #[test]
    fn partial_frames_accumulate() {
        let mut clock = StepClock::per_second(60.0);
        assert_eq!(clock.advance(0.008), 0);
        assert_eq!(clock.advance(0.010), 1);
    }

    #[test]
    fn stall_is_capped() {
        let mut clock = StepClock::per_second(60.0).with_max_steps(8);
        // Two seconds of stall yields at most the cap, not 120 steps.
        assert_eq!(clock.advance(2.0), 8);
    }

    #[test]
    fn negative_delta_ignored() {
        let mut clock = StepClock::per_second(60.0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(1.0 / 60.0), 1);
    }
}
