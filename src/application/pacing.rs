use crate::config::MAX_STEPS_PER_SECOND;

/// Wall-clock throttle converting a steps-per-second rate into "step now"
/// decisions. Rate 0 means paused. Timestamps are seconds, as handed out by
/// macroquad's `get_time`.
pub struct PacingController {
    rate: f32,
    last_step: f64,
}

impl PacingController {
    /// Start paused, as if the last step happened at t = 0
    pub fn new() -> Self {
        Self {
            rate: 0.0,
            last_step: 0.0,
        }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn is_paused(&self) -> bool {
        self.rate <= 0.0
    }

    /// Nudge the rate by a (possibly negative) wheel delta, clamped to
    /// [0, MAX_STEPS_PER_SECOND]
    pub fn adjust(&mut self, delta: f32) {
        self.rate = (self.rate + delta).clamp(0.0, MAX_STEPS_PER_SECOND);
    }

    /// Whether a step is due at time `now`; records `now` as the last step
    /// time when it is.
    ///
    /// At most one step per call: a long stall does not trigger a burst of
    /// catch-up steps afterwards.
    pub fn should_step(&mut self, now: f64) -> bool {
        if self.is_paused() {
            return false;
        }
        let elapsed = now - self.last_step;
        if elapsed >= 1.0 / self.rate as f64 {
            self.last_step = now;
            true
        } else {
            false
        }
    }
}

impl Default for PacingController {
    fn default() -> Self {
        Self::new()
    }
}
