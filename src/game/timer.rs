//! Timed gates
//!
//! A gate remembers when it was last armed. Checking it against a threshold
//! both answers "has enough time passed?" and, on success, re-arms it, so a
//! single check can never fire twice inside one interval.
//!
//! Times are seconds on the same clock as `macroquad::time::get_time()`.
//! The caller passes `now` explicitly, which keeps gameplay deterministic
//! under test.

/// Elapsed-time gate used for fire rate, spawn cadence and bullet lifetime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedGate {
    started_at: f64,
}

impl TimedGate {
    /// Create a gate armed at `now`.
    pub fn new(now: f64) -> Self {
        Self { started_at: now }
    }

    /// Seconds since the gate was last armed. Never negative.
    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.started_at).max(0.0)
    }

    /// Repeating check: true if at least `threshold` seconds have passed,
    /// in which case the gate is re-armed at `now`.
    pub fn has_elapsed(&mut self, now: f64, threshold: f64) -> bool {
        if self.elapsed(now) < threshold {
            return false;
        }
        self.started_at = now;
        true
    }

    /// One-shot check: true once `threshold` seconds have passed.
    /// Does not re-arm.
    pub fn expired(&self, now: f64, threshold: f64) -> bool {
        self.elapsed(now) >= threshold
    }
}
