use std::f64::consts::PI;

use super::settings::DEFAULT_INTERVAL_MS;

/// Frame-driven autoplay clock.
///
/// The owner feeds it the time since the previous animation frame. Each time
/// the accumulated time crosses the interval, `tick` reports it once and the
/// overshoot is carried into the next interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoplayTimer {
    accumulated_ms: f64,
    interval_ms: f64,
    running: bool,
}

impl Default for AutoplayTimer {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}

impl AutoplayTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            accumulated_ms: 0.0,
            interval_ms,
            running: true,
        }
    }

    fn has_interval(&self) -> bool {
        self.interval_ms.is_finite() && self.interval_ms > 0.0
    }

    /// Returns true when this frame completed an interval.
    ///
    /// At most one interval completes per call, however long the frame was.
    #[must_use]
    pub fn tick(&mut self, delta_ms: f64) -> bool {
        if !self.running || !self.has_interval() {
            return false;
        }
        let delta_ms = if delta_ms.is_finite() {
            delta_ms.max(0.0)
        } else {
            0.0
        };
        let accumulated = self.accumulated_ms + delta_ms;
        if accumulated < self.interval_ms {
            self.accumulated_ms = accumulated;
            return false;
        }
        // a stalled frame can cross several intervals; keep only the remainder
        self.accumulated_ms = (accumulated - self.interval_ms) % self.interval_ms;
        true
    }

    pub fn progress(&self) -> f64 {
        if !self.has_interval() {
            return 0.0;
        }
        (self.accumulated_ms / self.interval_ms).clamp(0.0, 1.0)
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }

    pub fn set_interval(&mut self, interval_ms: f64) {
        self.interval_ms = interval_ms;
        if self.has_interval() && self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms %= self.interval_ms;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn accumulated_ms(&self) -> f64 {
        self.accumulated_ms
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

/// Circular progress indicator drawn around the play/pause button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRing {
    pub size: f64,
    pub stroke: f64,
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self {
            size: 40.0,
            stroke: 3.0,
        }
    }
}

impl ProgressRing {
    pub fn radius(&self) -> f64 {
        (self.size - self.stroke) / 2.0
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    /// `stroke-dashoffset` that leaves `progress` of the ring drawn.
    pub fn dash_offset(&self, progress: f64) -> f64 {
        self.circumference() * (1.0 - progress.clamp(0.0, 1.0))
    }
}
