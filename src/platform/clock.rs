//! Frame timing for the runner
//!
//! The simulation integrates whatever `dt` it is handed. The frame loop
//! measures wall time here and caps it, so a stall (debugger, dragged
//! window, suspended tab) turns into one long-but-bounded step.

use std::time::Instant;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self::starting_at(Instant::now(), max_dt)
    }

    pub fn starting_at(start: Instant, max_dt: f32) -> Self {
        Self { last: start, max_dt }
    }

    /// Seconds since the previous frame, at most `max_dt`
    pub fn frame_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(self.max_dt)
    }

    pub fn frame(&mut self) -> f32 {
        self.frame_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_short_frame_passes_through() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 0.1);
        let dt = clock.frame_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_stall_is_capped() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 0.1);
        assert_eq!(clock.frame_at(start + Duration::from_secs(3)), 0.1);
        // The stall is not carried into the next frame
        let dt = clock.frame_at(start + Duration::from_millis(3010));
        assert!((dt - 0.010).abs() < 1e-6);
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start + Duration::from_secs(1), 0.1);
        assert_eq!(clock.frame_at(start), 0.0);
    }
}
