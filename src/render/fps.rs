//! Frame-rate tracking with exponential smoothing.

use std::time::{Duration, Instant};

/// Smoothing factor for the average frame rate.
pub const AVG_FPS_ALPHA: f64 = 0.1;

/// Instantaneous and smoothed frame rate.
///
/// Samples are supplied by the caller, typically once per wall-clock second.
/// There is no decay: if sampling stops, the average stays where it was.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FpsTracker {
    last: f64,
    average: Option<f64>,
}

impl FpsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new sample. The first sample seeds the average directly.
    pub fn update(&mut self, sample: f64) {
        self.last = sample;
        self.average = Some(match self.average {
            None => sample,
            Some(avg) => avg + (sample - avg) * AVG_FPS_ALPHA,
        });
    }

    /// Most recent sample, `0.0` before the first update.
    pub fn last(&self) -> f64 {
        self.last
    }

    /// Smoothed average, `0.0` before the first update.
    pub fn average(&self) -> f64 {
        self.average.unwrap_or(0.0)
    }
}

/// Counts frames and yields a rate sample once per elapsed second.
#[derive(Debug, Clone, Copy)]
pub struct FrameCounter {
    frames: u32,
    window_start: Instant,
}

impl FrameCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            frames: 0,
            window_start: now,
        }
    }

    /// Count one frame finished at `now`.
    ///
    /// Returns `frames / elapsed` once at least a second has passed since the
    /// last sample, and starts a new window.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let sample = f64::from(self.frames) / elapsed.as_secs_f64();
        self.frames = 0;
        self.window_start = now;
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fps = FpsTracker::new();
        assert_eq!(fps.last(), 0.0);
        assert_eq!(fps.average(), 0.0);
    }

    #[test]
    fn test_first_sample_seeds_average() {
        let mut fps = FpsTracker::new();
        fps.update(10.0);
        assert_eq!(fps.last(), 10.0);
        assert_eq!(fps.average(), 10.0);
    }

    #[test]
    fn test_smoothing() {
        let mut fps = FpsTracker::new();
        fps.update(10.0);
        fps.update(20.0);
        assert_eq!(fps.last(), 20.0);
        assert!((fps.average() - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_first_sample_still_seeds() {
        let mut fps = FpsTracker::new();
        fps.update(0.0);
        fps.update(10.0);
        assert!((fps.average() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_converges_toward_steady_rate() {
        let mut fps = FpsTracker::new();
        fps.update(0.0);
        for _ in 0..200 {
            fps.update(30.0);
        }
        assert!((fps.average() - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_frame_counter_waits_a_second() {
        let start = Instant::now();
        let mut counter = FrameCounter::new(start);
        assert_eq!(counter.tick(start + Duration::from_millis(100)), None);
        assert_eq!(counter.tick(start + Duration::from_millis(900)), None);
        let sample = counter.tick(start + Duration::from_secs(1)).unwrap();
        assert!((sample - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_counter_divides_by_actual_elapsed() {
        let start = Instant::now();
        let mut counter = FrameCounter::new(start);
        for _ in 0..9 {
            counter.tick(start);
        }
        let sample = counter.tick(start + Duration::from_secs(2)).unwrap();
        assert!((sample - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_counter_resets_window() {
        let start = Instant::now();
        let mut counter = FrameCounter::new(start);
        let t1 = start + Duration::from_secs(1);
        counter.tick(t1).unwrap();
        assert_eq!(counter.tick(t1 + Duration::from_millis(500)), None);
        let sample = counter.tick(t1 + Duration::from_secs(1)).unwrap();
        assert!((sample - 2.0).abs() < 1e-9);
    }
}
