//! Per-frame timing statistics shown in the info bar.

use std::time::Duration;

use super::fps::FpsTracker;

/// Statistics overwritten once per frame.
///
/// The info bar of a frame reads these while that frame is being rendered,
/// so the source resolution is current but `last_render` still holds the
/// previous frame's duration (it is only known once rendering finishes).
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    pub fps: FpsTracker,
    pub last_render: Duration,
    pub last_write: Duration,
    pub render_only_fps: f64,
    pub source_width: u32,
    pub source_height: u32,
}

impl RenderStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_render_ms(&self) -> f64 {
        self.last_render.as_secs_f64() * 1000.0
    }

    pub fn last_write_ms(&self) -> f64 {
        self.last_write.as_secs_f64() * 1000.0
    }

    /// Store a finished render's duration and derive the render-only rate.
    pub fn record_render(&mut self, elapsed: Duration) {
        self.last_render = elapsed;
        let ms = self.last_render_ms();
        self.render_only_fps = if ms > 0.0 { 1000.0 / ms } else { 0.0 };
    }

    pub fn record_write(&mut self, elapsed: Duration) {
        self.last_write = elapsed;
    }
}
