//! Frame renderer: resize, info bar, row encoding and timing.

use std::borrow::Cow;
use std::time::Instant;

use super::info_bar;
use super::run_encoder::{encode_row, RESET};
use super::stats::RenderStats;
use crate::color::ColorMode;
use crate::config::RenderConfig;
use crate::frame::RasterFrame;
use crate::terminal::TermSize;

/// Escape-coded text for one frame, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame {
    text: String,
    rows: usize,
}

impl EncodedFrame {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of character rows of image content (info bar excluded).
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Turns raster frames into half-block terminal text.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    mode: ColorMode,
    config: RenderConfig,
}

impl FrameRenderer {
    pub fn new(mode: ColorMode, config: RenderConfig) -> Self {
        Self { mode, config }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one frame for a terminal of size `term`.
    ///
    /// Updates the source resolution and render timing in `stats`. The info
    /// bar drawn here shows the render time of the *previous* call.
    pub fn render(
        &self,
        frame: &RasterFrame,
        term: TermSize,
        stats: &mut RenderStats,
    ) -> EncodedFrame {
        let started = Instant::now();

        let info_rows = u16::from(self.config.info_bar);
        let usable_rows = u32::from(term.rows.saturating_sub(info_rows));
        let max_pixel_rows = usable_rows * 2;

        let frame = if self.config.auto_resize {
            log::trace!(
                "resizing {}x{} to {}x{}",
                frame.width(),
                frame.height(),
                term.cols,
                max_pixel_rows
            );
            Cow::Owned(frame.resized(u32::from(term.cols), max_pixel_rows))
        } else {
            Cow::Borrowed(frame)
        };

        stats.source_width = frame.width();
        stats.source_height = frame.height();

        let char_rows = frame.height().min(max_pixel_rows) / 2;
        let mut text = String::with_capacity(frame.width() as usize * char_rows as usize * 2 * 6);

        if self.config.info_bar {
            info_bar::compose_into(&mut text, stats, self.mode, term.cols);
        }

        for row in 0..char_rows {
            let y = row * 2;
            encode_row(self.mode, frame.row_bytes(y), frame.row_bytes(y + 1), &mut text);
            if !self.config.auto_resize {
                text.push('\n');
            }
        }

        text.push_str(RESET);

        stats.record_render(started.elapsed());

        EncodedFrame {
            text,
            rows: char_rows as usize,
        }
    }
}
