//! Session drivers: render an image once, or a window continuously.
//!
//! The live loop is strictly sequential: capture, render, write, and once
//! per elapsed second feed the frame rate into the stats. A capture error
//! ends the session.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::capture::{decode_file, ScreenCapturer};
use crate::error::AppError;
use crate::output::OutputWriter;
use crate::render::{FrameCounter, FrameRenderer, RenderStats};
use crate::terminal::{TermSize, TermSizeSource};

/// Decode `path`, render it once and write it.
///
/// # Errors
/// Returns an error if decoding or writing fails.
pub fn run_image<W: Write>(
    path: &Path,
    renderer: &FrameRenderer,
    term: TermSize,
    out: &mut OutputWriter<W>,
) -> Result<RenderStats, AppError> {
    let frame = decode_file(path)?;
    let mut stats = RenderStats::new();
    let encoded = renderer.render(&frame, term, &mut stats);
    out.write_frame(&encoded, &mut stats)?;
    Ok(stats)
}

/// Continuous capture-render-write loop for one window.
#[derive(Debug)]
pub struct WindowSession<C, S, W: Write> {
    capturer: C,
    renderer: FrameRenderer,
    sizes: S,
    out: OutputWriter<W>,
    stats: RenderStats,
    counter: FrameCounter,
}

impl<C, S, W> WindowSession<C, S, W>
where
    C: ScreenCapturer,
    S: TermSizeSource,
    W: Write,
{
    pub fn new(capturer: C, renderer: FrameRenderer, sizes: S, out: OutputWriter<W>) -> Self {
        Self {
            capturer,
            renderer,
            sizes,
            out,
            stats: RenderStats::new(),
            counter: FrameCounter::new(Instant::now()),
        }
    }

    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    pub fn output(&self) -> &OutputWriter<W> {
        &self.out
    }

    /// Run one iteration: home cursor, capture, render, write, sample fps.
    ///
    /// # Errors
    /// Returns the first capture or write failure.
    pub fn step(&mut self) -> Result<(), AppError> {
        let frame = self.capturer.capture()?;
        let term = self.sizes.term_size();

        self.out.home_cursor()?;
        let encoded = self.renderer.render(&frame, term, &mut self.stats);
        self.out.write_frame(&encoded, &mut self.stats)?;

        // Only the info bar shows the rate, so only count when it is drawn.
        if self.renderer.config().info_bar {
            if let Some(sample) = self.counter.tick(Instant::now()) {
                self.stats.fps.update(sample);
            }
        }
        Ok(())
    }

    /// Loop until a capture or write fails.
    ///
    /// # Errors
    /// Returns the error that ended the loop.
    pub fn run(&mut self) -> Result<(), AppError> {
        log::info!("starting live capture ({})", self.renderer.mode());
        loop {
            self.step()?;
        }
    }
}
