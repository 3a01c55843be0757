//! Delivery of encoded frames to the terminal.

use crossterm::cursor::MoveTo;
use crossterm::QueueableCommand;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use crate::config::OutputPath;
use crate::render::{EncodedFrame, RenderStats};

/// Writes encoded frames to a byte sink and records write time.
///
/// The sink is any [`Write`], so tests can capture output in a `Vec<u8>`.
#[derive(Debug)]
pub struct OutputWriter<W: Write> {
    sink: W,
    path: OutputPath,
}

impl OutputWriter<io::Stdout> {
    /// Writer bound to the process's standard output.
    pub fn stdout(path: OutputPath) -> Self {
        Self::new(io::stdout(), path)
    }
}

impl<W: Write> OutputWriter<W> {
    pub fn new(sink: W, path: OutputPath) -> Self {
        Self { sink, path }
    }

    /// Write one frame and flush, storing the elapsed time in `stats`.
    ///
    /// # Errors
    /// Returns any I/O error from the sink.
    pub fn write_frame(&mut self, frame: &EncodedFrame, stats: &mut RenderStats) -> io::Result<()> {
        let started = Instant::now();

        match self.path {
            OutputPath::Raw => {
                self.sink.write_all(frame.as_bytes())?;
            }
            OutputPath::Buffered => {
                let mut writer = BufWriter::new(&mut self.sink);
                write!(writer, "{}", frame.as_str())?;
                writer.flush()?;
            }
        }
        self.sink.flush()?;

        stats.record_write(started.elapsed());
        Ok(())
    }

    /// Move the cursor to the top-left cell so the next frame repaints in place.
    ///
    /// # Errors
    /// Returns any I/O error from the sink.
    pub fn home_cursor(&mut self) -> io::Result<()> {
        self.sink.queue(MoveTo(0, 0))?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
