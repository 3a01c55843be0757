//! Terminal geometry.

/// Fallback used when the output is not a terminal.
pub const FALLBACK_SIZE: TermSize = TermSize { cols: 80, rows: 24 };

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub cols: u16,
    pub rows: u16,
}

impl Default for TermSize {
    fn default() -> Self {
        FALLBACK_SIZE
    }
}

impl TermSize {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Query the controlling terminal, falling back to 80x24.
    pub fn current() -> Self {
        match crossterm::terminal::size() {
            Ok((cols, rows)) => Self { cols, rows },
            Err(e) => {
                log::debug!("terminal size unavailable ({e}), using {FALLBACK_SIZE:?}");
                FALLBACK_SIZE
            }
        }
    }
}

/// Source of terminal geometry, queried once per frame.
pub trait TermSizeSource {
    fn term_size(&mut self) -> TermSize;
}

/// Reads the real terminal on every call so live resizes are picked up.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermSize;

impl TermSizeSource for CrosstermSize {
    fn term_size(&mut self) -> TermSize {
        TermSize::current()
    }
}

impl TermSizeSource for TermSize {
    fn term_size(&mut self) -> TermSize {
        *self
    }
}
