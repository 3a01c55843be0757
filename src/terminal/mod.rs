//! Terminal geometry and cursor management.

mod cursor_guard;
mod size;

pub use cursor_guard::{setup_ctrlc_handler, CursorGuard};
pub use size::{CrosstermSize, TermSize, TermSizeSource, FALLBACK_SIZE};
