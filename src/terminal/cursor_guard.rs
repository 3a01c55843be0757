//! Cursor hiding for live rendering, with cleanup on drop, panic and Ctrl+C.

use crossterm::cursor::{Hide, Show};
use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::render::RESET;

/// Static flag to track if the cursor is hidden (for panic and Ctrl+C handlers)
pub(crate) static CURSOR_HIDDEN: AtomicBool = AtomicBool::new(false);

/// Guard that hides the cursor and restores it, with colors reset, on drop.
#[derive(Debug)]
pub struct CursorGuard {
    active: bool,
}

impl CursorGuard {
    /// Hide the cursor and return a guard that will show it again.
    ///
    /// # Errors
    /// Returns an error if writing to stdout fails.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        crossterm::execute!(io::stdout(), Hide)?;
        CURSOR_HIDDEN.store(true, Ordering::SeqCst);
        Ok(Self { active: true })
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            restore();
        }
    }
}

/// Reset colors and show the cursor if a guard hid it.
pub(crate) fn restore() {
    if CURSOR_HIDDEN.swap(false, Ordering::SeqCst) {
        let mut stdout = io::stdout();
        // Best-effort cleanup
        let _ = stdout.write_all(RESET.as_bytes());
        let _ = crossterm::execute!(stdout, Show);
    }
}

/// Install a panic hook that restores the terminal before panicking.
pub(crate) fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore();
        original_hook(panic_info);
    }));
}

/// Set up the Ctrl+C handler: restore the terminal and exit with 130.
///
/// This should be called once at program startup.
pub fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        restore();
        let _ = io::stdout().write_all(b"\n");
        std::process::exit(130);
    })
}
