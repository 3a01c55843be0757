//! Frame sources: image files and live window capture.
//!
//! Both are collaborators of the renderer: they only hand over a
//! [`RasterFrame`](crate::frame::RasterFrame) and know nothing about
//! terminals.

mod decode;
mod errors;
mod window;

pub use decode::{decode_bytes, decode_file};
pub use errors::CaptureError;
pub use window::{
    applescript_quote, parse_bounds_csv, parse_xwininfo, platform_capturer, GdiCapturer,
    MacCapturer, ScreenCapturer, WindowBounds, WindowTarget, X11Capturer,
};
