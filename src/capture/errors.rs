//! Error types for decode and capture operations.

use std::path::PathBuf;

/// Errors that can occur while obtaining a frame.
///
/// All of these are fatal to the session; nothing retries.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// Image file missing, unreadable or in an unsupported format
    #[error("Failed to load image '{}': {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    /// No window with the requested title
    #[error("Window '{title}' not found.")]
    WindowNotFound { title: String },

    /// Window exists but has a non-positive size (e.g. minimized)
    #[error("Window '{title}' has an invalid size {width}x{height}.")]
    EmptyWindow { title: String, width: i64, height: i64 },

    /// An external capture tool is not installed
    #[error("'{tool}' not found. {hint}")]
    ToolNotFound { tool: &'static str, hint: &'static str },

    /// An external capture tool ran but failed
    #[error("{tool} failed: {message}")]
    ToolFailed { tool: &'static str, message: String },

    /// The captured bytes could not be decoded
    #[error("Failed to decode captured frame: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Capture I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No backend exists for this platform
    #[error("Window capture is not supported on this platform")]
    Unsupported,
}
