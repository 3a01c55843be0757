//! Image file decoding.

use std::path::Path;

use super::errors::CaptureError;
use crate::frame::RasterFrame;

/// Decode an image file of any supported format into an RGBA frame.
///
/// # Errors
/// Returns [`CaptureError::ImageLoad`] if the file is missing, unreadable
/// or not a supported image format.
pub fn decode_file(path: &Path) -> Result<RasterFrame, CaptureError> {
    let image = image::open(path).map_err(|source| CaptureError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("decoded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(RasterFrame::from(image.into_rgba8()))
}

/// Decode an in-memory encoded image (e.g. PNG from a capture tool).
///
/// # Errors
/// Returns [`CaptureError::Decode`] if the bytes are not a supported image.
pub fn decode_bytes(bytes: &[u8]) -> Result<RasterFrame, CaptureError> {
    let image = image::load_from_memory(bytes)?;
    Ok(RasterFrame::from(image.into_rgba8()))
}
