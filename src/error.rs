//! Top-level error type returned by the session drivers.

use crate::capture::CaptureError;
use crate::config::ConfigError;

/// Every error that ends the process with exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("Failed to write to terminal: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to install Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_error_is_transparent() {
        let err = AppError::from(CaptureError::WindowNotFound {
            title: "Paint".to_string(),
        });
        assert_eq!(err.to_string(), "Window 'Paint' not found.");
    }

    #[test]
    fn test_output_error_message() {
        let err = AppError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert_eq!(err.to_string(), "Failed to write to terminal: pipe closed");
    }
}
