//! Window capture backends.
//!
//! Each platform drives its native tooling through `std::process::Command`
//! and decodes the resulting PNG:
//! - Linux (X11): `xwininfo` for bounds, `ffmpeg -f x11grab` for pixels
//! - Windows: `ffmpeg -f gdigrab` addressed by window title
//! - macOS: `osascript` for bounds, `screencapture -R` for pixels

use std::io;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

use super::decode::decode_bytes;
use super::errors::CaptureError;
use crate::frame::RasterFrame;

/// Produces one frame per call from some live source.
pub trait ScreenCapturer {
    /// Capture the current contents of the source.
    ///
    /// # Errors
    /// Any failure is fatal to the live session.
    fn capture(&mut self) -> Result<RasterFrame, CaptureError>;
}

impl<C: ScreenCapturer + ?Sized> ScreenCapturer for Box<C> {
    fn capture(&mut self) -> Result<RasterFrame, CaptureError> {
        (**self).capture()
    }
}

/// Which window to capture, and whether to composite the mouse cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTarget {
    pub title: String,
    pub draw_cursor: bool,
}

impl WindowTarget {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            draw_cursor: false,
        }
    }

    pub fn with_cursor(mut self, draw_cursor: bool) -> Self {
        self.draw_cursor = draw_cursor;
        self
    }
}

/// Window position and size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl WindowBounds {
    /// Reject windows with a non-positive size.
    pub fn validate(self, title: &str) -> Result<Self, CaptureError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(CaptureError::EmptyWindow {
                title: title.to_string(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Parse the geometry lines of `xwininfo` output.
pub fn parse_xwininfo(stdout: &str) -> Option<WindowBounds> {
    let field = |label: &str| -> Option<i64> {
        stdout
            .lines()
            .find_map(|line| line.trim().strip_prefix(label))
            .and_then(|value| value.trim().parse().ok())
    };

    Some(WindowBounds {
        x: field("Absolute upper-left X:")?,
        y: field("Absolute upper-left Y:")?,
        width: field("Width:")?,
        height: field("Height:")?,
    })
}

/// Parse `x,y,width,height` as printed by the bounds AppleScript.
pub fn parse_bounds_csv(text: &str) -> Option<WindowBounds> {
    let parts: Vec<i64> = text
        .trim()
        .split(',')
        .map(|part| part.trim().parse().ok())
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        &[x, y, width, height] => Some(WindowBounds { x, y, width, height }),
        _ => None,
    }
}

/// Quote a string for embedding in an AppleScript string literal.
pub fn applescript_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Common ffmpeg arguments: grab one frame and emit it as PNG on stdout.
fn ffmpeg_single_png_args() -> [&'static str; 7] {
    ["-frames:v", "1", "-f", "image2pipe", "-vcodec", "png", "-"]
}

/// Run an external tool, mapping a missing binary to `ToolNotFound` and a
/// non-zero exit to `ToolFailed`.
fn run_tool(
    command: &mut Command,
    tool: &'static str,
    hint: &'static str,
) -> Result<Output, CaptureError> {
    let output = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CaptureError::ToolNotFound { tool, hint },
            _ => CaptureError::Io(e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::debug!("{tool} exited with {}: {stderr}", output.status);
        return Err(CaptureError::ToolFailed {
            tool,
            message: if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            },
        });
    }
    Ok(output)
}

/// Turn a tool failure whose stderr contains `marker` into `WindowNotFound`.
/// Any other error passes through unchanged.
fn missing_window(err: CaptureError, marker: &str, title: &str) -> CaptureError {
    match err {
        CaptureError::ToolFailed { ref message, .. } if message.contains(marker) => {
            CaptureError::WindowNotFound {
                title: title.to_string(),
            }
        }
        other => other,
    }
}

const FFMPEG_HINT: &str = "Install FFmpeg and make sure it is on PATH.";

/// stderr marker printed by `xwininfo -name` for an unknown title.
const XWININFO_NO_WINDOW: &str = "No window with name";

/// stderr marker printed by `ffmpeg -f gdigrab` for an unknown title.
const GDIGRAB_NO_WINDOW: &str = "Can't find window";

/// X11 backend: `xwininfo` + `ffmpeg -f x11grab`.
#[derive(Debug, Clone)]
pub struct X11Capturer {
    target: WindowTarget,
    display: String,
}

impl X11Capturer {
    pub fn new(target: WindowTarget) -> Self {
        let display = std::env::var("DISPLAY").unwrap_or_else(|_| ":0".to_string());
        Self { target, display }
    }

    fn bounds(&self) -> Result<WindowBounds, CaptureError> {
        let output = run_tool(
            Command::new("xwininfo").args(["-name", self.target.title.as_str()]),
            "xwininfo",
            "Install x11-utils (xwininfo).",
        )
        .map_err(|e| missing_window(e, XWININFO_NO_WINDOW, &self.target.title))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_xwininfo(&stdout)
            .ok_or_else(|| CaptureError::ToolFailed {
                tool: "xwininfo",
                message: "unexpected output".to_string(),
            })?
            .validate(&self.target.title)
    }

    /// ffmpeg arguments for grabbing `bounds` from this display.
    pub fn ffmpeg_args(&self, bounds: WindowBounds) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "-loglevel".into(),
            "error".into(),
            "-f".into(),
            "x11grab".into(),
            "-draw_mouse".into(),
            u8::from(self.target.draw_cursor).to_string(),
            "-video_size".into(),
            format!("{}x{}", bounds.width, bounds.height),
            "-i".into(),
            format!("{}+{},{}", self.display, bounds.x, bounds.y),
        ];
        args.extend(ffmpeg_single_png_args().map(String::from));
        args
    }
}

impl ScreenCapturer for X11Capturer {
    fn capture(&mut self) -> Result<RasterFrame, CaptureError> {
        let bounds = self.bounds()?;
        let output = run_tool(
            Command::new("ffmpeg").args(self.ffmpeg_args(bounds)),
            "ffmpeg",
            FFMPEG_HINT,
        )?;
        decode_bytes(&output.stdout)
    }
}

/// Windows backend: `ffmpeg -f gdigrab -i title=...`.
#[derive(Debug, Clone)]
pub struct GdiCapturer {
    target: WindowTarget,
}

impl GdiCapturer {
    pub fn new(target: WindowTarget) -> Self {
        Self { target }
    }

    pub fn ffmpeg_args(&self) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "-loglevel".into(),
            "error".into(),
            "-f".into(),
            "gdigrab".into(),
            "-draw_mouse".into(),
            u8::from(self.target.draw_cursor).to_string(),
            "-i".into(),
            format!("title={}", self.target.title),
        ];
        args.extend(ffmpeg_single_png_args().map(String::from));
        args
    }
}

impl ScreenCapturer for GdiCapturer {
    fn capture(&mut self) -> Result<RasterFrame, CaptureError> {
        let output = run_tool(
            Command::new("ffmpeg").args(self.ffmpeg_args()),
            "ffmpeg",
            FFMPEG_HINT,
        )
        .map_err(|e| missing_window(e, GDIGRAB_NO_WINDOW, &self.target.title))?;
        decode_bytes(&output.stdout)
    }
}

/// macOS backend: `osascript` for bounds + `screencapture -R`.
#[derive(Debug, Clone)]
pub struct MacCapturer {
    target: WindowTarget,
}

impl MacCapturer {
    pub fn new(target: WindowTarget) -> Self {
        Self { target }
    }

    fn bounds_script(&self) -> String {
        format!(
            r#"
            tell application "System Events"
                repeat with p in (every process whose background only is false)
                    repeat with w in (every window of p)
                        if name of w is {title} then
                            set {{x, y}} to position of w
                            set {{wd, ht}} to size of w
                            return (x as string) & "," & (y as string) & "," & (wd as string) & "," & (ht as string)
                        end if
                    end repeat
                end repeat
            end tell
            return "ERROR:NOT_FOUND"
            "#,
            title = applescript_quote(&self.target.title)
        )
    }

    fn bounds(&self) -> Result<WindowBounds, CaptureError> {
        let output = run_tool(
            Command::new("osascript").args(["-e", self.bounds_script().as_str()]),
            "osascript",
            "osascript ships with macOS; check Accessibility permission.",
        )?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().starts_with("ERROR:") {
            return Err(CaptureError::WindowNotFound {
                title: self.target.title.clone(),
            });
        }
        parse_bounds_csv(&stdout)
            .ok_or_else(|| CaptureError::ToolFailed {
                tool: "osascript",
                message: format!("unexpected output: {}", stdout.trim()),
            })?
            .validate(&self.target.title)
    }
}

impl ScreenCapturer for MacCapturer {
    fn capture(&mut self) -> Result<RasterFrame, CaptureError> {
        let b = self.bounds()?;
        let scratch = scratch_png()?;

        let mut command = Command::new("screencapture");
        command.arg("-x");
        if self.target.draw_cursor {
            command.arg("-C");
        }
        command
            .arg("-R")
            .arg(format!("{},{},{},{}", b.x, b.y, b.width, b.height))
            .args(["-t", "png"])
            .arg(scratch.path());
        run_tool(
            &mut command,
            "screencapture",
            "screencapture ships with macOS; check Screen Recording permission.",
        )?;

        read_scratch(scratch)
    }
}

/// Fresh uniquely named PNG file for `screencapture` to write into.
fn scratch_png() -> io::Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix("blockview-")
        .suffix(".png")
        .tempfile()
}

/// Decode the captured PNG. The file is removed when `scratch` drops, on
/// success and on every error path.
fn read_scratch(scratch: NamedTempFile) -> Result<RasterFrame, CaptureError> {
    let bytes = std::fs::read(scratch.path())?;
    decode_bytes(&bytes)
}

/// The capture backend for the platform this binary was built for.
///
/// # Errors
/// Returns [`CaptureError::Unsupported`] on platforms without a backend.
pub fn platform_capturer(target: WindowTarget) -> Result<Box<dyn ScreenCapturer>, CaptureError> {
    if cfg!(target_os = "windows") {
        log::info!("using gdigrab capture backend");
        Ok(Box::new(GdiCapturer::new(target)))
    } else if cfg!(target_os = "macos") {
        log::info!("using screencapture backend");
        Ok(Box::new(MacCapturer::new(target)))
    } else if cfg!(unix) {
        log::info!("using x11grab capture backend");
        Ok(Box::new(X11Capturer::new(target)))
    } else {
        Err(CaptureError::Unsupported)
    }
}
