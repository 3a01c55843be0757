//! CLI argument parsing with clap.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::capture::WindowTarget;
use crate::color::ColorMode;
use crate::config::{Config, OutputPath, RenderConfig};

const MODES_HELP: &str = "Available color mode values:
  - TrueColor
  - Ansi256
  - Ansi16";

/// Render images or a live window as colored half-block text
#[derive(Parser, Debug)]
#[command(name = "blockview")]
#[command(version, about = "Render images and windows in the terminal", long_about = None)]
#[command(after_help = MODES_HELP)]
pub struct Args {
    /// Render an image file once
    #[arg(long, num_args = 2, value_names = ["FILE", "MODE"])]
    pub image: Option<Vec<String>>,

    /// Continuously render a window
    #[arg(long, num_args = 2, value_names = ["TITLE", "MODE"])]
    pub window: Option<Vec<String>>,

    /// Enable mouse cursor rendering
    #[arg(long)]
    pub cursor: bool,

    /// Disable info bar
    #[arg(long)]
    pub no_info: bool,

    /// Disable optimized console writer
    #[arg(long)]
    pub default_print: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

/// What the invocation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Image { path: PathBuf, mode: ColorMode },
    Window { title: String, mode: ColorMode },
}

impl Job {
    pub fn mode(&self) -> ColorMode {
        match self {
            Job::Image { mode, .. } | Job::Window { mode, .. } => *mode,
        }
    }
}

impl Args {
    /// Resolve the requested job. Image mode wins if both are given.
    ///
    /// Returns `Ok(None)` when neither `--image` nor `--window` was passed.
    ///
    /// # Errors
    /// Returns a usage error for an unknown color mode.
    pub fn job(&self) -> Result<Option<Job>, clap::Error> {
        if let Some([file, mode]) = self.image.as_deref() {
            return Ok(Some(Job::Image {
                path: PathBuf::from(file),
                mode: parse_mode(mode)?,
            }));
        }
        if let Some([title, mode]) = self.window.as_deref() {
            return Ok(Some(Job::Window {
                title: title.clone(),
                mode: parse_mode(mode)?,
            }));
        }
        Ok(None)
    }

    /// Merge CLI flags over the config file. Flags can only switch things on
    /// (or the info bar off).
    pub fn render_config(&self, file: &Config, job: &Job) -> RenderConfig {
        RenderConfig {
            info_bar: file.render.info_bar && !self.no_info,
            auto_resize: matches!(job, Job::Window { .. }),
            output_path: if self.default_print || file.render.default_print {
                OutputPath::Buffered
            } else {
                OutputPath::Raw
            },
        }
    }

    pub fn window_target(&self, file: &Config, title: &str) -> WindowTarget {
        WindowTarget::new(title).with_cursor(self.cursor || file.capture.cursor)
    }
}

/// Exit code for a clap error: 0 when it only displays help or the version,
/// 1 for usage errors.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

fn parse_mode(value: &str) -> Result<ColorMode, clap::Error> {
    value.parse().map_err(|e: crate::color::ParseColorModeError| {
        Args::command().error(ErrorKind::InvalidValue, e)
    })
}
