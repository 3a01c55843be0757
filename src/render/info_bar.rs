//! Single-line stats banner drawn above the image.

use std::fmt::Write as _;

use super::run_encoder::RESET;
use super::stats::RenderStats;
use crate::color::ColorMode;

/// Reset, red background, black foreground.
pub const PROLOGUE: &str = "\x1b[0m\x1b[41m\x1b[30m";

/// Format the banner text (without styling or padding): frame rates, render
/// and write times in milliseconds, source resolution and color mode.
pub fn format(stats: &RenderStats, mode: ColorMode) -> String {
    format!(
        " FPS: {:.1} | AVG: {:.1} | RENDER FPS: {:.1} | RENDER TIME: {:.2}ms | WRITE TIME: {:.2}ms | RES: {}x{} | MODE: {} ",
        stats.fps.last(),
        stats.fps.average(),
        stats.render_only_fps,
        stats.last_render_ms(),
        stats.last_write_ms(),
        stats.source_width,
        stats.source_height,
        mode,
    )
}

/// Append the styled banner, left-aligned and padded to `width` columns,
/// followed by a reset and newline. Text longer than `width` is not cut.
pub fn compose_into(out: &mut String, stats: &RenderStats, mode: ColorMode, width: u16) {
    out.push_str(PROLOGUE);
    let _ = write!(out, "{:<width$}", format(stats, mode), width = width as usize);
    out.push_str(RESET);
    out.push('\n');
}
