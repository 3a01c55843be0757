//! Run-length encoder for one character row of half-block cells.
//!
//! Each cell packs two vertical source pixels: the top pixel becomes the
//! foreground of an upper half block, the bottom pixel its background.
//! Escape codes are only emitted when the `(fg, bg)` pair changes, and
//! consecutive cells with the same pair collapse into one glyph run.

use std::fmt::Write as _;

use crate::color::ColorMode;

/// Upper half block (U+2580).
pub const HALF_BLOCK: char = '\u{2580}';

/// Full SGR reset.
pub const RESET: &str = "\x1b[0m";

/// Stateful scan over the cells of a single character row.
///
/// Create one per row, [`push`](Self::push) every cell left to right, then
/// call [`finish`](Self::finish) to flush the pending run.
#[derive(Debug)]
pub struct RunEncoder<'a> {
    mode: ColorMode,
    out: &'a mut String,
    last: Option<(u32, u32)>,
    run: usize,
    color_changes: usize,
}

impl<'a> RunEncoder<'a> {
    pub fn new(mode: ColorMode, out: &'a mut String) -> Self {
        Self {
            mode,
            out,
            last: None,
            run: 0,
            color_changes: 0,
        }
    }

    /// Feed one cell: `top` and `bottom` are RGBA pixels, alpha ignored.
    #[inline]
    pub fn push(&mut self, top: &[u8; 4], bottom: &[u8; 4]) {
        let fg = self.mode.key(top[0], top[1], top[2]);
        let bg = self.mode.key(bottom[0], bottom[1], bottom[2]);

        if self.last == Some((fg, bg)) {
            self.run += 1;
            return;
        }

        self.flush_run();
        write_colors(self.mode, fg, bg, self.out);
        self.color_changes += 1;
        self.last = Some((fg, bg));
        self.run = 1;
    }

    /// Flush the pending run and return the number of color pairs emitted.
    pub fn finish(mut self) -> usize {
        self.flush_run();
        self.color_changes
    }

    fn flush_run(&mut self) {
        self.out.extend(std::iter::repeat(HALF_BLOCK).take(self.run));
        self.run = 0;
    }
}

/// Encode a whole row from two RGBA scanlines.
///
/// Only the cells both scanlines cover are encoded: the row is cut to the
/// shorter input, and a trailing partial pixel is ignored.
///
/// Returns the number of color pairs emitted.
pub fn encode_row(mode: ColorMode, top: &[u8], bottom: &[u8], out: &mut String) -> usize {
    let len = top.len().min(bottom.len());
    let mut encoder = RunEncoder::new(mode, out);
    for (t, b) in pixels(&top[..len]).zip(pixels(&bottom[..len])) {
        encoder.push(t, b);
    }
    encoder.finish()
}

fn pixels(scanline: &[u8]) -> impl Iterator<Item = &[u8; 4]> {
    scanline
        .chunks_exact(4)
        .filter_map(|chunk| <&[u8; 4]>::try_from(chunk).ok())
}

/// Emit the foreground and background set codes for a color key pair.
fn write_colors(mode: ColorMode, fg: u32, bg: u32, out: &mut String) {
    // Writing into a String cannot fail.
    let _ = match mode {
        ColorMode::TrueColor => write!(
            out,
            "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m",
            fg >> 16,
            (fg >> 8) & 0xff,
            fg & 0xff,
            bg >> 16,
            (bg >> 8) & 0xff,
            bg & 0xff
        ),
        ColorMode::Ansi256 => write!(out, "\x1b[38;5;{fg}m\x1b[48;5;{bg}m"),
        ColorMode::Ansi16 => write!(
            out,
            "\x1b[{}{}m\x1b[{}{}m",
            30 + (fg & 7),
            bright_suffix(fg),
            40 + (bg & 7),
            bright_suffix(bg)
        ),
    };
}

fn bright_suffix(index: u32) -> &'static str {
    if index & 8 != 0 {
        ";1"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn scanline(pixels: &[[u8; 4]]) -> Vec<u8> {
        pixels.iter().flatten().copied().collect()
    }

    fn glyphs(s: &str) -> usize {
        s.chars().filter(|&c| c == HALF_BLOCK).count()
    }

    #[test]
    fn test_uniform_row_single_pair() {
        let row = scanline(&[WHITE; 5]);
        let mut out = String::new();
        let pairs = encode_row(ColorMode::TrueColor, &row, &row, &mut out);
        assert_eq!(pairs, 1);
        assert_eq!(
            out,
            "\x1b[38;2;255;255;255m\x1b[48;2;255;255;255m▀▀▀▀▀"
        );
    }

    #[test]
    fn test_every_column_distinct() {
        let top = scanline(&[RED, BLUE, RED, BLUE]);
        let bottom = scanline(&[WHITE; 4]);
        let mut out = String::new();
        let pairs = encode_row(ColorMode::Ansi256, &top, &bottom, &mut out);
        assert_eq!(pairs, 4);
        assert_eq!(glyphs(&out), 4);
    }

    #[test]
    fn test_glyph_count_equals_width() {
        let top = scanline(&[RED, RED, BLUE, BLUE, BLUE, RED, WHITE]);
        let bottom = scanline(&[RED, BLUE, BLUE, BLUE, BLUE, RED, WHITE]);
        for mode in ColorMode::ALL {
            let mut out = String::new();
            encode_row(mode, &top, &bottom, &mut out);
            assert_eq!(glyphs(&out), 7, "{mode}");
        }
    }

    #[test]
    fn test_background_change_alone_breaks_run() {
        let top = scanline(&[RED, RED]);
        let bottom = scanline(&[RED, BLUE]);
        let mut out = String::new();
        let pairs = encode_row(ColorMode::TrueColor, &top, &bottom, &mut out);
        assert_eq!(pairs, 2);
    }

    #[test]
    fn test_ansi256_codes() {
        let row = scanline(&[WHITE]);
        let mut out = String::new();
        encode_row(ColorMode::Ansi256, &row, &scanline(&[[0, 0, 0, 255]]), &mut out);
        assert_eq!(out, "\x1b[38;5;231m\x1b[48;5;16m▀");
    }

    #[test]
    fn test_ansi16_bright_suffix() {
        let mut out = String::new();
        encode_row(
            ColorMode::Ansi16,
            &scanline(&[WHITE]),
            &scanline(&[RED]),
            &mut out,
        );
        assert_eq!(out, "\x1b[37;1m\x1b[41m▀");
    }

    #[test]
    fn test_quantized_neighbors_share_run() {
        // Different RGB values that quantize to the same 256-color index
        // must not re-emit codes.
        let top = scanline(&[[10, 10, 10, 255], [20, 20, 20, 255], [30, 30, 30, 255]]);
        let mut out = String::new();
        let pairs = encode_row(ColorMode::Ansi256, &top, &top, &mut out);
        assert_eq!(pairs, 1);
        assert_eq!(glyphs(&out), 3);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let top = scanline(&[[1, 2, 3, 0], [1, 2, 3, 255]]);
        let mut out = String::new();
        let pairs = encode_row(ColorMode::TrueColor, &top, &top, &mut out);
        assert_eq!(pairs, 1);
    }

    #[test]
    fn test_push_cells_directly() {
        let mut out = String::new();
        let mut encoder = RunEncoder::new(ColorMode::Ansi256, &mut out);
        encoder.push(&WHITE, &BLUE);
        encoder.push(&WHITE, &BLUE);
        encoder.push(&RED, &BLUE);
        assert_eq!(encoder.finish(), 2);
        assert_eq!(out, "\x1b[38;5;231m\x1b[48;5;21m▀▀\x1b[38;5;196m\x1b[48;5;21m▀");
    }

    #[test]
    fn test_unequal_scanlines_cut_to_shorter() {
        let top = scanline(&[RED; 3]);
        let bottom = scanline(&[BLUE; 2]);
        let mut out = String::new();
        let pairs = encode_row(ColorMode::TrueColor, &top, &bottom, &mut out);
        assert_eq!(pairs, 1);
        assert_eq!(glyphs(&out), 2);

        let mut swapped = String::new();
        encode_row(ColorMode::TrueColor, &bottom, &top, &mut swapped);
        assert_eq!(glyphs(&swapped), 2);
    }

    #[test]
    fn test_partial_trailing_pixel_ignored() {
        let mut top = scanline(&[RED; 2]);
        top.extend_from_slice(&[1, 2]);
        let mut bottom = scanline(&[RED; 2]);
        bottom.extend_from_slice(&[3, 4]);
        let mut out = String::new();
        encode_row(ColorMode::Ansi16, &top, &bottom, &mut out);
        assert_eq!(glyphs(&out), 2);
    }

    #[test]
    fn test_empty_row_emits_nothing() {
        let mut out = String::new();
        assert_eq!(encode_row(ColorMode::TrueColor, &[], &[], &mut out), 0);
        assert!(out.is_empty());
    }
}
