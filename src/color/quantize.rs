//! RGB to palette index quantizers.

/// Map an RGB triple onto the 6x6x6 cube of the 256-color palette.
///
/// Each channel is divided by 51, giving levels 0-5, and the result is
/// `16 + 36*r + 6*g + b`. Always in `16..=231`.
#[inline]
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    16 + 36 * (r / 51) + 6 * (g / 51) + b / 51
}

/// Map an RGB triple onto the 16-color palette.
///
/// Bits 0-2 are set for channels above 128 (red, green, blue), bit 3 when the
/// channel sum exceeds 384.
#[inline]
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let mut idx = 0;
    if r > 128 {
        idx |= 1;
    }
    if g > 128 {
        idx |= 2;
    }
    if b > 128 {
        idx |= 4;
    }
    if u16::from(r) + u16::from(g) + u16::from(b) > 384 {
        idx |= 8;
    }
    idx
}
