//! Per-pixel compositing primitives over premultiplied RGBA8.

use crate::foundation::math::mul_div255_u8;

/// One premultiplied RGBA8 pixel in memory order.
pub type PremulRgba8 = [u8; 4];

/// Source-over: `out = src + dst * (1 - src.a)`.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Destination-in: `out = dst * src_alpha`.
///
/// Keeps the destination only where the source is opaque; callers are
/// responsible for applying it to *every* destination pixel, including
/// those the source never covers (where `src_alpha` is 0).
pub fn dest_in(dst: PremulRgba8, src_alpha: u8) -> PremulRgba8 {
    if src_alpha == 255 {
        return dst;
    }
    if src_alpha == 0 {
        return [0; 4];
    }

    let a = u16::from(src_alpha);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = mul_div255_u8(u16::from(dst[i]), a);
    }
    out
}
