//! Single-pixel encode/decode between [`Color`] and packed bytes.
//!
//! Both directions walk the same [`PixelLayout`], so byte order rules live only in
//! [`PixelFormat::layout`]. Encoding applies the forward [`Gamma`]; decoding does not apply an
//! inverse, and depth bytes are skipped in both directions.

use crate::{
    color::{gamma::Gamma, model::Color, yuv::LUMA_WEIGHTS},
    foundation::{
        error::{PixfmtError, PixfmtResult},
        math::{alpha_to_u8, high_byte, luma_u8, premul_u16, unit_from_u8},
    },
    pixel::{
        format::PixelFormat,
        layout::{PixelLayout, Slot},
    },
};

/// Encode `color` into `dst` starting at `offset`; returns the offset just past the pixel.
///
/// The color is not clamped here beyond alpha quantization and the gamma mapping; batch
/// helpers clamp first.
///
/// # Panics
///
/// Panics if `dst` has fewer than `format.channel_count()` bytes after `offset`. Use
/// [`try_encode`] for a checked variant.
pub fn encode(
    color: &Color,
    format: PixelFormat,
    gamma: &Gamma,
    dst: &mut [u8],
    offset: usize,
) -> usize {
    encode_with_layout(color, format, &format.layout(), gamma, dst, offset)
}

/// Like [`encode`], but reports a short buffer instead of panicking.
pub fn try_encode(
    color: &Color,
    format: PixelFormat,
    gamma: &Gamma,
    dst: &mut [u8],
    offset: usize,
) -> PixfmtResult<usize> {
    let layout = format.layout();
    let available = dst.len().saturating_sub(offset);
    if available < layout.len() {
        return Err(PixfmtError::buffer_too_small(layout.len(), available));
    }
    Ok(encode_with_layout(color, format, &layout, gamma, dst, offset))
}

pub(crate) fn encode_with_layout(
    color: &Color,
    format: PixelFormat,
    layout: &PixelLayout,
    gamma: &Gamma,
    dst: &mut [u8],
    offset: usize,
) -> usize {
    let end = offset + layout.len();
    let out = &mut dst[offset..end];

    let slots = match layout {
        PixelLayout::Raw => {
            out.copy_from_slice(&color.to_raw_bytes());
            return end;
        }
        PixelLayout::Packed(slots) => slots,
    };

    let mut alpha = alpha_to_u8(color.a);
    if format.is_alpha_inverted() {
        alpha = 255 - alpha;
    }

    let mut r = gamma.r_to_u16(color.r);
    let mut g = gamma.g_to_u16(color.g);
    let mut b = gamma.b_to_u16(color.b);
    if format.is_premultiplied() {
        // Uses the stored (possibly inverted) alpha byte.
        r = premul_u16(r, alpha);
        g = premul_u16(g, alpha);
        b = premul_u16(b, alpha);
    }

    for (byte, slot) in out.iter_mut().zip(slots.iter()) {
        match slot {
            Slot::Alpha => *byte = alpha,
            Slot::Depth => {}
            Slot::Red => *byte = high_byte(r),
            Slot::Green => *byte = high_byte(g),
            Slot::Blue => *byte = high_byte(b),
            Slot::Luma => *byte = luma_u8(r, g, b, LUMA_WEIGHTS),
        }
    }
    end
}

/// Decode one pixel at `offset`; returns the color and the offset just past the pixel.
///
/// Formats without an alpha byte decode to opaque colors.
///
/// # Panics
///
/// Panics if `src` has fewer than `format.channel_count()` bytes after `offset`.
pub fn decode(format: PixelFormat, src: &[u8], offset: usize) -> (Color, usize) {
    let mut color = decode_seed(format);
    let next = decode_into(format, src, offset, &mut color);
    (color, next)
}

/// Decode one pixel at `offset` into an existing color; returns the offset just past it.
///
/// Channels the format does not store (alpha, for formats without it) keep their current
/// value; alpha inversion applies to whatever alpha the color ends up with.
///
/// # Panics
///
/// Panics if `src` has fewer than `format.channel_count()` bytes after `offset`.
pub fn decode_into(format: PixelFormat, src: &[u8], offset: usize, color: &mut Color) -> usize {
    decode_with_layout(format, &format.layout(), src, offset, color)
}

/// Starting color for [`decode`]: opaque black, with alpha pre-flipped when an inverted
/// format carries no alpha byte so the result still comes out opaque.
pub(crate) fn decode_seed(format: PixelFormat) -> Color {
    if !format.has_alpha() && format.is_alpha_inverted() {
        Color::new(0.0, 0.0, 0.0, 0.0)
    } else {
        Color::BLACK
    }
}

pub(crate) fn decode_with_layout(
    format: PixelFormat,
    layout: &PixelLayout,
    src: &[u8],
    offset: usize,
    color: &mut Color,
) -> usize {
    let end = offset + layout.len();
    let input = &src[offset..end];

    let slots = match layout {
        PixelLayout::Raw => {
            let mut raw = [0u8; Color::RAW_SIZE];
            raw.copy_from_slice(input);
            *color = Color::from_raw_bytes(raw);
            return end;
        }
        PixelLayout::Packed(slots) => slots,
    };

    for (&byte, slot) in input.iter().zip(slots.iter()) {
        let v = unit_from_u8(byte);
        match slot {
            Slot::Alpha => color.a = v,
            Slot::Depth => {}
            Slot::Red => color.r = v,
            Slot::Green => color.g = v,
            Slot::Blue => color.b = v,
            Slot::Luma => color.set_yuv(v, 0.0, 0.0),
        }
    }

    if format.is_alpha_inverted() {
        color.a = 1.0 - color.a;
    }
    if format.is_premultiplied() {
        *color = color.demult_alpha();
    }
    end
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/codec.rs"]
mod tests;
