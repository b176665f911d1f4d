//! Fixed-point helpers shared by the pixel codec.
//!
//! All of these are bit-exact reproductions of the packed-layout arithmetic; changing any
//! constant here changes the bytes every format produces.

/// Scale factor used to quantize alpha into a byte (`floor(a * 255.9)`).
pub(crate) const ALPHA_SCALE: f32 = 255.9;

/// Clamp into `[0, 1]`, mapping NaN to `0`.
pub(crate) fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

pub(crate) fn alpha_to_u8(a: f32) -> u8 {
    // `as` truncates toward zero, which is floor for the clamped range.
    (clamp_unit(a) * ALPHA_SCALE) as u8
}

/// Integer premultiplication with the `+1` bias so that a full alpha byte is an identity.
pub(crate) fn premul_u16(c: u16, alpha: u8) -> u16 {
    ((u32::from(c) * (u32::from(alpha) + 1)) >> 8) as u16
}

pub(crate) fn high_byte(c: u16) -> u8 {
    (c >> 8) as u8
}

/// Weighted luma of three 16-bit intensities; weights must sum to 256.
pub(crate) fn luma_u8(r: u16, g: u16, b: u16, weights: [u32; 3]) -> u8 {
    ((u32::from(r) * weights[0] + u32::from(g) * weights[1] + u32::from(b) * weights[2]) >> 16)
        as u8
}

/// Expand a stored byte back into `[0, 1]` (`byte / 255`).
pub(crate) fn unit_from_u8(byte: u8) -> f32 {
    f32::from(byte) / f32::from(u8::MAX)
}

/// Quantize a clamped unit value to 16 bits with round-half-away-from-zero.
pub(crate) fn unit_to_u16(x: f32) -> u16 {
    (clamp_unit(x) * f32::from(u16::MAX)).round() as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
