use std::str::FromStr;

use crate::color::yuv::{DECODE_YUV, ENCODE_YUV, project};
use crate::foundation::error::{PixfmtError, PixfmtResult};
use crate::foundation::math::clamp_unit;

/// Scalar type of a color channel.
pub type ColorReal = f32;

/// Straight (non-premultiplied) floating-point RGBA color.
///
/// The nominal channel range is `[0, 1]`; values outside it are allowed in flight and are
/// clamped before packing.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: ColorReal,
    /// Green channel.
    pub g: ColorReal,
    /// Blue channel.
    pub b: ColorReal,
    /// Alpha channel (`1.0` is opaque).
    pub a: ColorReal,
}

impl Color {
    /// Byte size of the raw in-memory form (see [`Color::to_raw_bytes`]).
    pub const RAW_SIZE: usize = 4 * std::mem::size_of::<ColorReal>();

    /// Alpha at or below this is treated as fully transparent when demultiplying.
    pub const EPSILON: ColorReal = 1.0e-6;

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Build a color from all four channels.
    pub const fn new(r: ColorReal, g: ColorReal, b: ColorReal, a: ColorReal) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn rgb(r: ColorReal, g: ColorReal, b: ColorReal) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Every channel clamped into `[0, 1]` (NaN becomes `0`).
    pub fn clamped(self) -> Self {
        Self::new(
            clamp_unit(self.r),
            clamp_unit(self.g),
            clamp_unit(self.b),
            clamp_unit(self.a),
        )
    }

    /// Color channels multiplied by alpha.
    pub fn premult_alpha(self) -> Self {
        Self::new(self.r * self.a, self.g * self.a, self.b * self.a, self.a)
    }

    /// Color channels divided by alpha.
    ///
    /// When alpha is at or below [`Color::EPSILON`] the color channels are returned as they
    /// are; for premultiplied input they are already (close to) zero.
    pub fn demult_alpha(self) -> Self {
        if self.a <= Self::EPSILON {
            return self;
        }
        let inv = 1.0 / self.a;
        Self::new(self.r * inv, self.g * inv, self.b * inv, self.a)
    }

    /// Luma (BT.601).
    pub fn get_y(&self) -> ColorReal {
        project(&ENCODE_YUV, [self.r, self.g, self.b])[0]
    }

    /// Blue-difference chroma.
    pub fn get_u(&self) -> ColorReal {
        project(&ENCODE_YUV, [self.r, self.g, self.b])[1]
    }

    /// Red-difference chroma.
    pub fn get_v(&self) -> ColorReal {
        project(&ENCODE_YUV, [self.r, self.g, self.b])[2]
    }

    /// Replace the color channels from YUV, keeping alpha.
    pub fn set_yuv(&mut self, y: ColorReal, u: ColorReal, v: ColorReal) {
        let [r, g, b] = project(&DECODE_YUV, [y, u, v]);
        self.r = r;
        self.g = g;
        self.b = b;
    }

    /// Raw in-memory form: R, G, B, A as little-endian IEEE-754 `f32`.
    ///
    /// This layout is what raw pixel formats store verbatim, so it must stay stable.
    pub fn to_raw_bytes(&self) -> [u8; Self::RAW_SIZE] {
        let mut out = [0u8; Self::RAW_SIZE];
        for (dst, v) in out.chunks_exact_mut(4).zip([self.r, self.g, self.b, self.a]) {
            dst.copy_from_slice(&v.to_le_bytes());
        }
        out
    }

    /// Inverse of [`Color::to_raw_bytes`]; bit-exact, NaN payloads included.
    pub fn from_raw_bytes(bytes: [u8; Self::RAW_SIZE]) -> Self {
        let mut ch = [0.0; 4];
        for (v, src) in ch.iter_mut().zip(bytes.chunks_exact(4)) {
            *v = ColorReal::from_le_bytes([src[0], src[1], src[2], src[3]]);
        }
        Self::new(ch[0], ch[1], ch[2], ch[3])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Parses `r,g,b` or `r,g,b,a` (alpha defaults to `1`).
impl FromStr for Color {
    type Err = PixfmtError;

    fn from_str(s: &str) -> PixfmtResult<Self> {
        let parts = s
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<ColorReal>()
                    .map_err(|e| PixfmtError::parse(format!("color component '{p}': {e}")))
            })
            .collect::<PixfmtResult<Vec<_>>>()?;

        match parts.as_slice() {
            [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Self::new(*r, *g, *b, *a)),
            _ => Err(PixfmtError::parse(format!(
                "color '{s}' must have 3 or 4 comma-separated components"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/model.rs"]
mod tests;
