use crate::foundation::error::{PixfmtError, PixfmtResult};
use crate::foundation::math::{clamp_unit, unit_to_u16};

/// Per-channel forward gamma: linear `f32` → 16-bit intensity.
///
/// Each channel maps `x` to `round(clamp(x, 0, 1)^exponent * 65535)`. Gamma is an encode-only
/// concern: decoding never applies the inverse mapping.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "GammaDef")]
pub struct Gamma {
    r: f32,
    g: f32,
    b: f32,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct GammaDef {
    r: f32,
    g: f32,
    b: f32,
}

impl TryFrom<GammaDef> for Gamma {
    type Error = PixfmtError;

    fn try_from(def: GammaDef) -> PixfmtResult<Self> {
        Self::new(def.r, def.g, def.b)
    }
}

impl Gamma {
    /// Identity mapping.
    pub const NONE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Create a validated gamma; every exponent must be finite and `> 0`.
    pub fn new(r: f32, g: f32, b: f32) -> PixfmtResult<Self> {
        for (name, v) in [("r", r), ("g", g), ("b", b)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(PixfmtError::validation(format!(
                    "gamma exponent '{name}' must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(Self { r, g, b })
    }

    /// Same exponent on all three channels.
    pub fn uniform(exponent: f32) -> PixfmtResult<Self> {
        Self::new(exponent, exponent, exponent)
    }

    /// Exponents as `[r, g, b]`.
    pub fn exponents(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Return `true` when every channel is the identity mapping.
    pub fn is_identity(&self) -> bool {
        *self == Self::NONE
    }

    /// Red forward mapping.
    pub fn r_to_u16(&self, x: f32) -> u16 {
        apply(x, self.r)
    }

    /// Green forward mapping.
    pub fn g_to_u16(&self, x: f32) -> u16 {
        apply(x, self.g)
    }

    /// Blue forward mapping.
    pub fn b_to_u16(&self, x: f32) -> u16 {
        apply(x, self.b)
    }
}

impl Default for Gamma {
    fn default() -> Self {
        Self::NONE
    }
}

fn apply(x: f32, exponent: f32) -> u16 {
    let x = clamp_unit(x);
    if exponent == 1.0 {
        unit_to_u16(x)
    } else {
        unit_to_u16(x.powf(exponent))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/gamma.rs"]
mod tests;
