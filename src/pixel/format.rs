use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use crate::color::model::Color;
use crate::foundation::error::{PixfmtError, PixfmtResult};

/// Packed byte layout descriptor.
///
/// An immutable set of independent flags, compared by bit pattern. Every layout decision
/// goes through [`PixelFormat::has_all`]; bit values are part of the stable contract.
///
/// ```
/// use pixfmt::PixelFormat;
///
/// let argb = PixelFormat::ALPHA | PixelFormat::ALPHA_START;
/// assert_eq!(argb, PixelFormat::ARGB);
/// assert_eq!(argb.channel_count(), 4);
/// assert_eq!("argb".parse::<PixelFormat>().unwrap(), argb);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PixelFormat(u16);

impl PixelFormat {
    /// Three color channels, nothing else.
    pub const RGB: Self = Self(0);
    /// One luma channel instead of RGB.
    pub const GRAY: Self = Self(1 << 0);
    /// Include an alpha byte.
    pub const ALPHA: Self = Self(1 << 1);
    /// Include a depth byte.
    pub const DEPTH: Self = Self(1 << 2);
    /// Store color channels as B, G, R.
    pub const BGR: Self = Self(1 << 3);
    /// Alpha byte precedes the color bytes.
    pub const ALPHA_START: Self = Self(1 << 4);
    /// Depth byte precedes the color bytes.
    pub const DEPTH_START: Self = Self(1 << 5);
    /// When alpha and depth share a side, depth comes first.
    pub const DEPTH_BEFORE_ALPHA: Self = Self(1 << 6);
    /// Alpha is stored as `255 - alpha`.
    pub const ALPHA_INVERTED: Self = Self(1 << 7);
    /// Reserved: depth stored inverted. Depth content is owned elsewhere.
    pub const DEPTH_INVERTED: Self = Self(1 << 8);
    /// Verbatim copy of the in-memory [`Color`]. Includes the [`ALPHA`](Self::ALPHA) bit.
    pub const RAW: Self = Self((1 << 9) | (1 << 1));
    /// Color channels are stored multiplied by alpha.
    pub const ALPHA_PREMULTIPLIED: Self = Self(1 << 10);

    /// `R G B A`.
    pub const RGBA: Self = Self::ALPHA;
    /// `B G R A`.
    pub const BGRA: Self = Self::BGR.union(Self::ALPHA);
    /// `A R G B`.
    pub const ARGB: Self = Self::ALPHA.union(Self::ALPHA_START);
    /// `A B G R`.
    pub const ABGR: Self = Self::BGR.union(Self::ARGB);
    /// `Y A`.
    pub const GRAY_ALPHA: Self = Self::GRAY.union(Self::ALPHA);
    /// `R G B A` with premultiplied color.
    pub const RGBA_PREMULTIPLIED: Self = Self::ALPHA.union(Self::ALPHA_PREMULTIPLIED);

    const ALL_BITS: u16 = (1 << 11) - 1;

    const FLAG_NAMES: [(Self, &'static str); 10] = [
        (Self::GRAY, "gray"),
        (Self::ALPHA, "alpha"),
        (Self::DEPTH, "depth"),
        (Self::BGR, "bgr"),
        (Self::ALPHA_START, "alpha_start"),
        (Self::DEPTH_START, "depth_start"),
        (Self::DEPTH_BEFORE_ALPHA, "depth_before_alpha"),
        (Self::ALPHA_INVERTED, "alpha_inverted"),
        (Self::DEPTH_INVERTED, "depth_inverted"),
        (Self::ALPHA_PREMULTIPLIED, "premultiplied"),
    ];

    const PRESETS: [(&'static str, Self); 9] = [
        ("rgb", Self::RGB),
        ("rgba", Self::RGBA),
        ("bgr", Self::BGR),
        ("bgra", Self::BGRA),
        ("argb", Self::ARGB),
        ("abgr", Self::ABGR),
        ("gray", Self::GRAY),
        ("gray_alpha", Self::GRAY_ALPHA),
        ("raw", Self::RAW),
    ];

    /// Build from a bit pattern; `None` when unknown bits are set.
    pub const fn from_bits(bits: u16) -> Option<Self> {
        if bits & !Self::ALL_BITS != 0 {
            None
        } else {
            Some(Self(bits))
        }
    }

    /// Underlying bit pattern.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Return `true` when every bit of `mask` is set.
    pub const fn has_all(self, mask: Self) -> bool {
        self.0 & mask.0 == mask.0
    }

    /// Bitwise union, usable in `const` context.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Copy with `mask` set.
    pub const fn with(self, mask: Self) -> Self {
        self.union(mask)
    }

    /// Copy with `mask` cleared.
    pub const fn without(self, mask: Self) -> Self {
        Self(self.0 & !mask.0)
    }

    /// Raw passthrough; all other flags are ignored for layout.
    pub const fn is_raw(self) -> bool {
        self.has_all(Self::RAW)
    }

    /// Single luma channel.
    pub const fn is_gray(self) -> bool {
        self.has_all(Self::GRAY)
    }

    /// Reversed color byte order.
    pub const fn is_bgr(self) -> bool {
        self.has_all(Self::BGR)
    }

    /// Alpha byte present.
    pub const fn has_alpha(self) -> bool {
        self.has_all(Self::ALPHA)
    }

    /// Depth byte present.
    pub const fn has_depth(self) -> bool {
        self.has_all(Self::DEPTH)
    }

    /// Alpha stored as `255 - alpha`.
    pub const fn is_alpha_inverted(self) -> bool {
        self.has_all(Self::ALPHA_INVERTED)
    }

    /// Color channels stored premultiplied.
    pub const fn is_premultiplied(self) -> bool {
        self.has_all(Self::ALPHA_PREMULTIPLIED)
    }

    /// Bytes per pixel.
    pub const fn channel_count(self) -> usize {
        if self.is_raw() {
            return Color::RAW_SIZE;
        }
        let mut n = if self.is_gray() { 1 } else { 3 };
        if self.has_alpha() {
            n += 1;
        }
        if self.has_depth() {
            n += 1;
        }
        n
    }
}

impl BitOr for PixelFormat {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for PixelFormat {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for PixelFormat {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Renders as a base (`raw`, `gray` or `rgb`) followed by the remaining flag names in bit
/// order, e.g. `rgb+alpha+bgr`. Bits without a name are appended in hex. The output parses
/// back to the same bits.
impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (base, mut rest) = if self.is_raw() {
            ("raw", self.without(Self::RAW))
        } else if self.is_gray() {
            ("gray", self.without(Self::GRAY))
        } else {
            ("rgb", *self)
        };
        f.write_str(base)?;
        for (flag, name) in Self::FLAG_NAMES {
            if rest.has_all(flag) {
                write!(f, "+{name}")?;
                rest = rest.without(flag);
            }
        }
        if rest.0 != 0 {
            write!(f, "+{:#x}", rest.0)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelFormat({self})")
    }
}

impl FromStr for PixelFormat {
    type Err = PixfmtError;

    fn from_str(s: &str) -> PixfmtResult<Self> {
        let mut out = Self::RGB;
        for token in s.split('+') {
            let token = token.trim().to_ascii_lowercase();
            if token.is_empty() {
                return Err(PixfmtError::parse(format!(
                    "empty token in pixel format '{s}'"
                )));
            }
            let found = match token.strip_prefix("0x") {
                Some(hex) => u16::from_str_radix(hex, 16).ok().and_then(Self::from_bits),
                None => Self::PRESETS
                    .iter()
                    .copied()
                    .chain(Self::FLAG_NAMES.iter().map(|&(flag, name)| (name, flag)))
                    .find_map(|(name, bits)| (name == token).then_some(bits)),
            };
            match found {
                Some(bits) => out |= bits,
                None => {
                    return Err(PixfmtError::parse(format!(
                        "unknown pixel format token '{token}' in '{s}'"
                    )));
                }
            }
        }
        Ok(out)
    }
}

impl From<PixelFormat> for String {
    fn from(f: PixelFormat) -> Self {
        f.to_string()
    }
}

impl TryFrom<String> for PixelFormat {
    type Error = PixfmtError;

    fn try_from(s: String) -> PixfmtResult<Self> {
        s.parse()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/format.rs"]
mod tests;
