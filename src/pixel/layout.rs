use std::fmt;

use smallvec::SmallVec;

use crate::color::model::Color;
use crate::pixel::format::PixelFormat;

/// One byte position in a packed pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Alpha (possibly inverted).
    Alpha,
    /// Opaque depth byte. The codec skips it; its content belongs to the caller.
    Depth,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Luma of a gray format.
    Luma,
}

impl Slot {
    fn symbol(self) -> char {
        match self {
            Self::Alpha => 'A',
            Self::Depth => 'Z',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Luma => 'Y',
        }
    }
}

/// Byte order of a packed pixel, derived from a [`PixelFormat`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Verbatim [`Color::to_raw_bytes`].
    Raw,
    /// One slot per byte: leading group, color channels, trailing group.
    Packed(SmallVec<[Slot; 5]>),
}

impl PixelLayout {
    /// Bytes per pixel.
    pub fn len(&self) -> usize {
        match self {
            Self::Raw => Color::RAW_SIZE,
            Self::Packed(slots) => slots.len(),
        }
    }

    /// Always `false`: every format occupies at least one byte.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots in byte order; empty for [`PixelLayout::Raw`].
    pub fn slots(&self) -> &[Slot] {
        match self {
            Self::Raw => &[],
            Self::Packed(slots) => slots,
        }
    }
}

/// Compact form, e.g. `ARGB`, `BGRZA`, `raw`.
impl fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => f.write_str("raw"),
            Self::Packed(slots) => slots.iter().try_for_each(|s| write!(f, "{}", s.symbol())),
        }
    }
}

impl PixelFormat {
    /// Byte layout this format encodes to and decodes from.
    pub fn layout(self) -> PixelLayout {
        if self.is_raw() {
            return PixelLayout::Raw;
        }

        let mut slots = SmallVec::new();
        self.push_extra_group(&mut slots, true);
        if self.is_gray() {
            slots.push(Slot::Luma);
        } else if self.is_bgr() {
            slots.extend([Slot::Blue, Slot::Green, Slot::Red]);
        } else {
            slots.extend([Slot::Red, Slot::Green, Slot::Blue]);
        }
        self.push_extra_group(&mut slots, false);
        PixelLayout::Packed(slots)
    }

    /// Alpha/depth bytes on one side of the color channels (0, 1 or 2 of them).
    fn push_extra_group(self, slots: &mut SmallVec<[Slot; 5]>, leading: bool) {
        let alpha = self.has_alpha() && self.has_all(Self::ALPHA_START) == leading;
        let depth = self.has_depth() && self.has_all(Self::DEPTH_START) == leading;
        let ordered = if self.has_all(Self::DEPTH_BEFORE_ALPHA) {
            [(depth, Slot::Depth), (alpha, Slot::Alpha)]
        } else {
            [(alpha, Slot::Alpha), (depth, Slot::Depth)]
        };
        slots.extend(
            ordered
                .into_iter()
                .filter_map(|(present, slot)| present.then_some(slot)),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/layout.rs"]
mod tests;
