//! Pixel formats supported by the resampler.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    /// Three 8-bit components: red, green, blue.
    U8x3,
    /// 16-bit word with 5 bits of red, 6 bits of green and 5 bits of blue,
    /// stored in little-endian byte order.
    Rgb565,
}

impl PixelType {
    /// Size of one pixel in bytes.
    pub const fn size(&self) -> usize {
        match self {
            Self::U8x3 => 3,
            Self::Rgb565 => 2,
        }
    }
}

/// Packs 8-bit components into RGB565 by dropping their low bits.
#[inline(always)]
pub const fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3)
}

/// Expands RGB565 word into 8-bit components.
///
/// Dropped low bits are left as zero, so
/// `unpack_rgb565(pack_rgb565(r, g, b))` returns `(r & 0xf8, g & 0xfc, b & 0xf8)`.
#[inline(always)]
pub const fn unpack_rgb565(pixel: u16) -> [u8; 3] {
    [
        ((pixel >> 11) as u8) << 3,
        (((pixel >> 5) & 0x3f) as u8) << 2,
        ((pixel & 0x1f) as u8) << 3,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_extremes() {
        assert_eq!(pack_rgb565(0, 0, 0), 0);
        assert_eq!(pack_rgb565(255, 255, 255), 0xffff);
        assert_eq!(pack_rgb565(255, 0, 0), 0xf800);
        assert_eq!(pack_rgb565(0, 255, 0), 0x07e0);
        assert_eq!(pack_rgb565(0, 0, 255), 0x001f);
    }

    #[test]
    fn unpack_drops_low_bits() {
        assert_eq!(unpack_rgb565(pack_rgb565(0x8f, 0x47, 0x13)), [0x88, 0x44, 0x10]);
    }
}
