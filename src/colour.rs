//! Conversion between 8-bit RGB and packed RGB565.
//!
//! Expansion replicates the most significant bits of each field into the
//! vacated low bits, which is exactly what texture units do when sampling a
//! 565 surface. A plain left shift would never reach 255 and must not be used.

/// An opaque 8-bit RGB colour.
pub type Rgb = [u8; 3];

/// Packs an 8-bit RGB triple into RGB565, dropping the low bits of each channel.
#[inline]
pub fn pack565(r: u8, g: u8, b: u8) -> u16 {
    ((u16::from(r) & 0xF8) << 8) | ((u16::from(g) & 0xFC) << 3) | (u16::from(b) >> 3)
}

/// Widens a `bits`-wide field to 8 bits by replicating its high bits.
#[inline]
fn widen(v: u16, bits: u32) -> u8 {
    let shift = 8 - bits;
    ((v << shift) | (v >> (bits - shift))) as u8
}

#[inline]
pub fn unpack_r565(colour: u16) -> u8 {
    widen((colour >> 11) & 0x1F, 5)
}

#[inline]
pub fn unpack_g565(colour: u16) -> u8 {
    widen((colour >> 5) & 0x3F, 6)
}

#[inline]
pub fn unpack_b565(colour: u16) -> u8 {
    widen(colour & 0x1F, 5)
}

/// Expands an RGB565 value to 8-bit RGB.
#[inline]
pub fn unpack565(colour: u16) -> Rgb {
    [
        unpack_r565(colour),
        unpack_g565(colour),
        unpack_b565(colour),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case([0, 0, 0], 0x0000)]
    #[case([255, 255, 255], 0xFFFF)]
    #[case([255, 0, 0], 0xF800)]
    #[case([0, 255, 0], 0x07E0)]
    #[case([0, 0, 255], 0x001F)]
    #[case([123, 234, 56], 0x7F47)]
    #[case([200, 100, 50], 0xCB26)]
    fn test_pack565(#[case] rgb: Rgb, #[case] expected: u16) {
        assert_eq!(pack565(rgb[0], rgb[1], rgb[2]), expected);
    }

    #[test]
    fn test_white_survives_exactly() {
        assert_eq!(unpack565(pack565(255, 255, 255)), [255, 255, 255]);
    }

    #[test]
    fn test_unpack_replicates_high_bits() {
        // 5-bit 0b10000 widens to 0b10000100, not 0b10000000
        assert_eq!(unpack_r565(0b10000 << 11), 0x84);
        // 6-bit 0b100000 widens to 0b10000010
        assert_eq!(unpack_g565(0b100000 << 5), 0x82);
        assert_eq!(unpack_b565(0b00001), 0x08);
        assert_eq!(unpack565(0x7F47), [123, 235, 57]);
    }

    #[rstest]
    #[case([0, 0, 0])]
    #[case([255, 255, 255])]
    #[case([128, 128, 128])]
    #[case([255, 255, 0])]
    #[case([255, 0, 255])]
    #[case([0, 255, 255])]
    #[case([123, 234, 56])]
    fn test_round_trip_error(#[case] rgb: Rgb) {
        let converted = unpack565(pack565(rgb[0], rgb[1], rgb[2]));
        assert!(rgb[0].abs_diff(converted[0]) <= 4);
        assert!(rgb[1].abs_diff(converted[1]) <= 2);
        assert!(rgb[2].abs_diff(converted[2]) <= 4);
    }

    #[test]
    fn test_round_trip_error_is_replication() {
        for value in 0..=255u8 {
            let [r, g, b] = unpack565(pack565(value, value, value));
            let five = i16::from(value & 0x07) - i16::from(value >> 5);
            let six = i16::from(value & 0x03) - i16::from(value >> 6);
            assert_eq!(i16::from(value) - i16::from(r), five, "red {}", value);
            assert_eq!(i16::from(value) - i16::from(g), six, "green {}", value);
            assert_eq!(i16::from(value) - i16::from(b), five, "blue {}", value);
            assert!(five.abs() <= 7 && six.abs() <= 3);
        }
    }

    #[test]
    fn test_every_565_value_is_stable() {
        // expanding then packing again must give back the same 565 value
        for colour in 0..=u16::MAX {
            let [r, g, b] = unpack565(colour);
            assert_eq!(pack565(r, g, b), colour);
        }
    }
}
