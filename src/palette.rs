use crate::colour::{unpack565, Rgb};

/// Builds the four-colour palette for an ordered endpoint pair.
///
/// Entries 2 and 3 are the 1/3 and 2/3 blends, truncated the way decoders
/// compute them. The order is fixed: index `i` in the packed block refers to
/// entry `i`.
pub fn palette(max: u16, min: u16) -> [Rgb; 4] {
    let a = unpack565(max);
    let b = unpack565(min);

    let mut codes = [a, b, [0; 3], [0; 3]];
    for i in 0..3 {
        let (a, b) = (u16::from(a[i]), u16::from(b[i]));
        codes[2][i] = ((2 * a + b) / 3) as u8;
        codes[3][i] = ((a + 2 * b) / 3) as u8;
    }
    codes
}

/// Squared euclidean distance between a pixel and a palette entry, alpha ignored.
#[inline]
pub fn distance_squared(pixel: &[u8; 4], code: &Rgb) -> u32 {
    (0..3)
        .map(|i| {
            let d = i32::from(pixel[i]) - i32::from(code[i]);
            (d * d) as u32
        })
        .sum()
}

/// Index of the closest palette entry. Ties go to the lowest index.
#[inline]
pub fn nearest(pixel: &[u8; 4], codes: &[Rgb; 4]) -> u32 {
    let mut best_index = 0;
    let mut best_dist = u32::MAX;
    for (index, code) in codes.iter().enumerate() {
        let dist = distance_squared(pixel, code);
        if dist < best_dist {
            best_dist = dist;
            best_index = index as u32;
        }
    }
    best_index
}

/// Packs the nearest palette index of pixel `k` at bits `2k..2k+2`.
pub fn assign_indices(rgba: &[[u8; 4]; 16], codes: &[Rgb; 4]) -> u32 {
    rgba.iter()
        .enumerate()
        .fold(0, |indices, (k, pixel)| indices | (nearest(pixel, codes) << (2 * k)))
}
