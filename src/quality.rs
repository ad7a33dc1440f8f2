//! Reconstruction error of a compressed image against its source.

use crate::{decompress, Error};

/// Mean squared error over the RGB channels of every pixel.
///
/// `dxt` is decoded exactly as a GPU would sample it and compared against
/// `rgba`. Alpha does not contribute.
pub fn compute_mse(width: usize, height: usize, rgba: &[u8], dxt: &[u8]) -> Result<f64, Error> {
    let decoded = decompress(width, height, dxt)?;
    if decoded.is_empty() {
        return Ok(0.0);
    }

    let sum: u64 = rgba
        .chunks_exact(4)
        .zip(decoded.chunks_exact(4))
        .map(|(original, decoded)| {
            (0..3)
                .map(|i| {
                    let d = i64::from(original[i]) - i64::from(decoded[i]);
                    (d * d) as u64
                })
                .sum::<u64>()
        })
        .sum();

    Ok(sum as f64 / (width * height * 3) as f64)
}

/// Peak signal-to-noise ratio in decibels for an 8-bit mean squared error.
pub fn psnr(mse: f64) -> f64 {
    if mse <= 0.0 {
        return f64::INFINITY;
    }
    10.0 * libm::log10(255.0 * 255.0 / mse)
}
