use alloc::vec;
use alloc::vec::Vec;

use crate::colourblock::{self, BLOCK_SIZE};
use crate::{num_blocks, Error};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Rejects images that do not split exactly into 4×4 blocks.
fn check_dimensions(width: usize, height: usize) -> Result<(), Error> {
    if width % 4 != 0 || height % 4 != 0 {
        tracing::debug!(width, height, "rejecting image dimensions");
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Computes the amount of space in bytes needed for a compressed image.
///
/// For dimensions that are multiples of 4 this is `width * height / 2`.
pub fn compressed_size(width: usize, height: usize) -> usize {
    num_blocks(width) * num_blocks(height) * BLOCK_SIZE
}

/// Compresses one row of blocks.
///
/// * `rgba`       - The whole source image
/// * `width`      - Width of the source image in pixels
/// * `y`          - Block row to compress
/// * `output_row` - Storage for the row, `width / 4` blocks long
fn compress_row(rgba: &[u8], width: usize, y: usize, output_row: &mut [u8]) {
    let mut source_rgba = [[0u8; 4]; 16];

    for (x, output_block) in output_row.chunks_exact_mut(BLOCK_SIZE).enumerate() {
        // gather the 4x4 block of pixels
        for py in 0..4 {
            let row_start = 4 * (width * (4 * y + py) + 4 * x);
            for px in 0..4 {
                let src_index = row_start + 4 * px;
                source_rgba[4 * py + px].copy_from_slice(&rgba[src_index..src_index + 4]);
            }
        }

        output_block.copy_from_slice(&colourblock::compress(&source_rgba).to_bytes());
    }
}

fn check_output(width: usize, height: usize, output: &[u8]) -> Result<usize, Error> {
    check_dimensions(width, height)?;
    let needed = compressed_size(width, height);
    if output.len() < needed {
        return Err(Error::OutputTooSmall {
            needed,
            actual: output.len(),
        });
    }
    Ok(needed)
}

/// Compresses an image into a caller-provided buffer.
///
/// * `width`  - The width of the source image, a multiple of 4
/// * `height` - The height of the source image, a multiple of 4
/// * `rgba`   - The uncompressed pixels, tightly packed and row-major
/// * `output` - Storage for at least `compressed_size(width, height)` bytes
///
/// `rgba` must hold `width * height * 4` bytes; a shorter buffer panics.
/// Nothing is written when an error is returned.
pub fn compress_into(
    width: usize,
    height: usize,
    rgba: &[u8],
    output: &mut [u8],
) -> Result<(), Error> {
    let needed = check_output(width, height, output)?;
    if needed == 0 {
        return Ok(());
    }
    debug_assert!(rgba.len() >= width * height * 4);
    tracing::debug!(width, height, "compressing image to DXT1");

    let row_size = num_blocks(width) * BLOCK_SIZE;
    output[..needed]
        .chunks_exact_mut(row_size)
        .enumerate()
        .for_each(|(y, output_row)| compress_row(rgba, width, y, output_row));
    Ok(())
}

/// Compresses an image to DXT1.
///
/// Blocks are emitted in row-major order, `width * height / 2` bytes in
/// total. Fails with [`Error::InvalidDimensions`] unless both dimensions are
/// multiples of 4.
pub fn compress(width: usize, height: usize, rgba: &[u8]) -> Result<Vec<u8>, Error> {
    check_dimensions(width, height)?;
    let mut output = vec![0u8; compressed_size(width, height)];
    compress_into(width, height, rgba, &mut output)?;
    Ok(output)
}

/// Parallel variant of [`compress_into`], one task per row of blocks.
///
/// Produces exactly the same bytes as the sequential version.
#[cfg(feature = "rayon")]
pub fn par_compress_into(
    width: usize,
    height: usize,
    rgba: &[u8],
    output: &mut [u8],
) -> Result<(), Error> {
    let needed = check_output(width, height, output)?;
    if needed == 0 {
        return Ok(());
    }
    debug_assert!(rgba.len() >= width * height * 4);
    tracing::debug!(width, height, "compressing image to DXT1 in parallel");

    let row_size = num_blocks(width) * BLOCK_SIZE;
    output[..needed]
        .par_chunks_exact_mut(row_size)
        .enumerate()
        .for_each(|(y, output_row)| compress_row(rgba, width, y, output_row));
    Ok(())
}

/// Parallel variant of [`compress`].
#[cfg(feature = "rayon")]
pub fn par_compress(width: usize, height: usize, rgba: &[u8]) -> Result<Vec<u8>, Error> {
    check_dimensions(width, height)?;
    let mut output = vec![0u8; compressed_size(width, height)];
    par_compress_into(width, height, rgba, &mut output)?;
    Ok(output)
}

/// Decompresses a DXT1 image to tightly packed RGBA.
///
/// * `width`  - The width of the image, a multiple of 4
/// * `height` - The height of the image, a multiple of 4
/// * `data`   - The compressed blocks in row-major order
pub fn decompress(width: usize, height: usize, data: &[u8]) -> Result<Vec<u8>, Error> {
    check_dimensions(width, height)?;
    let needed = compressed_size(width, height);
    if data.len() < needed {
        return Err(Error::InputTooSmall {
            needed,
            actual: data.len(),
        });
    }
    tracing::debug!(width, height, "decompressing DXT1 image");

    let mut output = vec![0u8; width * height * 4];
    if output.is_empty() {
        return Ok(output);
    }

    let blocks_wide = num_blocks(width);
    for (y, output_row) in output.chunks_exact_mut(width * 4 * 4).enumerate() {
        for x in 0..blocks_wide {
            let bidx = (x + y * blocks_wide) * BLOCK_SIZE;
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(&data[bidx..bidx + BLOCK_SIZE]);
            let rgba = colourblock::decompress(&block);

            // write the decompressed pixels to the correct image location
            for py in 0..4 {
                for px in 0..4 {
                    let dst = 4 * (4 * x + px + py * width);
                    output_row[dst..dst + 4].copy_from_slice(&rgba[px + py * 4]);
                }
            }
        }
    }
    Ok(output)
}
