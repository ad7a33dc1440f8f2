use alloc::vec::Vec;

/// All-ones fill pattern copied in bulk into placeholder images.
static FILL: [u8; 4096] = [0xFF; 4096];

/// Creates a fully transparent placeholder of the same size as a compressed image.
///
/// Every bit is set, which decodes as transparent black in three-colour mode.
/// The dimensions are not validated; for multiples of 4 the length equals
/// [`compressed_size`](crate::compressed_size).
pub fn transparent_image(width: usize, height: usize) -> Vec<u8> {
    let words = width * height / 8;
    let len = words * 4;

    let mut output = Vec::with_capacity(len);
    while output.len() < len {
        let n = FILL.len().min(len - output.len());
        output.extend_from_slice(&FILL[..n]);
    }
    output
}
