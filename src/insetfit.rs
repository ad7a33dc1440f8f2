//! Endpoint selection from the inset colour bounding box of a block.
//!
//! The axis-aligned RGB bounding box of the 16 pixels is shrunk by 1/16 of
//! its extent on every side before its corners are quantised to RGB565. This
//! pulls the endpoints towards the bulk of the pixels, so the interpolated
//! palette entries land closer to the actual colours than the raw extremes
//! would.

use crate::colour::pack565;

/// Right shift applied to the bounding box extent to obtain the inset.
pub const INSET_SHIFT: u32 = 4;

/// The endpoint pair chosen for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoints {
    /// Both endpoints quantise to the same colour; every pixel uses index 0.
    Single(u16),

    /// Distinct endpoints with `max > min`, as four-colour mode requires.
    Pair {
        max: u16,
        min: u16,
    },
}

/// Per-channel bounds of the RGB values in a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: [u8; 3],
    pub max: [u8; 3],
}

impl Bounds {
    /// Scans the block, ignoring alpha.
    pub fn new(rgba: &[[u8; 4]; 16]) -> Self {
        let mut min = [u8::MAX; 3];
        let mut max = [u8::MIN; 3];
        for pixel in rgba {
            for i in 0..3 {
                min[i] = min[i].min(pixel[i]);
                max[i] = max[i].max(pixel[i]);
            }
        }
        Bounds { min, max }
    }

    /// Shrinks the box by `(max - min) >> INSET_SHIFT` per channel.
    pub fn inset(&self) -> Self {
        let mut min = self.min;
        let mut max = self.max;
        for i in 0..3 {
            let inset = (self.max[i] - self.min[i]) >> INSET_SHIFT;
            max[i] = self.max[i].saturating_sub(inset);
            min[i] = self.min[i].saturating_add(inset);
        }
        Bounds { min, max }
    }
}

/// Picks the endpoints for a block of pixels.
pub fn fit(rgba: &[[u8; 4]; 16]) -> Endpoints {
    let Bounds { min, max } = Bounds::new(rgba).inset();

    let max = pack565(max[0], max[1], max[2]);
    let min = pack565(min[0], min[1], min[2]);

    if max == min {
        return Endpoints::Single(max);
    }

    // the larger value must come first or decoders switch to three-colour mode
    if max < min {
        Endpoints::Pair { max: min, min: max }
    } else {
        Endpoints::Pair { max, min }
    }
}
