use crate::colour::unpack565;
use crate::insetfit::{self, Endpoints};
use crate::palette::{assign_indices, palette};

/// Size of one encoded 4×4 block in bytes.
pub const BLOCK_SIZE: usize = 8;

/// One encoded DXT1 block as two 32-bit words.
///
/// `colours` holds the first endpoint in its low half and the second in its
/// high half; `indices` holds sixteen 2-bit palette indices, pixel `k` (in
/// row-major order within the block) at bit `2k`. Both words are stored
/// little-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Block {
    pub colours: u32,
    pub indices: u32,
}

impl Block {
    pub fn new(max: u16, min: u16, indices: u32) -> Self {
        Block {
            colours: (u32::from(min) << 16) | u32::from(max),
            indices,
        }
    }

    /// The endpoint stored first, associated with palette index 0.
    #[inline]
    pub fn max_colour(&self) -> u16 {
        self.colours as u16
    }

    /// The endpoint stored second, associated with palette index 1.
    #[inline]
    pub fn min_colour(&self) -> u16 {
        (self.colours >> 16) as u16
    }

    /// Palette index of pixel `k`.
    #[inline]
    pub fn index(&self, k: usize) -> usize {
        ((self.indices >> (2 * k)) & 0b11) as usize
    }

    pub fn to_bytes(&self) -> [u8; BLOCK_SIZE] {
        let mut bytes = [0u8; BLOCK_SIZE];
        bytes[..4].copy_from_slice(&self.colours.to_le_bytes());
        bytes[4..].copy_from_slice(&self.indices.to_le_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8; BLOCK_SIZE]) -> Self {
        Block {
            colours: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            indices: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }
}

/// Compresses a 4×4 block of RGBA pixels. Alpha is ignored.
pub fn compress(rgba: &[[u8; 4]; 16]) -> Block {
    match insetfit::fit(rgba) {
        Endpoints::Single(colour) => Block::new(colour, colour, 0),
        Endpoints::Pair { max, min } => {
            let codes = palette(max, min);
            Block::new(max, min, assign_indices(rgba, &codes))
        }
    }
}

/// Decompresses a block the way a GPU samples it.
///
/// When the first endpoint is not greater than the second the block is in
/// three-colour mode: entry 2 is the midpoint and entry 3 is transparent
/// black.
pub fn decompress(bytes: &[u8; BLOCK_SIZE]) -> [[u8; 4]; 16] {
    let block = Block::from_bytes(bytes);
    let (a, b) = (block.max_colour(), block.min_colour());

    let codes: [[u8; 4]; 4] = if a > b {
        palette(a, b).map(|[r, g, b]| [r, g, b, 255])
    } else {
        let [r0, g0, b0] = unpack565(a);
        let [r1, g1, b1] = unpack565(b);
        let mid = |x: u8, y: u8| ((u16::from(x) + u16::from(y)) / 2) as u8;
        [
            [r0, g0, b0, 255],
            [r1, g1, b1, 255],
            [mid(r0, r1), mid(g0, g1), mid(b0, b1), 255],
            [0, 0, 0, 0],
        ]
    };

    core::array::from_fn(|k| codes[block.index(k)])
}
