// Copyright (c) 2006 Simon Brown <si@sjbrown.co.uk>
// Copyright (c) 2018-2021 Jan Solanti <jhs@psonet.com>
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to	deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS
// OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
// CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE
// SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! A pure Rust real-time DXT1 (BC1) compressor.
//!
//! Endpoints are taken from the colour bounding box of each 4×4 block, shrunk
//! inward by 1/16 of its extent, and every pixel is mapped to the nearest of
//! the four palette colours. This is much faster than cluster fitting and good
//! enough for textures produced at runtime.
//!
//! Every block is 8 bytes:
//! * bytes 0-1: first endpoint (RGB565, the larger value)
//! * bytes 2-3: second endpoint (RGB565)
//! * bytes 4-7: sixteen 2-bit palette indices, pixel `k` at bit `2k`
//!
//! The output can be uploaded directly as `COMPRESSED_RGB_S3TC_DXT1`. Alpha is
//! ignored on input; [`transparent_image`] produces a same-sized fully
//! transparent placeholder.
//!
//! ```
//! let rgba = [0x80u8; 8 * 4 * 4];
//! let dxt = fastdxt::compress(8, 4, &rgba).unwrap();
//! assert_eq!(dxt.len(), 16);
//!
//! assert!(fastdxt::compress(5, 4, &rgba).is_err());
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod bc1;
pub mod colour;
pub mod colourblock;
mod error;
pub mod insetfit;
pub mod palette;
mod quality;
mod transparent;

pub use bc1::{compress, compress_into, compressed_size, decompress};
#[cfg(feature = "rayon")]
pub use bc1::{par_compress, par_compress_into};
pub use colourblock::Block;
pub use error::Error;
pub use insetfit::Endpoints;
pub use quality::{compute_mse, psnr};
pub use transparent::transparent_image;

/// Returns number of blocks needed for an image of given dimension
fn num_blocks(size: usize) -> usize {
    (size + 3) / 4
}

//--------------------------------------------------------------------------------
// Unit tests
//--------------------------------------------------------------------------------
