//! 1-bit Floyd-Steinberg dithering with a wavefront-parallel kernel.
//!
//! The crate binarizes a single 8-bit grayscale channel by
//! error-diffusion dithering and offers two kernels over the same
//! numeric contract:
//!
//! - [`sequential_dither`] — the reference kernel, one pass in raster
//!   order. Defines the exact semantics: output is `255` for
//!   accumulated values strictly greater than [`THRESHOLD`], and the
//!   quantization error spreads to the right, below-left, below and
//!   below-right neighbors with the weights 7/16, 3/16, 5/16 and 1/16
//!   applied as floor division.
//! - [`wavefront_dither`] — the same computation on a fixed pool of
//!   worker threads. Rows advance concurrently as a skewed wavefront,
//!   gated by per-row progress counters, and the result is
//!   bit-identical to the sequential kernel for every input and every
//!   valid [`WavefrontConfig`].
//!
//! Decoding, grayscale conversion and encoding are left to the caller;
//! both kernels consume a row-major `&[u8]` of intensities and return
//! a row-major `Vec<u8>` of `0`/`255` bytes. See
//! `demos/dither_image.rs` for an end-to-end pipeline built on the
//! `image` crate.
//!
//! ## Examples
//!
//! ```
//! use wavedither::{WavefrontConfig, sequential_dither, wavefront_dither};
//!
//! let pixels = vec![100u8; 64 * 64];
//!
//! let reference = sequential_dither(&pixels, 64, 64)?;
//! let parallel =
//!     wavefront_dither(&pixels, 64, 64, &WavefrontConfig::new(4, 16))?;
//!
//! assert_eq!(reference, parallel);
//! # Ok::<(), wavedither::DitherError>(())
//! ```

mod buffer;
mod progress;
mod sequential;
mod wavefront;

pub use wavefront::WavefrontConfig;

use buffer::PixelBuffer;

/// Binarization threshold: a pixel becomes white only when its
/// accumulated value is strictly greater than this.
pub const THRESHOLD: i32 = 128;

/// Default column chunk width for the wavefront kernel.
pub const DEFAULT_CHUNK: usize = 128;

/// Errors reported before any dithering work starts.
///
/// A run either fails up front with one of these or completes fully;
/// there is no partial output.
#[derive(Debug, thiserror::Error)]
pub enum DitherError {
    /// Zero-sized images are rejected before any allocation.
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// The pixel slice does not hold `width * height` samples.
    #[error("pixel slice holds {actual} bytes, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },

    /// Worker count or chunk width of zero.
    #[error("need at least 1 worker and a chunk width of at least 1, got {threads} and {chunk}")]
    InvalidConfig { threads: usize, chunk: usize },

    /// The worker thread pool could not be created.
    #[error("failed to build worker thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Dithers `pixels` (row-major, `width * height` 8-bit samples) with
/// the sequential reference kernel.
///
/// Returns a row-major `width * height` grid of `0`/`255` bytes.
pub fn sequential_dither(
    pixels: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, DitherError> {
    validate_image(pixels, width, height)?;

    let mut buffer = PixelBuffer::load(pixels, width, height);
    let mut output = vec![0u8; width * height];
    sequential::run(&mut buffer, &mut output, width, height);
    Ok(output)
}

/// Dithers `pixels` with the wavefront-parallel kernel.
///
/// Produces exactly the bytes [`sequential_dither`] would, for any
/// worker count and chunk width. A failed run returns an error before
/// any worker starts; once workers are launched the run completes.
pub fn wavefront_dither(
    pixels: &[u8],
    width: usize,
    height: usize,
    config: &WavefrontConfig,
) -> Result<Vec<u8>, DitherError> {
    validate_image(pixels, width, height)?;
    if config.threads < 1 || config.chunk < 1 {
        return Err(DitherError::InvalidConfig {
            threads: config.threads,
            chunk: config.chunk,
        });
    }

    wavefront::run(pixels, width, height, config)
}

fn validate_image(
    pixels: &[u8],
    width: usize,
    height: usize,
) -> Result<(), DitherError> {
    if width == 0 || height == 0 {
        return Err(DitherError::InvalidDimensions { width, height });
    }
    let expected = width * height;
    if pixels.len() != expected {
        return Err(DitherError::PixelCountMismatch {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}
