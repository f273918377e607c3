//! Sequential Floyd-Steinberg kernel.
//!
//! This is the reference implementation: it defines the exact numeric
//! semantics (threshold policy and floor-divided error weights) that
//! the wavefront kernel must reproduce bit for bit. It is also the
//! baseline for speedup measurements.

use crate::THRESHOLD;
use crate::buffer::PixelBuffer;

/// Binarizes one accumulated value and returns `(output, error)`.
///
/// Output is `255` for values strictly greater than [`THRESHOLD`],
/// `0` otherwise; the error is the signed difference the neighbors
/// will absorb.
#[inline(always)]
pub(crate) fn quantize(value: i32) -> (u8, i32) {
    let output = if value > THRESHOLD { 255 } else { 0 };
    (output as u8, value - output)
}

/// Floyd-Steinberg weights applied with floor division.
///
/// `div_euclid` by 16 is mathematical floor division, matching the
/// fraction table 7/16, 3/16, 5/16, 1/16 exactly for negative errors
/// as well (`(-16 * 7).div_euclid(16) == -7`). Truncating division
/// would round toward zero instead and diverge on dark pixels.
#[inline(always)]
pub(crate) fn weights(error: i32) -> [i32; 4] {
    [
        (error * 7).div_euclid(16),
        (error * 3).div_euclid(16),
        (error * 5).div_euclid(16),
        error.div_euclid(16),
    ]
}

/// Runs the sequential kernel over an already-loaded buffer, writing
/// binarized rows into `output` (row-major, `width * height` bytes).
pub(crate) fn run(
    buffer: &mut PixelBuffer,
    output: &mut [u8],
    width: usize,
    height: usize,
) {
    for y in 0..height {
        for x in 0..width {
            let (pixel, error) = quantize(buffer.read(x, y));
            output[y * width + x] = pixel;

            let [right, below_left, below, below_right] = weights(error);
            let x = x as isize;
            buffer.add_error(x + 1, y, right);
            buffer.add_error(x - 1, y + 1, below_left);
            buffer.add_error(x, y + 1, below);
            buffer.add_error(x + 1, y + 1, below_right);
        }
    }
}
