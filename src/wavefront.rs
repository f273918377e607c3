//! Wavefront-parallel Floyd-Steinberg kernel.
//!
//! Error diffusion is sequential in the worst way: every pixel depends
//! on its left, upper-left, upper and upper-right neighbors. Rows can
//! still overlap in time, though. Once row `y - 1` has diffused error
//! past column `x`, the pixels of row `y` up to `x - 1` are final and
//! may be binarized, so the rows advance together as a skewed
//! wavefront.
//!
//! Each worker owns a strided set of rows and processes every owned row
//! in fixed-width column chunks, synchronizing once per chunk instead
//! of once per pixel: before a chunk it polls the row above's progress
//! counter, after a chunk it publishes its own. Wider chunks mean fewer
//! atomic operations but more wavefront lag (roughly `height / chunk`
//! rows can be in flight); the sweet spot is hardware-dependent, see
//! `benches/chunk_size.rs`.

use std::thread;

use log::debug;

use crate::buffer::AtomicPixelBuffer;
use crate::progress::RowProgress;
use crate::sequential::{quantize, weights};
use crate::{DEFAULT_CHUNK, DitherError};

/// Tuning knobs for [`wavefront_dither`](crate::wavefront_dither).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WavefrontConfig {
    /// Number of worker threads. Capped at the image height; rows are
    /// assigned to workers in a static round-robin stride.
    pub threads: usize,
    /// Column chunk width between synchronization points. 64-256 is
    /// usually optimal.
    pub chunk: usize,
}

impl WavefrontConfig {
    /// Creates a config with an explicit worker count and chunk width.
    pub fn new(threads: usize, chunk: usize) -> Self {
        Self { threads, chunk }
    }
}

impl Default for WavefrontConfig {
    /// One worker per available hardware thread, [`DEFAULT_CHUNK`]
    /// columns per chunk.
    fn default() -> Self {
        Self {
            threads: thread::available_parallelism().map_or(1, |n| n.get()),
            chunk: DEFAULT_CHUNK,
        }
    }
}

pub(crate) fn run(
    pixels: &[u8],
    width: usize,
    height: usize,
    config: &WavefrontConfig,
) -> Result<Vec<u8>, DitherError> {
    let buffer = AtomicPixelBuffer::load(pixels, width, height);
    let progress = RowProgress::new(height);
    let mut output = vec![0u8; width * height];

    // More workers than rows would leave workers with nothing to do.
    let threads = config.threads.min(height);
    debug!(
        "wavefront run: {width}x{height}, {threads} workers, chunk {}",
        config.chunk
    );

    // Hand each worker exclusive ownership of its output rows up front;
    // the output grid needs no synchronization at all.
    let mut partitions: Vec<Vec<(usize, &mut [u8])>> =
        (0..threads).map(|_| Vec::new()).collect();
    for (y, row) in output.chunks_mut(width).enumerate() {
        partitions[y % threads].push((y, row));
    }

    // A private fixed-size pool: every worker gets a thread for the
    // whole run, which the spin-waits in the protocol rely on.
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    pool.scope(|scope| {
        for rows in partitions {
            let buffer = &buffer;
            let progress = &progress;
            let chunk = config.chunk;
            scope.spawn(move |_| run_rows(buffer, progress, rows, width, chunk));
        }
    });

    Ok(output)
}

/// Processes one worker's owned rows, bottom half of the protocol.
///
/// For a chunk ending at column `x1` of row `y`, pixel `(x1, y)` reads
/// error from `(x1 + 1, y - 1)`, so the row above must have diffused
/// `x1 + 2` columns before the chunk may start. Publishing `width + 1`
/// after a row's last chunk satisfies the largest possible requirement
/// (`width + 1` for a chunk ending at the final column) and so
/// unblocks the row below unconditionally.
fn run_rows(
    buffer: &AtomicPixelBuffer,
    progress: &RowProgress,
    rows: Vec<(usize, &mut [u8])>,
    width: usize,
    chunk: usize,
) {
    for (y, out_row) in rows {
        for x0 in (0..width).step_by(chunk) {
            let x1 = usize::min(x0 + chunk, width) - 1;

            // Row 0 has no dependency.
            if y > 0 {
                progress.wait_until(y - 1, x1 + 2);
            }

            for x in x0..=x1 {
                let (pixel, error) = quantize(buffer.read(x, y));
                out_row[x] = pixel;

                let [right, below_left, below, below_right] = weights(error);
                let x = x as isize;
                buffer.add_error(x + 1, y, right);
                buffer.add_error(x - 1, y + 1, below_left);
                buffer.add_error(x, y + 1, below);
                buffer.add_error(x + 1, y + 1, below_right);
            }

            progress.publish(y, x1 + 1);
        }

        // Terminal value for this row.
        progress.publish(y, width + 1);
    }
}
