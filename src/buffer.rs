//! Padded working buffers for error-diffusion kernels.
//!
//! Both kernels accumulate quantization error into the pixels that have
//! not been binarized yet, so the working grid holds `i32` values that
//! transiently leave `[0, 255]`. The grid carries a one-cell border on
//! every side: error diffused off the logical edges lands in border
//! cells and is discarded, which keeps the inner loop free of edge
//! branches.
//!
//! Padding convention: the physical grid is `(height + 2) × (width + 2)`
//! and logical pixel `(x, y)` lives at physical index
//! `(y + 1) * (width + 2) + (x + 1)`.

use std::sync::atomic::{AtomicI32, Ordering};

/// Exclusively owned padded pixel grid, used by the sequential kernel.
pub struct PixelBuffer {
    cells: Vec<i32>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Copies `width * height` row-major 8-bit samples into the interior
    /// of a zero-initialized padded grid.
    pub fn load(pixels: &[u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height);

        let padded_width = width + 2;
        let mut cells = vec![0i32; padded_width * (height + 2)];
        for y in 0..height {
            let src = &pixels[y * width..(y + 1) * width];
            let dst = &mut cells[(y + 1) * padded_width + 1..];
            for (cell, &sample) in dst.iter_mut().zip(src) {
                *cell = i32::from(sample);
            }
        }

        Self {
            cells,
            width,
            height,
        }
    }

    /// Reads the accumulated value of logical pixel `(x, y)`.
    #[inline(always)]
    pub fn read(&self, x: usize, y: usize) -> i32 {
        self.cells[self.index(x as isize, y)]
    }

    /// Adds diffused error to logical cell `(x, y)`.
    ///
    /// `x` may be `-1` or `width` and `y` may be `height`; those resolve
    /// to border cells that absorb the overflow.
    #[inline(always)]
    pub fn add_error(&mut self, x: isize, y: usize, amount: i32) {
        let index = self.index(x, y);
        self.cells[index] += amount;
    }

    #[inline(always)]
    fn index(&self, x: isize, y: usize) -> usize {
        debug_assert!(x >= -1 && x <= self.width as isize);
        debug_assert!(y <= self.height);
        (y + 1) * (self.width + 2) + (x + 1) as usize
    }
}

/// Shared padded pixel grid, used by the wavefront kernel.
///
/// Cells are `AtomicI32` updated with `Relaxed` ordering: the protocol
/// guarantees that no two threads touch the same cell concurrently, and
/// the Release/Acquire pair on the progress counters publishes every
/// cell update of a finished chunk to the row below. Atomics here buy
/// defined behavior for the cross-thread writes, not extra ordering.
pub struct AtomicPixelBuffer {
    cells: Vec<AtomicI32>,
    width: usize,
    height: usize,
}

impl AtomicPixelBuffer {
    /// See [`PixelBuffer::load`].
    pub fn load(pixels: &[u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height);

        let padded_width = width + 2;
        let cells: Vec<AtomicI32> = (0..padded_width * (height + 2))
            .map(|_| AtomicI32::new(0))
            .collect();
        for y in 0..height {
            for x in 0..width {
                cells[(y + 1) * padded_width + (x + 1)].store(
                    i32::from(pixels[y * width + x]),
                    Ordering::Relaxed,
                );
            }
        }

        Self {
            cells,
            width,
            height,
        }
    }

    /// Reads the accumulated value of logical pixel `(x, y)`.
    #[inline(always)]
    pub fn read(&self, x: usize, y: usize) -> i32 {
        self.cells[self.index(x as isize, y)].load(Ordering::Relaxed)
    }

    /// Adds diffused error to logical cell `(x, y)`; border overflow as
    /// in [`PixelBuffer::add_error`].
    #[inline(always)]
    pub fn add_error(&self, x: isize, y: usize, amount: i32) {
        self.cells[self.index(x, y)].fetch_add(amount, Ordering::Relaxed);
    }

    #[inline(always)]
    fn index(&self, x: isize, y: usize) -> usize {
        debug_assert!(x >= -1 && x <= self.width as isize);
        debug_assert!(y <= self.height);
        (y + 1) * (self.width + 2) + (x + 1) as usize
    }
}
