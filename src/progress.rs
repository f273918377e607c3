//! Per-row progress counters for the wavefront protocol.
//!
//! Each row has one monotonically increasing counter holding the number
//! of columns whose error has been fully diffused into the row below.
//! The row's owner is the only writer; the owner of the row below polls
//! it before starting each chunk.
//!
//! Waits in this regime last microseconds, so `wait_until` spins
//! instead of parking; a parked waiter would pay a wakeup latency
//! larger than the wait itself. Counters are cache-line padded so that
//! threads polling adjacent rows do not invalidate each other's lines.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crossbeam_utils::CachePadded;

/// Spins between cooperative yields inside [`RowProgress::wait_until`].
const SPINS_PER_YIELD: u32 = 1024;

/// One published column count per row, single writer per row.
pub struct RowProgress {
    rows: Box<[CachePadded<AtomicUsize>]>,
}

impl RowProgress {
    /// Creates counters for `height` rows, all starting at zero
    /// ("no columns diffused yet").
    pub fn new(height: usize) -> Self {
        Self {
            rows: (0..height)
                .map(|_| CachePadded::new(AtomicUsize::new(0)))
                .collect(),
        }
    }

    /// Publishes that `columns` columns of `row` have their error fully
    /// diffused. Release ordering makes every buffer write of the
    /// finished chunk visible to a waiter that observes the new value.
    ///
    /// Only the thread owning `row` may call this; published values
    /// must be non-decreasing.
    #[inline]
    pub fn publish(&self, row: usize, columns: usize) {
        debug_assert!(columns >= self.rows[row].load(Ordering::Relaxed));
        self.rows[row].store(columns, Ordering::Release);
    }

    /// Blocks until the published count for `row` reaches `required`.
    ///
    /// Busy-waits with a CPU spin hint, yielding the timeslice every
    /// [`SPINS_PER_YIELD`] iterations so oversubscribed systems still
    /// make progress.
    #[inline]
    pub fn wait_until(&self, row: usize, required: usize) {
        let counter = &*self.rows[row];
        let mut spins = 0u32;
        while counter.load(Ordering::Acquire) < required {
            std::hint::spin_loop();
            spins += 1;
            if spins % SPINS_PER_YIELD == 0 {
                thread::yield_now();
            }
        }
    }
}
