//! Read-only capacity and fragmentation statistics.

use serde::Serialize;

use crate::pool::MemoryPool;

/// Snapshot of pool usage, taken in a single traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    /// Units available to callers across all free blocks.
    pub free: u64,
    /// Units held by live allocations.
    pub used: u64,
    /// Units consumed by per-block metadata.
    pub metadata: u64,
    /// Total user-visible units, free plus used.
    pub user_total: u64,
    /// Total pool capacity, metadata included.
    pub capacity: u64,
    /// Number of blocks in the chain.
    pub blocks: u64,
    /// Number of free blocks.
    pub free_blocks: u64,
    /// Size of the largest free block.
    pub largest_free: u64,
}

impl PoolStats {
    /// External fragmentation: the share of free capacity that the largest
    /// single request cannot reach. Zero when nothing is free.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fragmentation(&self) -> f64 {
        if self.free == 0 {
            return 0.0;
        }
        1.0 - self.largest_free as f64 / self.free as f64
    }
}

impl MemoryPool {
    /// Aggregate usage statistics for the current state of the chain.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        let mut stats = PoolStats {
            free: 0,
            used: 0,
            metadata: 0,
            user_total: 0,
            capacity: self.capacity(),
            blocks: 0,
            free_blocks: 0,
            largest_free: 0,
        };
        for block in self.blocks() {
            if block.state.is_free() {
                stats.free += block.size;
                stats.free_blocks += 1;
                stats.largest_free = stats.largest_free.max(block.size);
            } else {
                stats.used += block.size;
            }
            stats.metadata += self.overhead();
            stats.user_total += block.size;
            stats.blocks += 1;
        }
        stats
    }
}
