//! The memory pool: strategy-driven allocation, split-on-allocate, and
//! coalesce-on-free over one chain of blocks.
//!
//! A `MemoryPool` is constructed once and passed explicitly to every
//! operation; there is no global state. Each call either completes or
//! fails with no mutation, so the chain invariants hold between calls:
//! strictly increasing addresses, `next.address == address + size +
//! overhead`, total accounted capacity equal to the pool capacity, and no
//! two adjacent free blocks.

use tracing::{debug, trace};

use crate::block::{Block, BlockChain, BlockState, BlockView};
use crate::error::{PoolError, PoolResult};
use crate::strategy::FitStrategy;

/// Fixed-capacity memory pool simulated as a chain of blocks.
#[derive(Debug)]
pub struct MemoryPool {
    pub(crate) chain: BlockChain,
    capacity: u64,
    overhead: u64,
}

impl MemoryPool {
    /// Create a pool of `capacity` abstract units, charging `overhead`
    /// units of metadata per block. Starts as one free block of
    /// `capacity - overhead` units at address 0.
    pub fn new(capacity: u64, overhead: u64) -> PoolResult<Self> {
        if capacity <= overhead {
            return Err(PoolError::InvalidConfig { capacity, overhead });
        }
        let initial = Block {
            address: 0,
            size: capacity - overhead,
            state: BlockState::Free,
            next: None,
        };
        debug!(capacity, overhead, "pool initialized");
        Ok(Self {
            chain: BlockChain::new(initial),
            capacity,
            overhead,
        })
    }

    /// Total pool capacity, metadata included.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Per-block metadata cost, in the same units as sizes.
    #[must_use]
    pub fn overhead(&self) -> u64 {
        self.overhead
    }

    /// Allocate `requested` units using the given fit strategy, returning
    /// the address of the allocated block.
    ///
    /// A free block qualifies when it can hold the request plus the
    /// overhead of one more block. If the leftover after carving out the
    /// request exceeds the overhead, the remainder is split off as a new
    /// free block; otherwise the target keeps its full size and the excess
    /// becomes internal fragmentation.
    pub fn allocate(&mut self, requested: u64, strategy: FitStrategy) -> PoolResult<u64> {
        if requested == 0 {
            return Err(PoolError::InvalidRequest);
        }
        // A request within an overhead of u64::MAX cannot fit in any pool.
        let Some(needed) = requested.checked_add(self.overhead) else {
            return Err(PoolError::OutOfMemory(requested));
        };

        let mut target: Option<(usize, u64)> = None;
        for (slot, block) in self.chain.iter() {
            if !block.state.is_free() || block.size < needed {
                continue;
            }
            match target {
                None => {
                    target = Some((slot, block.size));
                    if strategy == FitStrategy::FirstFit {
                        break;
                    }
                }
                Some((_, incumbent)) if strategy.prefers(block.size, incumbent) => {
                    target = Some((slot, block.size));
                }
                Some(_) => {}
            }
        }
        let Some((slot, size)) = target else {
            return Err(PoolError::OutOfMemory(requested));
        };

        let address = self.chain.get(slot).address;
        let leftover = size - needed;
        if leftover > self.overhead {
            let remainder = Block {
                address: address + requested + self.overhead,
                size: leftover,
                state: BlockState::Free,
                next: None,
            };
            let remainder_address = remainder.address;
            self.chain.insert_after(slot, remainder);
            self.chain.get_mut(slot).size = requested;
            trace!(
                address = remainder_address,
                size = leftover,
                "split remainder off target block"
            );
        }
        self.chain.get_mut(slot).state = BlockState::Allocated;
        debug!(address, requested, strategy = %strategy, "allocated block");
        Ok(address)
    }

    /// Release the block starting at `address`, merging it with free
    /// neighbors.
    pub fn free(&mut self, address: u64) -> PoolResult<()> {
        let mut prev: Option<usize> = None;
        let mut found: Option<usize> = None;
        for (slot, block) in self.chain.iter() {
            if block.address == address {
                found = Some(slot);
                break;
            }
            prev = Some(slot);
        }
        let Some(slot) = found else {
            return Err(PoolError::BlockNotFound(address));
        };
        if self.chain.get(slot).state.is_free() {
            return Err(PoolError::DoubleFree(address));
        }

        self.chain.get_mut(slot).state = BlockState::Free;
        debug!(address, size = self.chain.get(slot).size, "freed block");

        // Absorb into a free predecessor, then absorb a free successor.
        // One merge in each direction suffices: no two adjacent blocks
        // were free before this call.
        let mut current = slot;
        if let Some(p) = prev {
            if self.chain.get(p).state.is_free() {
                let absorbed = self.chain.get(current).size + self.overhead;
                self.chain.get_mut(p).size += absorbed;
                self.chain.remove_after(p);
                current = p;
                trace!(
                    address = self.chain.get(current).address,
                    absorbed,
                    "coalesced with predecessor"
                );
            }
        }
        if let Some(n) = self.chain.get(current).next {
            if self.chain.get(n).state.is_free() {
                let absorbed = self.chain.get(n).size + self.overhead;
                self.chain.get_mut(current).size += absorbed;
                self.chain.remove_after(current);
                trace!(
                    address = self.chain.get(current).address,
                    absorbed,
                    "coalesced with successor"
                );
            }
        }
        Ok(())
    }

    /// Snapshot the chain in address order.
    ///
    /// The iterator borrows the pool, so the sequence reflects the state
    /// at call time and can be re-derived at any point.
    pub fn blocks(&self) -> impl Iterator<Item = BlockView> + '_ {
        self.chain.iter().map(|(_, block)| BlockView {
            address: block.address,
            size: block.size,
            state: block.state,
        })
    }
}
