//! Block records and the slab arena that holds the pool's chain.
//!
//! The chain is an ordered singly-linked sequence of blocks spanning the
//! whole pool. Links are arena slot indices rather than raw offsets, and
//! slots vacated by coalescing are recycled for later splits.

use serde::Serialize;

/// Whether a block currently holds a live allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockState {
    /// Available for allocation.
    Free,
    /// Holding a live allocation.
    Allocated,
}

impl BlockState {
    /// True if the block is available.
    #[must_use]
    pub fn is_free(self) -> bool {
        self == BlockState::Free
    }
}

/// One contiguous region of the pool.
#[derive(Debug, Clone)]
pub(crate) struct Block {
    /// Offset from pool start, in abstract units.
    pub address: u64,
    /// Usable capacity, excluding the per-block overhead.
    pub size: u64,
    pub state: BlockState,
    /// Arena slot of the successor in address order.
    pub next: Option<usize>,
}

/// Read-only snapshot of one block, as exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockView {
    /// Offset from pool start, in abstract units.
    pub address: u64,
    /// Usable capacity, excluding the per-block overhead.
    pub size: u64,
    /// Free or allocated.
    pub state: BlockState,
}

/// Slab arena storing the chain of blocks.
///
/// `head` is the slot of the lowest-addressed block. A vacated slot's
/// contents are meaningless until the slot is reused; nothing links to it.
#[derive(Debug)]
pub(crate) struct BlockChain {
    slots: Vec<Block>,
    head: usize,
    recycled: Vec<usize>,
}

impl BlockChain {
    /// Create a chain holding a single block.
    pub fn new(initial: Block) -> Self {
        Self {
            slots: vec![initial],
            head: 0,
            recycled: Vec::new(),
        }
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn get(&self, slot: usize) -> &Block {
        &self.slots[slot]
    }

    pub fn get_mut(&mut self, slot: usize) -> &mut Block {
        &mut self.slots[slot]
    }

    /// Link a new block in immediately after `slot`, returning its slot.
    pub fn insert_after(&mut self, slot: usize, mut block: Block) -> usize {
        block.next = self.slots[slot].next;
        let new_slot = match self.recycled.pop() {
            Some(idx) => {
                self.slots[idx] = block;
                idx
            }
            None => {
                self.slots.push(block);
                self.slots.len() - 1
            }
        };
        self.slots[slot].next = Some(new_slot);
        new_slot
    }

    /// Unlink the successor of `slot` and recycle its arena slot.
    ///
    /// Caller must have absorbed the successor's capacity first; the chain
    /// no longer accounts for it after this call.
    pub fn remove_after(&mut self, slot: usize) {
        if let Some(victim) = self.slots[slot].next {
            self.slots[slot].next = self.slots[victim].next;
            self.recycled.push(victim);
        }
    }

    /// Iterate `(slot, block)` pairs in address order.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            chain: self,
            cursor: Some(self.head()),
        }
    }
}

/// Address-order traversal of a [`BlockChain`].
pub(crate) struct ChainIter<'a> {
    chain: &'a BlockChain,
    cursor: Option<usize>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = (usize, &'a Block);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        let block = self.chain.get(slot);
        self.cursor = block.next;
        Some((slot, block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_block(address: u64, size: u64) -> Block {
        Block {
            address,
            size,
            state: BlockState::Free,
            next: None,
        }
    }

    #[test]
    fn single_block_chain() {
        let chain = BlockChain::new(free_block(0, 639));
        let blocks: Vec<_> = chain.iter().map(|(_, b)| (b.address, b.size)).collect();
        assert_eq!(blocks, vec![(0, 639)]);
    }

    #[test]
    fn insert_after_links_in_order() {
        let mut chain = BlockChain::new(free_block(0, 100));
        let head = chain.head();
        chain.insert_after(head, free_block(101, 538));
        let addresses: Vec<_> = chain.iter().map(|(_, b)| b.address).collect();
        assert_eq!(addresses, vec![0, 101]);
    }

    #[test]
    fn remove_after_unlinks_successor() {
        let mut chain = BlockChain::new(free_block(0, 100));
        let head = chain.head();
        chain.insert_after(head, free_block(101, 538));
        chain.remove_after(head);
        let addresses: Vec<_> = chain.iter().map(|(_, b)| b.address).collect();
        assert_eq!(addresses, vec![0]);
    }

    #[test]
    fn vacated_slot_is_recycled() {
        let mut chain = BlockChain::new(free_block(0, 100));
        let head = chain.head();
        let first = chain.insert_after(head, free_block(101, 50));
        chain.remove_after(head);
        let second = chain.insert_after(head, free_block(101, 20));
        assert_eq!(first, second);
    }

    #[test]
    fn remove_after_tail_is_noop() {
        let mut chain = BlockChain::new(free_block(0, 100));
        chain.remove_after(chain.head());
        assert_eq!(chain.iter().count(), 1);
    }
}
