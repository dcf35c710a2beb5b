//! # memsim-core
//!
//! Simulation of a fixed-capacity memory pool managed as an ordered chain
//! of blocks: first-fit / best-fit / worst-fit allocation, splitting of
//! oversized free blocks, and coalescing of adjacent free blocks on
//! release.
//!
//! Addresses and sizes are abstract units, not bytes; there is no backing
//! memory. The pool is single-threaded by design and owned exclusively
//! through `&mut MemoryPool`.
#![warn(missing_docs)]

pub mod block;
pub mod error;
pub mod pool;
pub mod stats;
pub mod strategy;

pub use block::{BlockState, BlockView};
pub use error::{PoolError, PoolResult};
pub use pool::MemoryPool;
pub use stats::PoolStats;
pub use strategy::FitStrategy;
