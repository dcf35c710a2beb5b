//! Error type for pool operations.
//!
//! Every failing call returns one of these and leaves the pool untouched;
//! nothing here is fatal to the caller's interaction loop.

/// Error type for memory pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Allocation request of zero units.
    #[error("invalid request: allocation size must be at least 1 unit")]
    InvalidRequest,

    /// Strategy name not recognized.
    #[error("unknown fit strategy: {0:?}")]
    UnknownStrategy(String),

    /// No free block can satisfy the request.
    #[error("out of memory: no free block can hold {0} units")]
    OutOfMemory(u64),

    /// Free targeted an address where no block starts.
    #[error("no block starts at address {0}")]
    BlockNotFound(u64),

    /// Free targeted a block that is already free.
    #[error("block at address {0} is already free")]
    DoubleFree(u64),

    /// Pool configuration that cannot hold even one block.
    #[error("pool capacity {capacity} must exceed per-block overhead {overhead}")]
    InvalidConfig {
        /// Requested total pool capacity.
        capacity: u64,
        /// Requested per-block metadata overhead.
        overhead: u64,
    },
}

/// Result alias for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;
