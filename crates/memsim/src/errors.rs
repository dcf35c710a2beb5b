//! Exit-code mapping for strict mode.

use memsim_core::PoolError;

/// Exit codes for strict-mode failures.
pub mod exit_codes {
    /// Malformed or rejected request.
    pub const ERROR_USAGE: i32 = 2;
    /// No free block could satisfy an allocation.
    pub const ERROR_OOM: i32 = 3;
    /// Free targeted a missing or already-free block.
    pub const ERROR_BAD_ADDRESS: i32 = 4;
    /// Pool configuration rejected at startup.
    pub const ERROR_CONFIG: i32 = 5;
}

/// Map a pool error to the process exit code used in strict mode.
#[must_use]
pub fn exit_code(err: &PoolError) -> i32 {
    match err {
        PoolError::InvalidRequest | PoolError::UnknownStrategy(_) => exit_codes::ERROR_USAGE,
        PoolError::OutOfMemory(_) => exit_codes::ERROR_OOM,
        PoolError::BlockNotFound(_) | PoolError::DoubleFree(_) => exit_codes::ERROR_BAD_ADDRESS,
        PoolError::InvalidConfig { .. } => exit_codes::ERROR_CONFIG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code(&PoolError::InvalidRequest), 2);
        assert_eq!(exit_code(&PoolError::OutOfMemory(1000)), 3);
        assert_eq!(exit_code(&PoolError::BlockNotFound(999)), 4);
        assert_eq!(exit_code(&PoolError::DoubleFree(0)), 4);
        assert_eq!(
            exit_code(&PoolError::InvalidConfig {
                capacity: 1,
                overhead: 1
            }),
            5
        );
    }
}
